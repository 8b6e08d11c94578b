use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, KeyboardEvent, WheelEvent};
use yew::prelude::*;
use yew_hooks::{use_event_with_window, use_interval};

use crate::carousel::{Carousel, CarouselConfig, CarouselWheel};
use crate::dom::{is_text_entry, viewport_width};

#[derive(Clone, Debug, PartialEq)]
pub struct ServiceItem {
    pub id: u32,
    pub label: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub accent: &'static str,
    pub accent_dim: &'static str,
}

pub const SERVICES: &[ServiceItem] = &[
    ServiceItem {
        id: 1,
        label: "Social Media",
        title: "Social Media Growth",
        tagline: "We engineer attention into authority.",
        description: "We don't manage pages, we build influence systems. Platform-specific growth strategy across Instagram, YouTube, TikTok, Facebook, X and LinkedIn, powered by audience psychology, hook optimisation and community DM funnels that turn followers into revenue.",
        tags: &["Growth Strategy", "Content Calendar", "Hook Optimisation", "DM Funnels", "Analytics"],
        accent: "#818CF8",
        accent_dim: "#3730A3",
    },
    ServiceItem {
        id: 2,
        label: "Video Editing",
        title: "Video Editing & Visual Identity",
        tagline: "We turn raw footage into addictive content.",
        description: "This is not editing, this is retention engineering. Short-form reels optimised for the first 3 seconds, long-form YouTube structuring, kinetic typography, CTR-tuned thumbnails and a brand-specific visual style guide that makes every frame unmissable.",
        tags: &["Short-Form Reels", "Long-Form YouTube", "Motion Graphics", "Thumbnail Design", "Brand Style Guide"],
        accent: "#F472B6",
        accent_dim: "#9D174D",
    },
    ServiceItem {
        id: 3,
        label: "Web Dev",
        title: "Web Development & Brand Infrastructure",
        tagline: "From social traffic to owned revenue ecosystem.",
        description: "You are not building websites, you are building owned assets. High-converting personal brand sites, creator monetisation funnels, landing pages, email automation, membership platforms and e-commerce systems. Performance-optimised and SEO-ready from day one.",
        tags: &["Personal Brand Sites", "Monetisation Funnels", "Email Automation", "Course Platforms", "SEO Foundation"],
        accent: "#60A5FA",
        accent_dim: "#1D4ED8",
    },
    ServiceItem {
        id: 4,
        label: "Brand Deals",
        title: "Brand Deals & Strategic Negotiations",
        tagline: "We maximise creator income per impression.",
        description: "Most creators lose money here because they lack leverage. We handle brand outreach, media kit positioning, rate negotiation, contract handling and long-term retainer structuring, so every partnership is optimised for maximum payout and recurring income.",
        tags: &["Brand Outreach", "Media Kit", "Rate Negotiation", "Contract Handling", "Retainer Deals"],
        accent: "#FB923C",
        accent_dim: "#9A3412",
    },
    ServiceItem {
        id: 5,
        label: "Biz Scaling",
        title: "Business Scaling & Monetisation",
        tagline: "We turn creators into CEOs.",
        description: "This is where you separate amateurs from operators. Revenue model design, digital product strategy, offer creation, team building, SOP development, financial tracking and a clear roadmap from personal brand to scalable company.",
        tags: &["Revenue Design", "Digital Products", "Team Systems", "SOP Development", "Brand-to-Company"],
        accent: "#34D399",
        accent_dim: "#065F46",
    },
    ServiceItem {
        id: 6,
        label: "AI Agents",
        title: "AI Agents & Automation Systems",
        tagline: "Automate the repetitive. Scale the strategic.",
        description: "AI-powered content ideation, automated DM funnels, lead qualification bots, CRM automation, AI chat support, workflow automation for editing and posting, and data-driven optimisation systems that run 24/7.",
        tags: &["AI Content Systems", "DM Funnels", "Lead Bots", "CRM Automation", "Workflow Automation"],
        accent: "#A78BFA",
        accent_dim: "#5B21B6",
    },
];

/// Two-digit counter label, `"03"`.
pub fn counter_label(index: usize) -> String {
    format!("{:02}", index + 1)
}

/// Carousel plus the timers that drive it. Cheap to clone; every field is
/// shared.
#[derive(Clone)]
struct Slider {
    carousel: Rc<RefCell<Carousel>>,
    settle: Rc<RefCell<Option<Timeout>>>,
    decay: Rc<RefCell<Option<Timeout>>>,
    frame: Rc<RefCell<Option<AnimationFrame>>>,
    redraw: UseForceUpdateHandle,
}

impl Slider {
    fn new(config: CarouselConfig, redraw: UseForceUpdateHandle) -> Self {
        Self {
            carousel: Rc::new(RefCell::new(Carousel::new(SERVICES.len(), config))),
            settle: Rc::new(RefCell::new(None)),
            decay: Rc::new(RefCell::new(None)),
            frame: Rc::new(RefCell::new(None)),
            redraw,
        }
    }

    /// Re-renders after a state change and, when a slide started, arms the
    /// timer that settles it once the CSS transition has run.
    fn moved(&self, started: bool) {
        if started {
            let delay = self.carousel.borrow().config().slide_duration_ms + 50;
            let carousel = self.carousel.clone();
            let redraw = self.redraw.clone();
            let timer = Timeout::new(delay, move || {
                let settled = carousel.borrow_mut().transition_end();
                if let Some(index) = settled {
                    debug!("Service carousel settled on {}", index);
                }
                redraw.force_update();
            });
            *self.settle.borrow_mut() = Some(timer);
        }
        self.redraw.force_update();
    }

    fn arm_decay(&self) {
        let delay = self.carousel.borrow().config().accumulator_decay_ms;
        let carousel = self.carousel.clone();
        let timer = Timeout::new(delay, move || carousel.borrow_mut().reset_accumulator());
        *self.decay.borrow_mut() = Some(timer);
    }

    fn on_wheel(&self, event: &WheelEvent) {
        let outcome = self
            .carousel
            .borrow_mut()
            .wheel(event.delta_y(), event.ctrl_key());
        match outcome {
            // Left alone so the section scroller above receives it.
            CarouselWheel::PassThrough => return,
            CarouselWheel::Consumed => self.arm_decay(),
            CarouselWheel::Advanced(_) => {
                self.decay.borrow_mut().take();
                self.moved(true);
            }
        }
        event.prevent_default();
        event.stop_propagation();
    }

    /// Counts frames after a wrap jump until the carousel turns its
    /// transition back on, then re-renders.
    fn schedule_reenable(&self) {
        let slider = self.clone();
        let handle = request_animation_frame(move |_| {
            slider.frame.borrow_mut().take();
            let reenabled = slider.carousel.borrow_mut().frame_elapsed();
            if reenabled {
                slider.redraw.force_update();
            } else if !slider.carousel.borrow().animation_enabled() {
                slider.schedule_reenable();
            }
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn teardown(&self) {
        self.settle.borrow_mut().take();
        self.decay.borrow_mut().take();
        self.frame.borrow_mut().take();
    }
}

#[derive(Properties, PartialEq)]
pub struct ServicesSectionProps {
    #[prop_or_default]
    pub config: CarouselConfig,
    /// Whether this section is the one on screen; arrow keys only slide
    /// the carousel while it is.
    #[prop_or_default]
    pub active: bool,
}

#[function_component(ServicesSection)]
pub fn services_section(props: &ServicesSectionProps) -> Html {
    let root = use_node_ref();
    let viewport = use_node_ref();
    let track = use_node_ref();
    let redraw = use_force_update();
    let panel_width = use_state(|| 0.0_f64);
    let is_mobile = use_state(|| viewport_width() < props.config.mobile_breakpoint);
    let active = use_mut_ref(|| props.active);
    *active.borrow_mut() = props.active;

    let slider = {
        let config = props.config.clone();
        use_memo(move |_| Slider::new(config, redraw), ())
    };

    // Measure the visible panel area on mount and on every resize.
    let measure = {
        let viewport = viewport.clone();
        let panel_width = panel_width.clone();
        let is_mobile = is_mobile.clone();
        let breakpoint = props.config.mobile_breakpoint;
        Rc::new(move || {
            if let Some(el) = viewport.cast::<HtmlElement>() {
                panel_width.set(el.client_width() as f64);
            }
            is_mobile.set(viewport_width() < breakpoint);
        })
    };

    {
        let measure = measure.clone();
        use_event_with_window("resize", move |_: Event| measure());
    }

    {
        let root = root.clone();
        let slider = slider.clone();
        use_effect_with_deps(
            move |_| {
                measure();
                let listener = root.cast::<HtmlElement>().map(|el| {
                    let slider = slider.clone();
                    EventListener::new_with_options(
                        &el,
                        "wheel",
                        EventListenerOptions::enable_prevent_default(),
                        move |event: &Event| {
                            if let Some(event) = event.dyn_ref::<WheelEvent>() {
                                slider.on_wheel(event);
                            }
                        },
                    )
                });
                move || {
                    drop(listener);
                    slider.teardown();
                }
            },
            (),
        );
    }

    {
        let slider = slider.clone();
        use_event_with_window("keydown", move |event: KeyboardEvent| {
            if !*active.borrow() || is_text_entry(&event) {
                return;
            }
            let started = slider.carousel.borrow_mut().key(&event.key());
            if started {
                slider.moved(true);
            }
        });
    }

    // Interval drops to 0 (off) once the user has taken over.
    let auto_ms = if slider.carousel.borrow().auto_advancing() {
        props.config.auto_advance_ms
    } else {
        0
    };
    {
        let slider = slider.clone();
        use_interval(
            move || {
                let started = slider.carousel.borrow_mut().auto_tick();
                if started {
                    slider.moved(true);
                }
            },
            auto_ms,
        );
    }

    let animation_enabled = slider.carousel.borrow().animation_enabled();

    // After a silent wrap jump, flush the untransitioned style before any
    // frame runs, then let the carousel count frames until it re-enables.
    {
        let slider = slider.clone();
        let track = track.clone();
        use_effect_with_deps(
            move |enabled| {
                if !*enabled {
                    if let Some(el) = track.cast::<HtmlElement>() {
                        let _ = el.offset_width();
                    }
                    slider.schedule_reenable();
                }
                || ()
            },
            animation_enabled,
        );
    }

    let on_touch_start = {
        let slider = slider.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                slider.carousel.borrow_mut().touch_start(touch.client_x() as f64);
            }
        })
    };

    let on_touch_end = {
        let slider = slider.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.changed_touches().get(0) {
                let started = slider.carousel.borrow_mut().touch_end(touch.client_x() as f64);
                if started {
                    slider.moved(true);
                }
            }
        })
    };

    let pause = {
        let slider = slider.clone();
        Callback::from(move |_: MouseEvent| slider.carousel.borrow_mut().set_paused(true))
    };
    let resume = {
        let slider = slider.clone();
        Callback::from(move |_: MouseEvent| slider.carousel.borrow_mut().set_paused(false))
    };

    let nudge = |direction: isize| {
        let slider = slider.clone();
        Callback::from(move |_: MouseEvent| {
            let started = slider.carousel.borrow_mut().nudge(direction);
            slider.moved(started);
        })
    };

    let carousel = slider.carousel.borrow();
    let Some(current) = SERVICES.get(carousel.real_index()) else {
        return html! { <section class="services-section" /> };
    };

    let width = *panel_width;
    let slots = carousel.track_slots();
    let track_style = if width > 0.0 {
        format!(
            "display: flex; height: 100%; width: {}px; transform: translateX(-{}px); transition: {}; will-change: transform;",
            slots.len() as f64 * width,
            carousel.offset_px(width),
            if animation_enabled {
                format!("transform {}ms cubic-bezier(.77,0,.18,1)", props.config.slide_duration_ms)
            } else {
                "none".to_string()
            },
        )
    } else {
        "display: flex; height: 100%; width: 100%;".to_string()
    };

    let progress = (carousel.real_index() + 1) as f64 / SERVICES.len() as f64 * 100.0;

    html! {
        <div
            ref={root}
            class="services-section"
            style={format!("--svc-accent: {}; --svc-accent-dim: {};", current.accent, current.accent_dim)}
            onmouseenter={pause}
            onmouseleave={resume}
            ontouchstart={on_touch_start}
            ontouchend={on_touch_end}
        >
            <style>
                {r#"
                    .services-section {
                        position: relative;
                        width: 100%;
                        height: 100%;
                        display: flex;
                        flex-direction: column;
                        overflow: hidden;
                        background: var(--bg-secondary);
                        color: var(--text-primary);
                    }
                    .services-section::before {
                        content: '';
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        background: radial-gradient(ellipse 60% 55% at 78% 54%, color-mix(in srgb, var(--svc-accent) 8%, transparent) 0%, transparent 60%);
                        transition: background 900ms ease;
                    }
                    .svc-header {
                        position: relative;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: clamp(12px, 2vh, 20px) clamp(18px, 4vw, 48px) 0;
                    }
                    .svc-label {
                        display: flex;
                        align-items: center;
                        gap: 8px;
                        font-size: 0.64rem;
                        letter-spacing: 0.24em;
                        text-transform: uppercase;
                        color: var(--text-muted);
                    }
                    .svc-pulse {
                        width: 5px;
                        height: 5px;
                        border-radius: 50%;
                        background: var(--svc-accent);
                        animation: svc-pulse 2.4s infinite;
                    }
                    @keyframes svc-pulse {
                        0%, 100% { transform: scale(1); opacity: .7; }
                        50% { transform: scale(1.5); opacity: 1; }
                    }
                    .svc-controls {
                        display: flex;
                        align-items: center;
                        gap: 12px;
                        font-size: 0.64rem;
                        letter-spacing: 0.16em;
                        color: var(--text-muted);
                    }
                    .svc-arrow {
                        all: unset;
                        cursor: pointer;
                        width: 32px;
                        height: 32px;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border: 1px solid var(--border-subtle);
                        transition: background .2s, color .2s, transform .15s;
                    }
                    .svc-arrow:hover {
                        color: var(--svc-accent);
                        transform: scale(1.12);
                    }
                    .svc-viewport {
                        position: relative;
                        flex: 1;
                        min-height: 0;
                        overflow: hidden;
                    }
                    .svc-panel {
                        flex-shrink: 0;
                        height: 100%;
                        display: flex;
                        align-items: center;
                        gap: clamp(20px, 2.5vw, 44px);
                        padding: 0 clamp(18px, 4vw, 48px);
                        box-sizing: border-box;
                        overflow: hidden;
                    }
                    .svc-content {
                        flex: 1;
                        max-width: 560px;
                    }
                    .svc-content h2 {
                        font-size: clamp(1.6rem, 3.4vw, 2.8rem);
                        margin: 0.4rem 0;
                    }
                    .svc-tagline {
                        font-style: italic;
                        color: var(--svc-accent);
                    }
                    .svc-description {
                        color: var(--text-secondary);
                        line-height: 1.6;
                    }
                    .svc-tags {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 6px;
                        padding: 0;
                        list-style: none;
                    }
                    .svc-tags li {
                        font-size: 0.7rem;
                        padding: 4px 10px;
                        border-radius: 999px;
                        border: 1px solid var(--border-subtle);
                    }
                    .svc-visual {
                        flex: 1;
                        height: 70%;
                    }
                    .svc-footer {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 10px;
                        padding: 0 0 clamp(12px, 3vh, 28px);
                    }
                    .svc-dots {
                        display: flex;
                        gap: 8px;
                    }
                    .svc-dot {
                        all: unset;
                        cursor: pointer;
                        width: 8px;
                        height: 8px;
                        border-radius: 999px;
                        background: var(--border-subtle);
                        transition: width .3s, background .3s;
                    }
                    .svc-dot.active {
                        width: 22px;
                        background: var(--svc-accent);
                    }
                    .svc-progress {
                        width: min(240px, 60vw);
                        height: 2px;
                        background: var(--border-subtle);
                    }
                    .svc-progress > div {
                        height: 100%;
                        background: var(--svc-accent);
                        transition: width .6s ease;
                    }
                "#}
            </style>
            <header class="svc-header">
                <div class="svc-label">
                    <span class="svc-pulse"></span>
                    <span>{"Our Services"}</span>
                </div>
                <div class="svc-controls">
                    {
                        if !*is_mobile {
                            html! {
                                <>
                                    <button class="svc-arrow" aria-label="Previous service" onclick={nudge(-1)}>{"←"}</button>
                                    <button class="svc-arrow" aria-label="Next service" onclick={nudge(1)}>{"→"}</button>
                                </>
                            }
                        } else {
                            html! {}
                        }
                    }
                    <span>{format!("{} / {}", counter_label(carousel.real_index()), counter_label(SERVICES.len() - 1))}</span>
                </div>
            </header>
            <div ref={viewport} class="svc-viewport" aria-live="polite" aria-busy={carousel.is_transitioning().to_string()}>
                <div ref={track} style={track_style}>
                    { for slots.iter().map(|&item| html! {
                        <ServicePanel
                            service={SERVICES[item].clone()}
                            width={width}
                            is_mobile={*is_mobile}
                        />
                    }) }
                </div>
            </div>
            <footer class="svc-footer">
                <div class="svc-dots">
                    { for SERVICES.iter().enumerate().map(|(i, service)| {
                        let slider = slider.clone();
                        let onclick = Callback::from(move |_: MouseEvent| {
                            let started = slider.carousel.borrow_mut().choose(i);
                            slider.moved(started);
                        });
                        html! {
                            <button
                                class={classes!("svc-dot", (i == carousel.real_index()).then(|| "active"))}
                                aria-label={service.label}
                                {onclick}
                            />
                        }
                    }) }
                </div>
                <div class="svc-progress">
                    <div style={format!("width: {:.1}%;", progress)}></div>
                </div>
            </footer>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ServicePanelProps {
    service: ServiceItem,
    width: f64,
    is_mobile: bool,
}

#[function_component(ServicePanel)]
fn service_panel(props: &ServicePanelProps) -> Html {
    let service = &props.service;
    let style = if props.width > 0.0 {
        format!("width: {}px;", props.width)
    } else {
        "width: 100%;".to_string()
    };

    html! {
        <div class="svc-panel" style={style}>
            <div class="svc-content">
                <span class="svc-label">{format!("{} · {}", counter_label(service.id as usize - 1), service.label)}</span>
                <h2>{service.title}</h2>
                <p class="svc-tagline">{service.tagline}</p>
                <p class="svc-description">{service.description}</p>
                <ul class="svc-tags">
                    { for service.tags.iter().map(|tag| html! { <li>{*tag}</li> }) }
                </ul>
            </div>
            {
                if !props.is_mobile {
                    html! { <ServiceVisual accent={service.accent} accent_dim={service.accent_dim} /> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ServiceVisualProps {
    accent: &'static str,
    accent_dim: &'static str,
}

/// Orbiting rings and bars tinted with the service accent.
#[function_component(ServiceVisual)]
fn service_visual(props: &ServiceVisualProps) -> Html {
    let a = props.accent;
    html! {
        <div class="svc-visual">
            <svg viewBox="0 0 380 280" fill="none" width="100%" height="100%">
                <ellipse cx="190" cy="140" rx="165" ry="115" fill={props.accent_dim} opacity="0.12" />
                <circle cx="190" cy="140" r="36" stroke={a} stroke-width="0.8" opacity="0.2" />
                <circle cx="190" cy="140" r="60" stroke={a} stroke-width="0.8" opacity="0.12" />
                <circle cx="190" cy="140" r="13" fill={a} opacity="0.85" />
                <circle cx="105" cy="82" r="9" fill={a} opacity="0.42" />
                <circle cx="278" cy="76" r="9" fill={a} opacity="0.42" />
                <circle cx="62" cy="190" r="7" fill={a} opacity="0.32" />
                <circle cx="320" cy="190" r="7" fill={a} opacity="0.32" />
                <line x1="190" y1="140" x2="105" y2="82" stroke={a} stroke-width="1.1" opacity="0.25" />
                <line x1="190" y1="140" x2="278" y2="76" stroke={a} stroke-width="1.1" opacity="0.25" />
                <line x1="190" y1="140" x2="62" y2="190" stroke={a} stroke-width="1.1" opacity="0.25" />
                <line x1="190" y1="140" x2="320" y2="190" stroke={a} stroke-width="1.1" opacity="0.25" />
                <rect x="244" y="200" width="118" height="52" rx="9" stroke={a} stroke-width="1.4" opacity="0.6" />
                <rect x="258" y="214" width="62" height="7" rx="3.5" fill={a} opacity="0.42" />
                <rect x="258" y="230" width="46" height="5" rx="2.5" fill={a} opacity="0.22" />
            </svg>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_labels_are_two_digits() {
        assert_eq!(counter_label(0), "01");
        assert_eq!(counter_label(9), "10");
    }

    #[test]
    fn service_ids_follow_their_position() {
        for (i, service) in SERVICES.iter().enumerate() {
            assert_eq!(service.id as usize, i + 1);
            assert!(!service.tags.is_empty());
        }
    }
}
