use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_render::{request_animation_frame, AnimationFrame};
use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::process::HeroProcess;
use crate::scroller::Easing;
use crate::validation::email_error;

pub const COUNTER_DURATION_MS: f64 = 1600.0;

pub struct Stat {
    pub label: &'static str,
    pub target: u64,
}

pub const STATS: &[Stat] = &[
    Stat { label: "Views", target: 500_000_000 },
    Stat { label: "Followers", target: 4_000_000 },
];

/// Whole millions with a plus, `"500M+"`.
pub fn format_millions(n: u64) -> String {
    format!("{}M+", n / 1_000_000)
}

/// Counter value `elapsed` ms into a count-up of `duration` ms.
pub fn counter_value(target: u64, elapsed: f64, duration: f64) -> u64 {
    let progress = if duration > 0.0 { elapsed / duration } else { 1.0 };
    (target as f64 * Easing::EaseOutCubic.apply(progress)).floor() as u64
}

struct CountUp {
    target: u64,
    started_at: Cell<Option<f64>>,
    frame: RefCell<Option<AnimationFrame>>,
    value: UseStateSetter<u64>,
}

impl CountUp {
    fn schedule(self: &Rc<Self>) {
        let weak: Weak<Self> = Rc::downgrade(self);
        let handle = request_animation_frame(move |timestamp| {
            if let Some(count) = weak.upgrade() {
                count.frame.borrow_mut().take();
                count.on_frame(timestamp);
            }
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn on_frame(self: &Rc<Self>, timestamp: f64) {
        let start = self.started_at.get().unwrap_or(timestamp);
        self.started_at.set(Some(start));
        let elapsed = timestamp - start;
        self.value.set(counter_value(self.target, elapsed, COUNTER_DURATION_MS));
        if elapsed < COUNTER_DURATION_MS {
            self.schedule();
        }
    }
}

#[derive(Properties, PartialEq)]
struct CounterProps {
    target: u64,
    start: bool,
}

#[function_component(Counter)]
fn counter(props: &CounterProps) -> Html {
    let value = use_state(|| 0_u64);

    {
        let setter = value.setter();
        use_effect_with_deps(
            move |(start, target): &(bool, u64)| {
                let count = start.then(|| {
                    let count = Rc::new(CountUp {
                        target: *target,
                        started_at: Cell::new(None),
                        frame: RefCell::new(None),
                        value: setter,
                    });
                    count.schedule();
                    count
                });
                move || {
                    if let Some(count) = count {
                        count.frame.borrow_mut().take();
                    }
                }
            },
            (props.start, props.target),
        );
    }

    html! { <>{format_millions(*value)}</> }
}

#[derive(Properties, PartialEq)]
pub struct HeroSectionProps {
    /// Counters start the first time the hero is on screen.
    #[prop_or(true)]
    pub active: bool,
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroSectionProps) -> Html {
    let seen = use_state(|| props.active);
    {
        let seen = seen.clone();
        use_effect_with_deps(
            move |active: &bool| {
                if *active && !*seen {
                    seen.set(true);
                }
                || ()
            },
            props.active,
        );
    }

    html! {
        <section class="hero-section">
            <style>
                {r#"
                    .hero-section {
                        position: relative;
                        width: 100%;
                        height: 100%;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        padding: 0 1.5rem;
                        background: transparent;
                        overflow: visible;
                    }
                    .hero-glow {
                        position: absolute;
                        width: 600px;
                        height: 600px;
                        border-radius: 50%;
                        background: linear-gradient(90deg, rgba(168,85,247,.2), rgba(139,92,246,.2), rgba(236,72,153,.2));
                        filter: blur(140px);
                        pointer-events: none;
                    }
                    .hero-texts {
                        position: relative;
                        max-width: 48rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 1.2rem;
                        text-align: center;
                    }
                    .hero-texts h1 {
                        margin: 0;
                        font-size: clamp(1.9rem, 4.5vw, 3rem);
                        line-height: 1.05;
                        letter-spacing: -0.02em;
                    }
                    .hero-gradient {
                        background: linear-gradient(90deg, #c084fc, #a78bfa, #f472b6);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .hero-rule {
                        margin: 1rem auto 0;
                        height: 3px;
                        width: 5rem;
                        border-radius: 999px;
                        background: linear-gradient(90deg, #c084fc, #a78bfa, #f472b6);
                    }
                    .hero-texts p {
                        margin: 0;
                        color: var(--text-secondary);
                        line-height: 1.6;
                    }
                    .hero-form {
                        width: 100%;
                        max-width: 36rem;
                    }
                    .hero-input {
                        position: relative;
                        border-radius: 999px;
                        border: 1px solid var(--border-subtle);
                        background: var(--bg-card);
                    }
                    .hero-input.invalid {
                        border-color: rgba(255, 80, 80, 0.6);
                    }
                    .hero-input input {
                        width: 100%;
                        padding: 0.8rem 9rem 0.8rem 1.25rem;
                        border: none;
                        border-radius: 999px;
                        background: transparent;
                        color: var(--text-primary);
                        outline: none;
                    }
                    .hero-input button {
                        position: absolute;
                        right: 0.4rem;
                        top: 50%;
                        transform: translateY(-50%);
                        padding: 0.55rem 1.1rem;
                        border: none;
                        border-radius: 999px;
                        background: linear-gradient(90deg, #7c3aed, #db2777);
                        color: white;
                        cursor: pointer;
                    }
                    .hero-input button:disabled {
                        opacity: 0.6;
                        cursor: wait;
                    }
                    .hero-error {
                        color: #f87171;
                        font-size: 0.85rem;
                        text-align: left;
                        padding: 0.3rem 1rem 0;
                    }
                    .hero-note {
                        margin-top: 0.8rem;
                        font-size: 0.85rem;
                        color: var(--text-muted);
                    }
                    .hero-stats {
                        display: flex;
                        gap: 3rem;
                    }
                    .hero-stat {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.4rem;
                    }
                    .hero-stat strong {
                        font-size: 1.6rem;
                        background: linear-gradient(90deg, #4f8eff, #a78bfa);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .hero-stat span {
                        font-size: 0.75rem;
                        letter-spacing: 0.18em;
                        text-transform: uppercase;
                        color: var(--text-muted);
                    }
                "#}
            </style>
            <div class="hero-glow" aria-hidden="true"></div>
            <div class="hero-texts">
                <h1>
                    <span><span class="hero-gradient">{"Hustle"}</span>{" with Purpose,"}</span>
                    <br />
                    <span>{"Connect with Power"}</span>
                    <div class="hero-rule"></div>
                </h1>
                <p>
                    {"We help brands scale with high-impact web development, AI-powered automation, performance marketing, and content systems engineered for measurable growth."}
                </p>
                <HeroEmailForm />
                <div class="hero-stats">
                    { for STATS.iter().map(|stat| html! {
                        <div class="hero-stat" key={stat.label}>
                            <strong><Counter target={stat.target} start={*seen} /></strong>
                            <span>{stat.label}</span>
                        </div>
                    }) }
                </div>
            </div>
            <HeroProcess />
        </section>
    }
}

#[function_component(HeroEmailForm)]
fn hero_email_form() -> Html {
    let email = use_state(String::new);
    let error = use_state(|| None::<&'static str>);
    let is_loading = use_state(|| false);

    let oninput = {
        let email = email.clone();
        let error = error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            // Once an error is showing, re-check on every keystroke.
            if error.is_some() {
                error.set(email_error(&value));
            }
            email.set(value);
        })
    };

    let onsubmit = {
        let email = email.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(message) = email_error(&email) {
                error.set(Some(message));
                return;
            }
            error.set(None);
            is_loading.set(true);

            let email = email.clone();
            let is_loading = is_loading.clone();
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(1_500).await;
                info!("Access requested for {}", *email);
                email.set(String::new());
                is_loading.set(false);
            });
        })
    };

    html! {
        <form class="hero-form" onsubmit={onsubmit} novalidate={true}>
            <div class={classes!("hero-input", error.is_some().then(|| "invalid"))}>
                <input
                    type="email"
                    placeholder="Enter your work email"
                    value={(*email).clone()}
                    disabled={*is_loading}
                    aria-invalid={error.is_some().to_string()}
                    {oninput}
                />
                <button type="submit" disabled={*is_loading}>
                    { if *is_loading { "Sending..." } else { "Get Access" } }
                </button>
            </div>
            {
                if let Some(message) = *error {
                    html! { <p class="hero-error">{message}</p> }
                } else {
                    html! {}
                }
            }
            <div class="hero-note">{"No credit card required • Free 14-day trial"}</div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_millions() {
        assert_eq!(format_millions(500_000_000), "500M+");
        assert_eq!(format_millions(4_000_000), "4M+");
        assert_eq!(format_millions(999_999), "0M+");
    }

    #[test]
    fn counter_eases_out_to_target() {
        assert_eq!(counter_value(4_000_000, 0.0, COUNTER_DURATION_MS), 0);
        assert_eq!(counter_value(4_000_000, COUNTER_DURATION_MS, COUNTER_DURATION_MS), 4_000_000);
        assert_eq!(counter_value(4_000_000, 5_000.0, COUNTER_DURATION_MS), 4_000_000);
        // Ease-out: past the halfway value at the halfway time.
        assert!(counter_value(4_000_000, 800.0, COUNTER_DURATION_MS) > 2_000_000);
    }
}
