use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use log::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{window, Event, HtmlElement, KeyboardEvent, TouchEvent, WheelEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use super::engine::{section_height, ScrollerConfig, SectionEngine, WheelStep, ZoomChange};
use super::handle::ScrollerHandle;
use crate::dom::{is_text_entry, now_ms, viewport_height, viewport_width};
use crate::storage::{LocalStore, SectionIndexStore};

/// Everything the listeners, timers and frame loop share for one mount.
/// Closures hold `Weak` references to it, so nothing fires against a
/// torn-down scroller.
struct ScrollerRuntime {
    engine: RefCell<SectionEngine>,
    container: NodeRef,
    store: SectionIndexStore<LocalStore>,
    header_offset: Cell<f64>,
    frame: RefCell<Option<AnimationFrame>>,
    decay: RefCell<Option<Timeout>>,
    settle: RefCell<Option<Timeout>>,
    redraw: UseForceUpdateHandle,
    zoomed: UseStateSetter<bool>,
    on_change: RefCell<Callback<usize>>,
}

impl ScrollerRuntime {
    fn new(
        total: usize,
        config: ScrollerConfig,
        container: NodeRef,
        redraw: UseForceUpdateHandle,
        zoomed: UseStateSetter<bool>,
        on_change: Callback<usize>,
    ) -> Self {
        let store = SectionIndexStore::new(LocalStore);
        let header_offset = config.header_offset(viewport_width());
        let mut engine = SectionEngine::new(total, config);
        // Restored before the first render so the first paint already shows
        // the right section.
        let restored = store.load(total);
        engine.restore(restored, section_height(None, viewport_height(), header_offset));

        Self {
            engine: RefCell::new(engine),
            container,
            store,
            header_offset: Cell::new(header_offset),
            frame: RefCell::new(None),
            decay: RefCell::new(None),
            settle: RefCell::new(None),
            redraw,
            zoomed,
            on_change: RefCell::new(on_change),
        }
    }

    fn section_height(&self) -> f64 {
        let measured = self
            .container
            .cast::<HtmlElement>()
            .map(|el| el.client_height() as f64);
        section_height(measured, viewport_height(), self.header_offset.get())
    }

    fn write_offset(&self, offset: f64) {
        if let Some(el) = self.container.cast::<HtmlElement>() {
            el.scroll_to_with_x_and_y(0.0, offset);
        }
    }

    fn emit_change(&self) {
        let index = self.engine.borrow().current_index();
        let on_change = self.on_change.borrow().clone();
        on_change.emit(index);
    }

    /// Places the container on the restored section once it has a real size.
    fn restore_position(&self) {
        let h = self.section_height();
        let index = self.engine.borrow().current_index();
        self.engine.borrow_mut().restore(index, h);
        self.write_offset(index as f64 * h);
        self.emit_change();
        if index > 0 {
            info!("Restored section {}", index);
        }
    }

    fn realign(&self) {
        let h = self.section_height();
        let offset = self.engine.borrow_mut().realign(h);
        if let Some(offset) = offset {
            self.write_offset(offset);
            self.redraw.force_update();
        }
    }

    fn navigate(self: &Rc<Self>, target: isize) {
        let h = self.section_height();
        let started = self.engine.borrow_mut().navigate_to(target, now_ms(), h);
        if started {
            self.start_frames();
        }
    }

    /// Starts the frame loop if an input just kicked off a transition.
    fn start_frames(self: &Rc<Self>) {
        if !self.engine.borrow().is_animating() || self.frame.borrow().is_some() {
            return;
        }
        self.emit_change();
        self.schedule_frame();
    }

    fn schedule_frame(self: &Rc<Self>) {
        let runtime = Rc::downgrade(self);
        let handle = request_animation_frame(move |timestamp| {
            if let Some(runtime) = runtime.upgrade() {
                runtime.on_frame(timestamp);
            }
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn on_frame(self: &Rc<Self>, timestamp: f64) {
        self.frame.borrow_mut().take();
        let frame = self
            .engine
            .borrow_mut()
            .tick_and_persist(timestamp, &self.store);
        let Some(frame) = frame else {
            return;
        };

        self.write_offset(frame.offset);
        self.redraw.force_update();
        match frame.settled {
            Some(index) => debug!("Settled on section {}", index),
            None => self.schedule_frame(),
        }
    }

    fn arm_decay(self: &Rc<Self>) {
        let delay = self.engine.borrow().config().accumulator_decay_ms;
        let runtime = Rc::downgrade(self);
        let timer = Timeout::new(delay, move || {
            if let Some(runtime) = runtime.upgrade() {
                runtime.engine.borrow_mut().reset_accumulator();
            }
        });
        *self.decay.borrow_mut() = Some(timer);
    }

    fn on_wheel(self: &Rc<Self>, event: &WheelEvent) {
        let h = self.section_height();
        let step = self
            .engine
            .borrow_mut()
            .wheel(event.delta_y(), event.ctrl_key(), now_ms(), h);
        match step {
            WheelStep::PassThrough => return,
            WheelStep::Busy => {}
            WheelStep::Pending => self.arm_decay(),
            WheelStep::Stepped => {
                self.decay.borrow_mut().take();
                self.start_frames();
            }
        }
        event.prevent_default();
    }

    fn on_touch_start(&self, event: &TouchEvent) {
        let touches = event.touches();
        if touches.length() != 1 {
            return;
        }
        if let Some(touch) = touches.get(0) {
            self.engine.borrow_mut().touch_start(touch.client_y() as f64);
        }
    }

    fn on_touch_end(self: &Rc<Self>, event: &TouchEvent) {
        let touches = event.changed_touches();
        if touches.length() != 1 {
            return;
        }
        let Some(touch) = touches.get(0) else {
            return;
        };
        let h = self.section_height();
        let started = self
            .engine
            .borrow_mut()
            .touch_end(touch.client_y() as f64, now_ms(), h);
        if started {
            self.start_frames();
        }
    }

    fn on_key(self: &Rc<Self>, event: &KeyboardEvent) {
        if is_text_entry(event) {
            return;
        }
        let h = self.section_height();
        let handled = self.engine.borrow_mut().key(&event.key(), now_ms(), h);
        if handled {
            event.prevent_default();
            self.start_frames();
        }
    }

    fn viewport_scale_changed(self: &Rc<Self>, scale: f64) {
        let change = self.engine.borrow_mut().viewport_scale_changed(scale);
        match change {
            ZoomChange::Entered => {
                self.frame.borrow_mut().take();
                self.decay.borrow_mut().take();
                self.settle.borrow_mut().take();
                self.zoomed.set(true);
            }
            ZoomChange::Settling => {
                let delay = self.engine.borrow().config().zoom_settle_delay_ms;
                let runtime = Rc::downgrade(self);
                let timer = Timeout::new(delay, move || {
                    if let Some(runtime) = runtime.upgrade() {
                        runtime.release_zoom();
                    }
                });
                *self.settle.borrow_mut() = Some(timer);
            }
            ZoomChange::Unchanged => {}
        }
    }

    fn release_zoom(&self) {
        let h = self.section_height();
        let offset = self.engine.borrow_mut().finish_zoom_settle(h);
        self.write_offset(offset);
        self.zoomed.set(false);
        self.redraw.force_update();
    }

    /// Wheel, touch and keyboard listeners. Only attached while not zoomed;
    /// dropping the returned listeners detaches them.
    fn attach_navigation(self: &Rc<Self>) -> Vec<EventListener> {
        let mut listeners = Vec::new();

        if let Some(el) = self.container.cast::<HtmlElement>() {
            let runtime = Rc::downgrade(self);
            listeners.push(EventListener::new_with_options(
                &el,
                "wheel",
                EventListenerOptions::enable_prevent_default(),
                move |event: &Event| {
                    if let (Some(runtime), Some(event)) =
                        (runtime.upgrade(), event.dyn_ref::<WheelEvent>())
                    {
                        runtime.on_wheel(event);
                    }
                },
            ));

            let runtime = Rc::downgrade(self);
            listeners.push(EventListener::new(&el, "touchstart", move |event: &Event| {
                if let (Some(runtime), Some(event)) =
                    (runtime.upgrade(), event.dyn_ref::<TouchEvent>())
                {
                    runtime.on_touch_start(event);
                }
            }));

            let runtime = Rc::downgrade(self);
            listeners.push(EventListener::new(&el, "touchend", move |event: &Event| {
                if let (Some(runtime), Some(event)) =
                    (runtime.upgrade(), event.dyn_ref::<TouchEvent>())
                {
                    runtime.on_touch_end(event);
                }
            }));
        }

        if let Some(win) = window() {
            let runtime = Rc::downgrade(self);
            listeners.push(EventListener::new_with_options(
                &win,
                "keydown",
                EventListenerOptions::enable_prevent_default(),
                move |event: &Event| {
                    if let (Some(runtime), Some(event)) =
                        (runtime.upgrade(), event.dyn_ref::<KeyboardEvent>())
                    {
                        runtime.on_key(event);
                    }
                },
            ));
        }

        listeners
    }

    fn teardown(&self) {
        self.frame.borrow_mut().take();
        self.decay.borrow_mut().take();
        self.settle.borrow_mut().take();
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionScrollerProps {
    /// Full-viewport blocks, top to bottom. The count is fixed for the life
    /// of the mount.
    pub sections: Vec<Html>,
    #[prop_or_default]
    pub config: ScrollerConfig,
    #[prop_or_default]
    pub handle: ScrollerHandle,
    /// Active section, reported when a transition starts and after restore.
    #[prop_or_default]
    pub on_change: Callback<usize>,
}

#[function_component(SectionScroller)]
pub fn section_scroller(props: &SectionScrollerProps) -> Html {
    let container = use_node_ref();
    let is_zoomed = use_state(|| false);
    let viewport = use_state(viewport_width);
    let redraw = use_force_update();
    let total = props.sections.len();

    let runtime = {
        let container = container.clone();
        let config = props.config.clone();
        let zoomed = is_zoomed.setter();
        let on_change = props.on_change.clone();
        use_memo(
            move |_| ScrollerRuntime::new(total, config, container, redraw, zoomed, on_change),
            (),
        )
    };

    *runtime.on_change.borrow_mut() = props.on_change.clone();
    runtime
        .header_offset
        .set(props.config.header_offset(*viewport));

    {
        let runtime = runtime.clone();
        let viewport = viewport.clone();
        use_event_with_window("resize", move |_: Event| {
            let width = viewport_width();
            runtime
                .header_offset
                .set(runtime.engine.borrow().config().header_offset(width));
            viewport.set(width);
            runtime.realign();
        });
    }

    // Mount: restore position, bind the command channel, watch zoom.
    {
        let runtime = runtime.clone();
        let handle = props.handle.clone();
        use_effect_with_deps(
            move |_| {
                runtime.restore_position();

                let target = Rc::downgrade(&runtime);
                handle.bind(Callback::from(move |index: usize| {
                    if let Some(runtime) = target.upgrade() {
                        runtime.navigate(isize::try_from(index).unwrap_or(isize::MAX));
                    }
                }));

                let zoom_listener = window().and_then(|w| w.visual_viewport()).map(|viewport| {
                    let source = viewport.clone();
                    let runtime = Rc::downgrade(&runtime);
                    EventListener::new(&viewport, "resize", move |_| {
                        if let Some(runtime) = runtime.upgrade() {
                            runtime.viewport_scale_changed(source.scale());
                        }
                    })
                });

                move || {
                    drop(zoom_listener);
                    handle.unbind();
                    runtime.teardown();
                }
            },
            (),
        );
    }

    // Navigation listeners exist only outside zoom mode.
    {
        let runtime = runtime.clone();
        use_effect_with_deps(
            move |zoomed| {
                let listeners = if *zoomed {
                    debug!("Navigation listeners detached");
                    Vec::new()
                } else {
                    runtime.attach_navigation()
                };
                move || drop(listeners)
            },
            *is_zoomed,
        );
    }

    let zoomed = *is_zoomed;
    let h = runtime.section_height();
    let engine = runtime.engine.borrow();

    let main_style = format!(
        "position: absolute; top: {}px; left: 0; right: 0; bottom: 0; \
         overflow-x: hidden; overflow-y: {}; scroll-behavior: auto; \
         scrollbar-width: none; -ms-overflow-style: none; touch-action: {};",
        props.config.header_offset(*viewport),
        if zoomed { "hidden" } else { "scroll" },
        if zoomed { "auto" } else { "pinch-zoom" },
    );

    html! {
        <main ref={container} class="section-scroller" style={main_style}>
            <style>{".section-scroller::-webkit-scrollbar { display: none; }"}</style>
            { for props.sections.iter().enumerate().map(|(i, section)| {
                let opacity = engine.opacity(i, h);
                let style = format!(
                    "height: 100%; flex-shrink: 0; opacity: {:.4}; pointer-events: {}; \
                     will-change: opacity; overflow: {}; touch-action: {};",
                    opacity,
                    if engine.is_interactive(i, h) { "auto" } else { "none" },
                    if zoomed { "visible" } else { "hidden" },
                    if zoomed { "auto" } else { "none" },
                );
                html! {
                    <section class="scroller-section" style={style}>
                        { section.clone() }
                    </section>
                }
            }) }
        </main>
    }
}
