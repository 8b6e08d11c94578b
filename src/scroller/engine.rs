use log::debug;

use super::easing::Easing;
use crate::storage::{KeyValueStore, SectionIndexStore};

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollerConfig {
    /// Accumulated wheel delta that fires one step.
    pub scroll_threshold: f64,
    pub scroll_duration_ms: f64,
    /// Idle time after which a partial wheel gesture is forgotten.
    pub accumulator_decay_ms: u32,
    /// Cross-fade zone as a fraction of the section height.
    pub transition_ratio: f64,
    pub touch_threshold: f64,
    pub easing: Easing,
    pub navbar_height_mobile: f64,
    pub navbar_height_desktop: f64,
    pub desktop_breakpoint: f64,
    pub zoom_scale_threshold: f64,
    pub zoom_settle_delay_ms: u32,
}

impl Default for ScrollerConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 180.0,
            scroll_duration_ms: 900.0,
            accumulator_decay_ms: 400,
            transition_ratio: 0.30,
            touch_threshold: 60.0,
            easing: Easing::EaseInOutCubic,
            navbar_height_mobile: 64.0,
            navbar_height_desktop: 80.0,
            desktop_breakpoint: 768.0,
            zoom_scale_threshold: 1.05,
            zoom_settle_delay_ms: 150,
        }
    }
}

impl ScrollerConfig {
    /// Height reserved for the fixed header at this viewport width.
    pub fn header_offset(&self, viewport_width: f64) -> f64 {
        if viewport_width >= self.desktop_breakpoint {
            self.navbar_height_desktop
        } else {
            self.navbar_height_mobile
        }
    }
}

/// Height of one section: the measured container height when layout has
/// happened, otherwise the window height minus the header.
pub fn section_height(measured: Option<f64>, inner_height: f64, header_offset: f64) -> f64 {
    match measured {
        Some(h) if h > 0.0 => h,
        _ => (inner_height - header_offset).max(0.0),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub current_index: usize,
    pub scroll_offset: f64,
    pub is_animating: bool,
    pub is_zoomed: bool,
    pub input_accumulator: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Tween {
    from: f64,
    to: f64,
    start_ms: f64,
    duration_ms: f64,
    target_index: usize,
}

impl Tween {
    fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }
}

/// One animation frame's worth of output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub offset: f64,
    /// Set on the final frame of a transition.
    pub settled: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelStep {
    /// Not ours (ctrl+wheel is the browser's pinch zoom).
    PassThrough,
    /// Consumed while a transition runs; nothing accumulated.
    Busy,
    /// Accumulated below the threshold; the decay timer should be re-armed.
    Pending,
    /// Threshold crossed and a step was requested.
    Stepped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomChange {
    Entered,
    /// Scale is back under the threshold; re-engage after the settle delay.
    Settling,
    Unchanged,
}

/// Section navigation state machine. Holds no DOM handles; time and
/// geometry are passed in by the caller.
#[derive(Clone, Debug)]
pub struct SectionEngine {
    total: usize,
    config: ScrollerConfig,
    state: ScrollState,
    settled_index: usize,
    tween: Option<Tween>,
    touch_start_y: Option<f64>,
}

impl SectionEngine {
    pub fn new(total: usize, config: ScrollerConfig) -> Self {
        Self {
            total,
            config,
            state: ScrollState::default(),
            settled_index: 0,
            tween: None,
            touch_start_y: None,
        }
    }

    pub fn config(&self) -> &ScrollerConfig {
        &self.config
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    /// Last index a transition actually reached.
    #[cfg(test)]
    pub fn settled_index(&self) -> usize {
        self.settled_index
    }

    pub fn scroll_offset(&self) -> f64 {
        self.state.scroll_offset
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_animating
    }

    pub fn is_zoomed(&self) -> bool {
        self.state.is_zoomed
    }

    fn clamp(&self, index: isize) -> usize {
        if self.total == 0 || index <= 0 {
            0
        } else {
            (index as usize).min(self.total - 1)
        }
    }

    /// Jumps to `index` without animating. Used for the mount-time restore.
    pub fn restore(&mut self, index: usize, section_height: f64) {
        let index = self.clamp(index as isize);
        self.tween = None;
        self.state.is_animating = false;
        self.state.current_index = index;
        self.state.scroll_offset = index as f64 * section_height;
        self.settled_index = index;
    }

    /// Re-aligns the resting offset after a resize. Ignored mid-transition.
    pub fn realign(&mut self, section_height: f64) -> Option<f64> {
        if self.state.is_animating || self.state.is_zoomed {
            return None;
        }
        self.state.scroll_offset = self.state.current_index as f64 * section_height;
        Some(self.state.scroll_offset)
    }

    /// Starts a transition to `target` (clamped). Returns whether one
    /// started: busy, zoomed, empty, and already-there requests are no-ops.
    pub fn navigate_to(&mut self, target: isize, now_ms: f64, section_height: f64) -> bool {
        if self.state.is_animating || self.state.is_zoomed || self.total == 0 {
            return false;
        }
        let next = self.clamp(target);
        let to = next as f64 * section_height;
        if next == self.state.current_index && (self.state.scroll_offset - to).abs() < 0.5 {
            return false;
        }

        debug!("Navigating from section {} to {}", self.state.current_index, next);
        self.state.current_index = next;
        self.state.is_animating = true;
        self.tween = Some(Tween {
            from: self.state.scroll_offset,
            to,
            start_ms: now_ms,
            duration_ms: self.config.scroll_duration_ms,
            target_index: next,
        });
        true
    }

    pub fn step(&mut self, direction: isize, now_ms: f64, section_height: f64) -> bool {
        let target = self.state.current_index as isize + direction.signum();
        self.navigate_to(target, now_ms, section_height)
    }

    /// Advances the running transition to `now_ms`.
    pub fn tick(&mut self, now_ms: f64) -> Option<Frame> {
        let tween = self.tween?;
        let t = tween.progress(now_ms);
        if t >= 1.0 {
            self.tween = None;
            self.state.scroll_offset = tween.to;
            self.state.is_animating = false;
            self.settled_index = tween.target_index;
            return Some(Frame {
                offset: tween.to,
                settled: Some(tween.target_index),
            });
        }

        let eased = self.config.easing.apply(t);
        self.state.scroll_offset = tween.from + (tween.to - tween.from) * eased;
        Some(Frame {
            offset: self.state.scroll_offset,
            settled: None,
        })
    }

    /// `tick`, writing the index to `store` on the frame a transition
    /// settles and at no other time.
    pub fn tick_and_persist<S: KeyValueStore>(
        &mut self,
        now_ms: f64,
        store: &SectionIndexStore<S>,
    ) -> Option<Frame> {
        let frame = self.tick(now_ms)?;
        if let Some(index) = frame.settled {
            store.save(index);
        }
        Some(frame)
    }

    pub fn wheel(
        &mut self,
        delta_y: f64,
        ctrl_key: bool,
        now_ms: f64,
        section_height: f64,
    ) -> WheelStep {
        if ctrl_key {
            return WheelStep::PassThrough;
        }
        if self.state.is_animating {
            return WheelStep::Busy;
        }

        self.state.input_accumulator += delta_y;
        if self.state.input_accumulator.abs() < self.config.scroll_threshold {
            return WheelStep::Pending;
        }

        let direction = if self.state.input_accumulator > 0.0 { 1 } else { -1 };
        self.state.input_accumulator = 0.0;
        self.step(direction, now_ms, section_height);
        WheelStep::Stepped
    }

    pub fn reset_accumulator(&mut self) {
        self.state.input_accumulator = 0.0;
    }

    pub fn touch_start(&mut self, y: f64) {
        self.touch_start_y = Some(y);
    }

    /// Ends a single-finger swipe; fires one step when the vertical travel
    /// reaches the touch threshold.
    pub fn touch_end(&mut self, y: f64, now_ms: f64, section_height: f64) -> bool {
        let Some(start) = self.touch_start_y.take() else {
            return false;
        };
        if self.state.is_animating {
            return false;
        }
        let delta = start - y;
        if delta.abs() < self.config.touch_threshold {
            return false;
        }
        self.step(if delta > 0.0 { 1 } else { -1 }, now_ms, section_height)
    }

    /// Returns whether the key is a navigation key (the caller then
    /// prevents its default scrolling).
    pub fn key(&mut self, key: &str, now_ms: f64, section_height: f64) -> bool {
        if self.state.is_animating || self.state.is_zoomed {
            return false;
        }
        let direction = match key {
            "ArrowDown" | "PageDown" => 1,
            "ArrowUp" | "PageUp" => -1,
            _ => return false,
        };
        self.step(direction, now_ms, section_height);
        true
    }

    pub fn viewport_scale_changed(&mut self, scale: f64) -> ZoomChange {
        if scale > self.config.zoom_scale_threshold {
            if !self.state.is_zoomed {
                debug!("Zoom takeover at scale {:.2}", scale);
            }
            self.state.is_zoomed = true;
            self.state.is_animating = false;
            self.tween = None;
            self.touch_start_y = None;
            self.state.input_accumulator = 0.0;
            ZoomChange::Entered
        } else if self.state.is_zoomed {
            ZoomChange::Settling
        } else {
            ZoomChange::Unchanged
        }
    }

    /// Leaves zoom mode and snaps back onto the section grid.
    pub fn finish_zoom_settle(&mut self, section_height: f64) -> f64 {
        self.state.is_zoomed = false;
        self.state.scroll_offset = self.state.current_index as f64 * section_height;
        debug!("Zoom released, re-aligned to section {}", self.state.current_index);
        self.state.scroll_offset
    }

    /// Opacity of section `index` at the live offset.
    pub fn opacity(&self, index: usize, section_height: f64) -> f64 {
        let y = self.state.scroll_offset;
        let zone = section_height * self.config.transition_ratio.clamp(0.0, 1.0);
        if index == 0 {
            return 1.0 - fade_progress(y, 0.0, zone);
        }
        let fade_in = fade_progress(y, (index - 1) as f64 * section_height, zone);
        let fade_out = if index + 1 < self.total {
            fade_progress(y, index as f64 * section_height, zone)
        } else {
            0.0
        };
        fade_in * (1.0 - fade_out)
    }

    /// Nearly invisible sections let pointer events through.
    pub fn is_interactive(&self, index: usize, section_height: f64) -> bool {
        self.opacity(index, section_height) >= 0.05
    }
}

fn fade_progress(position: f64, start: f64, zone: f64) -> f64 {
    if zone <= 0.0 {
        return if position > start { 1.0 } else { 0.0 };
    }
    ((position - start) / zone).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, SECTION_INDEX_KEY};

    const H: f64 = 800.0;

    fn engine(total: usize) -> SectionEngine {
        SectionEngine::new(total, ScrollerConfig::default())
    }

    /// Runs the current transition to completion, returning every frame.
    fn run_to_settle(engine: &mut SectionEngine, start_ms: f64) -> Vec<Frame> {
        let mut frames = Vec::new();
        let mut now = start_ms;
        while engine.is_animating() {
            now += 16.0;
            if let Some(frame) = engine.tick(now) {
                frames.push(frame);
            }
        }
        frames
    }

    /// Like `run_to_settle`, but through the persisting tick.
    fn persist_to_settle(
        engine: &mut SectionEngine,
        start_ms: f64,
        store: &SectionIndexStore<MemoryStore>,
    ) -> Vec<Frame> {
        let mut frames = Vec::new();
        let mut now = start_ms;
        while engine.is_animating() {
            now += 16.0;
            if let Some(frame) = engine.tick_and_persist(now, store) {
                frames.push(frame);
            }
        }
        frames
    }

    fn stored(store: &SectionIndexStore<MemoryStore>) -> Option<String> {
        store.inner().get(SECTION_INDEX_KEY).unwrap()
    }

    #[test]
    fn navigation_clamps_any_target() {
        for target in [-100, -1, 0, 1, 2, 3, 50, isize::MAX, isize::MIN] {
            let mut e = engine(3);
            e.navigate_to(target, 0.0, H);
            run_to_settle(&mut e, 0.0);
            assert!(e.current_index() <= 2, "target {target}");
            assert_eq!(e.scroll_offset(), e.current_index() as f64 * H);
        }
    }

    #[test]
    fn busy_navigation_is_a_no_op() {
        let mut e = engine(4);
        assert!(e.navigate_to(1, 0.0, H));
        e.tick(100.0);
        let before = e.state();
        assert!(!e.navigate_to(3, 120.0, H));
        assert_eq!(e.current_index(), before.current_index);
        assert_eq!(e.scroll_offset(), before.scroll_offset);
    }

    #[test]
    fn zoomed_navigation_is_a_no_op() {
        let mut e = engine(4);
        e.viewport_scale_changed(2.0);
        let before = e.state();
        assert!(!e.navigate_to(2, 0.0, H));
        assert!(!e.key("ArrowDown", 0.0, H));
        assert_eq!(e.state(), before);
    }

    #[test]
    fn same_index_request_does_not_animate() {
        let mut e = engine(3);
        assert!(!e.navigate_to(0, 0.0, H));
        assert!(!e.navigate_to(-5, 0.0, H));
        assert!(!e.is_animating());
    }

    #[test]
    fn final_frame_snaps_exactly_and_reports_settle() {
        let mut e = engine(3);
        e.navigate_to(2, 1000.0, 777.7);
        let frames = run_to_settle(&mut e, 1000.0);
        let last = frames.last().copied().unwrap();
        assert_eq!(last.offset, 2.0 * 777.7);
        assert_eq!(last.settled, Some(2));
        assert!(frames[..frames.len() - 1].iter().all(|f| f.settled.is_none()));
        assert_eq!(e.settled_index(), 2);
    }

    #[test]
    fn frame_before_start_time_holds_the_start_offset() {
        let mut e = engine(3);
        e.navigate_to(1, 500.0, H);
        let frame = e.tick(490.0).unwrap();
        assert_eq!(frame.offset, 0.0);
        assert!(e.is_animating());
    }

    #[test]
    fn zero_duration_settles_on_first_frame() {
        let mut e = SectionEngine::new(
            3,
            ScrollerConfig {
                scroll_duration_ms: 0.0,
                ..Default::default()
            },
        );
        e.navigate_to(1, 0.0, H);
        assert_eq!(e.tick(0.0).and_then(|f| f.settled), Some(1));
    }

    #[test]
    fn settled_index_is_persisted() {
        let store = SectionIndexStore::new(MemoryStore::default());
        let mut e = engine(4);
        e.navigate_to(3, 0.0, H);
        // Nothing is written when the transition starts.
        assert_eq!(stored(&store), None);

        let frames = persist_to_settle(&mut e, 0.0, &store);
        assert!(frames.len() > 1);
        assert_eq!(store.inner().writes(), 1);
        assert_eq!(store.load(4), 3);
    }

    #[test]
    fn zoom_interrupt_keeps_last_settled_index() {
        let store = SectionIndexStore::new(MemoryStore::default());
        let mut e = engine(4);

        e.navigate_to(1, 0.0, H);
        persist_to_settle(&mut e, 0.0, &store);

        e.navigate_to(2, 5000.0, H);
        let mid = e.tick_and_persist(5200.0, &store).unwrap();
        assert!(mid.settled.is_none());
        assert_eq!(e.viewport_scale_changed(1.6), ZoomChange::Entered);
        assert!(!e.is_animating());
        assert!(e.tick_and_persist(9000.0, &store).is_none());

        assert_eq!(stored(&store).as_deref(), Some("1"));
        assert_eq!(store.inner().writes(), 1);
        assert_eq!(e.settled_index(), 1);
    }

    #[test]
    fn zoom_release_realigns_to_grid() {
        let mut e = engine(3);
        e.navigate_to(1, 0.0, H);
        e.tick(300.0);
        e.viewport_scale_changed(1.3);
        assert_eq!(e.viewport_scale_changed(1.2), ZoomChange::Entered);
        assert_eq!(e.viewport_scale_changed(1.0), ZoomChange::Settling);
        let offset = e.finish_zoom_settle(H);
        assert_eq!(offset, H);
        assert!(!e.is_zoomed());
        assert_eq!(e.viewport_scale_changed(1.0), ZoomChange::Unchanged);
        assert_eq!(e.viewport_scale_changed(1.05), ZoomChange::Unchanged);
    }

    #[test]
    fn zoom_entry_clears_accumulator() {
        let mut e = engine(3);
        assert_eq!(e.wheel(100.0, false, 0.0, H), WheelStep::Pending);
        e.viewport_scale_changed(1.5);
        assert_eq!(e.state().input_accumulator, 0.0);
        assert!(!(e.is_animating() && e.is_zoomed()));
    }

    #[test]
    fn wheel_accumulates_small_deltas() {
        let mut e = engine(3);
        for _ in 0..5 {
            assert_eq!(e.wheel(30.0, false, 0.0, H), WheelStep::Pending);
        }
        assert_eq!(e.wheel(30.0, false, 0.0, H), WheelStep::Stepped);
        assert_eq!(e.current_index(), 1);
        assert_eq!(e.state().input_accumulator, 0.0);
    }

    #[test]
    fn decayed_partial_gesture_does_not_fire_later() {
        let mut e = engine(3);
        e.wheel(150.0, false, 0.0, H);
        e.reset_accumulator();
        assert_eq!(e.wheel(150.0, false, 1000.0, H), WheelStep::Pending);
        assert_eq!(e.current_index(), 0);
    }

    #[test]
    fn wheel_ignores_pinch_and_busy_input() {
        let mut e = engine(3);
        assert_eq!(e.wheel(500.0, true, 0.0, H), WheelStep::PassThrough);
        e.navigate_to(1, 0.0, H);
        assert_eq!(e.wheel(500.0, false, 10.0, H), WheelStep::Busy);
        assert_eq!(e.state().input_accumulator, 0.0);
    }

    #[test]
    fn touch_swipe_needs_threshold() {
        let mut e = engine(3);
        e.touch_start(400.0);
        assert!(!e.touch_end(370.0, 0.0, H));
        e.touch_start(400.0);
        assert!(e.touch_end(300.0, 0.0, H));
        assert_eq!(e.current_index(), 1);
        run_to_settle(&mut e, 0.0);

        e.touch_start(100.0);
        assert!(e.touch_end(300.0, 2000.0, H));
        assert_eq!(e.current_index(), 0);
    }

    #[test]
    fn touch_end_without_start_is_ignored() {
        let mut e = engine(3);
        assert!(!e.touch_end(0.0, 0.0, H));
    }

    #[test]
    fn keys_map_to_directions() {
        let mut e = engine(3);
        assert!(e.key("PageDown", 0.0, H));
        run_to_settle(&mut e, 0.0);
        assert!(e.key("ArrowDown", 2000.0, H));
        run_to_settle(&mut e, 2000.0);
        assert_eq!(e.current_index(), 2);
        assert!(e.key("PageUp", 4000.0, H));
        assert_eq!(e.current_index(), 1);
        assert!(!e.key("Enter", 4000.0, H));
    }

    #[test]
    fn cross_fade_is_monotonic_and_complete() {
        let mut e = engine(4);
        e.restore(1, H);
        e.navigate_to(2, 0.0, H);
        let mut prev_out = e.opacity(1, H);
        let mut prev_in = e.opacity(2, H);
        assert_eq!(prev_out, 1.0);
        assert_eq!(prev_in, 0.0);

        let mut now = 0.0;
        while e.is_animating() {
            now += 7.0;
            e.tick(now);
            let out = e.opacity(1, H);
            let inn = e.opacity(2, H);
            assert!(out <= prev_out + 1e-12);
            assert!(inn >= prev_in - 1e-12);
            prev_out = out;
            prev_in = inn;
        }
        assert_eq!(e.opacity(1, H), 0.0);
        assert_eq!(e.opacity(2, H), 1.0);
    }

    #[test]
    fn far_sections_are_not_interactive() {
        let mut e = engine(5);
        e.restore(2, H);
        assert!(e.is_interactive(2, H));
        for i in [0, 1, 3, 4] {
            assert!(!e.is_interactive(i, H), "section {i}");
        }
    }

    #[test]
    fn last_section_never_fades_out() {
        let mut e = engine(3);
        e.restore(2, H);
        assert_eq!(e.opacity(2, H), 1.0);
    }

    #[test]
    fn three_sections_two_wheel_steps_store_two() {
        let store = SectionIndexStore::new(MemoryStore::default());
        let mut e = engine(3);
        let mut now = 0.0;
        let mut written = Vec::new();
        let mut written_values = Vec::new();

        for _ in 0..2 {
            assert_eq!(e.wheel(200.0, false, now, H), WheelStep::Stepped);
            let frames = persist_to_settle(&mut e, now, &store);
            written.extend(frames.iter().filter_map(|f| f.settled));
            written_values.push(stored(&store));
            now += 2000.0;
        }

        assert_eq!(written, vec![1, 2]);
        assert_eq!(
            written_values,
            vec![Some("1".to_string()), Some("2".to_string())]
        );
        assert_eq!(store.inner().writes(), 2);
    }

    #[test]
    fn restore_clamps_and_positions_without_animation() {
        let mut e = engine(3);
        e.restore(7, H);
        assert_eq!(e.current_index(), 2);
        assert_eq!(e.scroll_offset(), 2.0 * H);
        assert!(!e.is_animating());
    }

    #[test]
    fn section_height_falls_back_to_window() {
        assert_eq!(section_height(Some(700.0), 900.0, 80.0), 700.0);
        assert_eq!(section_height(Some(0.0), 900.0, 80.0), 820.0);
        assert_eq!(section_height(None, 50.0, 80.0), 0.0);
    }

    #[test]
    fn header_offset_follows_breakpoint() {
        let config = ScrollerConfig::default();
        assert_eq!(config.header_offset(1024.0), 80.0);
        assert_eq!(config.header_offset(768.0), 80.0);
        assert_eq!(config.header_offset(500.0), 64.0);
    }

    #[test]
    fn empty_scroller_never_navigates() {
        let mut e = engine(0);
        assert!(!e.navigate_to(3, 0.0, H));
        assert_eq!(e.current_index(), 0);
    }
}
