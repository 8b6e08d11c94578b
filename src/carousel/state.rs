#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    pub scroll_threshold: f64,
    pub accumulator_decay_ms: u32,
    pub slide_duration_ms: u32,
    /// 0 disables auto-advance.
    pub auto_advance_ms: u32,
    pub touch_threshold: f64,
    pub mobile_breakpoint: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 90.0,
            accumulator_decay_ms: 380,
            slide_duration_ms: 680,
            auto_advance_ms: 6000,
            touch_threshold: 46.0,
            mobile_breakpoint: 768.0,
        }
    }
}

/// Frames a wrap jump stays untransitioned: the first paints the relocated
/// track with `transition: none`, the second turns the transition back on.
pub const SILENT_WRAP_FRAMES: u8 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselWheel {
    /// Not consumed: lets the event bubble to the section scroller.
    PassThrough,
    Consumed,
    Advanced(isize),
}

/// Infinite slider over `len` items.
///
/// The track holds `len + 2` slots: a ghost of the last item, the real
/// items, and a ghost of the first item. Finishing a slide onto a ghost
/// relocates the track to the mirrored real slot with animation switched
/// off for one frame, so the wrap cannot be seen.
#[derive(Clone, Debug)]
pub struct Carousel {
    len: usize,
    config: CarouselConfig,
    real_index: usize,
    track_index: usize,
    transitioning: bool,
    animation_enabled: bool,
    silent_frames: u8,
    accumulator: f64,
    touch_start_x: Option<f64>,
    auto_advance: bool,
    paused: bool,
}

impl Carousel {
    pub fn new(len: usize, config: CarouselConfig) -> Self {
        let auto_advance = config.auto_advance_ms > 0 && len > 1;
        Self {
            len,
            config,
            real_index: 0,
            track_index: if len > 1 { 1 } else { 0 },
            transitioning: false,
            animation_enabled: true,
            silent_frames: 0,
            accumulator: 0.0,
            touch_start_x: None,
            auto_advance,
            paused: false,
        }
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn real_index(&self) -> usize {
        self.real_index
    }

    pub fn track_index(&self) -> usize {
        self.track_index
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn animation_enabled(&self) -> bool {
        self.animation_enabled
    }

    /// Zero or one item: nothing slides.
    pub fn is_static(&self) -> bool {
        self.len <= 1
    }

    pub fn at_first(&self) -> bool {
        self.real_index == 0
    }

    pub fn at_last(&self) -> bool {
        self.real_index + 1 >= self.len
    }

    /// Item shown in each track slot, ghosts included.
    pub fn track_slots(&self) -> Vec<usize> {
        if self.is_static() {
            return (0..self.len).collect();
        }
        let mut slots = Vec::with_capacity(self.len + 2);
        slots.push(self.len - 1);
        slots.extend(0..self.len);
        slots.push(0);
        slots
    }

    /// Slides one item in `direction`. Ignored mid-transition.
    pub fn advance(&mut self, direction: isize) -> bool {
        if self.is_static() || self.transitioning || direction == 0 {
            return false;
        }
        self.transitioning = true;
        self.animation_enabled = true;
        self.silent_frames = 0;
        self.track_index = if direction > 0 {
            self.track_index + 1
        } else {
            self.track_index.saturating_sub(1)
        };
        true
    }

    /// Slides straight to item `index` in one transition.
    pub fn select_index(&mut self, index: usize) -> bool {
        if self.is_static() || self.transitioning || index >= self.len || index == self.real_index {
            return false;
        }
        self.transitioning = true;
        self.animation_enabled = true;
        self.silent_frames = 0;
        self.track_index = index + 1;
        true
    }

    /// Settles the running transition and returns the new real index.
    /// Landing on a ghost jumps to the mirrored real slot without animation.
    pub fn transition_end(&mut self) -> Option<usize> {
        if !self.transitioning {
            return None;
        }
        if self.track_index == 0 {
            self.animation_enabled = false;
            self.silent_frames = SILENT_WRAP_FRAMES;
            self.track_index = self.len;
            self.real_index = self.len - 1;
        } else if self.track_index == self.len + 1 {
            self.animation_enabled = false;
            self.silent_frames = SILENT_WRAP_FRAMES;
            self.track_index = 1;
            self.real_index = 0;
        } else {
            self.real_index = self.track_index - 1;
        }
        self.transitioning = false;
        Some(self.real_index)
    }

    /// Counts one animation frame while a wrap jump is silent. Returns true
    /// on the frame that turns the transition back on.
    pub fn frame_elapsed(&mut self) -> bool {
        if self.animation_enabled {
            return false;
        }
        self.silent_frames = self.silent_frames.saturating_sub(1);
        if self.silent_frames == 0 {
            self.animation_enabled = true;
            return true;
        }
        false
    }

    pub fn wheel(&mut self, delta_y: f64, ctrl_key: bool) -> CarouselWheel {
        if ctrl_key || self.is_static() {
            return CarouselWheel::PassThrough;
        }
        let outward = (self.at_first() && delta_y < 0.0) || (self.at_last() && delta_y > 0.0);
        if outward {
            self.accumulator = 0.0;
            return CarouselWheel::PassThrough;
        }
        if self.transitioning {
            return CarouselWheel::Consumed;
        }

        self.accumulator += delta_y;
        if self.accumulator.abs() < self.config.scroll_threshold {
            return CarouselWheel::Consumed;
        }

        let direction = if self.accumulator > 0.0 { 1 } else { -1 };
        self.accumulator = 0.0;
        self.stop_auto();
        self.advance(direction);
        CarouselWheel::Advanced(direction)
    }

    pub fn reset_accumulator(&mut self) {
        self.accumulator = 0.0;
    }

    pub fn touch_start(&mut self, x: f64) {
        self.touch_start_x = Some(x);
    }

    pub fn touch_end(&mut self, x: f64) -> bool {
        let Some(start) = self.touch_start_x.take() else {
            return false;
        };
        let delta = start - x;
        if delta.abs() < self.config.touch_threshold {
            return false;
        }
        self.stop_auto();
        self.advance(if delta > 0.0 { 1 } else { -1 })
    }

    pub fn key(&mut self, key: &str) -> bool {
        let direction = match key {
            "ArrowRight" => 1,
            "ArrowLeft" => -1,
            _ => return false,
        };
        self.stop_auto();
        self.advance(direction)
    }

    /// Arrow buttons in the header.
    pub fn nudge(&mut self, direction: isize) -> bool {
        self.stop_auto();
        self.advance(direction)
    }

    /// Dot indicators.
    pub fn choose(&mut self, index: usize) -> bool {
        self.stop_auto();
        self.select_index(index)
    }

    pub fn auto_tick(&mut self) -> bool {
        if !self.auto_advance || self.paused {
            return false;
        }
        self.advance(1)
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// The user took over; auto-advance stays off for this mount.
    pub fn stop_auto(&mut self) {
        self.auto_advance = false;
    }

    pub fn auto_advancing(&self) -> bool {
        self.auto_advance
    }

    /// Horizontal track translation in pixels.
    pub fn offset_px(&self, panel_width: f64) -> f64 {
        self.track_index as f64 * panel_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(len: usize) -> Carousel {
        Carousel::new(len, CarouselConfig::default())
    }

    fn slide(c: &mut Carousel, direction: isize) -> usize {
        assert!(c.advance(direction));
        let real = c.transition_end().unwrap();
        while !c.animation_enabled() {
            c.frame_elapsed();
        }
        real
    }

    #[test]
    fn starts_on_first_real_slot() {
        let c = carousel(6);
        assert_eq!(c.real_index(), 0);
        assert_eq!(c.track_index(), 1);
        assert_eq!(c.track_slots(), vec![5, 0, 1, 2, 3, 4, 5, 0]);
    }

    #[test]
    fn wrap_round_trip_returns_to_start() {
        let n = 5;
        let mut c = carousel(n);
        for _ in 0..n {
            let real = slide(&mut c, -1);
            assert!(real < n);
            assert_eq!(c.track_index(), real + 1);
        }
        assert_eq!(c.real_index(), 0);
        for _ in 0..n {
            let real = slide(&mut c, 1);
            assert!(real < n);
            assert_eq!(c.track_index(), real + 1);
        }
        assert_eq!(c.real_index(), 0);
    }

    #[test]
    fn backward_from_first_visits_leading_ghost() {
        let mut c = carousel(4);
        c.advance(-1);
        assert_eq!(c.track_index(), 0);
        assert_eq!(c.real_index(), 0);
        assert_eq!(c.transition_end(), Some(3));
        assert_eq!(c.track_index(), 4);
        assert!(!c.animation_enabled());
        assert!(!c.frame_elapsed());
        assert!(c.frame_elapsed());
        assert!(c.animation_enabled());
    }

    #[test]
    fn wrap_stays_untransitioned_through_first_painted_frame() {
        let mut c = carousel(6);
        c.select_index(5);
        c.transition_end();
        c.advance(1);
        assert_eq!(c.transition_end(), Some(0));

        // The frame that paints the relocated track keeps the transition off.
        assert!(!c.frame_elapsed());
        assert!(!c.animation_enabled());
        assert_eq!(c.track_index(), 1);

        assert!(c.frame_elapsed());
        assert!(c.animation_enabled());
        // Further frames are no-ops once re-enabled.
        assert!(!c.frame_elapsed());
    }

    #[test]
    fn ordinary_settle_needs_no_reenable_frames() {
        let mut c = carousel(4);
        c.advance(1);
        assert_eq!(c.transition_end(), Some(1));
        assert!(c.animation_enabled());
        assert!(!c.frame_elapsed());
    }

    #[test]
    fn forward_from_last_visits_trailing_ghost() {
        let mut c = carousel(3);
        c.select_index(2);
        c.transition_end();
        c.advance(1);
        assert_eq!(c.track_index(), 4);
        assert_eq!(c.transition_end(), Some(0));
        assert_eq!(c.track_index(), 1);
        assert!(!c.animation_enabled());
    }

    #[test]
    fn transitions_do_not_overlap() {
        let mut c = carousel(4);
        assert!(c.advance(1));
        assert!(!c.advance(1));
        assert!(!c.select_index(3));
        assert_eq!(c.track_index(), 2);
        assert_eq!(c.transition_end(), Some(1));
        assert_eq!(c.transition_end(), None);
    }

    #[test]
    fn select_jumps_in_one_transition() {
        let mut c = carousel(6);
        assert!(c.select_index(4));
        assert_eq!(c.track_index(), 5);
        assert!(c.animation_enabled());
        assert_eq!(c.transition_end(), Some(4));
        assert!(!c.select_index(4));
        assert!(!c.select_index(6));
    }

    #[test]
    fn wheel_at_first_item_passes_backward_through() {
        let mut c = carousel(4);
        assert_eq!(c.wheel(-40.0, false), CarouselWheel::PassThrough);
        assert_eq!(c.real_index(), 0);
        assert_eq!(c.track_index(), 1);
        assert!(!c.is_transitioning());
    }

    #[test]
    fn wheel_at_last_item_passes_forward_through() {
        let mut c = carousel(4);
        c.select_index(3);
        c.transition_end();
        assert_eq!(c.wheel(200.0, false), CarouselWheel::PassThrough);
        assert_eq!(c.real_index(), 3);
        assert_eq!(c.wheel(-200.0, false), CarouselWheel::Advanced(-1));
    }

    #[test]
    fn wheel_accumulates_to_threshold() {
        let mut c = carousel(4);
        assert_eq!(c.wheel(40.0, false), CarouselWheel::Consumed);
        assert_eq!(c.wheel(40.0, false), CarouselWheel::Consumed);
        assert_eq!(c.wheel(40.0, false), CarouselWheel::Advanced(1));
        assert!(!c.auto_advancing());
        assert_eq!(c.wheel(400.0, false), CarouselWheel::Consumed);
        assert_eq!(c.transition_end(), Some(1));
    }

    #[test]
    fn decay_reset_forgets_partial_gesture() {
        let mut c = carousel(4);
        c.select_index(1);
        c.transition_end();
        assert_eq!(c.wheel(-60.0, false), CarouselWheel::Consumed);
        c.reset_accumulator();
        assert_eq!(c.wheel(-60.0, false), CarouselWheel::Consumed);
        assert_eq!(c.real_index(), 1);
    }

    #[test]
    fn pinch_wheel_is_not_consumed() {
        let mut c = carousel(4);
        assert_eq!(c.wheel(500.0, true), CarouselWheel::PassThrough);
        assert_eq!(c.real_index(), 0);
    }

    #[test]
    fn touch_swipe_wraps() {
        let mut c = carousel(3);
        c.touch_start(100.0);
        assert!(!c.touch_end(80.0));
        c.touch_start(100.0);
        assert!(c.touch_end(200.0));
        assert_eq!(c.transition_end(), Some(2));
    }

    #[test]
    fn keys_slide_horizontally() {
        let mut c = carousel(3);
        assert!(c.key("ArrowRight"));
        c.transition_end();
        assert!(!c.key("ArrowDown"));
        assert_eq!(c.real_index(), 1);
    }

    #[test]
    fn auto_advance_respects_pause_and_takeover() {
        let mut c = carousel(3);
        c.set_paused(true);
        assert!(!c.auto_tick());
        c.set_paused(false);
        assert!(c.auto_tick());
        c.transition_end();
        assert!(c.choose(0));
        c.transition_end();
        assert!(!c.auto_tick());
    }

    #[test]
    fn auto_advance_disabled_by_config() {
        let mut c = Carousel::new(
            3,
            CarouselConfig {
                auto_advance_ms: 0,
                ..Default::default()
            },
        );
        assert!(!c.auto_tick());
    }

    #[test]
    fn single_and_empty_lists_are_static() {
        for len in [0, 1] {
            let mut c = carousel(len);
            assert!(c.is_static());
            assert!(!c.advance(1));
            assert!(!c.select_index(0));
            assert!(!c.auto_tick());
            assert_eq!(c.wheel(500.0, false), CarouselWheel::PassThrough);
            assert_eq!(c.track_index(), 0);
            assert_eq!(c.track_slots().len(), len);
        }
    }

    #[test]
    fn offset_tracks_slot() {
        let mut c = carousel(4);
        assert_eq!(c.offset_px(300.0), 300.0);
        c.select_index(2);
        assert_eq!(c.offset_px(300.0), 900.0);
    }
}
