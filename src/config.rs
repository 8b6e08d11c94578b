use log::Level;

use crate::carousel::CarouselConfig;
use crate::scroller::ScrollerConfig;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Section snapping as tuned for the landing page: a firmer wheel
/// threshold, a quicker slide and a wider cross-fade than the defaults.
pub fn scroller_settings() -> ScrollerConfig {
    ScrollerConfig {
        scroll_threshold: 280.0,
        scroll_duration_ms: 500.0,
        transition_ratio: 0.40,
        ..ScrollerConfig::default()
    }
}

pub fn carousel_settings() -> CarouselConfig {
    CarouselConfig::default()
}

/// Seconds for one full testimonials marquee loop.
pub const MARQUEE_SECONDS: u32 = 40;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_preset_keeps_layout_defaults() {
        let tuned = scroller_settings();
        let base = ScrollerConfig::default();
        assert_eq!(tuned.scroll_threshold, 280.0);
        assert_eq!(tuned.navbar_height_desktop, base.navbar_height_desktop);
        assert_eq!(tuned.zoom_scale_threshold, base.zoom_scale_threshold);
    }
}
