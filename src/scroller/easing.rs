/// Time → progress curves for the section transition.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    Linear,
    /// Symmetric cubic ease-in-out.
    #[default]
    EaseInOutCubic,
    EaseOutCubic,
    Custom(fn(f64) -> f64),
}

impl Easing {
    /// Maps elapsed fraction `t` to progress. `t` is clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOutCubic => ease_in_out_cubic(t),
            Easing::EaseOutCubic => ease_out_cubic(t),
            Easing::Custom(f) => f(t),
        }
    }
}

pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curves_hit_endpoints() {
        for easing in [Easing::Linear, Easing::EaseInOutCubic, Easing::EaseOutCubic] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn in_out_cubic_is_symmetric() {
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-12);
        for t in [0.1, 0.2, 0.3, 0.45] {
            let sum = ease_in_out_cubic(t) + ease_in_out_cubic(1.0 - t);
            assert!((sum - 1.0).abs() < 1e-9, "t = {t}");
        }
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Easing::EaseOutCubic.apply(-3.0), 0.0);
        assert!((Easing::EaseInOutCubic.apply(7.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn custom_curve_is_used() {
        fn square(t: f64) -> f64 {
            t * t
        }
        assert_eq!(Easing::Custom(square).apply(0.5), 0.25);
    }
}
