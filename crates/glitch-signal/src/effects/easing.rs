// effects/easing.rs
//
// Pure easing functions for animation interpolation.
// No dependencies on widget state — just math.

use std::f32::consts::PI;

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant velocity (no easing).
    #[default]
    Linear,
    /// Slow start.
    QuadIn,
    /// Slow end.
    QuadOut,
    /// Slow start and end.
    QuadInOut,
    /// Stronger slow end.
    CubicOut,
    /// Sine wave easing (smooth).
    SineInOut,
    /// Overshoot then settle — the click-shake profile.
    BackOut,
    /// Elastic spring — the lamp pop profile.
    ElasticOut,
}

impl Easing {
    /// Apply the easing function to a normalized time value `t` in [0, 1].
    /// Returns the eased value, also typically in [0, 1] (but can overshoot
    /// for Back/Elastic).
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadIn => t * t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Easing::BackOut => {
                const C1: f32 = 1.70158;
                const C3: f32 = C1 + 1.0;
                1.0 + C3 * (t - 1.0).powi(3) + C1 * (t - 1.0).powi(2)
            }
            Easing::ElasticOut => {
                const C4: f32 = (2.0 * PI) / 3.0;
                if t == 0.0 {
                    0.0
                } else if t == 1.0 {
                    1.0
                } else {
                    2.0_f32.powf(-10.0 * t) * ((t * 10.0 - 0.75) * C4).sin() + 1.0
                }
            }
        }
    }
}

// ── Interpolation helpers ────────────────────────────────────────────────

/// Linearly interpolate between two values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Interpolate with easing.
#[inline]
pub fn ease(a: f32, b: f32, t: f32, easing: Easing) -> f32 {
    lerp(a, b, easing.apply(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_endpoints() {
        assert_eq!(Easing::Linear.apply(0.0), 0.0);
        assert_eq!(Easing::Linear.apply(1.0), 1.0);
        assert_eq!(Easing::Linear.apply(0.5), 0.5);
    }

    #[test]
    fn quad_out_faster_start() {
        // QuadOut should be > 0.5 at t=0.5 (faster start, slower end)
        let mid = Easing::QuadOut.apply(0.5);
        assert!(mid > 0.5, "QuadOut at 0.5 should be > 0.5, got {}", mid);
    }

    #[test]
    fn back_overshoots() {
        // BackOut should overshoot slightly
        let early = Easing::BackOut.apply(0.3);
        assert!(early > 0.3, "BackOut should overshoot");
    }

    #[test]
    fn elastic_settles_at_one() {
        assert_eq!(Easing::ElasticOut.apply(1.0), 1.0);
    }

    #[test]
    fn ease_interpolates() {
        let result = ease(100.0, 200.0, 0.5, Easing::Linear);
        assert!((result - 150.0).abs() < 0.001);
    }
}
