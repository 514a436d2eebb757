//! Per-trigger word visuals: one randomized "burst" per transition.
//!
//! Every toggle produces a fresh `WordBurst` — the renderer keys its layers
//! off the trigger counter and replays the burst from scratch, so two
//! consecutive bursts never look the same even for the same word.

use glam::Vec2;

use super::rng::Rng;

/// Hard comic drop-shadow offset, in CSS pixels.
const SHADOW_OFFSET: Vec2 = Vec2::new(20.0, 20.0);
/// Secondary-color echo offset, in CSS pixels.
const ECHO_OFFSET: Vec2 = Vec2::new(-15.0, -10.0);

/// Rotation drawn uniformly from [-MAX_ROTATION, MAX_ROTATION] degrees.
const MAX_ROTATION_DEG: f32 = 5.0;
/// Scale drawn uniformly from [SCALE_BASE, SCALE_BASE + SCALE_VARY].
const SCALE_BASE: f32 = 1.1;
const SCALE_VARY: f32 = 0.2;

/// Slice band centers stay inside the glyph area.
const SLICE_CENTER_MIN: f32 = 0.15;
const SLICE_CENTER_MAX: f32 = 0.85;
/// Half-height of a slice band, as a fraction of the word height.
const SLICE_HALF_MIN: f32 = 0.02;
const SLICE_HALF_MAX: f32 = 0.10;
/// Horizontal slice displacement, in CSS pixels.
const SLICE_SHIFT: f32 = 12.0;
const SLICE_ALPHA_MIN: f32 = 0.5;

/// One horizontal clip band sliced out of the word and shifted sideways.
/// `top`/`bottom` are fractions of the word height, measured from the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlitchSlice {
    pub top: f32,
    pub bottom: f32,
    pub offset_x: f32,
    pub alpha: f32,
}

impl GlitchSlice {
    fn generate(rng: &mut Rng) -> Self {
        let center = rng.next_range(SLICE_CENTER_MIN, SLICE_CENTER_MAX);
        let half = rng.next_range(SLICE_HALF_MIN, SLICE_HALF_MAX);
        GlitchSlice {
            top: (center - half).max(0.0),
            bottom: (center + half).min(1.0),
            offset_x: rng.next_signed(SLICE_SHIFT),
            alpha: rng.next_range(SLICE_ALPHA_MIN, 1.0),
        }
    }
}

/// Display size class, chosen by word length so short words fill the screen
/// and long words still fit. The value is in viewport-width units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    /// Up to 4 characters (STOP, GO).
    Massive,
    /// 5–7 characters (HAZARD, VOLTAGE).
    Large,
    /// 8+ characters (ACCELERATE).
    Wide,
}

impl SizeClass {
    pub fn for_word(word: &str) -> Self {
        match word.chars().count() {
            0..=4 => SizeClass::Massive,
            5..=7 => SizeClass::Large,
            _ => SizeClass::Wide,
        }
    }

    /// Font size in viewport-width units.
    pub fn vw(self) -> f32 {
        match self {
            SizeClass::Massive => 35.0,
            SizeClass::Large => 25.0,
            SizeClass::Wide => 16.0,
        }
    }
}

/// The randomized visual parameter set for one displayed word.
#[derive(Debug, Clone)]
pub struct WordBurst {
    /// Whole-word tilt in degrees, in [-5, 5].
    pub rotation_deg: f32,
    /// Whole-word scale, in [1.1, 1.3].
    pub scale: f32,
    /// Hard drop-shadow layer offset.
    pub shadow: Vec2,
    /// Secondary-color echo layer offset.
    pub echo: Vec2,
    /// Font size class for the word.
    pub size: SizeClass,
    /// Clip bands, re-jittered over time while the burst is live.
    pub slices: Vec<GlitchSlice>,
}

impl WordBurst {
    /// Roll a fresh burst for `word`.
    pub fn generate(word: &str, slice_count: usize, rng: &mut Rng) -> Self {
        WordBurst {
            rotation_deg: rng.next_signed(MAX_ROTATION_DEG),
            scale: SCALE_BASE + rng.next_range(0.0, SCALE_VARY),
            shadow: SHADOW_OFFSET,
            echo: ECHO_OFFSET,
            size: SizeClass::for_word(word),
            slices: (0..slice_count).map(|_| GlitchSlice::generate(rng)).collect(),
        }
    }

    /// Re-roll the slice bands for a flicker frame. The word-level
    /// transform stays fixed — only the clip glitch moves.
    pub fn twitch(&mut self, rng: &mut Rng) {
        for slice in self.slices.iter_mut() {
            *slice = GlitchSlice::generate(rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameters_stay_in_range() {
        let mut rng = Rng::new(42);
        for _ in 0..100 {
            let burst = WordBurst::generate("GLITCH", 3, &mut rng);
            assert!(burst.rotation_deg.abs() <= MAX_ROTATION_DEG);
            assert!(burst.scale >= SCALE_BASE && burst.scale < SCALE_BASE + SCALE_VARY);
            assert_eq!(burst.slices.len(), 3);
            for s in &burst.slices {
                assert!(s.top >= 0.0 && s.bottom <= 1.0);
                assert!(s.top < s.bottom);
                assert!(s.offset_x.abs() <= SLICE_SHIFT);
                assert!(s.alpha >= SLICE_ALPHA_MIN && s.alpha <= 1.0);
            }
        }
    }

    #[test]
    fn size_class_by_word_length() {
        assert_eq!(SizeClass::for_word("GO"), SizeClass::Massive);
        assert_eq!(SizeClass::for_word("STOP"), SizeClass::Massive);
        assert_eq!(SizeClass::for_word("DANGER"), SizeClass::Large);
        assert_eq!(SizeClass::for_word("VOLTAGE"), SizeClass::Large);
        assert_eq!(SizeClass::for_word("ACCELERATE"), SizeClass::Wide);
    }

    #[test]
    fn twitch_moves_slices_but_not_transform() {
        let mut rng = Rng::new(7);
        let mut burst = WordBurst::generate("PANIC", 3, &mut rng);
        let before = (burst.rotation_deg, burst.scale, burst.slices.clone());
        burst.twitch(&mut rng);
        assert_eq!(burst.rotation_deg, before.0);
        assert_eq!(burst.scale, before.1);
        assert_ne!(burst.slices, before.2);
    }

    #[test]
    fn same_seed_same_burst() {
        let a = WordBurst::generate("TURBO", 4, &mut Rng::new(99));
        let b = WordBurst::generate("TURBO", 4, &mut Rng::new(99));
        assert_eq!(a.rotation_deg, b.rotation_deg);
        assert_eq!(a.scale, b.scale);
        assert_eq!(a.slices, b.slices);
    }
}
