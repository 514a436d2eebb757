//! Visual effect state: the per-trigger word burst, the click shake,
//! and the shared deterministic RNG they draw from.

pub mod burst;
pub mod easing;
pub mod rng;
pub mod shake;

pub use burst::{GlitchSlice, SizeClass, WordBurst};
pub use easing::{ease, lerp, Easing};
pub use rng::Rng;
pub use shake::Shake;
