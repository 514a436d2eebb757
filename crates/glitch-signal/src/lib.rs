pub mod api;
pub mod bridge;
pub mod core;
pub mod effects;
pub mod input;
pub mod theme;

// Re-export key types at crate root for convenience
pub use api::widget::{LampAnim, SignalWidget, WidgetConfig};
pub use bridge::frame::{write_frame, FrameLayout, LampInstance, SliceInstance};
pub use core::cycle::{LightColor, LightCycle};
pub use core::time::FixedTimestep;
pub use core::words::{ConfigError, WordBank};
pub use effects::{ease, lerp, Easing, GlitchSlice, Rng, Shake, SizeClass, WordBurst};
pub use input::queue::{InputEvent, InputQueue};
pub use theme::{ColorTheme, Rgba};
