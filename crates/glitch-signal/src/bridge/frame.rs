//! Flat frame snapshot read by the JS renderer.
//! Must stay in sync with the TypeScript `frame.ts`.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 16 floats]
//! [Theme: 6 colors × 4 floats]
//! [Box: 8 floats]
//! [Burst: 8 floats]
//! [Lamps: 3 × 8 floats]
//! [Slices: slice_count × 4 floats]
//! ```
//!
//! The word text travels out-of-band as UTF-8 bytes (separate pointer);
//! the header carries its byte length.

use bytemuck::{Pod, Zeroable};

use crate::api::widget::{SignalWidget, WidgetConfig};
use crate::core::cycle::LightColor;
use crate::theme::{ColorTheme, Rgba};

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_VERSION: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_TRIGGER: usize = 2;
pub const HEADER_COLOR: usize = 3;
pub const HEADER_WORD_LEN: usize = 4;
pub const HEADER_HOVERED: usize = 5;
pub const HEADER_SHAKE_ACTIVE: usize = 6;
pub const HEADER_WORLD_WIDTH: usize = 7;
pub const HEADER_WORLD_HEIGHT: usize = 8;
pub const HEADER_LAMP_COUNT: usize = 9;
pub const HEADER_SLICE_COUNT: usize = 10;

/// Protocol version written into the header.
pub const FRAME_VERSION: f32 = 1.0;

/// Colors in the theme section, in order: primary, secondary, bg, accent,
/// glow, lamp. Four floats (RGBA) each.
pub const THEME_COLORS: usize = 6;
pub const COLOR_FLOATS: usize = 4;

/// Box section: cx, cy, w, h, shake rotation (deg), shake scale,
/// hover scale, hover rotation (deg).
pub const BOX_FLOATS: usize = 8;

/// Burst section: rotation (deg), scale, shadow dx/dy, echo dx/dy,
/// font size (vw), pad.
pub const BURST_FLOATS: usize = 8;

/// Floats per lamp instance (wire format — never changes).
pub const LAMP_FLOATS: usize = 8;
/// Lamps on the signal.
pub const LAMP_COUNT: usize = 3;

/// Floats per glitch slice (wire format — never changes).
pub const SLICE_FLOATS: usize = 4;

/// One lamp on the wire.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct LampInstance {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub intensity: f32,
    pub scale: f32,
    pub _pad: [f32; 3],
}

/// One glitch slice on the wire.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct SliceInstance {
    pub top: f32,
    pub bottom: f32,
    pub offset_x: f32,
    pub alpha: f32,
}

/// Runtime-computed frame layout. The slice section is the only part whose
/// size depends on configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameLayout {
    pub slice_count: usize,
    pub theme_offset: usize,
    pub box_offset: usize,
    pub burst_offset: usize,
    pub lamp_offset: usize,
    pub slice_offset: usize,
    pub total_floats: usize,
}

impl FrameLayout {
    /// Compute the layout for a given slice count.
    pub fn new(slice_count: usize) -> Self {
        let theme_offset = HEADER_FLOATS;
        let box_offset = theme_offset + THEME_COLORS * COLOR_FLOATS;
        let burst_offset = box_offset + BOX_FLOATS;
        let lamp_offset = burst_offset + BURST_FLOATS;
        let slice_offset = lamp_offset + LAMP_COUNT * LAMP_FLOATS;
        let total_floats = slice_offset + slice_count * SLICE_FLOATS;
        Self {
            slice_count,
            theme_offset,
            box_offset,
            burst_offset,
            lamp_offset,
            slice_offset,
            total_floats,
        }
    }

    /// Compute the layout from a widget config.
    pub fn from_config(config: &WidgetConfig) -> Self {
        Self::new(config.slice_count)
    }
}

fn put_color(out: &mut [f32], offset: usize, color: Rgba) {
    out[offset] = color.r;
    out[offset + 1] = color.g;
    out[offset + 2] = color.b;
    out[offset + 3] = color.a;
}

/// Serialize the widget into `out` according to `layout`.
/// The buffer is resized to the layout's total and fully overwritten.
pub fn write_frame(
    widget: &SignalWidget,
    frame_counter: u64,
    layout: &FrameLayout,
    out: &mut Vec<f32>,
) {
    out.clear();
    out.resize(layout.total_floats, 0.0);

    let cycle = widget.cycle();
    let burst = widget.burst();
    let shake = widget.shake();
    let config = widget.config();

    // Header. Trigger and frame counter ride as f32 — exact up to 2^24,
    // far beyond any click count this widget will see.
    out[HEADER_VERSION] = FRAME_VERSION;
    out[HEADER_FRAME_COUNTER] = frame_counter as f32;
    out[HEADER_TRIGGER] = cycle.trigger() as f32;
    out[HEADER_COLOR] = cycle.color().index() as f32;
    out[HEADER_WORD_LEN] = cycle.word().len() as f32;
    out[HEADER_HOVERED] = if widget.hovered() { 1.0 } else { 0.0 };
    out[HEADER_SHAKE_ACTIVE] = if shake.is_active() { 1.0 } else { 0.0 };
    out[HEADER_WORLD_WIDTH] = config.world_width;
    out[HEADER_WORLD_HEIGHT] = config.world_height;
    out[HEADER_LAMP_COUNT] = LAMP_COUNT as f32;
    out[HEADER_SLICE_COUNT] = layout.slice_count as f32;

    // Theme.
    let theme = ColorTheme::for_color(cycle.color());
    let t = layout.theme_offset;
    put_color(out, t, theme.primary);
    put_color(out, t + 4, theme.secondary);
    put_color(out, t + 8, theme.bg);
    put_color(out, t + 12, theme.accent);
    put_color(out, t + 16, theme.glow);
    put_color(out, t + 20, theme.lamp);

    // Box transform.
    let center = widget.box_center();
    let b = layout.box_offset;
    out[b] = center.x;
    out[b + 1] = center.y;
    out[b + 2] = config.box_size.x;
    out[b + 3] = config.box_size.y;
    out[b + 4] = shake.rotation_deg();
    out[b + 5] = shake.scale();
    out[b + 6] = widget.hover_scale();
    out[b + 7] = widget.hover_rotation_deg();

    // Word burst transform.
    let w = layout.burst_offset;
    out[w] = burst.rotation_deg;
    out[w + 1] = burst.scale;
    out[w + 2] = burst.shadow.x;
    out[w + 3] = burst.shadow.y;
    out[w + 4] = burst.echo.x;
    out[w + 5] = burst.echo.y;
    out[w + 6] = burst.size.vw();

    // Lamps.
    let mut lamps = [LampInstance::default(); LAMP_COUNT];
    for color in LightColor::ALL {
        let i = color.index();
        let pos = widget.lamp_center(i);
        let anim = &widget.lamps()[i];
        lamps[i] = LampInstance {
            x: pos.x,
            y: pos.y,
            radius: config.lamp_radius,
            intensity: anim.intensity(),
            scale: anim.scale(),
            _pad: [0.0; 3],
        };
    }
    let l = layout.lamp_offset;
    out[l..l + LAMP_COUNT * LAMP_FLOATS].copy_from_slice(bytemuck::cast_slice(&lamps));

    // Slices. The burst always carries exactly `slice_count` of them.
    let s = layout.slice_offset;
    for (i, slice) in burst.slices.iter().take(layout.slice_count).enumerate() {
        let inst = SliceInstance {
            top: slice.top,
            bottom: slice.bottom,
            offset_x: slice.offset_x,
            alpha: slice.alpha,
        };
        let off = s + i * SLICE_FLOATS;
        out[off..off + SLICE_FLOATS].copy_from_slice(bytemuck::cast_slice(&[inst]));
    }
}
