//! Per-color theme palettes consumed by the renderer.
//!
//! High-key comic palette: the page background swaps to a loud contrasting
//! color per light, the word picks up the light's primary, and the echo
//! layer uses the secondary.

use crate::core::cycle::LightColor;

/// An RGBA color with channels in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }
}

// Widget palette (#FF004D, #FFE600, #00FF85 are the lamp hexes).
pub const PINK: Rgba = Rgba::opaque(1.0, 0.0, 0.302);
pub const YELLOW: Rgba = Rgba::opaque(1.0, 0.902, 0.0);
pub const GREEN: Rgba = Rgba::opaque(0.0, 1.0, 0.522);
pub const BLUE: Rgba = Rgba::opaque(0.0, 0.651, 1.0);
pub const PURPLE: Rgba = Rgba::opaque(0.486, 0.122, 0.722);
pub const INK: Rgba = Rgba::opaque(0.05, 0.05, 0.05);

/// The render colors associated with one light color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorTheme {
    /// Main word fill.
    pub primary: Rgba,
    /// Echo layer fill.
    pub secondary: Rgba,
    /// Page background.
    pub bg: Rgba,
    /// Accent for frame decoration.
    pub accent: Rgba,
    /// Lamp glow halo.
    pub glow: Rgba,
    /// Lamp fill when lit.
    pub lamp: Rgba,
}

const RED_THEME: ColorTheme = ColorTheme {
    primary: PINK,
    secondary: BLUE,
    bg: BLUE,
    accent: PINK,
    glow: PINK,
    lamp: PINK,
};

const YELLOW_THEME: ColorTheme = ColorTheme {
    primary: YELLOW,
    secondary: PURPLE,
    bg: PURPLE,
    accent: YELLOW,
    glow: YELLOW,
    lamp: YELLOW,
};

const GREEN_THEME: ColorTheme = ColorTheme {
    primary: GREEN,
    secondary: INK,
    bg: PINK,
    accent: GREEN,
    glow: GREEN,
    lamp: GREEN,
};

impl ColorTheme {
    /// The theme for a light color.
    pub fn for_color(color: LightColor) -> &'static ColorTheme {
        match color {
            LightColor::Red => &RED_THEME,
            LightColor::Yellow => &YELLOW_THEME,
            LightColor::Green => &GREEN_THEME,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_color_has_a_distinct_background() {
        let red = ColorTheme::for_color(LightColor::Red);
        let yellow = ColorTheme::for_color(LightColor::Yellow);
        let green = ColorTheme::for_color(LightColor::Green);
        assert_ne!(red.bg, yellow.bg);
        assert_ne!(yellow.bg, green.bg);
        assert_ne!(green.bg, red.bg);
    }

    #[test]
    fn lamp_matches_glow() {
        for color in LightColor::ALL {
            let theme = ColorTheme::for_color(color);
            assert_eq!(theme.lamp, theme.glow);
        }
    }
}
