//! Paint command set for slide scenes.
//!
//! Commands are expressed in logical slide coordinates (1080x1350). The
//! rasterizer applies the surface scale transform when turning them into
//! device pixels.

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with alpha scaled by `opacity` (0.0..=1.0)
    pub fn with_opacity(self, opacity: f32) -> Self {
        let a = (self.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }
}

// Brand palette of the built-in deck
pub const BRAND_GREEN: Color = Color::rgb(0x1B, 0x4D, 0x3E);
pub const BRAND_GREEN_LIGHT: Color = Color::rgb(0x4A, 0x7A, 0x6A);
pub const BRAND_PAPER: Color = Color::rgb(0xF4, 0xF1, 0xEA);
pub const BRAND_BLACK: Color = Color::rgb(0x11, 0x11, 0x11);
pub const ALERT_RED: Color = Color::rgb(0xEF, 0x44, 0x44);

/// Horizontal anchoring for text commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// One drawing operation in a slide scene
#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    FillRect {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: Color,
    },
    StrokeRect {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        thickness: u32,
        color: Color,
    },
    FillCircle {
        cx: i32,
        cy: i32,
        radius: u32,
        color: Color,
    },
    StrokeCircle {
        cx: i32,
        cy: i32,
        radius: u32,
        thickness: u32,
        color: Color,
    },
    Text {
        /// Anchor point; interpreted per `align`
        x: i32,
        /// Top of the glyph box
        y: i32,
        text: String,
        /// Glyph height in logical pixels
        size: u32,
        color: Color,
        align: TextAlign,
        /// Extra spacing between glyphs in logical pixels
        letter_spacing: i32,
    },
}
