//! Minimal 2D drawing abstraction shared by the browser canvas and the
//! off-screen rasterizer used by the capture tool.
//!
//! Coordinates are logical pixels with the origin at the top-left corner.

use glam::Vec2;

/// 8-bit RGB colour with a floating point alpha in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS `rgba()` notation, as accepted by `CanvasRenderingContext2D` styles.
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }

    /// Parse `#RRGGBB` (leading `#` optional). Alpha is set to 1.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Immediate-mode drawing target.
pub trait Surface {
    /// Logical size (width, height) in pixels.
    fn size(&self) -> (f32, f32);
    fn clear(&mut self);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
    /// Disc of `radius` filled with a radial gradient from `inner` at the
    /// center to `outer` at the rim.
    fn radial_glow(&mut self, center: Vec2, radius: f32, inner: Rgba, outer: Rgba);
}
