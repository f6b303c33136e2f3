//! Software rasterizer implementing [`Surface`] over an RGBA image.
//!
//! Shapes are anti-aliased by one-pixel coverage ramps and composited with
//! source-over blending. Logical coordinates are multiplied by `scale`.

use glam::Vec2;
use image::{Rgba as Pixel, RgbaImage};
use trazapp_core::{Rgba, Surface};

pub struct RasterSurface {
    image: RgbaImage,
    scale: f32,
    background: Rgba,
}

impl RasterSurface {
    /// `(w, h)` is the image size in device pixels; `scale` maps logical
    /// drawing coordinates onto it.
    pub fn new((w, h): (u32, u32), scale: f32, background: Rgba) -> Self {
        let mut surface = Self {
            image: RgbaImage::new(w, h),
            scale,
            background,
        };
        surface.clear();
        surface
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Pixel bounds covering a device-space box, clipped to the image.
    fn bounds(&self, min: Vec2, max: Vec2) -> Option<(u32, u32, u32, u32)> {
        let (w, h) = self.image.dimensions();
        let x0 = min.x.floor().max(0.0) as i64;
        let y0 = min.y.floor().max(0.0) as i64;
        let x1 = (max.x.ceil() as i64).min(w as i64 - 1);
        let y1 = (max.y.ceil() as i64).min(h as i64 - 1);
        (x0 <= x1 && y0 <= y1).then(|| (x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }

    fn blend(&mut self, x: u32, y: u32, color: Rgba, coverage: f32) {
        let a = (color.a * coverage).clamp(0.0, 1.0);
        if a <= 0.0 {
            return;
        }
        let dst = self.image.get_pixel_mut(x, y);
        let mix = |s: u8, d: u8| (s as f32 * a + d as f32 * (1.0 - a)).round() as u8;
        let out_a = a + (dst[3] as f32 / 255.0) * (1.0 - a);
        *dst = Pixel([
            mix(color.r, dst[0]),
            mix(color.g, dst[1]),
            mix(color.b, dst[2]),
            (out_a * 255.0).round() as u8,
        ]);
    }
}

#[inline]
fn coverage(edge_distance: f32) -> f32 {
    (edge_distance + 0.5).clamp(0.0, 1.0)
}

fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

impl Surface for RasterSurface {
    fn size(&self) -> (f32, f32) {
        let (w, h) = self.image.dimensions();
        (w as f32 / self.scale, h as f32 / self.scale)
    }

    fn clear(&mut self) {
        let bg = self.background;
        let a = (bg.a.clamp(0.0, 1.0) * 255.0).round() as u8;
        for px in self.image.pixels_mut() {
            *px = Pixel([bg.r, bg.g, bg.b, a]);
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        let c = center * self.scale;
        let r = radius * self.scale;
        let Some((x0, y0, x1, y1)) = self.bounds(c - Vec2::splat(r + 1.0), c + Vec2::splat(r + 1.0))
        else {
            return;
        };
        for y in y0..=y1 {
            for x in x0..=x1 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                self.blend(x, y, color, coverage(r - p.distance(c)));
            }
        }
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        let a = from * self.scale;
        let b = to * self.scale;
        let half = (width * self.scale * 0.5).max(0.5);
        let pad = Vec2::splat(half + 1.0);
        let Some((x0, y0, x1, y1)) = self.bounds(a.min(b) - pad, a.max(b) + pad) else {
            return;
        };
        for y in y0..=y1 {
            for x in x0..=x1 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                self.blend(x, y, color, coverage(half - distance_to_segment(p, a, b)));
            }
        }
    }

    fn radial_glow(&mut self, center: Vec2, radius: f32, inner: Rgba, outer: Rgba) {
        let c = center * self.scale;
        let r = (radius * self.scale).max(f32::EPSILON);
        let Some((x0, y0, x1, y1)) = self.bounds(c - Vec2::splat(r), c + Vec2::splat(r)) else {
            return;
        };
        for y in y0..=y1 {
            for x in x0..=x1 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let t = p.distance(c) / r;
                if t > 1.0 {
                    continue;
                }
                let lerp = |i: u8, o: u8| (i as f32 + (o as f32 - i as f32) * t).round() as u8;
                let color = Rgba {
                    r: lerp(inner.r, outer.r),
                    g: lerp(inner.g, outer.g),
                    b: lerp(inner.b, outer.b),
                    a: inner.a + (outer.a - inner.a) * t,
                };
                self.blend(x, y, color, 1.0);
            }
        }
    }
}
