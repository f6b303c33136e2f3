use glam::Vec2;
use std::f64::consts::TAU;
use trazapp_core::{Rgba, SiteError, Surface};
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Surface`] backed by a `CanvasRenderingContext2D`.
pub struct Canvas2dSurface {
    ctx: web::CanvasRenderingContext2d,
    width: f32,
    height: f32,
}

impl Canvas2dSurface {
    pub fn from_canvas(canvas: &web::HtmlCanvasElement) -> Result<Self, SiteError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| SiteError::SurfaceUnavailable(format!("{:?}", e)))?
            .ok_or_else(|| SiteError::SurfaceUnavailable("no 2d context".into()))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| SiteError::SurfaceUnavailable(format!("{:?}", e)))?;
        Ok(Self {
            ctx,
            width: canvas.width() as f32,
            height: canvas.height() as f32,
        })
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    fn disc(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        let (x, y, r) = (center.x as f64, center.y as f64, radius as f64);
        let _ = self.ctx.arc(x, y, r, 0.0, TAU);
    }
}

impl Surface for Canvas2dSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        let (w, h) = (self.width as f64, self.height as f64);
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.disc(center, radius);
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(width as f64);
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn radial_glow(&mut self, center: Vec2, radius: f32, inner: Rgba, outer: Rgba) {
        let (x, y) = (center.x as f64, center.y as f64);
        let r = radius as f64;
        let Ok(gradient) = self.ctx.create_radial_gradient(x, y, 0.0, x, y, r) else {
            return;
        };
        let _ = gradient.add_color_stop(0.0, &inner.css());
        let _ = gradient.add_color_stop(1.0, &outer.css());
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.disc(center, radius);
        self.ctx.fill();
    }
}
