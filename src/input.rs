use glam::Vec2;
use std::time::Duration;

/// Map a viewport (client) coordinate onto a surface whose element occupies
/// `rect` (left, top, width, height) and whose logical size is `surface`.
#[inline]
pub fn client_to_surface(client: Vec2, rect: [f32; 4], surface: Vec2) -> Vec2 {
    let [left, top, w, h] = rect;
    let local = client - Vec2::new(left, top);
    if w > 0.0 && h > 0.0 {
        Vec2::new(local.x / w * surface.x, local.y / h * surface.y)
    } else {
        local
    }
}

/// Viewport size from `window.innerWidth/innerHeight`, 0 when unavailable.
#[inline]
pub fn viewport_size(inner_width: Option<f64>, inner_height: Option<f64>) -> Vec2 {
    let w = inner_width.filter(|v| v.is_finite()).unwrap_or(0.0).max(0.0);
    let h = inner_height.filter(|v| v.is_finite()).unwrap_or(0.0).max(0.0);
    Vec2::new(w as f32, h as f32)
}

/// Parse a `data-stage` attribute value into a stage id.
#[inline]
pub fn parse_stage_id(attr: Option<&str>) -> Option<u8> {
    attr.and_then(|v| v.trim().parse::<u8>().ok())
}

/// `setTimeout` delay for the time left until a deadline.
#[inline]
pub fn timer_delay_ms(remaining: Duration) -> i32 {
    remaining.as_millis().min(i32::MAX as u128) as i32
}

#[inline]
pub fn degrees(value: f32) -> String {
    format!("{:.2}deg", value)
}

#[inline]
pub fn percent(value: f32) -> String {
    format!("{:.2}%", value)
}

/// Format a CSS scale transform.
#[inline]
pub fn scale_transform(scale: f32) -> String {
    format!("scale({:.4})", scale)
}

/// Format a vertical translation in percent.
#[inline]
pub fn translate_y_percent(percent: f32) -> String {
    format!("translateY({:.2}%)", percent)
}
