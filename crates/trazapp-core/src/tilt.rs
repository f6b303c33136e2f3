//! Pointer-driven 3D tilt for pricing and timeline cards.
//!
//! The pointer is tracked in card-relative UV (0..1 on both axes, origin at
//! the top-left corner). At the centre the card is flat; at the edges it
//! leans by `amount` degrees toward the pointer.

use crate::constants::{GLARE_HOVER_OPACITY, TILT_HOVER_SCALE};
use glam::Vec2;

/// UV of a card at rest: no rotation, glare centred.
pub const TILT_REST: Vec2 = Vec2::new(0.5, 0.5);

/// Pointer position relative to a card occupying `rect` (left, top, width,
/// height), clamped to the card. A zero-sized card reports [`TILT_REST`].
pub fn card_uv(client: Vec2, rect: [f32; 4]) -> Vec2 {
    let [left, top, w, h] = rect;
    if !(w > 0.0 && h > 0.0) {
        return TILT_REST;
    }
    let uv = Vec2::new((client.x - left) / w, (client.y - top) / h);
    if !uv.is_finite() {
        return TILT_REST;
    }
    uv.clamp(Vec2::ZERO, Vec2::ONE)
}

/// `(rotate_x, rotate_y)` in degrees for a pointer at `uv`.
///
/// `rotate_x` goes from `+amount` at the top edge to `-amount` at the
/// bottom; `rotate_y` from `-amount` at the left edge to `+amount` at the
/// right.
#[inline]
pub fn tilt(uv: Vec2, amount: f32) -> (f32, f32) {
    let centred = uv.clamp(Vec2::ZERO, Vec2::ONE) * 2.0 - Vec2::ONE;
    (-centred.y * amount, centred.x * amount)
}

/// Glare highlight centre in percent of the card size.
#[inline]
pub fn glare_position(uv: Vec2) -> Vec2 {
    uv.clamp(Vec2::ZERO, Vec2::ONE) * 100.0
}

/// Hover state of one tilting card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltCard {
    amount: f32,
    uv: Vec2,
    hovering: bool,
}

/// Everything the front-end writes for one card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltPose {
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub scale: f32,
    pub glare: Vec2,
    pub glare_opacity: f32,
}

impl TiltCard {
    pub fn new(amount: f32) -> Self {
        Self {
            amount,
            uv: TILT_REST,
            hovering: false,
        }
    }

    pub fn pointer_move(&mut self, uv: Vec2) {
        self.uv = uv.clamp(Vec2::ZERO, Vec2::ONE);
        self.hovering = true;
    }

    /// Pointer left the card: back to flat, glare hidden.
    pub fn leave(&mut self) {
        self.uv = TILT_REST;
        self.hovering = false;
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn pose(&self) -> TiltPose {
        let (rotate_x, rotate_y) = tilt(self.uv, self.amount);
        TiltPose {
            rotate_x,
            rotate_y,
            scale: if self.hovering { TILT_HOVER_SCALE } else { 1.0 },
            glare: glare_position(self.uv),
            glare_opacity: if self.hovering {
                GLARE_HOVER_OPACITY
            } else {
                0.0
            },
        }
    }
}
