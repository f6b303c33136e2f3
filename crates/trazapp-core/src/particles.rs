//! Ambient particle field with pointer repulsion and proximity links.
//!
//! The field is advanced once per display refresh by [`ParticleField::tick`]
//! and painted by [`ParticleField::render`] onto any [`Surface`]. Positions
//! live on a torus: leaving one edge re-enters from the opposite one.

use crate::constants::*;
use crate::surface::Surface;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    /// Velocity induced by pointer repulsion; decays every frame.
    pub interaction_velocity: Vec2,
    /// Constant ambient motion; never decays.
    pub drift_velocity: Vec2,
    pub radius: f32,
    /// Index into [`PARTICLE_PALETTE`].
    pub color: usize,
    pub interaction_weight: f32,
}

/// Last known pointer/touch position in surface pixels.
///
/// `active` latches on the first move and is never cleared.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub active: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            x: -1000.0,
            y: -1000.0,
            active: false,
        }
    }
}

impl PointerState {
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
        self.active = true;
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Number of particles for a surface of the given size:
/// `min(floor(width * height / 6000), 300)`.
pub fn particle_count(width: f32, height: f32) -> usize {
    let area = width as f64 * height as f64;
    if !area.is_finite() || width <= 0.0 || height <= 0.0 {
        return 0;
    }
    ((area / PIXELS_PER_PARTICLE).floor() as usize).min(MAX_PARTICLES)
}

/// Link opacity for two particles `distance` apart; 0 at or beyond
/// [`CONNECTION_DISTANCE`], rising linearly to [`CONNECTION_MAX_ALPHA`] at 0.
#[inline]
pub fn connection_opacity(distance: f32) -> f32 {
    if distance.is_nan() || distance >= CONNECTION_DISTANCE {
        return 0.0;
    }
    (1.0 - distance.max(0.0) / CONNECTION_DISTANCE) * CONNECTION_MAX_ALPHA
}

/// Repulsion impulse applied to a particle at `position` by a pointer at
/// `pointer`. Zero outside [`POINTER_RADIUS`] and when the two coincide.
#[inline]
pub fn repulsion_impulse(position: Vec2, pointer: Vec2, weight: f32) -> Vec2 {
    let delta = pointer - position;
    let distance = delta.length();
    if distance >= POINTER_RADIUS || distance <= f32::EPSILON {
        return Vec2::ZERO;
    }
    let force = (POINTER_RADIUS - distance) / POINTER_RADIUS;
    let push = force * weight * REPULSION_SCALE;
    -(delta / distance) * push
}

#[inline]
fn wrap(value: f32, extent: f32) -> f32 {
    if extent <= 0.0 {
        return 0.0;
    }
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    pub pointer: PointerState,
}

impl ParticleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard every particle and sample a fresh batch sized for
    /// `width` x `height`. The pointer state is kept.
    pub fn initialize<R: Rng + ?Sized>(&mut self, width: f32, height: f32, rng: &mut R) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        let count = particle_count(width, height);
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(Particle {
                position: Vec2::new(
                    rng.gen_range(0.0..self.width),
                    rng.gen_range(0.0..self.height),
                ),
                interaction_velocity: Vec2::ZERO,
                drift_velocity: Vec2::new(
                    rng.gen_range(-DRIFT_SPEED_MAX..=DRIFT_SPEED_MAX),
                    rng.gen_range(-DRIFT_SPEED_MAX..=DRIFT_SPEED_MAX),
                ),
                radius: rng.gen_range(RADIUS_MIN..=RADIUS_MAX),
                color: rng.gen_range(0..PARTICLE_PALETTE.len()),
                interaction_weight: rng.gen_range(WEIGHT_MIN..=WEIGHT_MAX),
            });
        }
        log::debug!(
            "[particles] initialized {} particles for {}x{}",
            count,
            self.width,
            self.height
        );
    }

    /// Advance every particle by one frame.
    pub fn tick(&mut self) {
        let pointer = self.pointer.active.then(|| self.pointer.position());
        for p in &mut self.particles {
            if let Some(pointer) = pointer {
                p.interaction_velocity +=
                    repulsion_impulse(p.position, pointer, p.interaction_weight);
            }
            p.position += p.drift_velocity + p.interaction_velocity;
            p.interaction_velocity *= INTERACTION_FRICTION;
            p.position.x = wrap(p.position.x, self.width);
            p.position.y = wrap(p.position.y, self.height);
        }
    }

    /// Paint the pointer glow, the particles and their proximity links.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear();

        if self.pointer.active {
            surface.radial_glow(
                self.pointer.position(),
                POINTER_RADIUS,
                ACCENT.with_alpha(GLOW_INNER_ALPHA),
                ACCENT.with_alpha(GLOW_OUTER_ALPHA),
            );
        }

        for p in &self.particles {
            surface.fill_circle(p.position, p.radius, PARTICLE_PALETTE[p.color]);
        }

        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let alpha = connection_opacity(a.position.distance(b.position));
                if alpha > 0.0 {
                    surface.stroke_line(
                        a.position,
                        b.position,
                        CONNECTION_LINE_WIDTH,
                        ACCENT.with_alpha(alpha),
                    );
                }
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable access for callers that place particles explicitly.
    pub fn particles_mut(&mut self) -> &mut Vec<Particle> {
        &mut self.particles
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}
