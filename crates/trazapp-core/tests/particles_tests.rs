// Integration tests for the particle field simulation and its rendering calls.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use trazapp_core::constants::*;
use trazapp_core::*;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Clear,
    Circle(Vec2, f32, Rgba),
    Line(Vec2, Vec2, f32, Rgba),
    Glow(Vec2, f32, Rgba, Rgba),
}

struct Recorder {
    size: (f32, f32),
    calls: Vec<Call>,
}

impl Recorder {
    fn new(w: f32, h: f32) -> Self {
        Self {
            size: (w, h),
            calls: Vec::new(),
        }
    }
}

impl Surface for Recorder {
    fn size(&self) -> (f32, f32) {
        self.size
    }
    fn clear(&mut self) {
        self.calls.push(Call::Clear);
    }
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.calls.push(Call::Circle(center, radius, color));
    }
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.calls.push(Call::Line(from, to, width, color));
    }
    fn radial_glow(&mut self, center: Vec2, radius: f32, inner: Rgba, outer: Rgba) {
        self.calls.push(Call::Glow(center, radius, inner, outer));
    }
}

fn seeded_field(w: f32, h: f32) -> ParticleField {
    let mut rng = StdRng::seed_from_u64(7);
    let mut field = ParticleField::new();
    field.initialize(w, h, &mut rng);
    field
}

fn still_particle(x: f32, y: f32) -> Particle {
    Particle {
        position: Vec2::new(x, y),
        interaction_velocity: Vec2::ZERO,
        drift_velocity: Vec2::ZERO,
        radius: 2.0,
        color: 0,
        interaction_weight: 10.0,
    }
}

#[test]
fn particle_count_matches_density_formula() {
    assert_eq!(particle_count(1200.0, 800.0), 160);
    assert_eq!(particle_count(1920.0, 1080.0), 300); // 345 capped
    assert_eq!(particle_count(100.0, 59.0), 0);
    assert_eq!(particle_count(100.0, 60.0), 1);
    assert_eq!(particle_count(0.0, 800.0), 0);
    assert_eq!(particle_count(-10.0, 800.0), 0);
    assert_eq!(particle_count(f32::NAN, 800.0), 0);
    for (w, h) in [(320.0, 568.0), (768.0, 1024.0), (2560.0, 1440.0), (1.0, 1.0)] {
        let expected = ((w as f64 * h as f64 / 6000.0).floor() as usize).min(300);
        assert_eq!(particle_count(w, h), expected, "size {w}x{h}");
    }
}

#[test]
fn initialize_samples_within_ranges() {
    let field = seeded_field(1200.0, 800.0);
    assert_eq!(field.particles().len(), 160);
    for p in field.particles() {
        assert!(p.position.x >= 0.0 && p.position.x < 1200.0);
        assert!(p.position.y >= 0.0 && p.position.y < 800.0);
        assert!(p.drift_velocity.x.abs() <= DRIFT_SPEED_MAX);
        assert!(p.drift_velocity.y.abs() <= DRIFT_SPEED_MAX);
        assert!((RADIUS_MIN..=RADIUS_MAX).contains(&p.radius));
        assert!((WEIGHT_MIN..=WEIGHT_MAX).contains(&p.interaction_weight));
        assert!(p.color < PARTICLE_PALETTE.len());
        assert_eq!(p.interaction_velocity, Vec2::ZERO);
    }
}

#[test]
fn reinitialize_replaces_whole_set_and_keeps_pointer() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut field = ParticleField::new();
    field.initialize(1200.0, 800.0, &mut rng);
    field.pointer.move_to(10.0, 20.0);
    field.initialize(600.0, 600.0, &mut rng);
    assert_eq!(field.particles().len(), 60);
    assert_eq!(field.size(), (600.0, 600.0));
    assert!(field.particles().iter().all(|p| p.position.x < 600.0));
    assert!(field.pointer.active);
}

#[test]
fn positions_stay_on_the_torus() {
    let mut field = seeded_field(300.0, 200.0);
    field.pointer.move_to(150.0, 100.0);
    for frame in 0..500 {
        if frame % 50 == 0 {
            field.pointer.move_to((frame as f32 * 7.0) % 300.0, (frame as f32 * 3.0) % 200.0);
        }
        field.tick();
        for p in field.particles() {
            assert!(p.position.x >= 0.0 && p.position.x < 300.0, "x={}", p.position.x);
            assert!(p.position.y >= 0.0 && p.position.y < 200.0, "y={}", p.position.y);
        }
    }
}

#[test]
fn leaving_an_edge_reenters_from_the_opposite_one() {
    let mut field = ParticleField::new();
    field.initialize(100.0, 100.0, &mut StdRng::seed_from_u64(3));
    field.particles_mut().clear();
    let mut p = still_particle(99.8, 0.1);
    p.drift_velocity = Vec2::new(0.25, -0.25);
    field.particles_mut().push(p);
    field.tick();
    let pos = field.particles()[0].position;
    assert!((pos.x - 0.05).abs() < 1e-3, "x={}", pos.x);
    assert!((pos.y - 99.85).abs() < 1e-3, "y={}", pos.y);
}

#[test]
fn interaction_velocity_decays_geometrically_without_pointer() {
    let mut field = seeded_field(400.0, 400.0);
    for p in field.particles_mut() {
        p.interaction_velocity = Vec2::new(3.0, -2.0);
    }
    let drifts: Vec<Vec2> = field.particles().iter().map(|p| p.drift_velocity).collect();
    let mut expected = Vec2::new(3.0, -2.0);
    for _ in 0..30 {
        let before: Vec<f32> = field
            .particles()
            .iter()
            .map(|p| p.interaction_velocity.length())
            .collect();
        field.tick();
        expected *= INTERACTION_FRICTION;
        for (i, p) in field.particles().iter().enumerate() {
            assert!(p.interaction_velocity.length() < before[i]);
            assert!((p.interaction_velocity - expected).length() < 1e-4);
            assert_eq!(p.drift_velocity, drifts[i]);
        }
    }
}

#[test]
fn pointer_repels_nearby_particles() {
    let mut field = ParticleField::new();
    field.initialize(1000.0, 1000.0, &mut StdRng::seed_from_u64(5));
    field.particles_mut().clear();
    field.particles_mut().push(still_particle(500.0, 500.0)); // 100px right of pointer
    field.particles_mut().push(still_particle(900.0, 500.0)); // out of reach
    field.pointer.move_to(400.0, 500.0);
    field.tick();

    let near = &field.particles()[0];
    let force = (POINTER_RADIUS - 100.0) / POINTER_RADIUS;
    let push = force * 10.0 * REPULSION_SCALE;
    assert!((near.position.x - (500.0 + push)).abs() < 1e-3);
    assert!((near.position.y - 500.0).abs() < 1e-4);
    assert!((near.interaction_velocity.x - push * INTERACTION_FRICTION).abs() < 1e-3);

    let far = &field.particles()[1];
    assert_eq!(far.position, Vec2::new(900.0, 500.0));
}

#[test]
fn repulsion_impulse_edge_cases() {
    let p = Vec2::new(10.0, 10.0);
    assert_eq!(repulsion_impulse(p, p, 5.0), Vec2::ZERO);
    assert_eq!(repulsion_impulse(p, p + Vec2::new(POINTER_RADIUS, 0.0), 5.0), Vec2::ZERO);
    let imp = repulsion_impulse(p, p + Vec2::new(0.0, 50.0), 5.0);
    assert!(imp.y < 0.0 && imp.x == 0.0);
}

#[test]
fn connection_opacity_is_linear_and_bounded() {
    assert_eq!(connection_opacity(140.0), 0.0);
    assert_eq!(connection_opacity(500.0), 0.0);
    assert!((connection_opacity(0.0) - 0.25).abs() < 1e-6);
    assert!((connection_opacity(70.0) - 0.125).abs() < 1e-6);
    assert!((connection_opacity(139.999) - 0.0).abs() < 1e-5);
    let mut prev = connection_opacity(0.0);
    for d in 1..140 {
        let o = connection_opacity(d as f32);
        assert!(o < prev);
        prev = o;
    }
}

#[test]
fn render_draws_glow_particles_then_links() {
    let mut field = ParticleField::new();
    field.initialize(500.0, 500.0, &mut StdRng::seed_from_u64(9));
    field.particles_mut().clear();
    field.particles_mut().push(still_particle(100.0, 100.0));
    field.particles_mut().push(still_particle(170.0, 100.0)); // 70 from first
    field.particles_mut().push(still_particle(400.0, 400.0)); // far from both

    let mut surface = Recorder::new(500.0, 500.0);
    field.render(&mut surface);
    assert_eq!(surface.calls[0], Call::Clear);
    assert!(!surface.calls.iter().any(|c| matches!(c, Call::Glow(..))));
    let circles = surface.calls.iter().filter(|c| matches!(c, Call::Circle(..))).count();
    assert_eq!(circles, 3);
    let lines: Vec<&Call> = surface.calls.iter().filter(|c| matches!(c, Call::Line(..))).collect();
    assert_eq!(lines.len(), 1);
    if let Call::Line(_, _, width, color) = lines[0] {
        assert!((width - CONNECTION_LINE_WIDTH).abs() < 1e-6);
        assert!((color.a - 0.125).abs() < 1e-6);
    }

    field.pointer.move_to(250.0, 250.0);
    let mut surface = Recorder::new(500.0, 500.0);
    field.render(&mut surface);
    match &surface.calls[1] {
        Call::Glow(center, radius, inner, outer) => {
            assert_eq!(*center, Vec2::new(250.0, 250.0));
            assert_eq!(*radius, POINTER_RADIUS);
            assert!((inner.a - GLOW_INNER_ALPHA).abs() < 1e-6);
            assert_eq!(outer.a, 0.0);
        }
        other => panic!("expected glow, got {other:?}"),
    }
}

#[test]
fn pointer_stays_active_once_moved() {
    let mut pointer = PointerState::default();
    assert!(!pointer.active);
    pointer.move_to(1.0, 2.0);
    assert!(pointer.active);
    pointer.move_to(-5.0, 2.0);
    assert!(pointer.active);
}

#[test]
fn palette_and_css_colors() {
    assert_eq!(Rgba::from_hex("#22C55E"), Some(PARTICLE_PALETTE[0]));
    assert_eq!(Rgba::from_hex("86efac"), Some(PARTICLE_PALETTE[3]));
    assert_eq!(Rgba::from_hex("#12345"), None);
    assert_eq!(ACCENT.with_alpha(0.15).css(), "rgba(34, 197, 94, 0.15)");
}
