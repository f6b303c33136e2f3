use crate::surface::Rgba;

// Shared visual tuning constants used by both the web front-end and the capture tool.

// Particle density
pub const PIXELS_PER_PARTICLE: f64 = 6000.0; // one particle per this many px²
pub const MAX_PARTICLES: usize = 300;

// Pointer interaction
pub const POINTER_RADIUS: f32 = 250.0; // repulsion and glow radius (px)
pub const REPULSION_SCALE: f32 = 0.8;
pub const INTERACTION_FRICTION: f32 = 0.94; // per-frame decay of interaction velocity

// Particle sampling ranges
pub const DRIFT_SPEED_MAX: f32 = 0.25; // per axis, symmetric around 0
pub const RADIUS_MIN: f32 = 1.0;
pub const RADIUS_MAX: f32 = 3.0;
pub const WEIGHT_MIN: f32 = 1.0;
pub const WEIGHT_MAX: f32 = 21.0;

// Connections
pub const CONNECTION_DISTANCE: f32 = 140.0;
pub const CONNECTION_MAX_ALPHA: f32 = 0.25;
pub const CONNECTION_LINE_WIDTH: f32 = 0.8;

// Pointer glow
pub const GLOW_INNER_ALPHA: f32 = 0.15;
pub const GLOW_OUTER_ALPHA: f32 = 0.0;

// Emerald palette
pub const ACCENT: Rgba = Rgba::rgb(34, 197, 94); // #22C55E
pub const PARTICLE_PALETTE: [Rgba; 4] = [
    Rgba::rgb(0x22, 0xC5, 0x5E),
    Rgba::rgb(0x4A, 0xDE, 0x80),
    Rgba::rgb(0x16, 0xA3, 0x4A),
    Rgba::rgb(0x86, 0xEF, 0xAC),
];

// Timeline
pub const HIGHLIGHT_HALF_WIDTH: f32 = 0.1; // triangular falloff either side of a trigger
pub const HIGHLIGHT_SCALE_BOOST: f32 = 0.1; // card scale at full highlight is 1 + boost
pub const PARALLAX_MAX_PERCENT: f32 = 20.0;

// Navbar
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

// Card tilt (degrees at the card edges)
pub const TILT_STAGE_DEG: f32 = 5.0;
pub const TILT_PLAN_DEG: f32 = 3.0;
pub const TILT_POPULAR_PLAN_DEG: f32 = 5.0;
pub const TILT_HOVER_SCALE: f32 = 1.01;
pub const GLARE_HOVER_OPACITY: f32 = 0.15;

// Animated prices
pub const PRICE_COUNT_UP: std::time::Duration = std::time::Duration::from_millis(1500);
