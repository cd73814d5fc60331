/// Simulation and rendering tuning constants.
///
/// These express intended behavior (time constants, clamp limits, empirically
/// chosen force coefficients) and keep magic numbers out of the hot loops.
use crate::render::Rgb;

// Particle budget and lifecycle
pub const MAX_PARTICLES_DEFAULT: usize = 500;
pub const TRAIL_CAPACITY: usize = 15;
pub const FADE_TAIL_RATIO: f32 = 0.2; // extra fade applied in last 20% of life
pub const ALPHA_SKIP_THRESHOLD: f32 = 10.0; // particles dimmer than this are not drawn

// Boundary handling
pub const BOUNCE_RESTITUTION: f32 = 0.8;

// Energy / glow oscillation (position-keyed so particles don't pulse in lockstep)
pub const ENERGY_OSC_RATE: f32 = 3.0;
pub const ENERGY_OSC_POS_SCALE: f32 = 0.01;
pub const GLOW_OSC_RATE: f32 = 2.0;
pub const GLOW_OSC_POS_SCALE: f32 = 0.02;

// Ambient turbulence
pub const TURBULENCE_STRENGTH: f32 = 10.0;
pub const TURBULENCE_RATE_X: f32 = 3.0;
pub const TURBULENCE_RATE_Y: f32 = 2.7;
pub const TURBULENCE_POS_SCALE: f32 = 0.05;

// Motion-pattern force coefficients
pub const SPIRAL_RADIUS: f32 = 50.0;
pub const SPIRAL_VELOCITY_GAIN: f32 = 2.0;
pub const WAVE_AMPLITUDE: f32 = 20.0;
pub const WAVE_STEER_GAIN: f32 = 0.1;
pub const WAVE_PHASE_POS_SCALE: f32 = 0.01;
pub const EXPLOSION_FORCE: f32 = 150.0;
pub const EXPLOSION_PULSE_RATE: f32 = 4.0;
pub const ORBITAL_SPEED: f32 = 50.0;
pub const ORBITAL_INWARD_PULL: f32 = 10.0;
pub const MAGNETIC_STRENGTH: f32 = 30.0;
pub const MAGNETIC_FIELD_SCALE: f32 = 0.02;
pub const CHAOS_STRENGTH: f32 = 80.0;
pub const CHAOS_DAMPING: f32 = 0.95;

// Spawning
pub const SPAWN_RADIUS: f32 = 30.0;
pub const SPAWN_OFFSET_MIN: f32 = 0.3;
pub const SPEED_JITTER_MIN: f32 = 0.5;
pub const SPEED_JITTER_MAX: f32 = 1.8;
pub const LIFE_JITTER_MIN: f32 = 0.6;
pub const LIFE_JITTER_MAX: f32 = 1.4;
pub const SIZE_JITTER_MIN: f32 = 0.5;
pub const SIZE_JITTER_MAX: f32 = 2.0;
pub const COLOR_JITTER: i32 = 30;
pub const ROTATION_SPEED_MAX: f32 = 2.0;

// Shape selection weights: circle, star, diamond (remainder is heart)
pub const SHAPE_WEIGHT_CIRCLE: f32 = 0.4;
pub const SHAPE_WEIGHT_STAR: f32 = 0.3;
pub const SHAPE_WEIGHT_DIAMOND: f32 = 0.2;

// Rendering
pub const PULSE_RATE: f32 = 8.0;
pub const PULSE_DEPTH: f32 = 0.3;
pub const PULSE_POS_SCALE: f32 = 0.01;
pub const GLOW_RADIUS_FACTOR: f32 = 2.5;
pub const GLOW_LAYERS: usize = 3;
pub const TRAIL_DIM: i32 = 50;
pub const TRAIL_ALPHA_FACTOR: f32 = 0.4;
pub const TRAIL_ALPHA_MIN: f32 = 5.0;
pub const TRAIL_WIDTH: f32 = 2.0;

// Audio modulation
pub const INTENSITY_FLOOR: f32 = 0.1;
pub const INTENSITY_VOLUME_GAIN: f32 = 1.5;
pub const SPAWN_RATE_MIN: f32 = 5.0;
pub const SPAWN_RATE_MAX: f32 = 50.0;
pub const SPAWN_RATE_BEAT_BOOST: f32 = 2.0;
pub const SPAWN_RATE_DECAY: f32 = 0.95;
pub const AMBIENT_AMPLITUDE_THRESHOLD: f32 = 1000.0;

// Discrete frequency → palette classifier thresholds
pub const FREQ_HIGH_HZ: f32 = 1000.0;
pub const FREQ_MID_HZ: f32 = 500.0;
pub const PALETTE_HIGH: [Rgb; 2] = [[255, 200, 100], [255, 150, 50]];
pub const PALETTE_MID: [Rgb; 2] = [[100, 255, 100], [150, 255, 150]];
pub const PALETTE_LOW: [Rgb; 2] = [[100, 100, 255], [150, 150, 255]];

// Style application
pub const SPAWN_RATE_PER_COUNT: f32 = 0.1; // style count → particles/second
pub const SPEED_STYLE_GAIN: f32 = 10.0; // style speed → pixels/second
pub const BACKGROUND_DARKEN: u8 = 4; // first style color divided by this
