//! Named motion patterns and their pure positional functions.
//!
//! Each function maps a progress value `t` (nominally 0→1 over a particle's
//! lifetime, or accumulated clock time for ambient wander), a center point and
//! a scale parameter to a target point. `explosion` is the one impure pattern:
//! it draws a random direction, so it takes the random source explicitly.

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Closed set of velocity-bias families applied per frame by the system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MotionPattern {
    Spiral,
    Wave,
    Explosion,
    #[default]
    Gentle,
    Chaotic,
    Orbital,
    Magnetic,
}

impl MotionPattern {
    /// Parses a pattern name as produced by the style layer. Unknown names
    /// return `None`; the caller decides the fallback.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "spiral" => Some(Self::Spiral),
            "wave" => Some(Self::Wave),
            "explosion" => Some(Self::Explosion),
            "gentle" => Some(Self::Gentle),
            "chaotic" => Some(Self::Chaotic),
            "orbital" => Some(Self::Orbital),
            "magnetic" => Some(Self::Magnetic),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spiral => "spiral",
            Self::Wave => "wave",
            Self::Explosion => "explosion",
            Self::Gentle => "gentle",
            Self::Chaotic => "chaotic",
            Self::Orbital => "orbital",
            Self::Magnetic => "magnetic",
        }
    }
}

/// Inward spiral: angular position advances with `t` while the radius shrinks
/// linearly to zero as `t` → 1.
pub fn spiral(t: f32, center: Vec2, radius: f32) -> Vec2 {
    let angle = t * 2.0;
    center + Vec2::from_angle(angle) * radius * (1.0 - t)
}

/// Lissajous-like wander: x oscillates at twice the rate of y, y at half the
/// amplitude.
pub fn wave(t: f32, center: Vec2, amplitude: f32) -> Vec2 {
    Vec2::new(
        center.x + amplitude * (t * 4.0).sin(),
        center.y + amplitude * (t * 2.0).cos() * 0.5,
    )
}

/// Radial burst: a uniformly random direction, distance growing with t².
pub fn explosion<R: Rng + ?Sized>(t: f32, center: Vec2, speed: f32, rng: &mut R) -> Vec2 {
    let angle = rng.gen_range(0.0..TAU);
    center + Vec2::from_angle(angle) * speed * t * t
}

/// Low-amplitude drift on independent rates per axis.
pub fn gentle(t: f32, center: Vec2, amplitude: f32) -> Vec2 {
    Vec2::new(
        center.x + amplitude * t.sin() * 0.3,
        center.y + amplitude * (t * 0.7).cos() * 0.2,
    )
}

/// Sums of sinusoids at incommensurate frequencies; looks random without
/// being random.
pub fn chaotic(t: f32, center: Vec2, intensity: f32) -> Vec2 {
    Vec2::new(
        center.x + intensity * ((t * 3.0).sin() + (t * 7.0).cos() * 0.5),
        center.y + intensity * ((t * 5.0).cos() + (t * 11.0).sin() * 0.3),
    )
}
