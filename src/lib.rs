//! Audio-reactive generative particle engine core.
//!
//! The crate owns the particle simulation and its audio/style modulation
//! logic only. Capture, analysis, vision, text-to-style mapping, and window
//! plumbing live in external collaborators that push plain data records
//! ([`AudioMetrics`], motion centers, [`StyleConfig`]) into
//! [`VisualEffectsEngine`] once per frame and hand it a [`Surface`] to draw
//! on.

pub mod audio;
pub mod constants;
pub mod engine;
pub mod error;
pub mod particle;
pub mod pattern;
pub mod render;
pub mod style;
pub mod system;

pub use audio::AudioMetrics;
pub use engine::{EngineStats, VisualEffectsEngine};
pub use error::{Result, StyleError};
pub use particle::{Particle, ShapeKind, Trail};
pub use pattern::MotionPattern;
pub use render::{Blend, Rgb, Surface};
pub use style::{EnvironmentStyle, ParticleStyle, StyleConfig};
pub use system::ParticleSystem;
