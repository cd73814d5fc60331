//! Externally produced style configuration.
//!
//! A style arrives from a producer the core does not trust (an AI text-to-
//! style call or a keyword fallback). Every field is optional: applying a
//! style touches only the fields that were actually provided, and numeric
//! fields are range-clamped before they ever reach the simulation.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Particle parameter overrides inside a style payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleStyle {
    pub count: Option<f32>,
    pub size: Option<f32>,
    pub speed: Option<f32>,
    pub life: Option<f32>,
}

/// Environmental force overrides inside a style payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentStyle {
    pub gravity: Option<f32>,
    pub wind: Option<[f32; 2]>,
}

/// A structured visual style as emitted by the text-to-style producer.
///
/// Channel values are accepted as wider integers and clamped on application,
/// since generated payloads routinely overshoot the 0–255 range.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub colors: Option<Vec<[i32; 3]>>,
    pub motion: Option<String>,
    pub intensity: Option<f32>,
    /// Informational only; the core does not schedule style expiry.
    pub duration: Option<f32>,
    pub particles: Option<ParticleStyle>,
    pub environment: Option<EnvironmentStyle>,
}

pub const MAX_STYLE_COLORS: usize = 6;

impl StyleConfig {
    /// Parses a producer payload and clamps every numeric field into its
    /// contract range. Unknown JSON keys are ignored.
    pub fn from_json(payload: &str) -> Result<Self> {
        let raw: StyleConfig = serde_json::from_str(payload)?;
        Ok(raw.sanitized())
    }

    /// Returns a copy with every present field clamped into range. Missing
    /// fields stay missing so application leaves current values untouched.
    pub fn sanitized(&self) -> Self {
        let mut out = self.clone();
        if let Some(colors) = &mut out.colors {
            colors.truncate(MAX_STYLE_COLORS);
            for c in colors.iter_mut() {
                for ch in c.iter_mut() {
                    *ch = (*ch).clamp(0, 255);
                }
            }
            if colors.is_empty() {
                out.colors = None;
            }
        }
        if let Some(i) = &mut out.intensity {
            *i = i.clamp(0.0, 1.0);
        }
        if let Some(d) = &mut out.duration {
            *d = d.clamp(1.0, 30.0);
        }
        if let Some(p) = &mut out.particles {
            if let Some(count) = &mut p.count {
                *count = count.clamp(10.0, 500.0);
            }
            if let Some(size) = &mut p.size {
                *size = size.clamp(1.0, 10.0);
            }
            if let Some(speed) = &mut p.speed {
                *speed = speed.clamp(0.1, 10.0);
            }
            if let Some(life) = &mut p.life {
                *life = life.clamp(0.5, 10.0);
            }
        }
        if let Some(env) = &mut out.environment {
            if let Some(g) = &mut env.gravity {
                *g = g.clamp(-5.0, 5.0);
            }
        }
        out
    }
}
