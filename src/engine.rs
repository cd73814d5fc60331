//! Orchestration layer: derives spawn centers from external motion/audio
//! signals, applies audio-reactive modulation, and renders background plus
//! particles.

use crate::audio::AudioMetrics;
use crate::constants::*;
use crate::pattern::MotionPattern;
use crate::render::{Rgb, Surface};
use crate::style::StyleConfig;
use crate::system::ParticleSystem;
use glam::Vec2;
use smallvec::SmallVec;

/// Read-only snapshot for external status display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineStats {
    pub particle_count: usize,
    pub motion_pattern: MotionPattern,
    pub intensity: f32,
    pub spawn_rate: f32,
}

/// Drives one [`ParticleSystem`] from externally produced motion centers and
/// audio metrics, all on the caller's single simulation thread.
pub struct VisualEffectsEngine {
    system: ParticleSystem,
    canvas_size: Vec2,
    background: Rgb,
    /// Resolution the motion producer reports centers in; when set, centers
    /// are rescaled into canvas space before use.
    source_resolution: Option<Vec2>,
}

impl VisualEffectsEngine {
    pub fn new(canvas_size: Vec2, seed: u64) -> Self {
        Self {
            system: ParticleSystem::new(canvas_size, seed),
            canvas_size,
            background: [0, 0, 0],
            source_resolution: None,
        }
    }

    pub fn system(&self) -> &ParticleSystem {
        &self.system
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.canvas_size
    }

    pub fn set_source_resolution(&mut self, resolution: Option<Vec2>) {
        self.source_resolution = resolution;
    }

    /// Advances one frame.
    ///
    /// Motion centers win as spawn locations when present. With none, a beat
    /// or a loud enough raw amplitude spawns at the canvas center so silence
    /// with no camera still shows ambient activity. Audio metrics, when
    /// present, then modulate intensity, spawn rate, and the palette.
    pub fn update(&mut self, dt: f32, motion_centers: &[Vec2], audio: Option<&AudioMetrics>) {
        let mut centers: SmallVec<[Vec2; 8]> = motion_centers
            .iter()
            .map(|&c| self.map_center(c))
            .collect();
        if centers.is_empty() {
            if let Some(a) = audio {
                if a.beat_detected || a.amplitude > AMBIENT_AMPLITUDE_THRESHOLD {
                    centers.push(self.canvas_size * 0.5);
                }
            }
        }

        self.system.update(dt, &centers);

        if let Some(a) = audio {
            self.modulate(a);
        }
    }

    /// Scales a producer-space center into canvas space and clamps it onto
    /// the canvas.
    fn map_center(&self, center: Vec2) -> Vec2 {
        let scaled = match self.source_resolution {
            Some(res) if res.x > 0.0 && res.y > 0.0 => center / res * self.canvas_size,
            _ => center,
        };
        scaled.clamp(Vec2::ZERO, self.canvas_size)
    }

    fn modulate(&mut self, audio: &AudioMetrics) {
        self.system
            .set_intensity((audio.db_norm * INTENSITY_VOLUME_GAIN).max(INTENSITY_FLOOR));

        let rate = self.system.spawn_rate();
        let rate = if audio.beat_detected {
            (rate * SPAWN_RATE_BEAT_BOOST).min(SPAWN_RATE_MAX)
        } else {
            (rate * SPAWN_RATE_DECAY).max(SPAWN_RATE_MIN)
        };
        self.system.set_spawn_rate(rate);

        // Discrete frequency-band classifier, not a smooth blend.
        let palette: &[Rgb] = if audio.frequency > FREQ_HIGH_HZ {
            &PALETTE_HIGH
        } else if audio.frequency > FREQ_MID_HZ {
            &PALETTE_MID
        } else {
            &PALETTE_LOW
        };
        self.system.set_base_colors(palette);
    }

    /// Forwards the style to the particle system and derives a background
    /// tint from the first style color.
    pub fn apply_style(&mut self, style: &StyleConfig) {
        self.system.apply_style(style);
        if let Some(colors) = &style.colors {
            if let Some(first) = colors.first() {
                self.background = [
                    (first[0].clamp(0, 255) as u8) / BACKGROUND_DARKEN,
                    (first[1].clamp(0, 255) as u8) / BACKGROUND_DARKEN,
                    (first[2].clamp(0, 255) as u8) / BACKGROUND_DARKEN,
                ];
            }
        }
    }

    /// Clears the background and draws every live particle.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.background);
        self.system.render(surface);
    }

    /// Removes all particles (external "reset" command).
    pub fn clear(&mut self) {
        self.system.clear();
    }

    pub fn stats(&self) -> EngineStats {
        EngineStats {
            particle_count: self.system.len(),
            motion_pattern: self.system.motion(),
            intensity: self.system.intensity(),
            spawn_rate: self.system.spawn_rate(),
        }
    }
}
