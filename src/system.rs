//! The particle simulation: per-frame physics, motion-pattern forcing,
//! lifecycle under a hard particle budget, and shape dispatch at render time.

use crate::constants::*;
use crate::particle::{Particle, ShapeKind, Trail};
use crate::pattern::{self, MotionPattern};
use crate::render::{self, Rgb, Surface};
use crate::style::StyleConfig;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::{FRAC_PI_2, TAU};

/// Owns and advances the particle collection.
///
/// All randomness flows through one seeded [`StdRng`], so a fixed seed makes
/// spawned populations reproducible. Nothing here blocks or performs I/O;
/// `update` and `render` are bounded per-frame computations.
pub struct ParticleSystem {
    particles: Vec<Particle>,
    rng: StdRng,
    bounds: Vec2,
    max_particles: usize,
    /// Accumulated simulation time, drives every oscillation.
    clock: f32,
    /// Seconds since the last spawn burst; starts saturated so the first
    /// update with centers spawns immediately.
    spawn_accum: f32,

    motion: MotionPattern,
    base_colors: Vec<Rgb>,
    intensity: f32,
    spawn_rate: f32,
    particle_size: f32,
    particle_speed: f32,
    particle_life: f32,
    gravity: f32,
    wind: Vec2,
}

impl ParticleSystem {
    pub fn new(bounds: Vec2, seed: u64) -> Self {
        Self::with_max_particles(bounds, MAX_PARTICLES_DEFAULT, seed)
    }

    pub fn with_max_particles(bounds: Vec2, max_particles: usize, seed: u64) -> Self {
        Self {
            particles: Vec::with_capacity(max_particles),
            rng: StdRng::seed_from_u64(seed),
            bounds,
            max_particles,
            clock: 0.0,
            spawn_accum: f32::INFINITY,
            motion: MotionPattern::Gentle,
            base_colors: vec![[255, 255, 255]],
            intensity: 0.5,
            spawn_rate: 10.0,
            particle_size: 3.0,
            particle_speed: 2.0,
            particle_life: 3.0,
            gravity: 0.0,
            wind: Vec2::ZERO,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable view of the live particles. A slice, so the collection itself
    /// (and the cap invariant) stays under system control.
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn max_particles(&self) -> usize {
        self.max_particles
    }

    pub fn motion(&self) -> MotionPattern {
        self.motion
    }

    pub fn set_motion(&mut self, motion: MotionPattern) {
        self.motion = motion;
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn set_intensity(&mut self, intensity: f32) {
        self.intensity = intensity;
    }

    pub fn spawn_rate(&self) -> f32 {
        self.spawn_rate
    }

    pub fn set_spawn_rate(&mut self, rate: f32) {
        self.spawn_rate = rate;
    }

    pub fn base_colors(&self) -> &[Rgb] {
        &self.base_colors
    }

    /// Replaces the palette; an empty slice is ignored so the palette stays
    /// non-empty.
    pub fn set_base_colors(&mut self, colors: &[Rgb]) {
        if !colors.is_empty() {
            self.base_colors = colors.to_vec();
        }
    }

    pub fn particle_size(&self) -> f32 {
        self.particle_size
    }

    pub fn particle_speed(&self) -> f32 {
        self.particle_speed
    }

    pub fn particle_life(&self) -> f32 {
        self.particle_life
    }

    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    pub fn wind(&self) -> Vec2 {
        self.wind
    }

    /// Removes all particles immediately.
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Advances every live particle, prunes the dead, then spawns at the
    /// given centers subject to the spawn-rate gate and the particle cap.
    pub fn update(&mut self, dt: f32, spawn_centers: &[Vec2]) {
        self.clock += dt;
        self.advance_particles(dt);

        self.spawn_accum += dt;
        let interval = 1.0 / self.spawn_rate.max(f32::EPSILON);
        if !spawn_centers.is_empty() && self.spawn_accum >= interval {
            self.spawn_at(spawn_centers);
            self.spawn_accum = 0.0;
        }
    }

    fn advance_particles(&mut self, dt: f32) {
        let clock = self.clock;
        let bounds = self.bounds;
        let reference_center = bounds * 0.5;
        let motion = self.motion;
        let intensity = self.intensity;
        let wind = self.wind;
        let gravity = self.gravity;
        let rng = &mut self.rng;

        self.particles.retain_mut(|p| {
            // Record the position before this frame moves it.
            p.trail.push(p.pos);

            p.life -= dt;
            if p.life <= 0.0 {
                return false;
            }
            let ratio = p.life_ratio();

            p.rotation += p.rotation_speed * dt;
            p.energy = ratio
                * (0.8 + 0.2 * (clock * ENERGY_OSC_RATE + p.pos.x * ENERGY_OSC_POS_SCALE).sin());
            p.glow =
                0.5 + 0.5 * (clock * GLOW_OSC_RATE + p.pos.x * GLOW_OSC_POS_SCALE).sin() * ratio;

            let mut alpha = 255.0 * ratio;
            if ratio < FADE_TAIL_RATIO {
                alpha *= ratio / FADE_TAIL_RATIO;
            }
            p.alpha = alpha.clamp(0.0, 255.0);

            match motion {
                MotionPattern::Spiral => {
                    let target =
                        pattern::spiral(1.0 - ratio, p.pos, SPIRAL_RADIUS * intensity);
                    p.vel = (target - p.pos) * SPIRAL_VELOCITY_GAIN;
                }
                MotionPattern::Wave => {
                    let t = clock + p.pos.x * WAVE_PHASE_POS_SCALE;
                    let target = pattern::wave(t, p.pos, WAVE_AMPLITUDE * intensity);
                    p.vel += (target - p.pos) * WAVE_STEER_GAIN;
                }
                MotionPattern::Explosion => {
                    let radial = p.pos - reference_center;
                    let distance = radial.length();
                    if distance > 0.0 {
                        let force = intensity
                            * EXPLOSION_FORCE
                            * (1.0 + 0.5 * (clock * EXPLOSION_PULSE_RATE).sin());
                        p.vel += radial / distance * force * dt;
                    }
                }
                MotionPattern::Orbital => {
                    let radial = p.pos - reference_center;
                    let direction = radial / radial.length().max(1.0);
                    p.vel += direction.perp() * intensity * ORBITAL_SPEED * dt;
                    p.vel -= direction * ORBITAL_INWARD_PULL * dt;
                }
                MotionPattern::Magnetic => {
                    let field = intensity * MAGNETIC_STRENGTH;
                    p.vel.x += (p.pos.y * MAGNETIC_FIELD_SCALE).sin() * field * dt;
                    p.vel.y += (p.pos.x * MAGNETIC_FIELD_SCALE).cos() * field * dt;
                }
                MotionPattern::Chaotic => {
                    let chaos = intensity * CHAOS_STRENGTH;
                    p.vel.x += rng.gen_range(-chaos..=chaos) * dt;
                    p.vel.y += rng.gen_range(-chaos..=chaos) * dt;
                    // Damping keeps the random walk from running away.
                    p.vel *= CHAOS_DAMPING;
                }
                MotionPattern::Gentle => {}
            }

            p.vel += wind * dt;
            p.vel.y += gravity * dt;

            let turbulence = TURBULENCE_STRENGTH * intensity;
            p.vel.x +=
                (clock * TURBULENCE_RATE_X + p.pos.x * TURBULENCE_POS_SCALE).sin() * turbulence * dt;
            p.vel.y +=
                (clock * TURBULENCE_RATE_Y + p.pos.y * TURBULENCE_POS_SCALE).cos() * turbulence * dt;

            p.pos += p.vel * dt;

            // Bounce off the canvas edges rather than wrapping.
            if p.pos.x < 0.0 {
                p.pos.x = 0.0;
                p.vel.x = p.vel.x.abs() * BOUNCE_RESTITUTION;
            } else if p.pos.x > bounds.x {
                p.pos.x = bounds.x;
                p.vel.x = -p.vel.x.abs() * BOUNCE_RESTITUTION;
            }
            if p.pos.y < 0.0 {
                p.pos.y = 0.0;
                p.vel.y = p.vel.y.abs() * BOUNCE_RESTITUTION;
            } else if p.pos.y > bounds.y {
                p.pos.y = bounds.y;
                p.vel.y = -p.vel.y.abs() * BOUNCE_RESTITUTION;
            }

            true
        });
    }

    fn spawn_at(&mut self, centers: &[Vec2]) {
        let per_center = ((self.spawn_rate * self.intensity).round() as usize).max(1);
        'centers: for &center in centers {
            for _ in 0..per_center {
                if self.particles.len() >= self.max_particles {
                    break 'centers;
                }
                let particle = self.make_particle(center);
                self.particles.push(particle);
            }
        }
    }

    fn make_particle(&mut self, center: Vec2) -> Particle {
        let spawn_radius = SPAWN_RADIUS * self.intensity;
        let spawn_angle = self.rng.gen_range(0.0..TAU);
        let offset = Vec2::new(
            spawn_radius * spawn_angle.cos() * self.rng.gen_range(SPAWN_OFFSET_MIN..=1.0),
            spawn_radius * spawn_angle.sin() * self.rng.gen_range(SPAWN_OFFSET_MIN..=1.0),
        );

        let speed = self.particle_speed * self.rng.gen_range(SPEED_JITTER_MIN..=SPEED_JITTER_MAX);
        // Circular patterns launch tangentially so particles start circulating.
        let direction = match self.motion {
            MotionPattern::Spiral | MotionPattern::Orbital => spawn_angle + FRAC_PI_2,
            _ => self.rng.gen_range(0.0..TAU),
        };
        let vel = Vec2::from_angle(direction) * speed;

        let base = *self
            .base_colors
            .choose(&mut self.rng)
            .unwrap_or(&[255, 255, 255]);
        let mut color = [0u8; 3];
        for (out, &ch) in color.iter_mut().zip(base.iter()) {
            let jitter = self.rng.gen_range(-COLOR_JITTER..=COLOR_JITTER);
            *out = (ch as i32 + jitter).clamp(0, 255) as u8;
        }

        let roll: f32 = self.rng.gen();
        let shape = if roll < SHAPE_WEIGHT_CIRCLE {
            ShapeKind::Circle
        } else if roll < SHAPE_WEIGHT_CIRCLE + SHAPE_WEIGHT_STAR {
            ShapeKind::Star
        } else if roll < SHAPE_WEIGHT_CIRCLE + SHAPE_WEIGHT_STAR + SHAPE_WEIGHT_DIAMOND {
            ShapeKind::Diamond
        } else {
            ShapeKind::Heart
        };

        Particle {
            pos: center + offset,
            vel,
            life: self.particle_life * self.rng.gen_range(LIFE_JITTER_MIN..=LIFE_JITTER_MAX),
            max_life: self.particle_life,
            color,
            size: self.particle_size * self.rng.gen_range(SIZE_JITTER_MIN..=SIZE_JITTER_MAX),
            alpha: 255.0,
            shape,
            rotation: self.rng.gen_range(0.0..TAU),
            rotation_speed: self.rng.gen_range(-ROTATION_SPEED_MAX..=ROTATION_SPEED_MAX),
            glow: self.rng.gen_range(0.5..=1.5),
            energy: self.rng.gen_range(0.8..=1.2),
            pulsate: self.rng.gen_bool(0.5),
            trail: Trail::new(),
        }
    }

    /// Applies a style, touching only the fields the producer provided.
    pub fn apply_style(&mut self, style: &StyleConfig) {
        if let Some(colors) = &style.colors {
            let palette: Vec<Rgb> = colors
                .iter()
                .map(|c| {
                    [
                        c[0].clamp(0, 255) as u8,
                        c[1].clamp(0, 255) as u8,
                        c[2].clamp(0, 255) as u8,
                    ]
                })
                .collect();
            self.set_base_colors(&palette);
        }
        if let Some(name) = &style.motion {
            self.motion = match MotionPattern::from_name(name) {
                Some(pattern) => pattern,
                None => {
                    log::warn!("unknown motion pattern {name:?}, falling back to gentle");
                    MotionPattern::Gentle
                }
            };
        }
        if let Some(intensity) = style.intensity {
            self.intensity = intensity;
        }
        if let Some(particles) = &style.particles {
            if let Some(count) = particles.count {
                self.spawn_rate = count * SPAWN_RATE_PER_COUNT;
            }
            if let Some(size) = particles.size {
                self.particle_size = size;
            }
            if let Some(speed) = particles.speed {
                self.particle_speed = speed * SPEED_STYLE_GAIN;
            }
            if let Some(life) = particles.life {
                self.particle_life = life;
            }
        }
        if let Some(env) = &style.environment {
            if let Some(gravity) = env.gravity {
                self.gravity = gravity;
            }
            if let Some([wx, wy]) = env.wind {
                self.wind = Vec2::new(wx, wy);
            }
        }
        log::debug!(
            "style applied: motion={} intensity={:.2} spawn_rate={:.1}",
            self.motion.as_str(),
            self.intensity,
            self.spawn_rate
        );
    }

    /// Draws every live particle: fading trail first, then the shape body.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        for p in &self.particles {
            if p.life <= 0.0 {
                continue;
            }
            let ratio = p.life_ratio();

            let mut size = p.size;
            if p.pulsate {
                size *= 1.0 + PULSE_DEPTH * (self.clock * PULSE_RATE + p.pos.x * PULSE_POS_SCALE).sin();
            }
            let final_size = size * (0.5 + 0.5 * p.energy);

            let alpha = (p.alpha * ratio * p.glow).clamp(0.0, 255.0);
            if alpha < ALPHA_SKIP_THRESHOLD {
                continue;
            }

            render::draw_trail(surface, &p.trail, p.color, alpha);

            match p.shape {
                ShapeKind::Circle => {
                    render::draw_circle(surface, p.pos, final_size, p.color, alpha, p.glow)
                }
                ShapeKind::Star => {
                    render::draw_star(surface, p.pos, final_size, p.rotation, p.color, alpha)
                }
                ShapeKind::Diamond => {
                    render::draw_diamond(surface, p.pos, final_size, p.color, alpha)
                }
                ShapeKind::Heart => {
                    render::draw_heart(surface, p.pos, final_size, p.color, alpha)
                }
            }
        }
    }
}
