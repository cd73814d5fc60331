//! The particle entity and its bounded position trail.

use crate::constants::TRAIL_CAPACITY;
use crate::render::Rgb;
use glam::Vec2;

/// Closed set of renderable particle silhouettes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShapeKind {
    #[default]
    Circle,
    Star,
    Diamond,
    Heart,
}

/// Fixed-capacity ring buffer of past positions, oldest evicted first.
///
/// Capacity is [`TRAIL_CAPACITY`]; push is O(1) with no allocation after
/// construction, which keeps the per-frame trail bookkeeping flat even with
/// hundreds of live particles.
#[derive(Clone, Debug)]
pub struct Trail {
    points: [Vec2; TRAIL_CAPACITY],
    head: usize,
    len: usize,
}

impl Default for Trail {
    fn default() -> Self {
        Self {
            points: [Vec2::ZERO; TRAIL_CAPACITY],
            head: 0,
            len: 0,
        }
    }
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends a point, evicting the oldest when full.
    pub fn push(&mut self, point: Vec2) {
        let idx = (self.head + self.len) % TRAIL_CAPACITY;
        self.points[idx] = point;
        if self.len < TRAIL_CAPACITY {
            self.len += 1;
        } else {
            self.head = (self.head + 1) % TRAIL_CAPACITY;
        }
    }

    /// Iterates stored points oldest → newest.
    pub fn iter(&self) -> impl Iterator<Item = Vec2> + '_ {
        (0..self.len).map(move |i| self.points[(self.head + i) % TRAIL_CAPACITY])
    }
}

/// Mutable state of one simulated visual entity.
///
/// Particles are created only by the system's spawn routine, mutated only by
/// its update routine, and dropped the same frame their life reaches zero.
#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining seconds; monotonically non-increasing after spawn.
    pub life: f32,
    pub max_life: f32,
    pub color: Rgb,
    /// Base radius / half-extent before per-frame multipliers.
    pub size: f32,
    pub alpha: f32,
    pub shape: ShapeKind,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub glow: f32,
    pub energy: f32,
    pub pulsate: bool,
    pub trail: Trail,
}

impl Particle {
    /// Life ÷ MaxLife, the primary driver of fade/shrink decay. May briefly
    /// exceed 1 right after spawn because initial life is jittered upward.
    pub fn life_ratio(&self) -> f32 {
        self.life / self.max_life
    }
}
