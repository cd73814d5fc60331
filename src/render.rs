//! Drawing surface abstraction and per-shape tessellation.
//!
//! The core never touches a windowing system; everything it draws goes
//! through [`Surface`], which a frontend backs with whatever 2D canvas it
//! owns. Shape routines below turn one particle into a handful of primitive
//! calls.

use crate::constants::*;
use crate::particle::Trail;
use glam::Vec2;

/// 8-bit RGB triple.
pub type Rgb = [u8; 3];

/// How a primitive combines with what is already on the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Blend {
    /// Standard source-over alpha compositing.
    #[default]
    Alpha,
    /// Additive blending, used for glow halos.
    Additive,
}

/// Minimal 2D drawing target.
///
/// Implementations are expected to honor `alpha` (0 transparent, 255 opaque)
/// and the requested blend mode; the core issues no other draw calls.
pub trait Surface {
    fn clear(&mut self, color: Rgb);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb, alpha: u8, blend: Blend);
    fn fill_polygon(&mut self, points: &[Vec2], color: Rgb, alpha: u8, blend: Blend);
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgb, alpha: u8, blend: Blend);
}

fn dim(color: Rgb, amount: i32) -> Rgb {
    [
        (color[0] as i32 - amount).max(0) as u8,
        (color[1] as i32 - amount).max(0) as u8,
        (color[2] as i32 - amount).max(0) as u8,
    ]
}

fn to_alpha(value: f32) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

/// Fading polyline through the particle's past positions, dimmed relative to
/// the body color and brightening toward the newest point.
pub fn draw_trail<S: Surface + ?Sized>(surface: &mut S, trail: &Trail, color: Rgb, alpha: f32) {
    if trail.len() < 2 {
        return;
    }
    let trail_color = dim(color, TRAIL_DIM);
    let n = trail.len() as f32;
    let mut prev: Option<Vec2> = None;
    for (i, point) in trail.iter().enumerate() {
        if let Some(from) = prev {
            let seg_alpha = alpha * ((i as f32 + 1.0) / n) * TRAIL_ALPHA_FACTOR;
            if seg_alpha > TRAIL_ALPHA_MIN {
                surface.line(
                    from,
                    point,
                    TRAIL_WIDTH,
                    trail_color,
                    to_alpha(seg_alpha),
                    Blend::Alpha,
                );
            }
        }
        prev = Some(point);
    }
}

/// Solid core circle under a multi-layer additive halo.
pub fn draw_circle<S: Surface + ?Sized>(
    surface: &mut S,
    pos: Vec2,
    size: f32,
    color: Rgb,
    alpha: f32,
    glow: f32,
) {
    let glow_size = size * GLOW_RADIUS_FACTOR * glow;
    if glow_size > 0.0 {
        for i in 0..GLOW_LAYERS {
            let layer = i as f32;
            let halo_alpha = (alpha * (0.3 - layer * 0.1) * glow).max(1.0);
            let radius = glow_size * (1.0 - layer * 0.3);
            if radius > 0.0 {
                surface.fill_circle(pos, radius, color, to_alpha(halo_alpha), Blend::Additive);
            }
        }
    }
    if size > 0.0 {
        surface.fill_circle(pos, size.max(1.0), color, to_alpha(alpha), Blend::Alpha);
    }
}

/// 10-vertex star polygon, alternating outer/inner radius, rotated.
pub fn draw_star<S: Surface + ?Sized>(
    surface: &mut S,
    pos: Vec2,
    size: f32,
    rotation: f32,
    color: Rgb,
    alpha: f32,
) {
    let mut points = [Vec2::ZERO; 10];
    for (i, p) in points.iter_mut().enumerate() {
        let angle = i as f32 * std::f32::consts::PI / 5.0 + rotation;
        let radius = if i % 2 == 0 { size } else { size * 0.5 };
        *p = pos + Vec2::from_angle(angle) * radius;
    }
    surface.fill_polygon(&points, color, to_alpha(alpha), Blend::Alpha);
}

/// Diamond from four cardinal vertices.
pub fn draw_diamond<S: Surface + ?Sized>(
    surface: &mut S,
    pos: Vec2,
    size: f32,
    color: Rgb,
    alpha: f32,
) {
    let points = [
        pos + Vec2::new(0.0, -size),
        pos + Vec2::new(size, 0.0),
        pos + Vec2::new(0.0, size),
        pos + Vec2::new(-size, 0.0),
    ];
    surface.fill_polygon(&points, color, to_alpha(alpha), Blend::Alpha);
}

/// Approximate heart silhouette: two lobes plus a triangle tip.
pub fn draw_heart<S: Surface + ?Sized>(
    surface: &mut S,
    pos: Vec2,
    size: f32,
    color: Rgb,
    alpha: f32,
) {
    let a = to_alpha(alpha);
    let lobe_radius = size * 0.6;
    surface.fill_circle(
        pos + Vec2::new(-0.7, -0.7) * size,
        lobe_radius,
        color,
        a,
        Blend::Alpha,
    );
    surface.fill_circle(
        pos + Vec2::new(0.7, -0.7) * size,
        lobe_radius,
        color,
        a,
        Blend::Alpha,
    );
    let tip = [
        pos + Vec2::new(-1.3, -0.3) * size,
        pos + Vec2::new(1.3, -0.3) * size,
        pos + Vec2::new(0.0, 1.1) * size,
    ];
    surface.fill_polygon(&tip, color, a, Blend::Alpha);
}
