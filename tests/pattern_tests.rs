// Tests for the motion pattern library: pure math, bounded outputs.

use aurora_core::pattern::{self, MotionPattern};
use glam::Vec2;
use rand::prelude::*;

const CENTER: Vec2 = Vec2::new(100.0, 200.0);

#[test]
fn pattern_names_round_trip() {
    for name in [
        "spiral", "wave", "explosion", "gentle", "chaotic", "orbital", "magnetic",
    ] {
        let pattern = MotionPattern::from_name(name).expect("known name should parse");
        assert_eq!(pattern.as_str(), name);
    }
}

#[test]
fn pattern_names_parse_case_insensitively() {
    assert_eq!(
        MotionPattern::from_name("  Spiral "),
        Some(MotionPattern::Spiral)
    );
    assert_eq!(
        MotionPattern::from_name("EXPLOSION"),
        Some(MotionPattern::Explosion)
    );
}

#[test]
fn unknown_pattern_name_is_rejected() {
    assert_eq!(MotionPattern::from_name("vortex"), None);
    assert_eq!(MotionPattern::from_name(""), None);
}

#[test]
fn spiral_collapses_to_center_at_end_of_life() {
    let end = pattern::spiral(1.0, CENTER, 50.0);
    assert!((end - CENTER).length() < 1e-4);
}

#[test]
fn spiral_radius_shrinks_with_progress() {
    let mut prev = (pattern::spiral(0.0, CENTER, 50.0) - CENTER).length();
    for step in 1..=10 {
        let t = step as f32 / 10.0;
        let dist = (pattern::spiral(t, CENTER, 50.0) - CENTER).length();
        assert!(
            dist <= prev + 1e-4,
            "spiral radius grew at t={t}: {prev} -> {dist}"
        );
        prev = dist;
    }
}

#[test]
fn wave_stays_within_amplitude_bounds() {
    let amplitude = 20.0;
    for step in 0..200 {
        let t = step as f32 * 0.05;
        let p = pattern::wave(t, CENTER, amplitude);
        assert!((p.x - CENTER.x).abs() <= amplitude + 1e-4);
        assert!((p.y - CENTER.y).abs() <= amplitude * 0.5 + 1e-4);
    }
}

#[test]
fn gentle_drift_is_low_amplitude() {
    let amplitude = 40.0;
    for step in 0..200 {
        let t = step as f32 * 0.07;
        let p = pattern::gentle(t, CENTER, amplitude);
        assert!((p.x - CENTER.x).abs() <= amplitude * 0.3 + 1e-4);
        assert!((p.y - CENTER.y).abs() <= amplitude * 0.2 + 1e-4);
    }
}

#[test]
fn chaotic_is_bounded_and_deterministic() {
    let intensity = 10.0;
    for step in 0..200 {
        let t = step as f32 * 0.03;
        let a = pattern::chaotic(t, CENTER, intensity);
        let b = pattern::chaotic(t, CENTER, intensity);
        assert_eq!(a, b, "chaotic must be a pure function of t");
        assert!((a.x - CENTER.x).abs() <= intensity * 1.5 + 1e-4);
        assert!((a.y - CENTER.y).abs() <= intensity * 1.3 + 1e-4);
    }
}

#[test]
fn explosion_distance_grows_quadratically() {
    let mut rng = StdRng::seed_from_u64(7);
    let speed = 120.0;
    for step in 0..20 {
        let t = step as f32 * 0.05;
        let p = pattern::explosion(t, CENTER, speed, &mut rng);
        let dist = (p - CENTER).length();
        assert!(
            (dist - speed * t * t).abs() < 1e-2,
            "explosion distance off at t={t}: {dist}"
        );
    }
}

#[test]
fn explosion_starts_at_center() {
    let mut rng = StdRng::seed_from_u64(1);
    let p = pattern::explosion(0.0, CENTER, 500.0, &mut rng);
    assert!((p - CENTER).length() < 1e-4);
}
