// Integration tests for the effects engine: spawn-center derivation, audio
// modulation, style forwarding, and render orchestration.

use aurora_core::audio::AudioMetrics;
use aurora_core::constants::{PALETTE_HIGH, PALETTE_LOW, PALETTE_MID, SPAWN_RATE_MAX, SPAWN_RATE_MIN};
use aurora_core::engine::VisualEffectsEngine;
use aurora_core::pattern::MotionPattern;
use aurora_core::render::{Blend, Rgb, Surface};
use aurora_core::style::StyleConfig;
use glam::Vec2;

const CANVAS: Vec2 = Vec2::new(800.0, 600.0);
const DT: f32 = 1.0 / 60.0;

fn make_engine(seed: u64) -> VisualEffectsEngine {
    VisualEffectsEngine::new(CANVAS, seed)
}

fn beat() -> AudioMetrics {
    AudioMetrics {
        beat_detected: true,
        ..Default::default()
    }
}

/// Surface double that records the clear color and counts draw calls.
#[derive(Default)]
struct RecordingSurface {
    cleared_with: Option<Rgb>,
    draw_calls: usize,
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Rgb) {
        self.cleared_with = Some(color);
    }
    fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: Rgb, _alpha: u8, _blend: Blend) {
        self.draw_calls += 1;
    }
    fn fill_polygon(&mut self, _points: &[Vec2], _color: Rgb, _alpha: u8, _blend: Blend) {
        self.draw_calls += 1;
    }
    fn line(&mut self, _from: Vec2, _to: Vec2, _width: f32, _color: Rgb, _alpha: u8, _blend: Blend) {
        self.draw_calls += 1;
    }
}

#[test]
fn beat_alone_spawns_at_canvas_center() {
    // Amplitude 0 is far below the raw threshold; the beat flag alone must
    // trigger the ambient fallback.
    let mut engine = make_engine(21);
    engine.update(DT, &[], Some(&beat()));
    assert!(engine.stats().particle_count > 0);

    let center = CANVAS * 0.5;
    for p in engine.system().particles() {
        assert!((p.pos - center).length() <= 35.0);
    }
}

#[test]
fn loud_amplitude_without_beat_also_spawns() {
    let mut engine = make_engine(22);
    let audio = AudioMetrics {
        amplitude: 1500.0,
        ..Default::default()
    };
    engine.update(DT, &[], Some(&audio));
    assert!(engine.stats().particle_count > 0);
}

#[test]
fn quiet_beatless_audio_spawns_nothing() {
    let mut engine = make_engine(23);
    let audio = AudioMetrics {
        amplitude: 400.0,
        ..Default::default()
    };
    for _ in 0..30 {
        engine.update(DT, &[], Some(&audio));
    }
    assert_eq!(engine.stats().particle_count, 0);
}

#[test]
fn no_producers_means_no_activity() {
    let mut engine = make_engine(24);
    for _ in 0..30 {
        engine.update(DT, &[], None);
    }
    assert_eq!(engine.stats().particle_count, 0);
}

#[test]
fn motion_centers_win_over_audio_fallback() {
    let mut engine = make_engine(25);
    let spot = Vec2::new(100.0, 100.0);
    engine.update(DT, &[spot], Some(&beat()));
    assert!(engine.stats().particle_count > 0);
    for p in engine.system().particles() {
        assert!((p.pos - spot).length() <= 35.0, "spawned away from center");
    }
}

#[test]
fn volume_drives_intensity_with_a_floor() {
    let mut engine = make_engine(26);
    let loud = AudioMetrics {
        db_norm: 0.8,
        ..Default::default()
    };
    engine.update(DT, &[], Some(&loud));
    assert!((engine.stats().intensity - 1.2).abs() < 1e-6);

    let silent = AudioMetrics::default();
    engine.update(DT, &[], Some(&silent));
    assert!((engine.stats().intensity - 0.1).abs() < 1e-6);
}

#[test]
fn beats_double_spawn_rate_up_to_the_ceiling() {
    let mut engine = make_engine(27);
    let start = engine.stats().spawn_rate;
    engine.update(DT, &[], Some(&beat()));
    assert!((engine.stats().spawn_rate - (start * 2.0).min(SPAWN_RATE_MAX)).abs() < 1e-4);

    for _ in 0..10 {
        engine.update(DT, &[], Some(&beat()));
    }
    assert_eq!(engine.stats().spawn_rate, SPAWN_RATE_MAX);
}

#[test]
fn silence_decays_spawn_rate_down_to_the_floor() {
    let mut engine = make_engine(28);
    for _ in 0..500 {
        engine.update(DT, &[], Some(&AudioMetrics::default()));
    }
    assert_eq!(engine.stats().spawn_rate, SPAWN_RATE_MIN);
}

#[test]
fn frequency_band_selects_discrete_palette() {
    let mut engine = make_engine(29);
    let mut audio = AudioMetrics::default();

    audio.frequency = 1500.0;
    engine.update(DT, &[], Some(&audio));
    assert_eq!(engine.system().base_colors(), PALETTE_HIGH.as_slice());

    audio.frequency = 700.0;
    engine.update(DT, &[], Some(&audio));
    assert_eq!(engine.system().base_colors(), PALETTE_MID.as_slice());

    audio.frequency = 120.0;
    engine.update(DT, &[], Some(&audio));
    assert_eq!(engine.system().base_colors(), PALETTE_LOW.as_slice());
}

#[test]
fn style_sets_background_from_first_color() {
    let mut engine = make_engine(30);
    let style = StyleConfig::from_json(r#"{"colors": [[200, 100, 40]], "motion": "spiral"}"#).unwrap();
    engine.apply_style(&style);
    assert_eq!(engine.background(), [50, 25, 10]);
    assert_eq!(engine.stats().motion_pattern, MotionPattern::Spiral);

    let mut surface = RecordingSurface::default();
    engine.render(&mut surface);
    assert_eq!(surface.cleared_with, Some([50, 25, 10]));
}

#[test]
fn styleless_render_clears_black() {
    let engine = make_engine(31);
    let mut surface = RecordingSurface::default();
    engine.render(&mut surface);
    assert_eq!(surface.cleared_with, Some([0, 0, 0]));
    assert_eq!(surface.draw_calls, 0);
}

#[test]
fn motion_centers_are_rescaled_from_source_resolution() {
    let mut engine = make_engine(32);
    engine.set_source_resolution(Some(Vec2::new(640.0, 480.0)));
    // Center of the producer frame should land at the center of the canvas.
    engine.update(DT, &[Vec2::new(320.0, 240.0)], None);
    assert!(engine.stats().particle_count > 0);
    let center = CANVAS * 0.5;
    for p in engine.system().particles() {
        assert!((p.pos - center).length() <= 35.0);
    }
}

#[test]
fn out_of_range_centers_are_clamped_onto_the_canvas() {
    let mut engine = make_engine(33);
    engine.update(DT, &[Vec2::new(5000.0, -200.0)], None);
    assert!(engine.stats().particle_count > 0);
    // The center clamps to the top-right corner; spawns scatter around it.
    let corner = Vec2::new(CANVAS.x, 0.0);
    for p in engine.system().particles() {
        assert!((p.pos - corner).length() <= 35.0);
    }
}

#[test]
fn clear_resets_the_particle_population() {
    let mut engine = make_engine(34);
    engine.update(DT, &[CANVAS * 0.5], None);
    assert!(engine.stats().particle_count > 0);
    engine.clear();
    assert_eq!(engine.stats().particle_count, 0);
}

#[test]
fn stats_snapshot_matches_system_state() {
    let mut engine = make_engine(35);
    let style = StyleConfig::from_json(
        r#"{"motion": "orbital", "intensity": 0.7, "particles": {"count": 200}}"#,
    )
    .unwrap();
    engine.apply_style(&style);
    engine.update(DT, &[CANVAS * 0.5], None);

    let stats = engine.stats();
    assert_eq!(stats.particle_count, engine.system().len());
    assert_eq!(stats.motion_pattern, MotionPattern::Orbital);
    assert_eq!(stats.intensity, 0.7);
    assert_eq!(stats.spawn_rate, 20.0);
}
