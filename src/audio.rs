//! Audio analysis snapshot consumed by the effects engine.

/// One delivery of analyzed microphone metrics.
///
/// Produced at audio-buffer cadence by an external analyzer; the engine
/// treats each value as "current" and never smooths or buffers on its side.
/// Plain copyable data, so no reference into the producer survives the call.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AudioMetrics {
    pub amplitude: f32,
    pub rms: f32,
    pub peak: f32,
    pub db: f32,
    /// Dominant frequency in Hz (FFT peak).
    pub frequency: f32,
    pub energy: f32,
    pub beat_detected: bool,
    // Normalized variants, each in [0, 1].
    pub amplitude_norm: f32,
    pub rms_norm: f32,
    pub peak_norm: f32,
    pub db_norm: f32,
    pub frequency_norm: f32,
}
