//! Tone Synthesizer — offline buffer path.
//!
//! Renders a whole tone into a sample buffer up front. Used where no
//! real-time synthesis graph is available; the buffer is handed to the
//! WAV encoder and played as a one-shot clip.

use serde::{Deserialize, Serialize};

use super::envelope::{HEADROOM, fade_envelope};
use super::oscillator::Waveform;

/// One requested tone. Constructed per play call and discarded after use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToneRequest {
    /// Frequency in Hz. Positive.
    pub frequency: f64,
    /// Duration in seconds. Positive.
    pub duration: f64,
    pub waveform: Waveform,
}

impl ToneRequest {
    pub fn new(frequency: f64, duration: f64, waveform: Waveform) -> Self {
        ToneRequest {
            frequency,
            duration,
            waveform,
        }
    }
}

/// Render a tone to mono f64 samples at the given sample rate.
///
/// Sample count is `round(sample_rate · duration)`, at least 1. Each sample
/// is `waveform(f·t) · fade(t) · HEADROOM`, so output stays within
/// [-HEADROOM, HEADROOM]. Pure and deterministic for a given sample rate.
pub fn synthesize(request: &ToneRequest, sample_rate: u32) -> Vec<f64> {
    let num_samples = ((sample_rate as f64 * request.duration).round() as usize).max(1);
    let mut samples = Vec::with_capacity(num_samples);

    for i in 0..num_samples {
        let t = i as f64 / sample_rate as f64;
        let raw = request.waveform.eval(request.frequency * t);
        let env = fade_envelope(t, request.duration);
        samples.push(raw * env * HEADROOM);
    }

    samples
}
