//! Tone voice — streaming generator for the real-time path.
//!
//! Where the host exposes a pull-based audio callback instead of a
//! schedulable graph, a `ToneVoice` renders one tone sample-by-sample:
//! a phase-accumulating oscillator shaped by the linear-attack /
//! exponential-decay gain curve. Fire-and-forget: once started it runs to
//! its stop time and cannot be canceled early.

use super::envelope::GainEnvelope;
use super::oscillator::Waveform;
use super::synth::ToneRequest;

/// A single playing tone.
#[derive(Debug, Clone)]
pub struct ToneVoice {
    waveform: Waveform,
    gain: GainEnvelope,
    phase: f64,
    phase_inc: f64,
    sample_rate: f64,
    elapsed_samples: usize,
    total_samples: usize,
}

impl ToneVoice {
    pub fn new(request: &ToneRequest, sample_rate: u32) -> Self {
        let sr = sample_rate as f64;
        let total = ((sr * request.duration).round() as usize).max(1);
        ToneVoice {
            waveform: request.waveform,
            gain: GainEnvelope::new(request.duration),
            phase: 0.0,
            phase_inc: request.frequency / sr,
            sample_rate: sr,
            elapsed_samples: 0,
            total_samples: total,
        }
    }

    /// Generate the next output sample. Returns 0.0 once finished.
    pub fn next_sample(&mut self) -> f64 {
        if self.is_finished() {
            return 0.0;
        }

        let t = self.elapsed_samples as f64 / self.sample_rate;
        let sample = self.waveform.eval(self.phase) * self.gain.level_at(t);

        self.phase += self.phase_inc;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }
        self.elapsed_samples += 1;

        sample
    }

    /// Has the tone run past its stop time?
    pub fn is_finished(&self) -> bool {
        self.elapsed_samples >= self.total_samples
    }
}
