//! Amplitude envelopes for the two synthesis paths.
//!
//! The offline buffer path uses a trapezoid fade; the real-time path uses a
//! linear attack followed by an exponential decay, matching the ramp
//! automation a WebAudio gain node would apply.

/// Peak gain of a synthesized tone. Fixed headroom so overlapping effect
/// tones cannot clip.
pub const HEADROOM: f64 = 0.3;

/// Gain floor the real-time decay ramps toward (an exponential ramp can
/// never reach zero).
pub const GAIN_FLOOR: f64 = 0.001;

/// Attack time of the real-time gain ramp, in seconds.
pub const ATTACK_SECS: f64 = 0.01;

/// Trapezoid fade applied to buffered tones: `min(10t, 10(d−t), 1)`,
/// clamped to [0, 1].
///
/// The ramp rate is absolute (full amplitude after 0.1 s) rather than a
/// fraction of the duration, so tones shorter than 0.2 s never reach full
/// amplitude. That is the historical behavior and callers depend on the
/// exact curve, so it is kept as-is.
pub fn fade_envelope(t: f64, duration: f64) -> f64 {
    (10.0 * t).min(10.0 * (duration - t)).min(1.0).max(0.0)
}

/// The real-time path's gain curve: linear ramp from 0 to `HEADROOM` over
/// `ATTACK_SECS`, then exponential decay toward `GAIN_FLOOR` reached at
/// `duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GainEnvelope {
    pub peak: f64,
    pub duration: f64,
}

impl GainEnvelope {
    pub fn new(duration: f64) -> Self {
        GainEnvelope {
            peak: HEADROOM,
            duration,
        }
    }

    /// Gain level at time `t` seconds after the tone starts.
    ///
    /// Exponential segment follows the WebAudio ramp formula
    /// `v(t) = v0 · (v1/v0)^((t − t0)/(t1 − t0))`.
    pub fn level_at(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= self.duration {
            return 0.0;
        }
        let attack = ATTACK_SECS.min(self.duration);
        if t < attack {
            return self.peak * (t / attack);
        }
        let frac = (t - attack) / (self.duration - attack);
        self.peak * (GAIN_FLOOR / self.peak).powf(frac)
    }
}
