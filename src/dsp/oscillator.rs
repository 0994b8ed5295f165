//! Waveform primitives — closed-form evaluation of the four basic shapes.
//!
//! These are the naive textbook shapes, not band-limited oscillators. The
//! tones this crate produces are short decorative blips well below the
//! Nyquist danger zone, so the closed forms keep synthesis bit-for-bit
//! reproducible across the offline and real-time paths.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Supported waveform shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
    Sawtooth,
}

impl Waveform {
    /// Parse a waveform name. Accepts `"saw"` as shorthand for sawtooth.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sine" => Some(Waveform::Sine),
            "square" => Some(Waveform::Square),
            "triangle" => Some(Waveform::Triangle),
            "sawtooth" | "saw" => Some(Waveform::Sawtooth),
            _ => None,
        }
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Square => "square",
            Waveform::Triangle => "triangle",
            Waveform::Sawtooth => "sawtooth",
        }
    }

    /// Evaluate the raw waveform at position `x` in cycles (`x = f · t`).
    ///
    /// Output is in [-1, 1] for every shape. The square wave is exactly
    /// +1 or -1: a zero crossing of the underlying sine maps to -1.
    pub fn eval(self, x: f64) -> f64 {
        match self {
            Waveform::Sine => (2.0 * PI * x).sin(),
            Waveform::Square => {
                if (2.0 * PI * x).sin() > 0.0 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Triangle => (2.0 / PI) * (2.0 * PI * x).sin().asin(),
            Waveform::Sawtooth => 2.0 * (x - (x + 0.5).floor()),
        }
    }
}
