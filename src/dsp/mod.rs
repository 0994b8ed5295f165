//! DSP — Pure Rust tone synthesis.
//!
//! Deterministic, dependency-free synthesis shared by both playback paths:
//! the offline buffer renderer (synthesize → WAV → one-shot clip) and the
//! real-time voice generator (pull-based sample stream).

pub mod envelope;
pub mod oscillator;
pub mod renderer;
pub mod synth;
pub mod voice;
