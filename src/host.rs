//! Host-page primitives, expressed as traits.
//!
//! The crate never touches a real browser API. The page (or a test) injects
//! implementations of these three seams: looping media elements for music,
//! a clip sink that plays encoded WAV bytes, and a real-time tone graph.

use crate::dsp::envelope::GainEnvelope;
use crate::dsp::oscillator::Waveform;
use crate::error::MediaError;

/// A looping music element owned by the host page.
pub trait MediaHandle {
    fn play(&mut self) -> Result<(), MediaError>;
    fn pause(&mut self);
    /// Seek back to the start of the track.
    fn rewind(&mut self);
    /// Set playback volume in [0, 1].
    fn set_volume(&mut self, volume: f64);
}

/// Opaque reference to a clip handed to the host (the equivalent of a blob
/// URL). Must be released once the clip is no longer needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClipHandle(pub u64);

/// One-shot playback of encoded WAV bytes.
pub trait ClipSink {
    /// Hand an encoded WAV clip to the host for playback after `delay`
    /// seconds. Returns the handle the caller must eventually release.
    fn play_clip(&mut self, wav: Vec<u8>, delay: f64) -> Result<ClipHandle, MediaError>;

    /// Release a clip resource. Releasing an unknown handle is a no-op.
    fn release(&mut self, handle: ClipHandle);
}

/// A tone scheduled on the real-time graph. Start and stop are absolute
/// times on the graph clock; the gain curve is applied by the host's gain
/// node. Once scheduled, a tone cannot be canceled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledTone {
    pub frequency: f64,
    pub waveform: Waveform,
    /// Absolute start time on the graph clock, seconds.
    pub start: f64,
    /// Absolute stop time on the graph clock, seconds.
    pub stop: f64,
    pub gain: GainEnvelope,
}

/// Real-time synthesis graph provided by the host audio device.
pub trait ToneGraph {
    /// Device sample rate, typically 44100 or 48000 Hz.
    fn sample_rate(&self) -> u32;
    /// Current time on the graph clock, seconds.
    fn current_time(&self) -> f64;
    fn schedule(&mut self, tone: ScheduledTone) -> Result<(), MediaError>;
}
