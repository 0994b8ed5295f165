//! Tone playback backends.
//!
//! Two interchangeable paths produce the same audible result:
//!
//! * [`GraphBackend`] schedules oscillator tones on the host's real-time
//!   graph — lower latency, no intermediate buffer.
//! * [`BufferBackend`] synthesizes a full sample buffer, encodes it to WAV
//!   and hands it to a clip sink — for hosts without a synthesis graph.
//!
//! Both are best-effort: host failures come back as a suppressed outcome,
//! never as a panic or propagated error.

use log::warn;
use rand::Rng;

use crate::dsp::envelope::GainEnvelope;
use crate::dsp::oscillator::Waveform;
use crate::dsp::renderer::render_tone_wav;
use crate::dsp::synth::ToneRequest;
use crate::error::{PlaybackOutcome, SuppressedReason};
use crate::host::{ClipHandle, ClipSink, ScheduledTone, ToneGraph};

/// Upper bound of the random per-note start jitter applied to chords,
/// in seconds.
pub const CHORD_JITTER_MAX: f64 = 0.1;

/// A playback path for synthesized tones.
pub trait ToneBackend {
    /// Play a tone immediately.
    fn play_tone(&mut self, request: &ToneRequest) -> PlaybackOutcome {
        self.play_tone_after(request, 0.0)
    }

    /// Play a tone after `delay` seconds.
    fn play_tone_after(&mut self, request: &ToneRequest, delay: f64) -> PlaybackOutcome;

    /// Play several simultaneous tones as a chord. Each note starts with
    /// an independent random jitter in [0, 100 ms) so onsets are not
    /// perfectly synchronized.
    fn play_chord(&mut self, frequencies: &[f64], duration: f64, waveform: Waveform) -> PlaybackOutcome {
        let mut rng = rand::rng();
        let mut outcome = PlaybackOutcome::Played;
        for &frequency in frequencies {
            let jitter = rng.random_range(0.0..CHORD_JITTER_MAX);
            let request = ToneRequest::new(frequency, duration, waveform);
            let note = self.play_tone_after(&request, jitter);
            if !note.is_played() {
                outcome = note;
            }
        }
        outcome
    }

    /// Stop tone playback as far as the backend can. Scheduled graph tones
    /// are fire-and-forget and keep running; buffered clips are released.
    fn stop(&mut self);
}

/// Real-time path: tones become scheduled oscillator + gain-ramp events on
/// the host graph.
#[derive(Debug)]
pub struct GraphBackend<G: ToneGraph> {
    graph: G,
}

impl<G: ToneGraph> GraphBackend<G> {
    pub fn new(graph: G) -> Self {
        GraphBackend { graph }
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }
}

impl<G: ToneGraph> ToneBackend for GraphBackend<G> {
    fn play_tone_after(&mut self, request: &ToneRequest, delay: f64) -> PlaybackOutcome {
        let start = self.graph.current_time() + delay;
        let tone = ScheduledTone {
            frequency: request.frequency,
            waveform: request.waveform,
            start,
            stop: start + request.duration,
            gain: GainEnvelope::new(request.duration),
        };
        match self.graph.schedule(tone) {
            Ok(()) => PlaybackOutcome::Played,
            Err(e) => {
                warn!("tone scheduling failed: {e}");
                PlaybackOutcome::Suppressed(SuppressedReason::from(&e))
            }
        }
    }

    fn stop(&mut self) {
        // Scheduled tones cannot be canceled before their stop time.
    }
}

/// Offline path: tones become one-shot WAV clips.
#[derive(Debug)]
pub struct BufferBackend<S: ClipSink> {
    sink: S,
    sample_rate: u32,
    /// Clip handles not yet released back to the host.
    outstanding: Vec<ClipHandle>,
}

impl<S: ClipSink> BufferBackend<S> {
    pub fn new(sink: S, sample_rate: u32) -> Self {
        BufferBackend {
            sink,
            sample_rate,
            outstanding: Vec::new(),
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Number of clips whose handles have not been released yet.
    pub fn outstanding_clips(&self) -> usize {
        self.outstanding.len()
    }
}

impl<S: ClipSink> ToneBackend for BufferBackend<S> {
    fn play_tone_after(&mut self, request: &ToneRequest, delay: f64) -> PlaybackOutcome {
        let wav = render_tone_wav(request, self.sample_rate);
        match self.sink.play_clip(wav, delay) {
            Ok(handle) => {
                self.outstanding.push(handle);
                PlaybackOutcome::Played
            }
            Err(e) => {
                warn!("clip playback failed: {e}");
                PlaybackOutcome::Suppressed(SuppressedReason::from(&e))
            }
        }
    }

    fn stop(&mut self) {
        for handle in self.outstanding.drain(..) {
            self.sink.release(handle);
        }
    }
}

/// Stand-in for hosts with no audio context at all: every tone is a no-op
/// reported as `ContextUnavailable`. Music playback elsewhere is unaffected.
#[derive(Debug, Default)]
pub struct NoBackend;

impl ToneBackend for NoBackend {
    fn play_tone_after(&mut self, _request: &ToneRequest, _delay: f64) -> PlaybackOutcome {
        PlaybackOutcome::Suppressed(SuppressedReason::ContextUnavailable)
    }

    fn stop(&mut self) {}
}
