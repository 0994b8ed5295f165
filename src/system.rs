//! Playback orchestrator.
//!
//! One `AudioSystem` instance lives for the page session and is handed its
//! collaborators explicitly: a tone backend plus optional looping music
//! tracks. Music playback is driven by an explicit state machine rather
//! than by UI event listeners, and every operation is best-effort — a
//! failed play call is logged, possibly replaced by a soft fallback tone,
//! and reported as a suppressed outcome.

use std::collections::HashMap;

use log::{debug, warn};

use crate::backend::ToneBackend;
use crate::dsp::oscillator::Waveform;
use crate::dsp::synth::ToneRequest;
use crate::effects::{EffectSound, SoundEffect};
use crate::error::{PlaybackOutcome, SuppressedReason};
use crate::host::MediaHandle;

/// Conventional background music volume (30% of full scale).
pub const BACKGROUND_VOLUME: f64 = 0.3;
/// Conventional celebration music volume (60% of full scale).
pub const CELEBRATION_VOLUME: f64 = 0.6;

/// Soft ambient tone played when background music is blocked by autoplay
/// policy.
const FALLBACK_TONE: ToneRequest = ToneRequest {
    frequency: 220.0,
    duration: 0.1,
    waveform: Waveform::Sine,
};

/// Which looping music track is currently playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicState {
    Idle,
    BackgroundPlaying,
    CelebrationPlaying,
}

/// The page-session audio system.
pub struct AudioSystem<B: ToneBackend, M: MediaHandle> {
    backend: B,
    background: Option<M>,
    celebration: Option<M>,
    /// Media-backed one-shot effects registered by name.
    clip_effects: HashMap<String, M>,
    state: MusicState,
    music_started: bool,
}

impl<B: ToneBackend, M: MediaHandle> AudioSystem<B, M> {
    pub fn new(backend: B) -> Self {
        AudioSystem {
            backend,
            background: None,
            celebration: None,
            clip_effects: HashMap::new(),
            state: MusicState::Idle,
            music_started: false,
        }
    }

    pub fn with_music(backend: B, background: Option<M>, celebration: Option<M>) -> Self {
        let mut system = Self::new(backend);
        system.background = background;
        system.celebration = celebration;
        system
    }

    /// Register a media-backed effect playable via [`play_named_effect`].
    ///
    /// [`play_named_effect`]: Self::play_named_effect
    pub fn register_clip_effect(&mut self, name: impl Into<String>, handle: M) {
        self.clip_effects.insert(name.into(), handle);
    }

    pub fn state(&self) -> MusicState {
        self.state
    }

    pub fn music_started(&self) -> bool {
        self.music_started
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Start background music on the first qualifying user interaction.
    ///
    /// Idempotent: once music has started, later interactions are
    /// `AlreadyActive` and nothing is re-triggered. If autoplay policy
    /// blocks the play call, a quiet ambient tone is substituted and the
    /// started flag stays unset so the next interaction retries.
    pub fn start_music_on_first_interaction(&mut self) -> PlaybackOutcome {
        if self.music_started {
            return PlaybackOutcome::AlreadyActive;
        }
        let Some(track) = self.background.as_mut() else {
            return PlaybackOutcome::Suppressed(SuppressedReason::AssetLoad);
        };

        track.set_volume(BACKGROUND_VOLUME);
        match track.play() {
            Ok(()) => {
                self.music_started = true;
                self.state = MusicState::BackgroundPlaying;
                debug!("background music started");
                PlaybackOutcome::Played
            }
            Err(e) => {
                warn!("background music autoplay prevented, retrying on next interaction: {e}");
                self.backend.play_tone(&FALLBACK_TONE);
                PlaybackOutcome::Suppressed(SuppressedReason::from(&e))
            }
        }
    }

    /// Pause the background track and bring up the celebration track.
    pub fn switch_to_celebration(&mut self) -> PlaybackOutcome {
        if let Some(track) = self.background.as_mut() {
            track.pause();
        }
        let Some(track) = self.celebration.as_mut() else {
            self.state = MusicState::Idle;
            return PlaybackOutcome::Suppressed(SuppressedReason::AssetLoad);
        };

        track.set_volume(CELEBRATION_VOLUME);
        match track.play() {
            Ok(()) => {
                self.state = MusicState::CelebrationPlaying;
                debug!("switched to celebration music");
                PlaybackOutcome::Played
            }
            Err(e) => {
                warn!("celebration music failed to play: {e}");
                self.state = MusicState::Idle;
                PlaybackOutcome::Suppressed(SuppressedReason::from(&e))
            }
        }
    }

    /// Pause the celebration track and resume background music.
    pub fn switch_to_background(&mut self) -> PlaybackOutcome {
        if let Some(track) = self.celebration.as_mut() {
            track.pause();
        }
        let Some(track) = self.background.as_mut() else {
            self.state = MusicState::Idle;
            return PlaybackOutcome::Suppressed(SuppressedReason::AssetLoad);
        };

        track.set_volume(BACKGROUND_VOLUME);
        match track.play() {
            Ok(()) => {
                self.state = MusicState::BackgroundPlaying;
                debug!("switched back to background music");
                PlaybackOutcome::Played
            }
            Err(e) => {
                warn!("background music failed to resume: {e}");
                self.state = MusicState::Idle;
                PlaybackOutcome::Suppressed(SuppressedReason::from(&e))
            }
        }
    }

    /// Play a built-in synthesized effect.
    pub fn play_effect(&mut self, effect: SoundEffect) -> PlaybackOutcome {
        match effect.sound() {
            EffectSound::Tone(request) => self.backend.play_tone(&request),
            EffectSound::Chord {
                frequencies,
                duration,
                waveform,
            } => self.backend.play_chord(&frequencies, duration, waveform),
        }
    }

    /// Play a registered media-backed effect at the given volume,
    /// rewound to its start.
    pub fn play_named_effect(&mut self, name: &str, volume: f64) -> PlaybackOutcome {
        let Some(handle) = self.clip_effects.get_mut(name) else {
            warn!("no clip effect registered under {name:?}");
            return PlaybackOutcome::Suppressed(SuppressedReason::AssetLoad);
        };

        handle.rewind();
        handle.set_volume(volume);
        match handle.play() {
            Ok(()) => PlaybackOutcome::Played,
            Err(e) => {
                warn!("clip effect {name:?} failed to play: {e}");
                PlaybackOutcome::Suppressed(SuppressedReason::from(&e))
            }
        }
    }

    pub fn play_click_sound(&mut self) -> PlaybackOutcome {
        self.play_effect(SoundEffect::Click)
    }

    pub fn play_heart_sound(&mut self) -> PlaybackOutcome {
        self.play_effect(SoundEffect::Heart)
    }

    pub fn play_celebration_sound(&mut self) -> PlaybackOutcome {
        self.play_effect(SoundEffect::Celebration)
    }

    pub fn play_success_sound(&mut self) -> PlaybackOutcome {
        self.play_effect(SoundEffect::Success)
    }

    pub fn play_wrong_sound(&mut self) -> PlaybackOutcome {
        self.play_effect(SoundEffect::Wrong)
    }

    /// Stop all music: pause and rewind both tracks, release backend clip
    /// resources, and reset the started flag so the next interaction starts
    /// over. Already-scheduled graph tones run out on their own.
    pub fn stop(&mut self) {
        if let Some(track) = self.background.as_mut() {
            track.pause();
            track.rewind();
        }
        if let Some(track) = self.celebration.as_mut() {
            track.pause();
            track.rewind();
        }
        self.backend.stop();
        self.music_started = false;
        self.state = MusicState::Idle;
        debug!("music stopped");
    }

    /// Adjust the background track's volume. The celebration track keeps
    /// its conventional level.
    pub fn set_music_volume(&mut self, volume: f64) {
        if let Some(track) = self.background.as_mut() {
            track.set_volume(volume);
        }
    }
}
