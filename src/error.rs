//! Error taxonomy for best-effort playback.
//!
//! Playback failures are decorative-audio failures: they must never break
//! page interactivity. Host-side errors (`MediaError`) are swallowed at the
//! orchestrator boundary and surfaced as a `PlaybackOutcome` so callers and
//! tests can still assert on what happened.

use std::fmt;

/// An error reported by a host-side playback primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaError {
    /// The browser refused playback before a qualifying user gesture.
    AutoplayBlocked,
    /// A referenced media asset failed to load or decode.
    AssetLoad(String),
    /// No audio device context is available to the host.
    GraphUnavailable,
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::AutoplayBlocked => write!(f, "autoplay blocked until user interaction"),
            MediaError::AssetLoad(what) => write!(f, "media asset failed to load: {what}"),
            MediaError::GraphUnavailable => write!(f, "audio context unavailable"),
        }
    }
}

impl std::error::Error for MediaError {}

/// Why a playback attempt was suppressed rather than propagated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuppressedReason {
    /// No audio context: synthesis is a no-op, media playback still tried.
    ContextUnavailable,
    /// Autoplay policy rejected the play call; retried on next interaction.
    AutoplayBlocked,
    /// The asset or named effect was missing or failed to load.
    AssetLoad,
}

impl From<&MediaError> for SuppressedReason {
    fn from(e: &MediaError) -> Self {
        match e {
            MediaError::AutoplayBlocked => SuppressedReason::AutoplayBlocked,
            MediaError::AssetLoad(_) => SuppressedReason::AssetLoad,
            MediaError::GraphUnavailable => SuppressedReason::ContextUnavailable,
        }
    }
}

/// Result of a best-effort playback operation. Never an `Err`: failure is
/// demoted to `Suppressed` and the page keeps working.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    /// Playback started (or was scheduled) normally.
    Played,
    /// The operation had already taken effect; nothing was re-triggered.
    AlreadyActive,
    /// Playback failed and the failure was swallowed.
    Suppressed(SuppressedReason),
}

impl PlaybackOutcome {
    pub fn is_played(self) -> bool {
        self == PlaybackOutcome::Played
    }
}
