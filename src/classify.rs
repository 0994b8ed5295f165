//! Button-text classifier.
//!
//! Maps the visible text of an interactive control to the effect it should
//! trigger. Heart emoji win over success words, which win over celebration
//! words; anything else is a plain click. Word lists cover English and
//! Indonesian, matching the pages this ships on.

use std::sync::LazyLock;

use regex::Regex;

use crate::effects::SoundEffect;

static HEART_EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("[❤💕💖💝💗💓💞💜🧡💛💚💙🤍🖤🤎💋]").expect("valid heart emoji pattern")
});

static SUCCESS_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("success|berhasil|benar|win|menang|selamat").expect("valid success pattern")
});

static CELEBRATION_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("celebrate|celebration|party|yay|hooray|wow").expect("valid celebration pattern")
});

/// Classify a control's text content into the effect to play for it.
pub fn button_sound_type(text: &str) -> SoundEffect {
    let text = text.to_lowercase();

    if HEART_EMOJI.is_match(&text) {
        SoundEffect::Heart
    } else if SUCCESS_WORDS.is_match(&text) {
        SoundEffect::Success
    } else if CELEBRATION_WORDS.is_match(&text) {
        SoundEffect::Celebration
    } else {
        SoundEffect::Click
    }
}
