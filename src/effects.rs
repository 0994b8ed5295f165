//! Named sound effects and their tone recipes.

use serde::{Deserialize, Serialize};

use crate::dsp::oscillator::Waveform;
use crate::dsp::synth::ToneRequest;

/// The C major triad used by the celebration effect, in Hz.
pub const C_MAJOR: [f64; 3] = [523.0, 659.0, 784.0];

/// The five built-in effect kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundEffect {
    Click,
    Heart,
    Celebration,
    Success,
    Wrong,
}

/// What an effect sounds like: a single tone or a jittered chord.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum EffectSound {
    Tone(ToneRequest),
    Chord {
        frequencies: Vec<f64>,
        duration: f64,
        waveform: Waveform,
    },
}

impl SoundEffect {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "click" => Some(SoundEffect::Click),
            "heart" => Some(SoundEffect::Heart),
            "celebration" => Some(SoundEffect::Celebration),
            "success" => Some(SoundEffect::Success),
            "wrong" => Some(SoundEffect::Wrong),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SoundEffect::Click => "click",
            SoundEffect::Heart => "heart",
            SoundEffect::Celebration => "celebration",
            SoundEffect::Success => "success",
            SoundEffect::Wrong => "wrong",
        }
    }

    /// The synthesis recipe for this effect.
    pub fn sound(self) -> EffectSound {
        match self {
            SoundEffect::Click => {
                EffectSound::Tone(ToneRequest::new(800.0, 0.1, Waveform::Square))
            }
            SoundEffect::Heart => EffectSound::Tone(ToneRequest::new(660.0, 0.3, Waveform::Sine)),
            SoundEffect::Celebration => EffectSound::Chord {
                frequencies: C_MAJOR.to_vec(),
                duration: 0.5,
                waveform: Waveform::Sine,
            },
            SoundEffect::Success => {
                EffectSound::Tone(ToneRequest::new(880.0, 0.2, Waveform::Triangle))
            }
            SoundEffect::Wrong => {
                EffectSound::Tone(ToneRequest::new(200.0, 0.3, Waveform::Sawtooth))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipes_match_the_effect_table() {
        assert_eq!(
            SoundEffect::Click.sound(),
            EffectSound::Tone(ToneRequest::new(800.0, 0.1, Waveform::Square))
        );
        assert_eq!(
            SoundEffect::Heart.sound(),
            EffectSound::Tone(ToneRequest::new(660.0, 0.3, Waveform::Sine))
        );
        assert_eq!(
            SoundEffect::Success.sound(),
            EffectSound::Tone(ToneRequest::new(880.0, 0.2, Waveform::Triangle))
        );
        assert_eq!(
            SoundEffect::Wrong.sound(),
            EffectSound::Tone(ToneRequest::new(200.0, 0.3, Waveform::Sawtooth))
        );
        match SoundEffect::Celebration.sound() {
            EffectSound::Chord {
                frequencies,
                duration,
                waveform,
            } => {
                assert_eq!(frequencies, C_MAJOR.to_vec());
                assert_eq!(duration, 0.5);
                assert_eq!(waveform, Waveform::Sine);
            }
            other => panic!("celebration should be a chord, got {other:?}"),
        }
    }

    #[test]
    fn name_round_trip() {
        for effect in [
            SoundEffect::Click,
            SoundEffect::Heart,
            SoundEffect::Celebration,
            SoundEffect::Success,
            SoundEffect::Wrong,
        ] {
            assert_eq!(SoundEffect::from_name(effect.name()), Some(effect));
        }
        assert_eq!(SoundEffect::from_name("fanfare"), None);
    }

    #[test]
    fn recipe_serializes_for_the_host_page() {
        let json = serde_json::to_value(SoundEffect::Click.sound()).unwrap();
        assert_eq!(json["kind"], "tone");
        assert_eq!(json["frequency"], 800.0);
        assert_eq!(json["waveform"], "square");

        let json = serde_json::to_value(SoundEffect::Celebration.sound()).unwrap();
        assert_eq!(json["kind"], "chord");
        assert_eq!(json["frequencies"][0], 523.0);
    }
}
