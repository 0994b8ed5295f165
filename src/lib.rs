pub mod backend;
pub mod classify;
pub mod dsp;
pub mod effects;
pub mod error;
pub mod host;
pub mod system;

use crate::dsp::oscillator::Waveform;
use crate::dsp::synth::ToneRequest;
use wasm_bindgen::prelude::*;

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// WASM-exposed: return the pagechime version string.
#[wasm_bindgen]
pub fn core_version() -> String {
    VERSION.to_string()
}

fn parse_tone(frequency: f64, duration: f64, waveform: &str) -> Result<ToneRequest, String> {
    let waveform =
        Waveform::from_name(waveform).ok_or_else(|| format!("unknown waveform: {waveform}"))?;
    Ok(ToneRequest::new(frequency, duration, waveform))
}

/// WASM-exposed: synthesize a tone and encode it as a mono 16-bit WAV byte
/// array, playable via a blob URL on the host page.
#[wasm_bindgen]
pub fn render_tone_wav(
    frequency: f64,
    duration: f64,
    waveform: &str,
    sample_rate: u32,
) -> Result<Vec<u8>, JsValue> {
    let request = parse_tone(frequency, duration, waveform)?;
    Ok(dsp::renderer::render_tone_wav(&request, sample_rate))
}

/// WASM-exposed: synthesize a tone to raw mono f32 samples for direct
/// AudioBuffer playback.
#[wasm_bindgen]
pub fn render_tone_samples(
    frequency: f64,
    duration: f64,
    waveform: &str,
    sample_rate: u32,
) -> Result<Vec<f32>, JsValue> {
    let request = parse_tone(frequency, duration, waveform)?;
    let samples = dsp::synth::synthesize(&request, sample_rate);
    Ok(samples.iter().map(|&s| s as f32).collect())
}

/// WASM-exposed: classify a button's text content into the name of the
/// effect to play for it ("heart", "success", "celebration" or "click").
#[wasm_bindgen]
pub fn button_sound_type(text: &str) -> String {
    classify::button_sound_type(text).name().to_string()
}

/// WASM-exposed: look up a named effect's synthesis recipe as a JS object,
/// so the host page can drive its own oscillator graph.
#[wasm_bindgen]
pub fn effect_recipe(name: &str) -> Result<JsValue, JsValue> {
    let effect = effects::SoundEffect::from_name(name)
        .ok_or_else(|| JsValue::from_str(&format!("unknown effect: {name}")))?;
    serde_wasm_bindgen::to_value(&effect.sound()).map_err(|e| JsValue::from_str(&format!("{e}")))
}
