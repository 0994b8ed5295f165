//! WAV renderer — encodes a sample buffer to a playable WAV byte buffer.

use super::synth::{ToneRequest, synthesize};

/// Synthesize a tone and encode it as a mono 16-bit PCM WAV file.
pub fn render_tone_wav(request: &ToneRequest, sample_rate: u32) -> Vec<u8> {
    let samples = synthesize(request, sample_rate);
    encode_wav(&samples, sample_rate)
}

/// Encode mono f64 samples to a WAV byte buffer (16-bit PCM).
///
/// Samples are clamped to [-1, 1] and scaled by 32767. The 44-byte header
/// follows the canonical RIFF/WAVE layout, all fields little-endian.
pub fn encode_wav(samples: &[f64], sample_rate: u32) -> Vec<u8> {
    let channels: u16 = 1;
    let bits_per_sample: u16 = 16;
    let byte_rate = sample_rate * channels as u32 * (bits_per_sample as u32 / 8);
    let block_align = channels * (bits_per_sample / 8);
    let data_size = (samples.len() * 2) as u32;
    let file_size = 36 + data_size;

    let mut buf = Vec::with_capacity(44 + data_size as usize);

    // RIFF header
    buf.extend_from_slice(b"RIFF");
    buf.extend_from_slice(&file_size.to_le_bytes());
    buf.extend_from_slice(b"WAVE");

    // fmt chunk
    buf.extend_from_slice(b"fmt ");
    buf.extend_from_slice(&16u32.to_le_bytes()); // chunk size
    buf.extend_from_slice(&1u16.to_le_bytes()); // PCM format
    buf.extend_from_slice(&channels.to_le_bytes());
    buf.extend_from_slice(&sample_rate.to_le_bytes());
    buf.extend_from_slice(&byte_rate.to_le_bytes());
    buf.extend_from_slice(&block_align.to_le_bytes());
    buf.extend_from_slice(&bits_per_sample.to_le_bytes());

    // data chunk
    buf.extend_from_slice(b"data");
    buf.extend_from_slice(&data_size.to_le_bytes());
    for &sample in samples {
        let clamped = sample.clamp(-1.0, 1.0);
        let value = (clamped * 32767.0) as i16;
        buf.extend_from_slice(&value.to_le_bytes());
    }

    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::oscillator::Waveform;

    #[test]
    fn wav_header_valid() {
        let req = ToneRequest::new(440.0, 0.1, Waveform::Sine);
        let wav = render_tone_wav(&req, 44100);

        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[12..16], b"fmt ");
        assert_eq!(&wav[36..40], b"data");

        // fmt fields: PCM, mono, declared rate, byte rate, block align, 16-bit
        assert_eq!(u16::from_le_bytes([wav[20], wav[21]]), 1);
        assert_eq!(u16::from_le_bytes([wav[22], wav[23]]), 1);
        assert_eq!(u32::from_le_bytes([wav[24], wav[25], wav[26], wav[27]]), 44100);
        assert_eq!(u32::from_le_bytes([wav[28], wav[29], wav[30], wav[31]]), 88200);
        assert_eq!(u16::from_le_bytes([wav[32], wav[33]]), 2);
        assert_eq!(u16::from_le_bytes([wav[34], wav[35]]), 16);
    }

    #[test]
    fn wav_size_correct() {
        let samples = vec![0.0; 2000];
        let wav = encode_wav(&samples, 48000);

        let file_size = u32::from_le_bytes([wav[4], wav[5], wav[6], wav[7]]);
        let data_size = u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]);
        assert_eq!(wav.len(), 44 + 2 * samples.len());
        assert_eq!(data_size, 4000);
        assert_eq!(file_size, 36 + 4000);
    }

    #[test]
    fn payload_clamps_and_scales() {
        let samples = vec![0.0, 1.0, -1.0, 2.0, -2.0, 0.5];
        let wav = encode_wav(&samples, 44100);
        let read = |i: usize| i16::from_le_bytes([wav[44 + 2 * i], wav[45 + 2 * i]]);

        assert_eq!(read(0), 0);
        assert_eq!(read(1), 32767);
        assert_eq!(read(2), -32767);
        assert_eq!(read(3), 32767, "out-of-range samples clamp to full scale");
        assert_eq!(read(4), -32767);
        assert_eq!(read(5), (0.5f64 * 32767.0) as i16);
    }

    #[test]
    fn round_trip_through_hound() {
        let req = ToneRequest::new(660.0, 0.3, Waveform::Triangle);
        let sample_rate = 22050;
        let samples = synthesize(&req, sample_rate);
        let wav = encode_wav(&samples, sample_rate);

        let reader = hound::WavReader::new(std::io::Cursor::new(wav)).expect("valid WAV");
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, sample_rate);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(reader.duration() as usize, samples.len());

        // Decoded samples match the quantized originals.
        let decoded: Vec<i16> = reader
            .into_samples::<i16>()
            .map(|s| s.expect("decodable sample"))
            .collect();
        for (i, (&orig, &dec)) in samples.iter().zip(decoded.iter()).enumerate() {
            let expected = (orig.clamp(-1.0, 1.0) * 32767.0) as i16;
            assert_eq!(dec, expected, "sample {i} mismatch");
        }
    }

    #[test]
    fn rendered_tone_is_not_silence() {
        let req = ToneRequest::new(800.0, 0.1, Waveform::Square);
        let wav = render_tone_wav(&req, 44100);
        let has_nonzero = wav[44..]
            .chunks_exact(2)
            .any(|b| i16::from_le_bytes([b[0], b[1]]) != 0);
        assert!(has_nonzero, "Rendered WAV should contain non-silent audio");
    }
}
