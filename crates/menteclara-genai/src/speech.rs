//! Text-to-speech and PCM decoding.
//!
//! Gemini returns raw signed 16-bit little-endian PCM, mono, at 24 kHz,
//! base64-encoded in the first inline-data part.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use byteorder::{ByteOrder, LittleEndian};
use serde::Serialize;
use tracing::info;

use crate::client::GeminiClient;
use crate::error::GenAiError;
use crate::prompt;

pub const SAMPLE_RATE: u32 = 24_000;
pub const CHANNELS: u16 = 1;

/// Decoded audio ready for playback.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PcmAudio {
    pub sample_rate: u32,
    pub channels: u16,
    /// Normalized to [-1.0, 1.0).
    pub samples: Vec<f32>,
}

impl PcmAudio {
    pub fn duration_ms(&self) -> u64 {
        let frames = self.samples.len() as u64 / u64::from(self.channels.max(1));
        frames * 1000 / u64::from(self.sample_rate)
    }
}

/// Decode base64 LE i16 PCM into normalized samples.
pub fn decode_pcm(audio_base64: &str) -> Result<PcmAudio, GenAiError> {
    let bytes = STANDARD
        .decode(audio_base64.trim())
        .map_err(|e| GenAiError::AudioDecode(format!("invalid base64: {e}")))?;
    if bytes.len() % 2 != 0 {
        return Err(GenAiError::AudioDecode(format!(
            "odd PCM byte count: {}",
            bytes.len()
        )));
    }

    let samples = bytes
        .chunks_exact(2)
        .map(|pair| f32::from(LittleEndian::read_i16(pair)) / 32768.0)
        .collect();

    Ok(PcmAudio {
        sample_rate: SAMPLE_RATE,
        channels: CHANNELS,
        samples,
    })
}

impl GeminiClient {
    /// Synthesize `text` and return the base64 PCM payload as received.
    pub async fn synthesize_speech(&self, text: &str) -> Result<String, GenAiError> {
        let model = self.config().speech_model.clone();
        let body = prompt::speech_request(text, &self.config().voice);
        let response = self.generate_content(&model, &body).await?;

        let audio = response
            .inline_data()
            .ok_or_else(|| GenAiError::ResponseParse("no audio in response".to_string()))?;
        info!(
            model = %model,
            mime_type = audio.mime_type.as_deref().unwrap_or("unknown"),
            bytes = audio.data.len(),
            "speech synthesized"
        );
        Ok(audio.data.clone())
    }
}
