use crate::errors::NotifierError;
use aws_sdk_polly::types::{Engine, OutputFormat, VoiceId};
use aws_sdk_polly::Client as PollyClient;

/// Synthesize the spoken message to MP3 audio bytes.
///
/// # Errors
///
/// Returns an error if synthesis fails or the audio stream cannot be
/// collected.
pub async fn synthesize(text: &str) -> Result<Vec<u8>, NotifierError> {
    let shared_config = aws_config::from_env().load().await;
    let client = PollyClient::new(&shared_config);

    let response = client
        .synthesize_speech()
        .text(text)
        .voice_id(VoiceId::Joanna)
        .engine(Engine::Neural)
        .output_format(OutputFormat::Mp3)
        .send()
        .await
        .map_err(|e| NotifierError::Synthesis(e.to_string()))?;

    let audio_stream = response
        .audio_stream
        .collect()
        .await
        .map_err(|e| NotifierError::Synthesis(e.to_string()))?;

    Ok(audio_stream.to_vec())
}
