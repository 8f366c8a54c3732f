use crate::errors::NotifierError;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use std::path::Path;
use tokio_retry::strategy::FixedInterval;
use tokio_retry::Retry;
use tracing::info;

/// The fixed object key the call audio is uploaded under. Overwritten
/// on every invocation.
pub const AUDIO_KEY: &str = "output.mp3";

/// Upload the scratch audio file to the bucket under [`AUDIO_KEY`].
///
/// # Errors
///
/// Returns an error if the file cannot be read or the upload fails.
pub async fn upload_audio(bucket: &str, path: &Path) -> Result<(), NotifierError> {
    let shared_config = aws_config::from_env().load().await;
    let client = S3Client::new(&shared_config);

    let body = ByteStream::from_path(path)
        .await
        .map_err(|e| NotifierError::Io(format!("{}: {e}", path.display())))?;

    client
        .put_object()
        .bucket(bucket)
        .key(AUDIO_KEY)
        .body(body)
        .content_type("audio/mpeg")
        .send()
        .await
        .map_err(|e| NotifierError::Aws(format!("Failed to upload audio to S3: {e}")))?;

    Ok(())
}

/// Block until the uploaded object answers a `HeadObject`, so the URL
/// handed to the call flow is known to be playable. Polls at a fixed
/// 2 second interval with the same 30 second ceiling the upload lag
/// was originally assumed to fit in.
///
/// # Errors
///
/// Returns [`NotifierError::AudioUnavailable`] if the object is still
/// not visible when the ceiling is reached.
pub async fn wait_until_visible(bucket: &str) -> Result<(), NotifierError> {
    let shared_config = aws_config::from_env().load().await;
    let client = S3Client::new(&shared_config);

    let strategy = FixedInterval::from_millis(2_000).take(15);

    Retry::spawn(strategy, || async {
        client
            .head_object()
            .bucket(bucket)
            .key(AUDIO_KEY)
            .send()
            .await
            .map(|_| ())
    })
    .await
    .map_err(|e| NotifierError::AudioUnavailable(format!("s3://{bucket}/{AUDIO_KEY}: {e}")))?;

    info!(bucket = %bucket, key = %AUDIO_KEY, "Uploaded audio is visible");
    Ok(())
}

/// Public URL for the uploaded audio, in the path-style form the call
/// flow fetches.
#[must_use]
pub fn public_url(bucket: &str) -> String {
    format!("https://s3.amazonaws.com/{bucket}/{AUDIO_KEY}")
}
