use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use std::path::Path;
use tracing::{error, info};
use uuid::Uuid;

use super::SCRATCH_PATH;
use crate::aws::{connect, polly, s3, sns};
use crate::core::config::AppConfig;
use crate::core::models::{self, FindingEvent};
use crate::errors::NotifierError;
use crate::message;

/// Lambda handler for the audio variant. Publishes the summary to
/// SNS, synthesizes the spoken message to MP3, hosts it in S3, and
/// starts an outbound call that plays it back.
///
/// # Errors
///
/// Any fault (missing configuration, malformed event, non-digit
/// account id, synthesis/upload failure, audio never becoming
/// visible, service error) aborts the invocation; nothing is retried.
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    let bucket = config.audio_bucket()?.to_string();
    let correlation_id = Uuid::new_v4().to_string();
    info!(
        correlation_id = %correlation_id,
        "Received finding event: {:?}",
        event.payload
    );

    let finding: FindingEvent = serde_json::from_value(event.payload)
        .map_err(|e| Error::from(format!("Failed to parse finding event: {e}")))?;
    let detail = finding.detail;

    let summary = message::format_summary(&detail);
    let message_id = sns::publish_summary(&config, &summary).await?;
    info!(
        correlation_id = %correlation_id,
        message_id = ?message_id,
        "Summary published to SNS"
    );

    let spoken = message::format_spoken_message(&detail)?;
    let audio = polly::synthesize(&spoken).await?;
    tokio::fs::write(SCRATCH_PATH, &audio)
        .await
        .map_err(|e| NotifierError::Io(format!("{SCRATCH_PATH}: {e}")))?;

    s3::upload_audio(&bucket, Path::new(SCRATCH_PATH)).await?;
    s3::wait_until_visible(&bucket).await?;
    let audio_url = s3::public_url(&bucket);

    let contact_id = connect::start_call(&config, "s3AudioUrl", &audio_url).await?;
    info!(
        correlation_id = %correlation_id,
        contact_id = ?contact_id,
        audio_url = %audio_url,
        "Outbound call started"
    );

    Ok(models::call_placed_response())
}

pub use self::function_handler as handler;
