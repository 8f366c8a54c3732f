use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};
use uuid::Uuid;

use crate::aws::{connect, sns};
use crate::core::config::AppConfig;
use crate::core::models::{self, FindingEvent};
use crate::message;

/// Lambda handler for the live variant. Publishes the summary to SNS,
/// then starts an outbound call that reads the spoken message aloud.
///
/// # Errors
///
/// Any fault (missing configuration, malformed event, non-digit
/// account id, service error) aborts the invocation; nothing is
/// retried.
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
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
    let contact_id = connect::start_call(&config, "messageToRead", &spoken).await?;
    info!(
        correlation_id = %correlation_id,
        contact_id = ?contact_id,
        "Outbound call started"
    );

    Ok(models::call_placed_response())
}

pub use self::function_handler as handler;
