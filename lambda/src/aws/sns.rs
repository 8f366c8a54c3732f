use crate::core::config::AppConfig;
use crate::errors::NotifierError;
use aws_sdk_sns::Client as SnsClient;

pub const SUMMARY_SUBJECT: &str = "GuardDuty Alert";

/// Publish the finding summary to the configured topic.
///
/// # Errors
///
/// Returns an error if the publish call fails.
pub async fn publish_summary(
    config: &AppConfig,
    summary: &str,
) -> Result<Option<String>, NotifierError> {
    let shared_config = aws_config::from_env().load().await;
    let client = SnsClient::new(&shared_config);

    let response = client
        .publish()
        .topic_arn(&config.sns_topic_arn)
        .message(summary)
        .subject(SUMMARY_SUBJECT)
        .send()
        .await
        .map_err(|e| NotifierError::Aws(format!("Failed to publish to SNS: {e}")))?;

    Ok(response.message_id)
}
