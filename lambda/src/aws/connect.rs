use crate::core::config::AppConfig;
use crate::errors::NotifierError;
use aws_sdk_connect::Client as ConnectClient;

/// Initiate the outbound call, passing a single contact attribute to
/// the call flow (`messageToRead` for live synthesis, `s3AudioUrl`
/// for pre-recorded playback).
///
/// # Errors
///
/// Returns an error if the call cannot be started.
pub async fn start_call(
    config: &AppConfig,
    attribute_name: &str,
    attribute_value: &str,
) -> Result<Option<String>, NotifierError> {
    let shared_config = aws_config::from_env().load().await;
    let client = ConnectClient::new(&shared_config);

    let response = client
        .start_outbound_voice_contact()
        .destination_phone_number(&config.destination_phone_number)
        .contact_flow_id(&config.contact_flow_id)
        .instance_id(&config.instance_id)
        .source_phone_number(&config.source_phone_number)
        .attributes(attribute_name, attribute_value)
        .send()
        .await
        .map_err(|e| NotifierError::Aws(format!("Failed to start outbound voice contact: {e}")))?;

    Ok(response.contact_id)
}
