use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub sns_topic_arn: String,
    pub destination_phone_number: String,
    pub contact_flow_id: String,
    pub instance_id: String,
    pub source_phone_number: String,
    /// Only set for the audio variant.
    pub audio_bucket_name: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            sns_topic_arn: env::var("SNS_TOPIC_ARN")
                .map_err(|e| format!("SNS_TOPIC_ARN: {}", e))?,
            destination_phone_number: env::var("DESTINATION_PHONE_NUMBER")
                .map_err(|e| format!("DESTINATION_PHONE_NUMBER: {}", e))?,
            contact_flow_id: env::var("CONTACT_FLOW_ID")
                .map_err(|e| format!("CONTACT_FLOW_ID: {}", e))?,
            instance_id: env::var("INSTANCE_ID")
                .map_err(|e| format!("INSTANCE_ID: {}", e))?,
            source_phone_number: env::var("SOURCE_PHONE_NUMBER")
                .map_err(|e| format!("SOURCE_PHONE_NUMBER: {}", e))?,
            audio_bucket_name: env::var("AUDIO_BUCKET_NAME").ok(),
        })
    }

    /// The S3 bucket holding the synthesized call audio.
    ///
    /// # Errors
    ///
    /// Returns an error if `AUDIO_BUCKET_NAME` was not set.
    pub fn audio_bucket(&self) -> Result<&str, crate::errors::NotifierError> {
        self.audio_bucket_name
            .as_deref()
            .ok_or_else(|| crate::errors::NotifierError::Config("AUDIO_BUCKET_NAME".to_string()))
    }
}
