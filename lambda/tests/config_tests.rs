use guardduty_notifier::core::config::AppConfig;
use guardduty_notifier::errors::NotifierError;
use std::env;

/// Configuration is read from the environment once per invocation.
/// Environment mutation is process-wide, so everything that touches
/// it lives in a single sequential test.
#[test]
fn test_from_env_round_trip_and_missing_variable() {
    // SAFETY: this is the only test in the binary that mutates the
    // environment, and integration test binaries run independently.
    unsafe {
        env::set_var("SNS_TOPIC_ARN", "arn:aws:sns:us-east-1:123456789012:alerts");
        env::set_var("DESTINATION_PHONE_NUMBER", "+15550100");
        env::set_var("CONTACT_FLOW_ID", "flow-1234");
        env::set_var("INSTANCE_ID", "instance-1234");
        env::set_var("SOURCE_PHONE_NUMBER", "+15550199");
        env::remove_var("AUDIO_BUCKET_NAME");
    }

    let config = AppConfig::from_env().expect("all required variables are set");
    assert_eq!(config.sns_topic_arn, "arn:aws:sns:us-east-1:123456789012:alerts");
    assert_eq!(config.destination_phone_number, "+15550100");
    assert_eq!(config.contact_flow_id, "flow-1234");
    assert_eq!(config.instance_id, "instance-1234");
    assert_eq!(config.source_phone_number, "+15550199");
    assert!(
        config.audio_bucket_name.is_none(),
        "Bucket is optional and was not set"
    );

    // The audio variant requires the bucket; the error names the
    // missing variable.
    match config.audio_bucket() {
        Err(NotifierError::Config(name)) => assert_eq!(name, "AUDIO_BUCKET_NAME"),
        other => panic!("Expected a Config error, got {other:?}"),
    }

    // A missing required variable fails from_env and the message
    // names the variable.
    unsafe {
        env::remove_var("CONTACT_FLOW_ID");
    }
    let err = AppConfig::from_env().expect_err("CONTACT_FLOW_ID is missing");
    assert!(
        err.contains("CONTACT_FLOW_ID"),
        "Error should name the missing variable, got: {err}"
    );

    // With the bucket set, the audio variant's accessor succeeds.
    unsafe {
        env::set_var("CONTACT_FLOW_ID", "flow-1234");
        env::set_var("AUDIO_BUCKET_NAME", "alert-audio");
    }
    let config = AppConfig::from_env().expect("all variables are set again");
    assert_eq!(config.audio_bucket().expect("bucket is set"), "alert-audio");
}
