use guardduty_notifier::aws::s3;
use guardduty_notifier::aws::sns::SUMMARY_SUBJECT;
use guardduty_notifier::core::models::call_placed_response;

/// Tests for the fixed pieces of the external contract: the success
/// payload, the SNS subject, and the playback URL shape.

#[test]
fn test_success_payload_is_fixed() {
    let response = call_placed_response();
    assert_eq!(
        response,
        serde_json::json!({ "statusCode": 200, "body": "Called" }),
        "Success payload should be the fixed statusCode/body pair"
    );
    assert!(
        response["body"].is_string(),
        "Body is the bare string, not nested JSON"
    );
}

#[test]
fn test_sns_subject() {
    assert_eq!(SUMMARY_SUBJECT, "GuardDuty Alert");
}

#[test]
fn test_audio_key_is_fixed() {
    assert_eq!(s3::AUDIO_KEY, "output.mp3");
}

#[test]
fn test_public_url_is_path_style() {
    assert_eq!(
        s3::public_url("alert-audio"),
        "https://s3.amazonaws.com/alert-audio/output.mp3",
        "Call flow fetches the audio over the path-style S3 URL"
    );
}
