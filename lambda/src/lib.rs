//! GuardDuty phone-call notifier.
//!
//! This crate implements a pair of Lambda functions that relay a
//! GuardDuty finding (delivered via EventBridge) to humans:
//! 1. A text summary is published to an SNS topic for email fan-out.
//! 2. An outbound phone call is placed through Amazon Connect that
//!    reads the finding aloud.
//!
//! The two binaries differ only in how the spoken audio is produced:
//! - `notifier-live` hands the text to the call flow as the
//!   `messageToRead` attribute and Connect synthesizes it on the call.
//! - `notifier-audio` pre-synthesizes an MP3 with Polly, hosts it in
//!   S3, and hands the call flow a playback URL (`s3AudioUrl`).
//!
//! # Example
//!
//! The account id is spelled out digit by digit so the call flow's
//! speech synthesis reads it unambiguously:
//!
//! ```
//! use guardduty_notifier::message::spell_digits;
//!
//! let words = spell_digits("482").unwrap();
//! assert_eq!(words, "four eight two");
//! ```

// Module declarations
pub mod audio;
pub mod aws;
pub mod core;
pub mod errors;
pub mod live;
pub mod message;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called at the start of each Lambda
/// handler.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
