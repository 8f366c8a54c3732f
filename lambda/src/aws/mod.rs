//! Thin wrappers around the managed services this relay talks to:
//! SNS (summary fan-out), Connect (outbound call), and for the audio
//! variant Polly (speech synthesis) and S3 (audio hosting).

pub mod connect;
pub mod polly;
pub mod s3;
pub mod sns;
