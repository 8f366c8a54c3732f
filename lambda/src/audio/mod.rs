//! Lambda handler for the pre-synthesized variant: the spoken text is
//! rendered to MP3 with Polly, hosted in S3, and the call flow plays
//! back the `s3AudioUrl` attribute.

pub mod handler;

// Re-export the main handler for convenience
pub use handler::handler;

/// Scratch location for the synthesized audio before upload. `/tmp`
/// is the only writable path in the Lambda environment; concurrent
/// invocations race on it, same as on the S3 key.
pub const SCRATCH_PATH: &str = "/tmp/output.mp3";
