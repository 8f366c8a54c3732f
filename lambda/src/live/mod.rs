//! Lambda handler for the live-synthesis variant: the spoken text is
//! handed to the call flow as the `messageToRead` attribute and
//! Connect synthesizes it during the call.

pub mod handler;

// Re-export the main handler for convenience
pub use handler::handler;
