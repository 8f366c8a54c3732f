use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifierError {
    #[error("Missing configuration: {0}")]
    Config(String),

    #[error("Account id contains a non-digit character: '{0}'")]
    NonDigit(char),

    #[error("Failed to interact with AWS services: {0}")]
    Aws(String),

    #[error("Speech synthesis failed: {0}")]
    Synthesis(String),

    #[error("Failed to write audio scratch file: {0}")]
    Io(String),

    #[error("Uploaded audio never became visible: {0}")]
    AudioUnavailable(String),
}

impl From<std::io::Error> for NotifierError {
    fn from(error: std::io::Error) -> Self {
        NotifierError::Io(error.to_string())
    }
}
