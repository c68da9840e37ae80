use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Empty response from model")]
    EmptyResponse,

    #[error("Response format error: {0}")]
    ResponseFormat(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("AI provider error: {0}")]
    AiProvider(String),

    #[error("Publish error: {0}")]
    Publish(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether a failure is worth retrying.
    ///
    /// Only failures talking to the remote model qualify; bad input, bad
    /// configuration and malformed responses are deterministic.
    pub fn is_transient(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::AiProvider(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(Error::Transport("connection reset".into()).is_transient());
        assert!(Error::AiProvider("overloaded".into()).is_transient());

        assert!(!Error::Config("API key is required".into()).is_transient());
        assert!(!Error::InvalidInput("content is empty".into()).is_transient());
        assert!(!Error::EmptyResponse.is_transient());
        assert!(!Error::ResponseFormat("missing title".into()).is_transient());
    }

    #[test]
    fn test_config_error_message() {
        let err = Error::Config("API key is required".into());
        assert_eq!(err.to_string(), "Configuration error: API key is required");
    }
}
