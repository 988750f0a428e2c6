use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("github error: {0}")]
    GitHub(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("logging error: {0}")]
    Logging(#[from] crate::logging::LoggingInitError),
}

pub type Result<T> = std::result::Result<T, PortfolioError>;

/// Why a single load attempt ended in `FeedState::Failed`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}
