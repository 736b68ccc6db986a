use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("Invalid timestamp '{0}'")]
    InvalidTimestamp(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Invalid time range: from {from} is after to {to}")]
    InvalidWindow { from: String, to: String },

    #[error("IO error: {0}")]
    IO(String),

    #[error("General error: {0}")]
    Other(String),
}

impl Error {
    /// Errors caused by the caller's input rather than by the service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidTimestamp(_) | Error::InvalidQuery(_) | Error::InvalidWindow { .. }
        )
    }

    /// Message reported to callers. Server-side failures pass the underlying
    /// message through without the variant prefix.
    pub fn message(&self) -> String {
        match self {
            Error::Config(msg)
            | Error::Store(msg)
            | Error::Json(msg)
            | Error::IO(msg)
            | Error::Other(msg) => msg.clone(),
            _ => self.to_string(),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Store(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IO(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}
