use axum::http::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("message is required and must be a non-empty string")]
    InvalidMessage,

    #[error("upstream API key not configured")]
    ApiKeyMissing,

    #[error("authentication with the upstream API failed, check the configured key")]
    UpstreamAuth,

    #[error("upstream rate limit reached, try again later")]
    UpstreamRateLimited,

    #[error("cannot reach the upstream chat service")]
    UpstreamUnreachable,

    #[error("upstream chat service timed out")]
    UpstreamTimeout,

    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Clone for Error {
    fn clone(&self) -> Self {
        match self {
            Self::Config(s) => Self::Config(s.clone()),
            Self::InvalidMessage => Self::InvalidMessage,
            Self::ApiKeyMissing => Self::ApiKeyMissing,
            Self::UpstreamAuth => Self::UpstreamAuth,
            Self::UpstreamRateLimited => Self::UpstreamRateLimited,
            Self::UpstreamUnreachable => Self::UpstreamUnreachable,
            Self::UpstreamTimeout => Self::UpstreamTimeout,
            Self::Upstream(s) => Self::Upstream(s.clone()),
            // For errors that can't be cloned, convert to string representation
            Self::Io(e) => Self::Upstream(format!("IO error: {}", e)),
            Self::Network(e) => Self::Upstream(format!("Network error: {}", e)),
            Self::AddrParse(e) => Self::Config(format!("Address parse error: {}", e)),
        }
    }
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    /// HTTP status reported to the inbound caller for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidMessage => StatusCode::BAD_REQUEST,
            Self::UpstreamAuth => StatusCode::UNAUTHORIZED,
            Self::UpstreamRateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::UpstreamUnreachable => StatusCode::BAD_GATEWAY,
            Self::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
