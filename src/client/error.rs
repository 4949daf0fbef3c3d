use thiserror::Error;

/// Failures talking to the catalog API. Views collapse all of these into a
/// single user-facing message; the detail is only logged.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid API base URL '{0}'")]
    InvalidBaseUrl(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("product '{0}' not found")]
    NotFound(String),

    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },
}
