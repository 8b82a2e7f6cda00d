use reqwest::{Method, StatusCode};
use thiserror::Error;

/// Failure of a single REST call. The response body of a failed call is never
/// inspected, so a non-2xx status carries no detail beyond the code itself.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{method} {url} returned {status}")]
    Status {
        method: Method,
        url: String,
        status: StatusCode,
    },
}
