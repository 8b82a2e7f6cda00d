use std::time::Duration;

use log::error;
use reqwest::{Client, Method, Response};

use crate::error::ApiError;

pub mod participants;
pub mod statistics;
pub mod votes;
pub mod voting_events;

/// Handle to the polling REST API. Cheap to clone: the inner client is
/// reference counted.
#[derive(Clone, Debug)]
pub struct Api {
    client: Client,
    base_url: String,
}

impl Api {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }
}

/// Turns any non-2xx response into [`ApiError::Status`].
pub(crate) fn ensure_success(
    resp: Response,
    method: Method,
    url: &str,
) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        error!("{} {} failed with status {}", method, url, status);
        Err(ApiError::Status {
            method,
            url: url.to_owned(),
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let api = Api::with_client(Client::new(), "http://localhost:8080/");
        assert_eq!(api.base_url(), "http://localhost:8080");
        assert_eq!(api.url("/votos"), "http://localhost:8080/votos");
    }
}
