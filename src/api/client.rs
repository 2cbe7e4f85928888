//! HTTP client for the upstream user directory.

use reqwest::Client;
use thiserror::Error;

use crate::api::types::UserRecord;

/// The fixed public endpoint serving the user collection.
pub const USERS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Errors that can occur while loading the user collection.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level failure (DNS, connect, read).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-2xx status.
    #[error("HTTP {status}")]
    Status { status: u16 },

    /// Response body was not a valid user array.
    #[error("invalid response body: {0}")]
    Decode(#[source] reqwest::Error),

    /// Fetch machinery failed before a request could be issued.
    #[error("internal error: {0}")]
    Internal(String),
}

pub struct DirectoryClient {
    client: Client,
    users_url: String,
}

impl DirectoryClient {
    pub fn new() -> Self {
        Self::with_base_url(USERS_ENDPOINT)
    }

    /// Point the client at a different endpoint. Used by tests to target a
    /// local mock server.
    pub fn with_base_url(users_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            users_url: users_url.into(),
        }
    }

    /// Fetch the full user collection, preserving server-provided order.
    pub async fn fetch_users(&self) -> Result<Vec<UserRecord>, FetchError> {
        let response = self.client.get(&self.users_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<Vec<UserRecord>>()
            .await
            .map_err(FetchError::Decode)
    }
}

impl Default for DirectoryClient {
    fn default() -> Self {
        Self::new()
    }
}
