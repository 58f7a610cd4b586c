//! Refill Server API Client
//!
//! Thin reqwest wrapper over the calls an agent makes. Every failure maps
//! to `ClientError` and the caller retries on a later poll cycle; nothing
//! in here is fatal.

use std::time::Duration;

use serde::Deserialize;
use shared::api::AckResult;
use shared::models::{RefillRequest, Store};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    Api { status: u16, message: String },
}

pub type ClientResult<T> = Result<T, ClientError>;

// Error envelope body; only failures are wrapped.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// `base_url` like `http://refills.internal:8080` (trailing slash ok).
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Pending requests for one store, oldest first.
    pub async fn pending(&self, store_id: i64) -> ClientResult<Vec<RefillRequest>> {
        let url = format!("{}/api/refills/pending/{store_id}", self.base_url);
        Self::parse(self.http.get(&url).send().await?).await
    }

    /// Ack a printed request. `changed: false` means the row was already
    /// printed (retried ack, or a second agent on the same store).
    pub async fn ack_printed(&self, id: i64) -> ClientResult<AckResult> {
        let url = format!("{}/api/refills/{id}/printed", self.base_url);
        Self::parse(self.http.post(&url).send().await?).await
    }

    /// Store directory lookup, used to resolve the printer at startup.
    pub async fn store(&self, id: i64) -> ClientResult<Store> {
        let url = format!("{}/api/stores/{id}", self.base_url);
        Self::parse(self.http.get(&url).send().await?).await
    }

    async fn parse<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://127.0.0.1:8080/").unwrap();
        assert_eq!(client.base_url, "http://127.0.0.1:8080");
    }
}
