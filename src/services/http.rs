// src/services/http.rs
// DOCUMENTATION: Shared plumbing for third-party API clients

use crate::errors::ExternalApiError;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Timeout for weather, routing and flight lookups
pub const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for generative AI calls
pub const AI_TIMEOUT: Duration = Duration::from_secs(30);

/// Build one reusable HTTP client with a fixed request timeout
pub fn build_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Reject non-2xx responses, then decode the JSON body
pub async fn decode_json<T: DeserializeOwned>(
    service: &str,
    response: Response,
) -> Result<T, ExternalApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        log::debug!("{} error {}: {}", service, status, body);
        return Err(ExternalApiError::Status(status));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ExternalApiError::Payload(format!("{}: {}", service, e)))
}
