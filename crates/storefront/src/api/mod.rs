//! REST clients for the Oakleaf backend API.
//!
//! # Architecture
//!
//! - One shared [`ApiClient`] owns the `reqwest` client and base URL
//! - Thin per-concern clients wrap it: [`CatalogClient`], [`FormDataClient`],
//!   [`CheckoutClient`]
//! - List payloads follow the backend's envelope convention: the element
//!   array is nested under `_embedded.<rel>`, paginated payloads additionally
//!   carry a `page` metadata object
//!
//! No responses are cached; every call is a fresh request/response exchange.

mod catalog;
mod checkout;
pub(crate) mod reference;

pub use catalog::CatalogClient;
pub use checkout::CheckoutClient;
pub use reference::FormDataClient;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::StoreConfig;

/// Errors that can occur when talking to the backend API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Shared HTTP client for the backend API.
///
/// Cheaply cloneable; all per-concern clients hold a clone.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client against the configured backend.
    #[must_use]
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            inner: Arc::new(ApiClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.clone(),
            }),
        }
    }

    fn endpoint(&self, path_and_query: &str) -> String {
        format!("{}/{path_and_query}", self.inner.base_url)
    }

    /// GET a JSON resource relative to the base URL.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path_and_query: &str,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path_and_query);
        let response = self.inner.client.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(path_and_query.to_string()));
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        // Read the body as text first for better parse diagnostics
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(500).collect::<String>(),
                "Failed to parse backend response"
            );
            ApiError::Parse(e)
        })
    }

    /// POST a JSON body and deserialize the JSON response.
    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path);
        let response = self.inner.client.post(&url).json(body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(500).collect::<String>(),
                "Failed to parse backend response"
            );
            ApiError::Parse(e)
        })
    }
}
