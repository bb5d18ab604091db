//! Runwatch HTTP Client
//!
//! A small, type-safe HTTP client for the run-status server.
//!
//! Pollers use it to ask the server whether the run they are processing data
//! for has been superseded.
//!
//! # Example
//!
//! ```no_run
//! use runwatch_client::StatusClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = StatusClient::new("http://localhost:8080");
//!
//!     let status = client.fetch_status("42").await?;
//!     println!("shutdown requested: {}", status.shutdown);
//!     Ok(())
//! }
//! ```

pub mod error;
mod status;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use runwatch_core::dto::status::RunStatus;

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the run-status server
#[derive(Debug, Clone)]
pub struct StatusClient {
    /// Base URL of the server (e.g., "http://localhost:8080")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl StatusClient {
    /// Create a new status client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the status server (e.g., "http://localhost:8080")
    ///
    /// # Example
    /// ```
    /// use runwatch_client::StatusClient;
    ///
    /// let client = StatusClient::new("http://localhost:8080");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Get the base URL of the status server
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle a response and deserialize its JSON body
    ///
    /// Any non-success status is an error, whatever the body contains.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        let body = response.text().await?;

        serde_json::from_str(&body)
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle a response that carries no meaningful body
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(())
    }
}
