//! Status repository
//!
//! Fetches the run status for this poller's run from the status server.

use anyhow::{Context, Result};
use async_trait::async_trait;
use runwatch_client::StatusClient;
use runwatch_core::dto::status::RunStatus;

/// Repository trait for status queries
#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// Asks whether `run` should shut down
    ///
    /// Network failures, non-success responses and unparsable bodies are
    /// all returned as errors.
    async fn fetch_status(&self, run: &str) -> Result<RunStatus>;
}

/// HTTP implementation of StatusRepository
pub struct HttpStatusRepository {
    client: StatusClient,
}

impl HttpStatusRepository {
    /// Creates a new HTTP status repository
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the status server (e.g., "http://svc:8080")
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: StatusClient::new(base_url),
        }
    }
}

#[async_trait]
impl StatusRepository for HttpStatusRepository {
    async fn fetch_status(&self, run: &str) -> Result<RunStatus> {
        self.client.fetch_status(run).await.with_context(|| {
            format!(
                "Failed to fetch status for run {} from {}",
                run,
                self.client.base_url()
            )
        })
    }
}
