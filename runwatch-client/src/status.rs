//! Status endpoints

use crate::StatusClient;
use crate::error::Result;
use runwatch_core::dto::status::{RunStatus, StatusQuery};

impl StatusClient {
    /// Ask the server whether `run` should shut down
    ///
    /// Issues `GET {base_url}/?run={run}`.
    ///
    /// # Example
    /// ```no_run
    /// # use runwatch_client::StatusClient;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = StatusClient::new("http://localhost:8080");
    /// if client.fetch_status("42").await?.shutdown {
    ///     println!("run 42 is done");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch_status(&self, run: &str) -> Result<RunStatus> {
        let url = format!("{}/", self.base_url);
        tracing::debug!("GET {}?run={}", url, run);

        let response = self
            .client
            .get(&url)
            .query(&StatusQuery::for_run(run))
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Check that the server is up
    pub async fn health_check(&self) -> Result<()> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_empty_response(response).await
    }
}
