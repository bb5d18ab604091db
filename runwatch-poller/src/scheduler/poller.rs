//! Status poller
//!
//! Asks the status server whether this run should shut down, sleeping a
//! randomized interval between calls. Requests never overlap.

use anyhow::Result;
use rand::Rng;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::Config;
use crate::repository::StatusRepository;
use crate::scheduler::policy::SleepPolicy;
use crate::service::Sleeper;

/// Poller lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollerState {
    /// Still waiting for the server to request shutdown
    Polling,
    /// Shutdown was requested, terminal
    Done,
}

/// Polls the status server until it requests shutdown
pub struct StatusPoller<R> {
    config: Config,
    repository: Arc<dyn StatusRepository>,
    sleeper: Arc<dyn Sleeper>,
    policy: SleepPolicy,
    rng: R,
    state: PollerState,
    polls: u64,
}

impl<R: Rng> StatusPoller<R> {
    /// Creates a new status poller
    pub fn new(
        config: Config,
        repository: Arc<dyn StatusRepository>,
        sleeper: Arc<dyn Sleeper>,
        policy: SleepPolicy,
        rng: R,
    ) -> Self {
        Self {
            config,
            repository,
            sleeper,
            policy,
            rng,
            state: PollerState::Polling,
            polls: 0,
        }
    }

    #[allow(dead_code)]
    pub fn state(&self) -> PollerState {
        self.state
    }

    /// Number of status calls that returned a response
    #[allow(dead_code)]
    pub fn polls(&self) -> u64 {
        self.polls
    }

    /// Runs until shutdown is requested
    ///
    /// Returns the number of successful polls. The first error ends the
    /// loop without sleeping or polling again.
    pub async fn run(&mut self) -> Result<u64> {
        info!("Polling {}", self.config.status_url());

        while self.poll_once().await? == PollerState::Polling {
            let delay = self.policy.next_delay(&mut self.rng);
            debug!("Shutdown not requested, sleeping {:?}", delay);
            self.sleeper.sleep(delay).await;
        }

        info!(
            "Shutdown requested for run {} after {} poll(s)",
            self.config.run_number, self.polls
        );

        Ok(self.polls)
    }

    /// Performs a single status call and applies the result
    pub async fn poll_once(&mut self) -> Result<PollerState> {
        if self.state == PollerState::Done {
            return Ok(PollerState::Done);
        }

        let status = self
            .repository
            .fetch_status(&self.config.run_number)
            .await?;
        self.polls += 1;

        debug!(
            "Poll {} for run {}: shutdown={}",
            self.polls, self.config.run_number, status.shutdown
        );

        if status.shutdown {
            self.state = PollerState::Done;
        }

        Ok(self.state)
    }
}
