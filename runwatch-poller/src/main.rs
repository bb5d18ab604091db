//! Runwatch Poller
//!
//! A test client that keeps asking the run-status server whether its run has
//! been superseded, and exits successfully once told to shut down.
//!
//! Architecture:
//! - Configuration: run number and server address from the environment
//! - Repository: HTTP access to the status server
//! - Services: injectable clock
//! - Scheduler: sleep policy and the poll loop
//!
//! Any network or parse failure ends the process with a non-zero status.
//! Command-line arguments are ignored.

mod config;
mod repository;
mod scheduler;
mod service;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::repository::{HttpStatusRepository, StatusRepository};
use crate::scheduler::{SleepPolicy, StatusPoller};
use crate::service::{Sleeper, TokioSleeper};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "runwatch_poller=info,runwatch_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Runwatch Poller");

    // Nothing touches the network until this succeeds
    let config = load_config()?;
    info!(
        "Loaded configuration: run_number={}, server={}",
        config.run_number,
        config.base_url()
    );

    let repository: Arc<dyn StatusRepository> =
        Arc::new(HttpStatusRepository::new(config.base_url()));
    let sleeper: Arc<dyn Sleeper> = Arc::new(TokioSleeper);

    let mut poller = StatusPoller::new(
        config,
        repository,
        sleeper,
        SleepPolicy::default(),
        StdRng::from_entropy(),
    );

    match poller.run().await {
        Ok(polls) => {
            info!("Exiting after {} poll(s)", polls);
            Ok(())
        }
        Err(e) => {
            error!("Poller error: {:#}", e);
            Err(e)
        }
    }
}

/// Loads configuration from environment variables
///
/// Only presence is checked. A bad host or port surfaces on the first poll.
fn load_config() -> Result<Config> {
    Config::from_env().context("Failed to load configuration")
}
