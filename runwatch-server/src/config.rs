//! Configuration module
//!
//! Server settings, read from command-line flags or the environment.

use clap::Parser;

/// Server configuration
#[derive(Debug, Clone, Parser)]
#[command(name = "runwatch-server")]
#[command(about = "Run-status server for runwatch pollers", long_about = None)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "RUNWATCH_BIND_ADDR", default_value = "0.0.0.0:8080")]
    pub bind_addr: String,

    /// Run number considered the latest before any poller reports in
    #[arg(
        long,
        env = "RUNWATCH_INITIAL_RUN",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub initial_run: i64,
}
