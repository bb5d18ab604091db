//! Poller configuration
//!
//! Everything the poller needs is read once from the environment at startup
//! and handed to the poll loop as an immutable value.

/// Environment variable holding the run identifier
pub const RUN_NUMBER_VAR: &str = "RUN_NUMBER";

/// Environment variable holding the status server host
pub const HOST_VAR: &str = "WEBSERVER_SERVICE_SERVICE_HOST";

/// Environment variable holding the status server port
pub const PORT_VAR: &str = "WEBSERVER_SERVICE_SERVICE_PORT";

/// Poller configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Run this poller is processing data for
    pub run_number: String,

    /// Status server host
    pub host: String,

    /// Status server port
    pub port: String,
}

impl Config {
    #[allow(dead_code)]
    pub fn new(
        run_number: impl Into<String>,
        host: impl Into<String>,
        port: impl Into<String>,
    ) -> Self {
        Self {
            run_number: run_number.into(),
            host: host.into(),
            port: port.into(),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables (all required):
    /// - RUN_NUMBER
    /// - WEBSERVER_SERVICE_SERVICE_HOST
    /// - WEBSERVER_SERVICE_SERVICE_PORT
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| {
            lookup(key).ok_or_else(|| anyhow::anyhow!("{} environment variable not set", key))
        };

        Ok(Self {
            run_number: require(RUN_NUMBER_VAR)?,
            host: require(HOST_VAR)?,
            port: require(PORT_VAR)?,
        })
    }

    /// Base URL of the status server (e.g., "http://svc:8080")
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Full status URL polled each iteration
    pub fn status_url(&self) -> String {
        format!("{}/?run={}", self.base_url(), self.run_number)
    }
}
