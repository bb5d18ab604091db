//! Status DTOs
//!
//! Query and response types for `GET /?run=<n>`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

/// Query string sent by a poller
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusQuery {
    /// Run identifier the poller is processing data for
    pub run: Option<String>,
}

impl StatusQuery {
    pub fn for_run(run: impl Into<String>) -> Self {
        Self {
            run: Some(run.into()),
        }
    }
}

/// Response from the status endpoint
///
/// Only `shutdown` is consumed by pollers. The server also reports how many
/// status calls it has answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStatus {
    /// Whether the poller should stop and exit
    #[serde(deserialize_with = "deserialize_truthy")]
    pub shutdown: bool,

    /// Total number of status calls answered by the server
    #[serde(
        rename = "totalCalls",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub total_calls: Option<u64>,
}

impl RunStatus {
    pub fn running() -> Self {
        Self {
            shutdown: false,
            total_calls: None,
        }
    }

    pub fn shutdown() -> Self {
        Self {
            shutdown: true,
            total_calls: None,
        }
    }

    pub fn with_total_calls(mut self, total_calls: u64) -> Self {
        self.total_calls = Some(total_calls);
        self
    }
}

/// Reads any JSON value as a flag.
///
/// `false`, `null`, zero, the empty string and empty containers are false;
/// everything else is true.
fn deserialize_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = JsonValue::deserialize(deserializer)?;
    Ok(is_truthy(&value))
}

fn is_truthy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(items) => !items.is_empty(),
        JsonValue::Object(fields) => !fields.is_empty(),
    }
}
