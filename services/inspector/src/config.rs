//! Configuration for the payload inspector

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Inspection run configuration
///
/// Defaults are the values the diagnostic actually runs with against a
/// local broker; each field can be overridden from the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectorConfig {
    /// Kafka bootstrap servers, comma separated
    pub brokers: String,

    /// Topic to inspect
    pub topic: String,

    /// Consumer group id - a diagnostic group, offsets are never committed
    pub group_id: String,

    /// Stop after this many messages
    pub max_messages: usize,

    /// Give up after this long with nothing left to read
    pub idle_timeout_ms: u64,
}

impl InspectorConfig {
    /// Idle-wait duration before the source is considered exhausted
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_millis(self.idle_timeout_ms)
    }
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            brokers: "localhost:9092".to_string(),
            topic: "kvackalnica.user_events".to_string(),
            group_id: "wirepeek-inspector".to_string(),
            max_messages: 3,
            idle_timeout_ms: 2000,
        }
    }
}
