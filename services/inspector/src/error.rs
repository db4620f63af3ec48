//! Error types for the inspector service

use thiserror::Error;

/// Result type alias for inspector operations
pub type Result<T> = std::result::Result<T, InspectorError>;

/// Main error type for inspector operations
///
/// Failures in the broker client propagate unhandled to the caller; the
/// inspector adds no retry or recovery on top of them. Decoding itself has
/// no error variants - a short payload just produces a shorter summary.
#[derive(Debug, Error)]
pub enum InspectorError {
    /// Consumer creation or receive failure surfaced by the Kafka client
    #[error("Kafka client error: {0}")]
    Kafka(#[from] rdkafka::error::KafkaError),

    /// Topic subscription failure
    #[error("Subscription failed for topic {topic}: {reason}")]
    Subscribe {
        /// The topic that could not be subscribed
        topic: String,
        /// Reason reported by the client
        reason: String,
    },

    /// Failure writing a summary block to the output
    #[error("Failed to write summary: {0}")]
    Io(#[from] std::io::Error),
}
