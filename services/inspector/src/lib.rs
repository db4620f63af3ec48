//! Kafka payload framing inspector service
//!
//! Boundary glue around the `codec` crate: connects to a broker topic,
//! pulls a bounded number of messages, and prints each payload's framing
//! summary to standard output. The broker is treated purely as a source of
//! opaque byte sequences - all protocol handling lives in the client
//! library, all decoding rules live in `codec`.

pub mod config;
pub mod error;
pub mod inspect;
pub mod source;

pub use config::InspectorConfig;
pub use error::{InspectorError, Result};
pub use source::{InspectorRecord, KafkaRecordSource, RecordSource};
