//! Broker source boundary
//!
//! The driving loop never talks to the Kafka client directly; it pulls
//! records through [`RecordSource`], which keeps the loop testable with an
//! in-memory source. The Kafka implementation maps the configured idle
//! timeout to exhaustion: a receive that waits out the timeout ends the run
//! rather than erroring.

use async_trait::async_trait;
use rdkafka::config::ClientConfig;
use rdkafka::consumer::{Consumer, StreamConsumer};
use rdkafka::Message;
use tracing::{debug, info};

use crate::config::InspectorConfig;
use crate::error::{InspectorError, Result};

/// One record pulled from the broker
///
/// The payload is the opaque byte sequence under inspection; partition and
/// offset are carried for diagnostics only and never appear in the printed
/// summary block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectorRecord {
    pub payload: Vec<u8>,
    pub partition: i32,
    pub offset: i64,
}

impl InspectorRecord {
    /// Record with no positional metadata, used by in-memory sources
    pub fn from_payload(payload: Vec<u8>) -> Self {
        Self {
            payload,
            partition: 0,
            offset: 0,
        }
    }
}

/// Blocking-iterable source of opaque message payloads
///
/// `Ok(None)` means the source is exhausted - for the broker-backed
/// implementation, the idle-wait elapsed with nothing left to read.
#[async_trait]
pub trait RecordSource {
    async fn next_record(&mut self) -> Result<Option<InspectorRecord>>;
}

/// Kafka-backed record source
///
/// Starts from the earliest retained offset and never commits, so repeated
/// diagnostic runs see the same messages.
pub struct KafkaRecordSource {
    consumer: StreamConsumer,
    idle_timeout: std::time::Duration,
}

impl KafkaRecordSource {
    /// Build a consumer from `config` and subscribe to its topic
    pub fn connect(config: &InspectorConfig) -> Result<Self> {
        let consumer: StreamConsumer = ClientConfig::new()
            .set("bootstrap.servers", &config.brokers)
            .set("group.id", &config.group_id)
            .set("auto.offset.reset", "earliest")
            .set("enable.auto.commit", "false")
            .create()?;

        consumer
            .subscribe(&[config.topic.as_str()])
            .map_err(|e| InspectorError::Subscribe {
                topic: config.topic.clone(),
                reason: e.to_string(),
            })?;

        info!(
            brokers = %config.brokers,
            topic = %config.topic,
            "subscribed to topic from earliest offset"
        );

        Ok(Self {
            consumer,
            idle_timeout: config.idle_timeout(),
        })
    }
}

#[async_trait]
impl RecordSource for KafkaRecordSource {
    async fn next_record(&mut self) -> Result<Option<InspectorRecord>> {
        match tokio::time::timeout(self.idle_timeout, self.consumer.recv()).await {
            Ok(Ok(message)) => {
                // Null and empty payloads both inspect as length 0
                let record = InspectorRecord {
                    payload: message.payload().unwrap_or_default().to_vec(),
                    partition: message.partition(),
                    offset: message.offset(),
                };
                debug!(
                    partition = record.partition,
                    offset = record.offset,
                    len = record.payload.len(),
                    "received record"
                );
                Ok(Some(record))
            }
            Ok(Err(e)) => Err(e.into()),
            Err(_) => {
                debug!(idle_ms = self.idle_timeout.as_millis() as u64, "idle timeout, source exhausted");
                Ok(None)
            }
        }
    }
}
