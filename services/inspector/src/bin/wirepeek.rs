//! Payload framing inspector binary

use anyhow::Result;
use clap::Parser;
use tracing::info;
use wirepeek_inspector::{inspect, InspectorConfig, KafkaRecordSource};

/// Read a handful of messages from a Kafka topic and print their raw byte
/// layout for manual inspection.
#[derive(Debug, Parser)]
#[command(name = "wirepeek", version)]
struct Args {
    /// Kafka bootstrap servers, comma separated
    #[arg(long)]
    brokers: Option<String>,

    /// Topic to inspect
    #[arg(long)]
    topic: Option<String>,

    /// Consumer group id
    #[arg(long)]
    group_id: Option<String>,

    /// Stop after this many messages
    #[arg(long)]
    max_messages: Option<usize>,

    /// Give up after this long with nothing left to read
    #[arg(long)]
    idle_timeout_ms: Option<u64>,
}

impl Args {
    fn into_config(self) -> InspectorConfig {
        let mut config = InspectorConfig::default();
        if let Some(brokers) = self.brokers {
            config.brokers = brokers;
        }
        if let Some(topic) = self.topic {
            config.topic = topic;
        }
        if let Some(group_id) = self.group_id {
            config.group_id = group_id;
        }
        if let Some(max_messages) = self.max_messages {
            config.max_messages = max_messages;
        }
        if let Some(idle_timeout_ms) = self.idle_timeout_ms {
            config.idle_timeout_ms = idle_timeout_ms;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wirepeek_inspector=debug".parse()?),
        )
        .init();

    let config = Args::parse().into_config();

    info!(
        brokers = %config.brokers,
        topic = %config.topic,
        max_messages = config.max_messages,
        "starting payload inspection"
    );

    let mut source = KafkaRecordSource::connect(&config)?;
    let mut stdout = std::io::stdout();

    let inspected = inspect::run(&mut source, config.max_messages, &mut stdout).await?;

    info!(inspected, "inspection finished");

    Ok(())
}
