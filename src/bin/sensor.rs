use std::time::Duration;

use clap::Parser;
use temperature_relay::{config::SensorConfig, sensor::run_sensor};
use tracing::{level_filters::LevelFilter, trace};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Parser)]
struct Args {
    /// Override the backend URL (takes precedence over BACKEND_URL)
    #[arg(short, long)]
    url: Option<String>,

    /// Override the send interval in seconds (takes precedence over SEND_INTERVAL)
    #[arg(short, long)]
    interval: Option<u64>,
}

fn init() {
    let filter = filter::Targets::new().with_targets(vec![
        ("temperature_relay", LevelFilter::TRACE),
        ("relay_sensor", LevelFilter::TRACE),
    ]);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .compact()
                .with_ansi(false),
        )
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init();
    let args = Args::parse();
    trace!("started with args: {args:?}");

    let mut config = SensorConfig::from_env();
    if let Some(url) = args.url {
        config.backend_url = url;
    }
    if let Some(interval) = args.interval {
        config.send_interval = Duration::from_secs(interval);
    }

    run_sensor(config).await;

    Ok(())
}
