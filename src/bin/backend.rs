use clap::Parser;
use temperature_relay::{
    api::{ApiConfig, ApiState, spawn_api_server},
    config::BackendConfig,
    influx::WriterHandle,
};
use tracing::{info, level_filters::LevelFilter, trace};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Parser)]
struct Args {
    /// Override the bind port (takes precedence over BACKEND_PORT)
    #[arg(short, long)]
    port: Option<u16>,
}

fn init() {
    let filter = filter::Targets::new().with_targets(vec![
        ("temperature_relay", LevelFilter::TRACE),
        ("relay_backend", LevelFilter::TRACE),
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

    let mut config = BackendConfig::from_env();
    if let Some(port) = args.port {
        config.bind_addr.set_port(port);
    }

    let writer = WriterHandle::spawn(config.influx.clone());

    let api_config = ApiConfig {
        bind_addr: config.bind_addr,
        enable_cors: true,
    };
    spawn_api_server(api_config, ApiState::new(writer.clone())).await?;

    tokio::signal::ctrl_c().await?;

    info!("shutting down, flushing pending writes");
    writer.shutdown().await?;

    Ok(())
}
