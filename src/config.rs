use std::net::SocketAddr;
use std::time::Duration;

use tracing::trace;

use crate::util::{env_or, get_addr, get_port};

/// Connection settings for the InfluxDB 2.x instance the backend writes to
#[derive(Debug, Clone)]
pub struct InfluxConfig {
    /// Base URL of the database (e.g. `http://localhost:8086`)
    pub host: String,

    /// API token passed as `Authorization: Token ...`
    pub token: String,

    pub org: String,

    pub bucket: String,
}

impl InfluxConfig {
    pub fn from_env() -> Self {
        let config = Self {
            host: env_or("INFLUXDB_HOST", "http://localhost:8086"),
            token: env_or("INFLUXDB_TOKEN", "your_influxdb_token"),
            org: env_or("INFLUXDB_ORG", "your_organization_name"),
            bucket: env_or("INFLUXDB_BUCKET", "temperature_metrics"),
        };
        trace!("loaded influx config for {} ({})", config.host, config.bucket);
        config
    }
}

#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub bind_addr: SocketAddr,

    pub influx: InfluxConfig,
}

impl BackendConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: SocketAddr::from((get_addr(), get_port())),
            influx: InfluxConfig::from_env(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SensorConfig {
    /// Full URL of the backend endpoint readings are posted to
    pub backend_url: String,

    /// Pause between consecutive readings
    pub send_interval: Duration,
}

impl SensorConfig {
    pub fn from_env() -> Self {
        let interval_secs = std::env::var("SEND_INTERVAL")
            .map_or(DEFAULT_SEND_INTERVAL, |res| {
                res.parse().unwrap_or(DEFAULT_SEND_INTERVAL)
            });

        Self {
            backend_url: env_or("BACKEND_URL", "http://localhost:8000/metrics/temperature"),
            send_interval: Duration::from_secs(interval_secs),
        }
    }
}

const DEFAULT_SEND_INTERVAL: u64 = 5;
