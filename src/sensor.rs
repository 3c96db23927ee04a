//! Sensor loop that pushes readings to the backend
//!
//! A single sequential loop: generate a value, POST it, sleep, repeat.
//! Failed sends are logged and the reading dropped; the loop carries on after
//! the normal interval.

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{error, info, instrument};

use crate::{TemperatureReading, config::SensorConfig, simulator::TemperatureSimulator};

/// Per-request deadline for posting a reading
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// POST a single reading to the backend
pub async fn send_reading(client: &reqwest::Client, url: &str, temperature: f64) -> Result<()> {
    let payload = TemperatureReading { temperature };

    let response = client
        .post(url)
        .json(&payload)
        .send()
        .await
        .context("failed to send HTTP request")?;

    if !response.status().is_success() {
        anyhow::bail!("HTTP error: {}", response.status());
    }

    Ok(())
}

#[instrument(skip_all)]
pub async fn run_sensor(config: SensorConfig) {
    let SensorConfig {
        backend_url,
        send_interval,
    } = config;

    info!("starting fake temperature sensor");
    info!("backend URL: {backend_url}");
    info!("send interval: {}s", send_interval.as_secs());

    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .expect("Failed to build HTTP client");

    let mut simulator = TemperatureSimulator::default();

    loop {
        let temperature = simulator.next_reading();
        info!("sending temperature: {temperature}°C");

        match send_reading(&client, &backend_url, temperature).await {
            Ok(()) => info!("successfully sent temperature {temperature}"),
            Err(e) => error!("failed to send temperature data: {e:#}"),
        }

        tokio::time::sleep(send_interval).await;
    }
}
