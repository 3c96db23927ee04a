pub mod api;
pub mod config;
pub mod influx;
pub mod sensor;
pub mod simulator;
pub mod util;

use serde::{Deserialize, Serialize};

/// A single temperature reading as posted by a device (or the simulator).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureReading {
    pub temperature: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
}
