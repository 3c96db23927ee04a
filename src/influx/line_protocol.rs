//! Minimal line protocol support
//!
//! Only what the relay needs: a measurement with a single float field and a
//! nanosecond timestamp. Tags are not used.

use chrono::{DateTime, Utc};

/// A single data point, rendered as one line of InfluxDB line protocol
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    measurement: String,
    field_key: String,
    field_value: f64,
    timestamp: DateTime<Utc>,
}

impl Point {
    /// Create a point with the current time as its timestamp
    pub fn new(measurement: &str, field_key: &str, field_value: f64) -> Self {
        Self {
            measurement: measurement.to_string(),
            field_key: field_key.to_string(),
            field_value,
            timestamp: Utc::now(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Render with nanosecond precision (`precision=ns` on the write request)
    pub fn to_line(&self) -> String {
        format!(
            "{} {}={} {}",
            escape_measurement(&self.measurement),
            escape_key(&self.field_key),
            self.field_value,
            // out of range only past the year 2262
            self.timestamp.timestamp_nanos_opt().unwrap_or_default()
        )
    }
}

fn escape_measurement(s: &str) -> String {
    s.replace(',', "\\,").replace(' ', "\\ ")
}

fn escape_key(s: &str) -> String {
    s.replace(',', "\\,").replace('=', "\\=").replace(' ', "\\ ")
}
