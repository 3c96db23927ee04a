//! Temperature random walk for the fake sensor
//!
//! Readings drift by at most [`TEMP_VARIATION`] per step and never leave the
//! configured bounds.

use rand::Rng;

pub const MIN_TEMP: f64 = 18.0;

pub const MAX_TEMP: f64 = 25.0;

/// Maximum variation between consecutive readings
pub const TEMP_VARIATION: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct TemperatureSimulator {
    min_temp: f64,
    max_temp: f64,
    current: f64,
}

impl TemperatureSimulator {
    /// Seed the walk uniformly within `[min_temp, max_temp]`
    pub fn new(min_temp: f64, max_temp: f64) -> Self {
        let current = rand::thread_rng().gen_range(min_temp..=max_temp);

        Self {
            min_temp,
            max_temp,
            current,
        }
    }

    /// Advance the walk and return the reading, rounded to two decimals
    pub fn next_reading(&mut self) -> f64 {
        let variation = rand::thread_rng().gen_range(-TEMP_VARIATION..=TEMP_VARIATION);
        self.current = (self.current + variation).clamp(self.min_temp, self.max_temp);

        (self.current * 100.0).round() / 100.0
    }
}

impl Default for TemperatureSimulator {
    fn default() -> Self {
        Self::new(MIN_TEMP, MAX_TEMP)
    }
}
