//! Route handlers for the relay backend

use axum::{Json, extract::State};

use crate::{
    StatusResponse, TemperatureReading, WelcomeResponse,
    api::{
        error::{ApiError, ApiResult},
        state::ApiState,
    },
    influx::Point,
};

/// Measurement every reading is written under
pub const MEASUREMENT: &str = "temperature_reading";

/// Field key of the single float field
pub const FIELD_KEY: &str = "value";

/// GET /
///
/// Static welcome message
pub async fn home() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the temperature metrics backend!".to_string(),
    })
}

/// POST /metrics/temperature
///
/// Receives temperature data from a device and hands it to the writer.
/// Malformed bodies never reach this handler; the `Json` extractor rejects
/// them with a client error.
pub async fn receive_temperature(
    State(state): State<ApiState>,
    Json(reading): Json<TemperatureReading>,
) -> ApiResult<Json<StatusResponse>> {
    let point = Point::new(MEASUREMENT, FIELD_KEY, reading.temperature);

    state
        .writer
        .write(point)
        .await
        .map_err(|e| ApiError::WriterUnavailable(e.to_string()))?;

    Ok(Json(StatusResponse {
        status: "success".to_string(),
        message: "Temperature data recorded.".to_string(),
    }))
}
