use super::error_response::ErrorResponse;
use super::models::{StatusResponse, TimeResponse};
use crate::domain::device::{DeviceAddress, DeviceRecord, DeviceRegistry};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use chrono::{Local, SecondsFormat, Utc};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Shared state handed to every handler.
///
/// The registry is constructed in `main` and injected here; handlers never
/// reach for process-global state.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<dyn DeviceRegistry>,
}

impl AppState {
    pub fn new(registry: Arc<dyn DeviceRegistry>) -> Self {
        Self { registry }
    }
}

/// Register a device, or replace its record if the address is already known.
pub async fn register_device(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<StatusResponse>, ErrorResponse> {
    // A missing, empty, or malformed body never reaches the registry
    let Json(payload) = payload.map_err(|e| {
        warn!("Rejected registration body: {e}");
        ErrorResponse::bad_request("Request body must be a JSON object")
    })?;

    let Value::Object(fields) = payload else {
        warn!("Rejected registration body: not a JSON object");
        return Err(ErrorResponse::bad_request(
            "Request body must be a JSON object",
        ));
    };

    let address = match fields.get("ip_address").and_then(Value::as_str) {
        Some(ip) => DeviceAddress::new(ip),
        None => {
            warn!("Rejected registration: no ip_address field");
            return Err(ErrorResponse::bad_request("ip_address is required"));
        }
    };

    let record = DeviceRecord::new(address.clone(), fields);
    state.registry.upsert(record).await.map_err(|e| {
        error!("Failed to store record for {address}: {e}");
        ErrorResponse::internal()
    })?;

    info!("Device registered: {address}");
    Ok(Json(StatusResponse::success(
        "Device registered successfully",
    )))
}

/// All registered devices, most recent record per address.
pub async fn list_devices(
    State(state): State<AppState>,
) -> Result<Json<Vec<DeviceRecord>>, ErrorResponse> {
    let devices = state.registry.list().await.map_err(|e| {
        error!("Failed to read device records: {e}");
        ErrorResponse::internal()
    })?;

    Ok(Json(devices))
}

/// Current server time.
///
/// `local`, `timezone`, and `offset` follow the `TZ` environment variable
/// the deployment exports before startup.
pub async fn server_time() -> Json<TimeResponse> {
    let utc = Utc::now();
    let local = utc.with_timezone(&Local);

    Json(TimeResponse {
        iso: utc.to_rfc3339_opts(SecondsFormat::Millis, true),
        local: local.format("%Y-%m-%d %H:%M:%S").to_string(),
        timezone: std::env::var("TZ").unwrap_or_else(|_| "UTC".to_string()),
        timestamp: utc.timestamp_millis(),
        offset: local.offset().local_minus_utc() / 60,
    })
}
