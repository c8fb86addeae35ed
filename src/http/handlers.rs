use crate::core::interpreter::interpret;
use crate::core::normalize::normalize;
use crate::domain::{CommandOutcome, DriverStatus, NewVehicle, Vehicle};
use crate::http::error::ApiError;
use crate::http::AppState;
use crate::utils::error::FleetError;
use crate::utils::validation::validate_coordinates;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct AddVehicleRequest {
    pub name: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub location: Option<String>,
    pub driver: Option<String>,
}

impl AddVehicleRequest {
    fn into_new_vehicle(self) -> Result<NewVehicle, FleetError> {
        let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        // the fleet keys vehicles by normalized name, so "?!" counts as missing
        let (Some(name), Some(lat), Some(lng), Some(location)) = (
            self.name.filter(|n| !normalize(n).is_empty()),
            self.lat,
            self.lng,
            non_blank(self.location),
        ) else {
            return Err(FleetError::MissingFields);
        };

        validate_coordinates("vehicle", lat, lng).map_err(|e| FleetError::ValidationError {
            message: e.user_friendly_message(),
        })?;

        Ok(NewVehicle {
            name,
            lat,
            lng,
            location,
            driver: self.driver,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddVehicleResponse {
    pub message: String,
    pub vehicle: Vehicle,
}

#[derive(Debug, Default, Deserialize)]
pub struct CommandRequest {
    #[serde(default)]
    pub transcript: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub started_at: DateTime<Utc>,
    pub vehicles: usize,
}

/// GET /api/vehicles
pub async fn list_vehicles(State(state): State<AppState>) -> Response {
    let fleet = state.fleet.read().await;
    // serialize into a local so the listing's borrow ends before the guard drops
    let response = Json(fleet.listing()).into_response();
    response
}

/// POST /api/vehicles
pub async fn add_vehicle(
    State(state): State<AppState>,
    payload: Result<Json<AddVehicleRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AddVehicleResponse>), ApiError> {
    let Json(request) = payload?;
    let new_vehicle = request.into_new_vehicle()?;

    let mut fleet = state.fleet.write().await;
    let name = fleet.upsert_vehicle(new_vehicle);
    let vehicle = fleet
        .vehicle(&name)
        .cloned()
        .ok_or_else(|| FleetError::ServerError {
            message: format!("vehicle \"{}\" missing after insert", name),
        })?;
    tracing::info!(vehicle = %name, location = %vehicle.location, "Vehicle added");

    Ok((
        StatusCode::CREATED,
        Json(AddVehicleResponse {
            message: format!("✅ Vehicle \"{}\" added successfully", name),
            vehicle,
        }),
    ))
}

/// POST /api/command
pub async fn run_command(
    State(state): State<AppState>,
    payload: Result<Json<CommandRequest>, JsonRejection>,
) -> Result<Json<CommandOutcome>, ApiError> {
    let Json(request) = payload?;
    let transcript = request.transcript.unwrap_or_default();

    let outcome = {
        let mut fleet = state.fleet.write().await;
        interpret(&mut fleet, &transcript)
    };
    tracing::info!(transcript = %transcript, output = %outcome.output, "Command handled");

    Ok(Json(outcome))
}

/// GET /api/drivers
pub async fn list_drivers(State(state): State<AppState>) -> Json<Vec<DriverStatus>> {
    let fleet = state.fleet.read().await;
    Json(fleet.drivers())
}

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let vehicles = state.fleet.read().await.vehicle_count();
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        started_at: state.started_at,
        vehicles,
    })
}

pub async fn not_found() -> ApiError {
    ApiError::not_found()
}
