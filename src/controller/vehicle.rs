use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::catalog::vehicle::VehicleRepository,
    error::Error,
    model::{
        api::ErrorDto,
        app::AppState,
        catalog::{CreateVehicleDto, VehicleDto},
    },
    service::catalog::vehicle::VehicleService,
};

pub static VEHICLE_TAG: &str = "vehicle";

/// Get all vehicles
#[utoipa::path(
    get,
    path = "/api/vehicles",
    tag = VEHICLE_TAG,
    responses(
        (status = 200, description = "Success when retrieving vehicles", body = Vec<VehicleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicles(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let vehicle_repository = VehicleRepository::new(&state.db);

    let vehicles = vehicle_repository.get_all().await?;

    let vehicle_dtos: Vec<VehicleDto> = vehicles.into_iter().map(VehicleDto::from).collect();

    Ok((StatusCode::OK, Json(vehicle_dtos)).into_response())
}

/// Get a single vehicle by id
#[utoipa::path(
    get,
    path = "/api/vehicles/{vehicle_id}",
    tag = VEHICLE_TAG,
    params(
        ("vehicle_id" = i32, Path, description = "Id of the vehicle to retrieve")
    ),
    responses(
        (status = 200, description = "Success when retrieving the vehicle", body = VehicleDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let vehicle_repository = VehicleRepository::new(&state.db);

    let vehicle = vehicle_repository
        .get_by_id(vehicle_id)
        .await?
        .ok_or(Error::NotFound("vehicle"))?;

    Ok((StatusCode::OK, Json(VehicleDto::from(vehicle))).into_response())
}

/// Create a vehicle
#[utoipa::path(
    post,
    path = "/api/vehicles",
    tag = VEHICLE_TAG,
    request_body = CreateVehicleDto,
    responses(
        (status = 201, description = "Vehicle created", body = VehicleDto),
        (status = 400, description = "Missing or malformed request body", body = ErrorDto),
        (status = 409, description = "A vehicle with the same name exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_vehicle(
    State(state): State<AppState>,
    body: Result<Json<CreateVehicleDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(vehicle) = body?;

    let vehicle_service = VehicleService::new(&state.db);

    let vehicle = vehicle_service.create_vehicle(vehicle).await?;

    Ok((StatusCode::CREATED, Json(VehicleDto::from(vehicle))).into_response())
}
