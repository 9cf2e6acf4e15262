use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::catalog::planet::PlanetRepository,
    error::Error,
    model::{
        api::ErrorDto,
        app::AppState,
        catalog::{CreatePlanetDto, PlanetDto},
    },
    service::catalog::planet::PlanetService,
};

pub static PLANET_TAG: &str = "planet";

/// Get all planets
#[utoipa::path(
    get,
    path = "/api/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Success when retrieving planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planet_repository = PlanetRepository::new(&state.db);

    let planets = planet_repository.get_all().await?;

    let planet_dtos: Vec<PlanetDto> = planets.into_iter().map(PlanetDto::from).collect();

    Ok((StatusCode::OK, Json(planet_dtos)).into_response())
}

/// Get a single planet by id
#[utoipa::path(
    get,
    path = "/api/planets/{planet_id}",
    tag = PLANET_TAG,
    params(
        ("planet_id" = i32, Path, description = "Id of the planet to retrieve")
    ),
    responses(
        (status = 200, description = "Success when retrieving the planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let planet_repository = PlanetRepository::new(&state.db);

    let planet = planet_repository
        .get_by_id(planet_id)
        .await?
        .ok_or(Error::NotFound("planet"))?;

    Ok((StatusCode::OK, Json(PlanetDto::from(planet))).into_response())
}

/// Create a planet
#[utoipa::path(
    post,
    path = "/api/planets",
    tag = PLANET_TAG,
    request_body = CreatePlanetDto,
    responses(
        (status = 201, description = "Planet created", body = PlanetDto),
        (status = 400, description = "Missing or malformed request body", body = ErrorDto),
        (status = 409, description = "A planet with the same name exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    body: Result<Json<CreatePlanetDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(planet) = body?;

    let planet_service = PlanetService::new(&state.db);

    let planet = planet_service.create_planet(planet).await?;

    Ok((StatusCode::CREATED, Json(PlanetDto::from(planet))).into_response())
}
