use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::catalog::starship::StarshipRepository,
    error::Error,
    model::{
        api::ErrorDto,
        app::AppState,
        catalog::{CreateStarshipDto, StarshipDto},
    },
    service::catalog::starship::StarshipService,
};

pub static STARSHIP_TAG: &str = "starship";

/// Get all starships
#[utoipa::path(
    get,
    path = "/api/starships",
    tag = STARSHIP_TAG,
    responses(
        (status = 200, description = "Success when retrieving starships", body = Vec<StarshipDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_starships(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let starship_repository = StarshipRepository::new(&state.db);

    let starships = starship_repository.get_all().await?;

    let starship_dtos: Vec<StarshipDto> = starships.into_iter().map(StarshipDto::from).collect();

    Ok((StatusCode::OK, Json(starship_dtos)).into_response())
}

/// Get a single starship by id
#[utoipa::path(
    get,
    path = "/api/starships/{starship_id}",
    tag = STARSHIP_TAG,
    params(
        ("starship_id" = i32, Path, description = "Id of the starship to retrieve")
    ),
    responses(
        (status = 200, description = "Success when retrieving the starship", body = StarshipDto),
        (status = 404, description = "Starship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_starship(
    State(state): State<AppState>,
    Path(starship_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let starship_repository = StarshipRepository::new(&state.db);

    let starship = starship_repository
        .get_by_id(starship_id)
        .await?
        .ok_or(Error::NotFound("starship"))?;

    Ok((StatusCode::OK, Json(StarshipDto::from(starship))).into_response())
}

/// Create a starship
#[utoipa::path(
    post,
    path = "/api/starships",
    tag = STARSHIP_TAG,
    request_body = CreateStarshipDto,
    responses(
        (status = 201, description = "Starship created", body = StarshipDto),
        (status = 400, description = "Missing or malformed request body", body = ErrorDto),
        (status = 409, description = "A starship with the same name exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_starship(
    State(state): State<AppState>,
    body: Result<Json<CreateStarshipDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(starship) = body?;

    let starship_service = StarshipService::new(&state.db);

    let starship = starship_service.create_starship(starship).await?;

    Ok((StatusCode::CREATED, Json(StarshipDto::from(starship))).into_response())
}
