use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::catalog::specie::SpecieRepository,
    error::Error,
    model::{
        api::ErrorDto,
        app::AppState,
        catalog::{CreateSpecieDto, SpecieDto},
    },
    service::catalog::specie::SpecieService,
};

pub static SPECIE_TAG: &str = "specie";

/// Get all species
#[utoipa::path(
    get,
    path = "/api/species",
    tag = SPECIE_TAG,
    responses(
        (status = 200, description = "Success when retrieving species", body = Vec<SpecieDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_species(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let specie_repository = SpecieRepository::new(&state.db);

    let species = specie_repository.get_all().await?;

    let specie_dtos: Vec<SpecieDto> = species.into_iter().map(SpecieDto::from).collect();

    Ok((StatusCode::OK, Json(specie_dtos)).into_response())
}

/// Get a single specie by id
#[utoipa::path(
    get,
    path = "/api/species/{specie_id}",
    tag = SPECIE_TAG,
    params(
        ("specie_id" = i32, Path, description = "Id of the specie to retrieve")
    ),
    responses(
        (status = 200, description = "Success when retrieving the specie", body = SpecieDto),
        (status = 404, description = "Specie not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_specie(
    State(state): State<AppState>,
    Path(specie_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let specie_repository = SpecieRepository::new(&state.db);

    let specie = specie_repository
        .get_by_id(specie_id)
        .await?
        .ok_or(Error::NotFound("specie"))?;

    Ok((StatusCode::OK, Json(SpecieDto::from(specie))).into_response())
}

/// Create a specie
#[utoipa::path(
    post,
    path = "/api/species",
    tag = SPECIE_TAG,
    request_body = CreateSpecieDto,
    responses(
        (status = 201, description = "Specie created", body = SpecieDto),
        (status = 400, description = "Missing or malformed request body", body = ErrorDto),
        (status = 409, description = "A specie with the same name exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_specie(
    State(state): State<AppState>,
    body: Result<Json<CreateSpecieDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(specie) = body?;

    let specie_service = SpecieService::new(&state.db);

    let specie = specie_service.create_specie(specie).await?;

    Ok((StatusCode::CREATED, Json(SpecieDto::from(specie))).into_response())
}
