//! Favorite endpoints, all scoped under `/api/users/{user_id}/favorites`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::Error,
    model::{
        api::{ErrorDto, MessageDto},
        app::AppState,
        favorite::{FavoriteDto, UserFavoritesDto},
    },
    service::favorite::{AddFavoriteOutcome, FavoriteService},
};

pub static FAVORITE_TAG: &str = "favorite";

fn created_response(favorite: FavoriteDto) -> axum::response::Response {
    (StatusCode::CREATED, Json(favorite)).into_response()
}

fn already_exists_response(entity: &str) -> axum::response::Response {
    (
        StatusCode::OK,
        Json(MessageDto {
            message: format!("this {entity} is already in favorites"),
        }),
    )
        .into_response()
}

fn deleted_response() -> axum::response::Response {
    (
        StatusCode::OK,
        Json(MessageDto {
            message: "successfully deleted".to_string(),
        }),
    )
        .into_response()
}

/// Get all of a user's favorites grouped by catalog type
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/favorites",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "Id of the user whose favorites to retrieve")
    ),
    responses(
        (status = 200, description = "Success when retrieving favorites", body = UserFavoritesDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    let favorites = favorite_service.get_user_favorites(user_id).await?;

    Ok((StatusCode::OK, Json(favorites)).into_response())
}

/// Add a planet to a user's favorites
#[utoipa::path(
    post,
    path = "/api/users/{user_id}/favorites/planets/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "Id of the user"),
        ("planet_id" = i32, Path, description = "Id of the planet to favorite")
    ),
    responses(
        (status = 201, description = "Favorite created", body = FavoriteDto),
        (status = 200, description = "Favorite already existed", body = MessageDto),
        (status = 404, description = "User or planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_planet_favorite(
    State(state): State<AppState>,
    Path((user_id, planet_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    match favorite_service
        .add_planet_favorite(user_id, planet_id)
        .await?
    {
        AddFavoriteOutcome::Created(favorite) => Ok(created_response(favorite)),
        AddFavoriteOutcome::AlreadyExists => Ok(already_exists_response("planet")),
    }
}

/// Remove a planet from a user's favorites
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}/favorites/planets/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "Id of the user"),
        ("planet_id" = i32, Path, description = "Id of the planet to unfavorite")
    ),
    responses(
        (status = 200, description = "Favorite deleted", body = MessageDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_planet_favorite(
    State(state): State<AppState>,
    Path((user_id, planet_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service
        .remove_planet_favorite(user_id, planet_id)
        .await?;

    Ok(deleted_response())
}

/// Add a specie to a user's favorites
#[utoipa::path(
    post,
    path = "/api/users/{user_id}/favorites/species/{specie_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "Id of the user"),
        ("specie_id" = i32, Path, description = "Id of the specie to favorite")
    ),
    responses(
        (status = 201, description = "Favorite created", body = FavoriteDto),
        (status = 200, description = "Favorite already existed", body = MessageDto),
        (status = 404, description = "User or specie not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_specie_favorite(
    State(state): State<AppState>,
    Path((user_id, specie_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    match favorite_service
        .add_specie_favorite(user_id, specie_id)
        .await?
    {
        AddFavoriteOutcome::Created(favorite) => Ok(created_response(favorite)),
        AddFavoriteOutcome::AlreadyExists => Ok(already_exists_response("specie")),
    }
}

/// Remove a specie from a user's favorites
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}/favorites/species/{specie_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "Id of the user"),
        ("specie_id" = i32, Path, description = "Id of the specie to unfavorite")
    ),
    responses(
        (status = 200, description = "Favorite deleted", body = MessageDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_specie_favorite(
    State(state): State<AppState>,
    Path((user_id, specie_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service
        .remove_specie_favorite(user_id, specie_id)
        .await?;

    Ok(deleted_response())
}

/// Add a vehicle to a user's favorites
#[utoipa::path(
    post,
    path = "/api/users/{user_id}/favorites/vehicles/{vehicle_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "Id of the user"),
        ("vehicle_id" = i32, Path, description = "Id of the vehicle to favorite")
    ),
    responses(
        (status = 201, description = "Favorite created", body = FavoriteDto),
        (status = 200, description = "Favorite already existed", body = MessageDto),
        (status = 404, description = "User or vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_vehicle_favorite(
    State(state): State<AppState>,
    Path((user_id, vehicle_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    match favorite_service
        .add_vehicle_favorite(user_id, vehicle_id)
        .await?
    {
        AddFavoriteOutcome::Created(favorite) => Ok(created_response(favorite)),
        AddFavoriteOutcome::AlreadyExists => Ok(already_exists_response("vehicle")),
    }
}

/// Remove a vehicle from a user's favorites
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}/favorites/vehicles/{vehicle_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "Id of the user"),
        ("vehicle_id" = i32, Path, description = "Id of the vehicle to unfavorite")
    ),
    responses(
        (status = 200, description = "Favorite deleted", body = MessageDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_vehicle_favorite(
    State(state): State<AppState>,
    Path((user_id, vehicle_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service
        .remove_vehicle_favorite(user_id, vehicle_id)
        .await?;

    Ok(deleted_response())
}

/// Add a starship to a user's favorites
#[utoipa::path(
    post,
    path = "/api/users/{user_id}/favorites/starships/{starship_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "Id of the user"),
        ("starship_id" = i32, Path, description = "Id of the starship to favorite")
    ),
    responses(
        (status = 201, description = "Favorite created", body = FavoriteDto),
        (status = 200, description = "Favorite already existed", body = MessageDto),
        (status = 404, description = "User or starship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_starship_favorite(
    State(state): State<AppState>,
    Path((user_id, starship_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    match favorite_service
        .add_starship_favorite(user_id, starship_id)
        .await?
    {
        AddFavoriteOutcome::Created(favorite) => Ok(created_response(favorite)),
        AddFavoriteOutcome::AlreadyExists => Ok(already_exists_response("starship")),
    }
}

/// Remove a starship from a user's favorites
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}/favorites/starships/{starship_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "Id of the user"),
        ("starship_id" = i32, Path, description = "Id of the starship to unfavorite")
    ),
    responses(
        (status = 200, description = "Favorite deleted", body = MessageDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_starship_favorite(
    State(state): State<AppState>,
    Path((user_id, starship_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service
        .remove_starship_favorite(user_id, starship_id)
        .await?;

    Ok(deleted_response())
}

/// Add a person to a user's favorites
#[utoipa::path(
    post,
    path = "/api/users/{user_id}/favorites/people/{person_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "Id of the user"),
        ("person_id" = i32, Path, description = "Id of the person to favorite")
    ),
    responses(
        (status = 201, description = "Favorite created", body = FavoriteDto),
        (status = 200, description = "Favorite already existed", body = MessageDto),
        (status = 404, description = "User or person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_person_favorite(
    State(state): State<AppState>,
    Path((user_id, person_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    match favorite_service
        .add_person_favorite(user_id, person_id)
        .await?
    {
        AddFavoriteOutcome::Created(favorite) => Ok(created_response(favorite)),
        AddFavoriteOutcome::AlreadyExists => Ok(already_exists_response("person")),
    }
}

/// Remove a person from a user's favorites
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}/favorites/people/{person_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "Id of the user"),
        ("person_id" = i32, Path, description = "Id of the person to unfavorite")
    ),
    responses(
        (status = 200, description = "Favorite deleted", body = MessageDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_person_favorite(
    State(state): State<AppState>,
    Path((user_id, person_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service
        .remove_person_favorite(user_id, person_id)
        .await?;

    Ok(deleted_response())
}
