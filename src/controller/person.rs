use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::catalog::person::PersonRepository,
    error::Error,
    model::{
        api::ErrorDto,
        app::AppState,
        catalog::{CreatePersonDto, PersonDto},
    },
    service::catalog::person::PersonService,
};

pub static PERSON_TAG: &str = "person";

/// Get all people
#[utoipa::path(
    get,
    path = "/api/people",
    tag = PERSON_TAG,
    responses(
        (status = 200, description = "Success when retrieving people", body = Vec<PersonDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_people(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let person_repository = PersonRepository::new(&state.db);

    let people = person_repository.get_all().await?;

    let person_dtos: Vec<PersonDto> = people.into_iter().map(PersonDto::from).collect();

    Ok((StatusCode::OK, Json(person_dtos)).into_response())
}

/// Get a single person by id
#[utoipa::path(
    get,
    path = "/api/people/{person_id}",
    tag = PERSON_TAG,
    params(
        ("person_id" = i32, Path, description = "Id of the person to retrieve")
    ),
    responses(
        (status = 200, description = "Success when retrieving the person", body = PersonDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    Path(person_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let person_repository = PersonRepository::new(&state.db);

    let person = person_repository
        .get_by_id(person_id)
        .await?
        .ok_or(Error::NotFound("person"))?;

    Ok((StatusCode::OK, Json(PersonDto::from(person))).into_response())
}

/// Create a person
#[utoipa::path(
    post,
    path = "/api/people",
    tag = PERSON_TAG,
    request_body = CreatePersonDto,
    responses(
        (status = 201, description = "Person created", body = PersonDto),
        (status = 400, description = "Missing or malformed request body", body = ErrorDto),
        (status = 409, description = "A person with the same name exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_person(
    State(state): State<AppState>,
    body: Result<Json<CreatePersonDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(person) = body?;

    let person_service = PersonService::new(&state.db);

    let person = person_service.create_person(person).await?;

    Ok((StatusCode::CREATED, Json(PersonDto::from(person))).into_response())
}
