//! Tests for the create_planet endpoint.

use axum::{
    body::Body,
    extract::{FromRequest, State},
    http::{header, Request, StatusCode},
    response::IntoResponse,
    Json,
};
use holocron::{
    controller::planet::create_planet,
    model::{app::AppState, catalog::CreatePlanetDto},
};
use holocron_test_utils::{test_setup_with_catalog_tables, TestError};

fn create_dto(name: &str) -> CreatePlanetDto {
    CreatePlanetDto {
        name: name.to_string(),
        diameter: 4900,
        gravity: 0.85,
        population: 30_000_000,
        terrain: "forests, mountains".to_string(),
        climate: "temperate".to_string(),
    }
}

/// Expect 201 Created with the new planet when the body is valid
#[tokio::test]
async fn success() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let state = AppState { db: test.db.clone() };

    let result = create_planet(State(state), Ok(Json(create_dto("Endor")))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 400 Bad Request when the body is not valid JSON
#[tokio::test]
async fn bad_request_on_malformed_body() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let state = AppState { db: test.db.clone() };

    let request = Request::builder()
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": \"Endor\""))
        .unwrap();
    let rejection = Json::<CreatePlanetDto>::from_request(request, &())
        .await
        .err()
        .unwrap();

    let result = create_planet(State(state), Err(rejection)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 409 Conflict when a planet with the same name exists
#[tokio::test]
async fn conflict_on_duplicate_name() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let state = AppState { db: test.db.clone() };

    create_planet(State(state.clone()), Ok(Json(create_dto("Endor"))))
        .await
        .unwrap();

    let result = create_planet(State(state), Ok(Json(create_dto("Endor")))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}
