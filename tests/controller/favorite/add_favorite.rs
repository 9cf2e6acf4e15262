//! Tests for the add-favorite endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::{
    controller::favorite::{add_person_favorite, add_planet_favorite},
    model::app::AppState,
};
use holocron_test_utils::{fixtures, test_setup_with_catalog_tables, TestError};

/// Expect 201 Created when the pair is new
#[tokio::test]
async fn success() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let user = fixtures::insert_user(&test.db, "luke", "luke@rebellion.org").await?;
    let planet = fixtures::insert_planet(&test.db, "Tatooine").await?;
    let state = AppState { db: test.db.clone() };

    let result = add_planet_favorite(State(state), Path((user.id, planet.id))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 200 OK with a message when the pair is already favorited
#[tokio::test]
async fn already_exists() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let user = fixtures::insert_user(&test.db, "luke", "luke@rebellion.org").await?;
    let planet = fixtures::insert_planet(&test.db, "Tatooine").await?;
    fixtures::insert_planet_favorite(&test.db, user.id, planet.id).await?;
    let state = AppState { db: test.db.clone() };

    let result = add_planet_favorite(State(state), Path((user.id, planet.id))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 Not Found when the user does not exist
#[tokio::test]
async fn user_not_found() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let planet = fixtures::insert_planet(&test.db, "Tatooine").await?;
    let state = AppState { db: test.db.clone() };

    let result = add_planet_favorite(State(state), Path((42, planet.id))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 404 Not Found when the target row does not exist
#[tokio::test]
async fn target_not_found() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let user = fixtures::insert_user(&test.db, "luke", "luke@rebellion.org").await?;
    let state = AppState { db: test.db.clone() };

    let result = add_person_favorite(State(state), Path((user.id, 42))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
