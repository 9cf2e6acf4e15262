//! Tests for the remove-favorite endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::{controller::favorite::remove_starship_favorite, model::app::AppState};
use holocron_test_utils::{fixtures, test_setup_with_catalog_tables, TestError};

/// Expect 200 OK when removing an existing favorite
#[tokio::test]
async fn success() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let user = fixtures::insert_user(&test.db, "luke", "luke@rebellion.org").await?;
    let starship = fixtures::insert_starship(&test.db, "Millennium Falcon").await?;
    fixtures::insert_starship_favorite(&test.db, user.id, starship.id).await?;
    let state = AppState { db: test.db.clone() };

    let result = remove_starship_favorite(State(state), Path((user.id, starship.id))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 Not Found when the favorite was never added
#[tokio::test]
async fn not_found() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let user = fixtures::insert_user(&test.db, "luke", "luke@rebellion.org").await?;
    let starship = fixtures::insert_starship(&test.db, "Millennium Falcon").await?;
    let state = AppState { db: test.db.clone() };

    let result = remove_starship_favorite(State(state), Path((user.id, starship.id))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
