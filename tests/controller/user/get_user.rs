//! Tests for the get_user endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::{controller::user::get_user, model::app::AppState};
use holocron_test_utils::{fixtures, test_setup_with_catalog_tables, TestError};

/// Expect 200 OK when the user exists
#[tokio::test]
async fn success() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let user = fixtures::insert_user(&test.db, "luke", "luke@rebellion.org").await?;
    let state = AppState { db: test.db.clone() };

    let result = get_user(State(state), Path(user.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 Not Found when the user does not exist
#[tokio::test]
async fn not_found() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let state = AppState { db: test.db.clone() };

    let result = get_user(State(state), Path(42)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
