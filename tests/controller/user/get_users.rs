//! Tests for the get_users endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holocron::{
    controller::user::get_users,
    model::{app::AppState, user::UserDto},
};
use holocron_test_utils::{fixtures, test_setup_with_catalog_tables, TestError};

/// Expect 200 OK with an empty list when no users exist
#[tokio::test]
async fn success_with_empty_list() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let state = AppState { db: test.db.clone() };

    let result = get_users(State(state)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let users: Vec<UserDto> = serde_json::from_slice(&bytes).unwrap();
    assert!(users.is_empty());

    Ok(())
}

/// Expect every created user back, without passwords in the payload
#[tokio::test]
async fn success_with_users() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    fixtures::insert_user(&test.db, "luke", "luke@rebellion.org").await?;
    fixtures::insert_user(&test.db, "leia", "leia@rebellion.org").await?;
    let state = AppState { db: test.db.clone() };

    let result = get_users(State(state)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();

    let raw: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(raw.as_array().unwrap().len(), 2);
    assert!(raw[0].get("password").is_none());

    Ok(())
}
