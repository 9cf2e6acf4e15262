//! Tests for the create_user endpoint.

use axum::{
    body::Body,
    extract::{FromRequest, State},
    http::{header, Request, StatusCode},
    response::IntoResponse,
    Json,
};
use holocron::{
    controller::user::create_user,
    model::{app::AppState, user::CreateUserDto},
};
use holocron_test_utils::{test_setup_with_catalog_tables, TestError};

fn create_dto(username: &str, email: &str) -> CreateUserDto {
    CreateUserDto {
        username: username.to_string(),
        email: email.to_string(),
        password: "hunter2".to_string(),
        firstname: "Luke".to_string(),
        lastname: "Skywalker".to_string(),
    }
}

/// Expect 201 Created with the new user when the body is valid
#[tokio::test]
async fn success() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let state = AppState { db: test.db.clone() };

    let result = create_user(
        State(state),
        Ok(Json(create_dto("luke", "luke@rebellion.org"))),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Builds the rejection axum hands the handler when body extraction fails
async fn reject_body(body: &str) -> axum::extract::rejection::JsonRejection {
    let request = Request::builder()
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    Json::<CreateUserDto>::from_request(request, &())
        .await
        .err()
        .unwrap()
}

/// Expect 400 Bad Request when the body is not valid JSON
#[tokio::test]
async fn bad_request_on_malformed_body() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let state = AppState { db: test.db.clone() };

    let rejection = reject_body("{\"username\": \"luke\"").await;
    let result = create_user(State(state), Err(rejection)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 Bad Request when required fields are missing
#[tokio::test]
async fn bad_request_on_missing_fields() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let state = AppState { db: test.db.clone() };

    let rejection = reject_body("{\"username\": \"luke\"}").await;
    let result = create_user(State(state), Err(rejection)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 409 Conflict when the username is taken
#[tokio::test]
async fn conflict_on_duplicate_username() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let state = AppState { db: test.db.clone() };

    create_user(
        State(state.clone()),
        Ok(Json(create_dto("luke", "luke@rebellion.org"))),
    )
    .await
    .unwrap();

    let result = create_user(
        State(state),
        Ok(Json(create_dto("luke", "other@rebellion.org"))),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 409 Conflict when the email is taken
#[tokio::test]
async fn conflict_on_duplicate_email() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let state = AppState { db: test.db.clone() };

    create_user(
        State(state.clone()),
        Ok(Json(create_dto("luke", "luke@rebellion.org"))),
    )
    .await
    .unwrap();

    let result = create_user(
        State(state),
        Ok(Json(create_dto("leia", "luke@rebellion.org"))),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}
