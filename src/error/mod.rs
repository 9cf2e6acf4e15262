//! Error types for the Holocron server.
//!
//! A single `Error` enum aggregates domain failures (missing records,
//! uniqueness conflicts, body validation) and external library errors into
//! one type that implements `IntoResponse`, so controllers can return
//! `Result<_, Error>` and rely on a consistent JSON error shape.

pub mod config;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum Error {
    /// A record referenced by the request does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),
    /// A uniqueness rule was violated (username, email, or catalog name).
    #[error("{0}")]
    Conflict(String),
    /// Request body was missing, malformed, or failed field validation.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// - 400 Bad Request - missing/malformed JSON body
/// - 404 Not Found - missing users, catalog rows, or favorites
/// - 409 Conflict - uniqueness violations
/// - 500 Internal Server Error - everything else (logged server-side)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(entity) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: format!("{entity} not found"),
                }),
            )
                .into_response(),
            Self::Conflict(message) => {
                (StatusCode::CONFLICT, Json(ErrorDto { error: message })).into_response()
            }
            Self::JsonRejection(rejection) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: rejection.body_text(),
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 response.
///
/// Logs the full error message, then returns a generic body so internal
/// details never reach the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
