//! Unified error types for the NFL database API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Validation and storage errors raised below the HTTP layer
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// A required request field was absent or null
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Machine-readable error kind sent to callers
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Domain(DomainError::MissingField(_))
            | AppError::Domain(DomainError::Validation(_))
            | AppError::BadRequest(_) => "invalid-argument",
            AppError::Domain(DomainError::Database(_)) => "internal",
            AppError::Unauthorized => "unauthenticated",
            AppError::NotFound(_) => "not-found",
        }
    }
}

/// Human wording for a missing wire field
fn missing_field_message(field: &str) -> String {
    let what = match field {
        "date" => "a game date",
        "homeTeamId" => "a home team",
        "awayTeamId" => "an away team",
        "homeTeamScore" => "a home team score",
        "awayTeamScore" => "an away team score",
        "gameIds" => "game IDs",
        "playerIds" => "player IDs",
        "teamId" => "a team ID",
        "playerName" => "a player name",
        "position" => "a position",
        "conference" => "a conference",
        "division" => "a division",
        other => other,
    };
    format!("Must specify {}.", what)
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Domain(DomainError::MissingField(field)) => (
                StatusCode::BAD_REQUEST,
                "Missing required field",
                Some(missing_field_message(field)),
            ),
            AppError::Domain(DomainError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(msg.clone()),
            ),
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized", None),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", Some(msg.clone())),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            code: self.code(),
            details,
        });

        (status, body).into_response()
    }
}
