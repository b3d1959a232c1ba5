//! Mapping of engine errors onto structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::common::{BoardError, SessionError};

/// Errors surfaced to HTTP clients. Each kind carries a stable machine
/// readable name plus a human readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Request was malformed or violated a placement or turn rule.
    BadRequest(String),
    /// Session id did not match a live game.
    SessionNotFound(String),
    /// Target cell was already resolved.
    AlreadyShot(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::AlreadyShot(_) => StatusCode::CONFLICT,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::SessionNotFound(_) => "session_not_found",
            ApiError::AlreadyShot(_) => "already_shot",
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg)
            | ApiError::SessionNotFound(msg)
            | ApiError::AlreadyShot(msg) => msg,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'static str,
    message: &'a str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.kind(),
            message: self.message(),
        };
        (self.status(), Json(&body)).into_response()
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Board(BoardError::AlreadyShot { .. }) => {
                ApiError::AlreadyShot(err.to_string())
            }
            _ => ApiError::BadRequest(err.to_string()),
        }
    }
}

impl From<BoardError> for ApiError {
    fn from(err: BoardError) -> Self {
        SessionError::from(err).into()
    }
}
