//! Error types for the Tipline server application.
//!
//! This module provides the error handling system with specialized error types for each
//! domain (authentication, configuration, reports, statistics). All errors implement
//! `IntoResponse` for Axum HTTP responses and use `thiserror` for their `Display` and
//! `Error` implementations.

pub mod advisor;
pub mod auth;
pub mod config;
pub mod report;
pub mod retry;
pub mod stat;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, report::ReportError, stat::StatError,
    },
};

/// Main error type for the Tipline server application.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator. The `IntoResponse` implementation
/// maps errors to appropriate HTTP responses for API consumers.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (session, CSRF, permissions, identity provider)
/// - Report errors (missing reports, illegal status transitions, invalid references)
/// - Statistics errors (no statistics for a region & year)
/// - External library errors (database, sessions, HTTP client, IO)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session, CSRF, permissions, identity provider).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Report error (not found, invalid state transition, invalid reference).
    #[error(transparent)]
    ReportError(#[from] ReportError),
    /// Statistics error (no statistics found).
    #[error(transparent)]
    StatError(#[from] StatError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in Tipline's code.
    ///
    /// This error should never occur in normal operation and indicates a programming error.
    #[error("Internal error with Tipline's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// HTTP client error (client construction).
    #[error(transparent)]
    HttpClientError(#[from] reqwest::Error),
    /// IO error (binding the server socket).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// Maps domain-specific errors to appropriate HTTP status codes and JSON error responses.
/// Most errors are treated as internal server errors (500) with logging, while the domain
/// error types have their own response mappings.
///
/// # Returns
/// - 400 Bad Request - CSRF failures, identity provider failures, unknown region or crime type
/// - 401 Unauthorized - No user in session
/// - 403 Forbidden - User lacks permission for the resource
/// - 404 Not Found - Missing report or statistics
/// - 409 Conflict - Report is no longer pending, or a Google email is already taken
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ReportError(err) => err.into_response(),
            Self::StatError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON error response with the provided status & message.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
