use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,
    #[error("Failed to login user due to CSRF state present in session store but without a value")]
    CsrfMissingValue,
    #[error("User ID {0:?} attempted an administrator action without the admin role")]
    AdminRequired(i32),
    #[error("User ID {user_id:?} attempted to modify report ID {report_id:?} they did not author")]
    NotReportAuthor { user_id: i32, report_id: i32 },
    #[error("Identity provider request failed: {0}")]
    IdentityProvider(String),
    #[error("User ID {user_id:?} cannot take email {email:?}, another account already uses it")]
    EmailInUse { user_id: i32, email: String },
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", Self::UserNotInSession);

                error_response(StatusCode::UNAUTHORIZED, "Not logged in")
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(
                    user_id = %user_id,
                    "{}",
                    self
                );

                error_response(StatusCode::UNAUTHORIZED, "Not logged in")
            }
            Self::CsrfValidationFailed => {
                tracing::debug!("{}", self);

                error_response(
                    StatusCode::BAD_REQUEST,
                    "There was an issue logging you in, please try again.",
                )
            }
            Self::AdminRequired(_) | Self::NotReportAuthor { .. } => {
                tracing::debug!("{}", self);

                error_response(
                    StatusCode::FORBIDDEN,
                    "You do not have permission to perform this action",
                )
            }
            Self::IdentityProvider(_) => {
                tracing::warn!("{}", self);

                error_response(
                    StatusCode::BAD_REQUEST,
                    "There was an issue logging you in with Google, please try again.",
                )
            }
            Self::EmailInUse { .. } => {
                tracing::debug!("{}", self);

                error_response(
                    StatusCode::CONFLICT,
                    "The email of this Google account is already used by another account",
                )
            }
            Self::CsrfMissingValue => InternalServerError(self).into_response(),
        }
    }
}
