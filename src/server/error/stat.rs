use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum StatError {
    #[error("No statistics found for region {region:?} (year {year:?})")]
    NotFound { region: String, year: Option<i32> },
}

impl IntoResponse for StatError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotFound { .. } => {
                error_response(StatusCode::NOT_FOUND, "No statistics found for this region")
            }
        }
    }
}
