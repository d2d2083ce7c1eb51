use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use entity::report::ReportStatus;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Report ID {0:?} not found")]
    NotFound(i32),
    #[error("Report ID {report_id:?} cannot transition from {current:?} to {requested:?}")]
    InvalidStateTransition {
        report_id: i32,
        current: ReportStatus,
        requested: ReportStatus,
    },
    #[error("Report ID {0:?} is no longer pending and cannot be edited")]
    NotPending(i32),
    #[error("Region ID {0:?} does not exist")]
    UnknownRegion(i32),
    #[error("Crime type ID {0:?} does not exist")]
    UnknownCrimeType(i32),
}

impl IntoResponse for ReportError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotFound(_) => error_response(StatusCode::NOT_FOUND, "Report not found"),
            Self::InvalidStateTransition { current, .. } => error_response(
                StatusCode::CONFLICT,
                format!("Report has already been {}", status_label(current)),
            ),
            Self::NotPending(_) => error_response(
                StatusCode::CONFLICT,
                "Report has already been reviewed and can no longer be edited",
            ),
            Self::UnknownRegion(_) => error_response(StatusCode::BAD_REQUEST, "Unknown region"),
            Self::UnknownCrimeType(_) => {
                error_response(StatusCode::BAD_REQUEST, "Unknown crime type")
            }
        }
    }
}

fn status_label(status: ReportStatus) -> &'static str {
    match status {
        ReportStatus::Pending => "pending",
        ReportStatus::Approved => "approved",
        ReportStatus::Rejected => "rejected",
    }
}
