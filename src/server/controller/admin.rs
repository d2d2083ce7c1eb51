use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        report::{AdminReportQueryDto, ReportDto},
    },
    server::{
        controller::util::get_user::require_admin,
        error::Error,
        model::{app::AppState, report::ReportDecision},
        service::report::ReportService,
    },
};

pub static ADMIN_TAG: &str = "admin";

/// Moderation queue, pending reports oldest first unless another status is requested
#[utoipa::path(
    get,
    path = "/api/admin/reports",
    tag = ADMIN_TAG,
    params(AdminReportQueryDto),
    responses(
        (status = 200, description = "Reports awaiting moderation", body = Vec<ReportDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_moderation_queue(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<AdminReportQueryDto>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let reports = ReportService::new(&state.db).list(&query.into()).await?;

    Ok((StatusCode::OK, Json(reports)))
}

/// Approve a pending report & count it in the official statistics
#[utoipa::path(
    post,
    path = "/api/admin/reports/{report_id}/approve",
    tag = ADMIN_TAG,
    params(("report_id" = i32, Path, description = "ID of the report")),
    responses(
        (status = 200, description = "Report approved", body = ReportDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Report not found", body = ErrorDto),
        (status = 409, description = "Report was already approved or rejected", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_report(
    State(state): State<AppState>,
    session: Session,
    Path(report_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    moderate(state, session, report_id, ReportDecision::Approve).await
}

/// Reject a pending report
#[utoipa::path(
    post,
    path = "/api/admin/reports/{report_id}/reject",
    tag = ADMIN_TAG,
    params(("report_id" = i32, Path, description = "ID of the report")),
    responses(
        (status = 200, description = "Report rejected", body = ReportDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Report not found", body = ErrorDto),
        (status = 409, description = "Report was already approved or rejected", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_report(
    State(state): State<AppState>,
    session: Session,
    Path(report_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    moderate(state, session, report_id, ReportDecision::Reject).await
}

async fn moderate(
    state: AppState,
    session: Session,
    report_id: i32,
    decision: ReportDecision,
) -> Result<(StatusCode, Json<ReportDto>), Error> {
    let admin = require_admin(&state, &session).await?;

    let report = ReportService::new(&state.db)
        .moderate(report_id, decision)
        .await?;

    tracing::debug!(report_id, admin_id = admin.id, ?decision, "Moderation decision applied");

    Ok((StatusCode::OK, Json(report)))
}
