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
        report::{CreateReportDto, PatchReportDto, ReportDto, ReportQueryDto, UpdateReportDto},
    },
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::report::ReportService,
    },
};

pub static REPORT_TAG: &str = "report";

/// List reports with optional filters, sorting & pagination
#[utoipa::path(
    get,
    path = "/api/reports",
    tag = REPORT_TAG,
    params(ReportQueryDto),
    responses(
        (status = 200, description = "Matching reports", body = Vec<ReportDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_reports(
    State(state): State<AppState>,
    Query(query): Query<ReportQueryDto>,
) -> Result<impl IntoResponse, Error> {
    let reports = ReportService::new(&state.db).list(&query.into()).await?;

    Ok((StatusCode::OK, Json(reports)))
}

#[utoipa::path(
    get,
    path = "/api/reports/{report_id}",
    tag = REPORT_TAG,
    params(("report_id" = i32, Path, description = "ID of the report")),
    responses(
        (status = 200, description = "Report found", body = ReportDto),
        (status = 404, description = "Report not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_report(
    State(state): State<AppState>,
    Path(report_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let report = ReportService::new(&state.db).get(report_id).await?;

    Ok((StatusCode::OK, Json(report)))
}

/// Submit a new report as the signed in user
///
/// The crime type may be replaced by the classification advisor's suggestion.
#[utoipa::path(
    post,
    path = "/api/reports",
    tag = REPORT_TAG,
    request_body = CreateReportDto,
    responses(
        (status = 201, description = "Report submitted & pending moderation", body = ReportDto),
        (status = 400, description = "Unknown region or crime type", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_report(
    State(state): State<AppState>,
    session: Session,
    Json(report): Json<CreateReportDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let report = ReportService::new(&state.db)
        .create(user.id, report, state.advisor.as_ref())
        .await?;

    Ok((StatusCode::CREATED, Json(report)))
}

/// Replace a pending report, author or admin only
#[utoipa::path(
    put,
    path = "/api/reports/{report_id}",
    tag = REPORT_TAG,
    params(("report_id" = i32, Path, description = "ID of the report")),
    request_body = UpdateReportDto,
    responses(
        (status = 200, description = "Report updated", body = ReportDto),
        (status = 400, description = "Unknown region or crime type", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not the author of the report", body = ErrorDto),
        (status = 404, description = "Report not found", body = ErrorDto),
        (status = 409, description = "Report is no longer pending", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn replace_report(
    State(state): State<AppState>,
    session: Session,
    Path(report_id): Path<i32>,
    Json(update): Json<UpdateReportDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let report = ReportService::new(&state.db)
        .replace(report_id, &user, update)
        .await?;

    Ok((StatusCode::OK, Json(report)))
}

/// Change some fields of a pending report, author or admin only
#[utoipa::path(
    patch,
    path = "/api/reports/{report_id}",
    tag = REPORT_TAG,
    params(("report_id" = i32, Path, description = "ID of the report")),
    request_body = PatchReportDto,
    responses(
        (status = 200, description = "Report updated", body = ReportDto),
        (status = 400, description = "Unknown region or crime type", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not the author of the report", body = ErrorDto),
        (status = 404, description = "Report not found", body = ErrorDto),
        (status = 409, description = "Report is no longer pending", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_report(
    State(state): State<AppState>,
    session: Session,
    Path(report_id): Path<i32>,
    Json(patch): Json<PatchReportDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let report = ReportService::new(&state.db)
        .patch(report_id, &user, patch)
        .await?;

    Ok((StatusCode::OK, Json(report)))
}

/// Delete a report, author or admin only
#[utoipa::path(
    delete,
    path = "/api/reports/{report_id}",
    tag = REPORT_TAG,
    params(("report_id" = i32, Path, description = "ID of the report")),
    responses(
        (status = 204, description = "Report deleted"),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not the author of the report", body = ErrorDto),
        (status = 404, description = "Report not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_report(
    State(state): State<AppState>,
    session: Session,
    Path(report_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    ReportService::new(&state.db)
        .delete(report_id, &user)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
