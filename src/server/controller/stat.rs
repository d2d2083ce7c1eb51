use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        stat::{OfficialStatDto, OfficialStatQueryDto, RegionStatsDto, RegionStatsQueryDto},
    },
    server::{error::Error, model::app::AppState, service::stat::StatService},
};

pub static STAT_TAG: &str = "stat";

/// Statistics of a region for a year, broken down by crime type
///
/// Uses the latest year with data when no year is given.
#[utoipa::path(
    get,
    path = "/api/stats",
    tag = STAT_TAG,
    params(RegionStatsQueryDto),
    responses(
        (status = 200, description = "Region statistics", body = RegionStatsDto),
        (status = 404, description = "No statistics for the region & year", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_region_stats(
    State(state): State<AppState>,
    Query(query): Query<RegionStatsQueryDto>,
) -> Result<impl IntoResponse, Error> {
    let stats = StatService::new(&state.db).region_breakdown(query).await?;

    Ok((StatusCode::OK, Json(stats)))
}

#[utoipa::path(
    get,
    path = "/api/official-stats",
    tag = STAT_TAG,
    params(OfficialStatQueryDto),
    responses(
        (status = 200, description = "Official statistics rows", body = Vec<OfficialStatDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_official_stats(
    State(state): State<AppState>,
    Query(query): Query<OfficialStatQueryDto>,
) -> Result<impl IntoResponse, Error> {
    let stats = StatService::new(&state.db).list(query).await?;

    Ok((StatusCode::OK, Json(stats)))
}
