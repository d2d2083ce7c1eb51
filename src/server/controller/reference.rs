use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        reference::{CrimeTypeDto, RegionDto},
    },
    server::{error::Error, model::app::AppState, service::reference::ReferenceService},
};

pub static REFERENCE_TAG: &str = "reference";

#[utoipa::path(
    get,
    path = "/api/regions",
    tag = REFERENCE_TAG,
    responses(
        (status = 200, description = "All regions", body = Vec<RegionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_regions(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let regions = ReferenceService::new(&state.db).list_regions().await?;

    Ok((StatusCode::OK, Json(regions)))
}

#[utoipa::path(
    get,
    path = "/api/crime-types",
    tag = REFERENCE_TAG,
    responses(
        (status = 200, description = "All crime types", body = Vec<CrimeTypeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_crime_types(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let crime_types = ReferenceService::new(&state.db).list_crime_types().await?;

    Ok((StatusCode::OK, Json(crime_types)))
}
