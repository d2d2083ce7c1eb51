use chrono::NaiveDateTime;
use entity::report::ReportStatus;
use serde::{Deserialize, Serialize};

use crate::model::reference::{CrimeTypeDto, RegionDto};

/// Moderation status of a report
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatusDto {
    Pending,
    Approved,
    Rejected,
}

impl From<ReportStatus> for ReportStatusDto {
    fn from(status: ReportStatus) -> Self {
        match status {
            ReportStatus::Pending => Self::Pending,
            ReportStatus::Approved => Self::Approved,
            ReportStatus::Rejected => Self::Rejected,
        }
    }
}

impl From<ReportStatusDto> for ReportStatus {
    fn from(status: ReportStatusDto) -> Self {
        match status {
            ReportStatusDto::Pending => Self::Pending,
            ReportStatusDto::Approved => Self::Approved,
            ReportStatusDto::Rejected => Self::Rejected,
        }
    }
}

/// Sort order for report listings
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportSortDto {
    /// Newest reports first
    #[default]
    Latest,
    /// Oldest reports first
    Oldest,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, utoipa::ToSchema)]
pub struct ReportDto {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub status: ReportStatusDto,
    pub region: RegionDto,
    pub crime_type: CrimeTypeDto,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
    pub approved_at: Option<NaiveDateTime>,
    pub rejected_at: Option<NaiveDateTime>,
    /// Official statistics row incremented when this report was approved
    pub official_stat_id: Option<i32>,
}

/// Request body for submitting a new report
impl ReportDto {
    /// Builds the response for a report with its region & crime type resolved
    pub fn from_models(
        report: entity::report::Model,
        region: entity::region::Model,
        crime_type: entity::crime_type::Model,
    ) -> Self {
        Self {
            id: report.id,
            user_id: report.user_id,
            title: report.title,
            content: report.content,
            status: report.status.into(),
            region: region.into(),
            crime_type: crime_type.into(),
            created_at: report.created_at,
            updated_at: report.updated_at,
            approved_at: report.approved_at,
            rejected_at: report.rejected_at,
            official_stat_id: report.official_stat_id,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, utoipa::ToSchema)]
pub struct CreateReportDto {
    pub title: String,
    pub content: String,
    pub region_id: i32,
    pub crime_type_id: i32,
}

/// Request body replacing every editable field of a pending report
#[derive(Serialize, Deserialize, Clone, Debug, utoipa::ToSchema)]
pub struct UpdateReportDto {
    pub title: String,
    pub content: String,
    pub region_id: i32,
    pub crime_type_id: i32,
}

/// Request body changing only the provided fields of a pending report
#[derive(Serialize, Deserialize, Clone, Debug, Default, utoipa::ToSchema)]
pub struct PatchReportDto {
    pub title: Option<String>,
    pub content: Option<String>,
    pub region_id: Option<i32>,
    pub crime_type_id: Option<i32>,
}

/// Query parameters for listing reports
#[derive(Serialize, Deserialize, Clone, Debug, Default, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReportQueryDto {
    pub region_id: Option<i32>,
    pub crime_type_id: Option<i32>,
    /// Substring matched against title or content
    pub keyword: Option<String>,
    pub status: Option<ReportStatusDto>,
    pub sort: Option<ReportSortDto>,
    /// Number of reports to skip, defaults to 0
    pub skip: Option<u64>,
    /// Maximum number of reports to return, defaults to 10 and is capped at 100
    pub limit: Option<u64>,
}

/// Query parameters of the moderation queue
#[derive(Serialize, Deserialize, Clone, Debug, Default, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AdminReportQueryDto {
    /// Defaults to `pending`
    pub status: Option<ReportStatusDto>,
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}
