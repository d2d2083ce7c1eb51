use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One crime category within a region's statistics breakdown
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, utoipa::ToSchema)]
pub struct CrimeStatDto {
    pub crime_major: String,
    pub crime_minor: Option<String>,
    pub count: i32,
}

/// Statistics breakdown for a single region & year
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, utoipa::ToSchema)]
pub struct RegionStatsDto {
    /// Region full name
    pub region: String,
    pub year: i32,
    /// Most recent update across the returned rows
    pub last_updated: NaiveDateTime,
    pub statistics: Vec<CrimeStatDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, utoipa::ToSchema)]
pub struct OfficialStatDto {
    pub id: i32,
    pub region_id: i32,
    pub crime_type_id: Option<i32>,
    pub year: i32,
    pub count: i32,
    pub last_updated: NaiveDateTime,
}

impl From<entity::official_stat::Model> for OfficialStatDto {
    fn from(stat: entity::official_stat::Model) -> Self {
        Self {
            id: stat.id,
            region_id: stat.region_id,
            crime_type_id: stat.crime_type_id,
            year: stat.year,
            count: stat.count,
            last_updated: stat.last_updated,
        }
    }
}

/// Query parameters for a region statistics breakdown
#[derive(Serialize, Deserialize, Clone, Debug, Default, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RegionStatsQueryDto {
    /// Province name, e.g. `Seoul`
    pub province: String,
    /// City or district within the province, e.g. `Jongno-gu`
    pub city: Option<String>,
    /// Defaults to the most recent year with data for the region
    pub year: Option<i32>,
    pub major: Option<String>,
    pub minor: Option<String>,
}

/// Query parameters for listing raw official statistics rows
#[derive(Serialize, Deserialize, Clone, Debug, Default, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OfficialStatQueryDto {
    pub region_id: Option<i32>,
    pub crime_type_id: Option<i32>,
    pub year: Option<i32>,
}
