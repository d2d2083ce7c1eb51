use sea_orm::DatabaseConnection;

use crate::{
    model::stat::{
        CrimeStatDto, OfficialStatDto, OfficialStatQueryDto, RegionStatsDto, RegionStatsQueryDto,
    },
    server::{
        data::{official_stat::OfficialStatRepository, region::RegionRepository},
        error::{stat::StatError, Error},
    },
};

/// Label used for statistics rows whose crime type no longer exists
pub static UNCLASSIFIED_LABEL: &str = "Unclassified";

/// Full region name as stored on the region table, `"{province} {city}"`
///
/// A missing or blank city yields the province alone.
pub fn region_full_name(province: &str, city: Option<&str>) -> String {
    let province = province.trim();

    match city.map(str::trim).filter(|city| !city.is_empty()) {
        Some(city) => format!("{} {}", province, city),
        None => province.to_string(),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

pub struct StatService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Per crime type breakdown of one region's statistics for a year
    ///
    /// Without a year the latest year with any statistics for the region is used.
    ///
    /// # Returns
    /// - `Ok(RegionStatsDto)` - Breakdown with at least one entry
    /// - `Err(Error::StatError(StatError::NotFound))` - Unknown region, no year with data
    ///   or no rows matching the filters
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn region_breakdown(
        &self,
        query: RegionStatsQueryDto,
    ) -> Result<RegionStatsDto, Error> {
        let full_name = region_full_name(&query.province, query.city.as_deref());
        let not_found = |year: Option<i32>| StatError::NotFound {
            region: full_name.clone(),
            year,
        };

        let region = RegionRepository::new(self.db)
            .get_by_full_name(&full_name)
            .await?
            .ok_or_else(|| not_found(query.year))?;

        let stat_repo = OfficialStatRepository::new(self.db);
        let year = match query.year {
            Some(year) => year,
            None => stat_repo
                .latest_year_for_region(region.id)
                .await?
                .ok_or_else(|| not_found(None))?,
        };

        let rows = stat_repo
            .find_breakdown(
                region.id,
                year,
                non_blank(query.major.as_deref()),
                non_blank(query.minor.as_deref()),
            )
            .await?;

        let last_updated = rows
            .iter()
            .map(|(stat, _)| stat.last_updated)
            .max()
            .ok_or_else(|| not_found(Some(year)))?;

        let statistics = rows
            .into_iter()
            .map(|(stat, crime_type)| match crime_type {
                Some(crime_type) => CrimeStatDto {
                    crime_major: crime_type.major,
                    crime_minor: crime_type.minor,
                    count: stat.count,
                },
                None => CrimeStatDto {
                    crime_major: UNCLASSIFIED_LABEL.to_string(),
                    crime_minor: None,
                    count: stat.count,
                },
            })
            .collect();

        Ok(RegionStatsDto {
            region: region.full_name,
            year,
            last_updated,
            statistics,
        })
    }

    /// Raw statistics rows, unfiltered parameters are ignored
    pub async fn list(&self, query: OfficialStatQueryDto) -> Result<Vec<OfficialStatDto>, Error> {
        let stats = OfficialStatRepository::new(self.db)
            .find_filtered(query.region_id, query.crime_type_id, query.year)
            .await?;

        Ok(stats.into_iter().map(OfficialStatDto::from).collect())
    }
}
