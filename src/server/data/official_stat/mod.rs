use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

#[cfg(test)]
mod tests;

pub struct OfficialStatRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OfficialStatRepository<'a, C> {
    /// Creates a new instance of [`OfficialStatRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds one to the count for a (region, crime type, year), creating the row at 1
    ///
    /// Executed as a single `INSERT .. ON CONFLICT DO UPDATE` against the unique
    /// `(region_id, crime_type_id, year)` index, so concurrent increments of the same key
    /// never create a second row or lose an update.
    pub async fn increment(
        &self,
        region_id: i32,
        crime_type_id: i32,
        year: i32,
    ) -> Result<entity::official_stat::Model, DbErr> {
        let stat = entity::official_stat::ActiveModel {
            region_id: ActiveValue::Set(region_id),
            crime_type_id: ActiveValue::Set(Some(crime_type_id)),
            year: ActiveValue::Set(year),
            count: ActiveValue::Set(1),
            last_updated: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        entity::prelude::OfficialStat::insert(stat)
            .on_conflict(
                OnConflict::columns([
                    entity::official_stat::Column::RegionId,
                    entity::official_stat::Column::CrimeTypeId,
                    entity::official_stat::Column::Year,
                ])
                .value(
                    entity::official_stat::Column::Count,
                    Expr::cust(r#""official_stat"."count" + 1"#),
                )
                .update_column(entity::official_stat::Column::LastUpdated)
                .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// Most recent year with any statistics recorded for the region
    pub async fn latest_year_for_region(&self, region_id: i32) -> Result<Option<i32>, DbErr> {
        let latest = entity::prelude::OfficialStat::find()
            .filter(entity::official_stat::Column::RegionId.eq(region_id))
            .order_by_desc(entity::official_stat::Column::Year)
            .one(self.db)
            .await?;

        Ok(latest.map(|stat| stat.year))
    }

    /// Statistics rows of a region & year joined with their crime type
    ///
    /// Rows whose crime type was removed are returned with `None`. Passing `major` or
    /// `minor` narrows the result to matching crime types, which also excludes those rows.
    pub async fn find_breakdown(
        &self,
        region_id: i32,
        year: i32,
        major: Option<&str>,
        minor: Option<&str>,
    ) -> Result<
        Vec<(
            entity::official_stat::Model,
            Option<entity::crime_type::Model>,
        )>,
        DbErr,
    > {
        let mut query = entity::prelude::OfficialStat::find()
            .find_also_related(entity::prelude::CrimeType)
            .filter(entity::official_stat::Column::RegionId.eq(region_id))
            .filter(entity::official_stat::Column::Year.eq(year));

        if let Some(major) = major {
            query = query.filter(entity::crime_type::Column::Major.eq(major));
        }
        if let Some(minor) = minor {
            query = query.filter(entity::crime_type::Column::Minor.eq(minor));
        }

        query
            .order_by_asc(entity::official_stat::Column::Id)
            .all(self.db)
            .await
    }

    /// Raw statistics rows, any filter left as `None` is not applied
    pub async fn find_filtered(
        &self,
        region_id: Option<i32>,
        crime_type_id: Option<i32>,
        year: Option<i32>,
    ) -> Result<Vec<entity::official_stat::Model>, DbErr> {
        let mut query = entity::prelude::OfficialStat::find();

        if let Some(region_id) = region_id {
            query = query.filter(entity::official_stat::Column::RegionId.eq(region_id));
        }
        if let Some(crime_type_id) = crime_type_id {
            query = query.filter(entity::official_stat::Column::CrimeTypeId.eq(crime_type_id));
        }
        if let Some(year) = year {
            query = query.filter(entity::official_stat::Column::Year.eq(year));
        }

        query
            .order_by_asc(entity::official_stat::Column::Year)
            .order_by_asc(entity::official_stat::Column::Id)
            .all(self.db)
            .await
    }
}
