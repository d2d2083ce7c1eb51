use chrono::{NaiveDateTime, Utc};
use entity::report::ReportStatus;
use sea_orm::{
    ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::report::{NewReport, ReportChanges, ReportDecision, ReportFilter, ReportSort};

#[cfg(test)]
mod tests;

pub struct ReportRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReportRepository<'a, C> {
    /// Creates a new instance of [`ReportRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new report in the `pending` status
    pub async fn create(
        &self,
        user_id: i32,
        report: NewReport,
    ) -> Result<entity::report::Model, DbErr> {
        let report = entity::report::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            region_id: ActiveValue::Set(report.region_id),
            crime_type_id: ActiveValue::Set(report.crime_type_id),
            title: ActiveValue::Set(report.title),
            content: ActiveValue::Set(report.content),
            status: ActiveValue::Set(ReportStatus::Pending),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(None),
            approved_at: ActiveValue::Set(None),
            rejected_at: ActiveValue::Set(None),
            official_stat_id: ActiveValue::Set(None),
            ..Default::default()
        };

        entity::prelude::Report::insert(report)
            .exec_with_returning(self.db)
            .await
    }

    pub async fn get_by_id(&self, report_id: i32) -> Result<Option<entity::report::Model>, DbErr> {
        entity::prelude::Report::find_by_id(report_id)
            .one(self.db)
            .await
    }

    /// Lists reports matching the filter, sorted & paginated
    ///
    /// Ties on `created_at` are broken by ID in the same direction so that identical
    /// filters always return identically ordered pages.
    pub async fn find_filtered(
        &self,
        filter: &ReportFilter,
    ) -> Result<Vec<entity::report::Model>, DbErr> {
        let mut query = entity::prelude::Report::find();

        if let Some(region_id) = filter.region_id {
            query = query.filter(entity::report::Column::RegionId.eq(region_id));
        }
        if let Some(crime_type_id) = filter.crime_type_id {
            query = query.filter(entity::report::Column::CrimeTypeId.eq(crime_type_id));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::report::Column::Status.eq(status));
        }
        if let Some(keyword) = &filter.keyword {
            query = query.filter(
                Condition::any()
                    .add(entity::report::Column::Title.contains(keyword.as_str()))
                    .add(entity::report::Column::Content.contains(keyword.as_str())),
            );
        }

        query = match filter.sort {
            ReportSort::Latest => query
                .order_by_desc(entity::report::Column::CreatedAt)
                .order_by_desc(entity::report::Column::Id),
            ReportSort::Oldest => query
                .order_by_asc(entity::report::Column::CreatedAt)
                .order_by_asc(entity::report::Column::Id),
        };

        query
            .offset(filter.skip)
            .limit(filter.page_limit())
            .all(self.db)
            .await
    }

    /// Applies edits to a report only while it is still pending
    ///
    /// Returns the number of rows affected, 0 means the report either does not exist
    /// or has already been approved or rejected.
    pub async fn update_pending(
        &self,
        report_id: i32,
        changes: &ReportChanges,
        now: NaiveDateTime,
    ) -> Result<u64, DbErr> {
        let mut report = entity::report::ActiveModel {
            updated_at: ActiveValue::Set(Some(now)),
            ..Default::default()
        };

        if let Some(title) = &changes.title {
            report.title = ActiveValue::Set(title.clone());
        }
        if let Some(content) = &changes.content {
            report.content = ActiveValue::Set(content.clone());
        }
        if let Some(region_id) = changes.region_id {
            report.region_id = ActiveValue::Set(region_id);
        }
        if let Some(crime_type_id) = changes.crime_type_id {
            report.crime_type_id = ActiveValue::Set(crime_type_id);
        }

        let result = entity::prelude::Report::update_many()
            .set(report)
            .filter(entity::report::Column::Id.eq(report_id))
            .filter(entity::report::Column::Status.eq(ReportStatus::Pending))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Moves a pending report to the decision's terminal status
    ///
    /// The `status = pending` condition is evaluated by the store as part of the update, so
    /// of two concurrent decisions on the same report only one can affect a row. Returns the
    /// number of rows affected.
    pub async fn decide(
        &self,
        report_id: i32,
        decision: ReportDecision,
        now: NaiveDateTime,
    ) -> Result<u64, DbErr> {
        let mut report = entity::report::ActiveModel {
            status: ActiveValue::Set(decision.target_status()),
            ..Default::default()
        };

        match decision {
            ReportDecision::Approve => report.approved_at = ActiveValue::Set(Some(now)),
            ReportDecision::Reject => report.rejected_at = ActiveValue::Set(Some(now)),
        }

        let result = entity::prelude::Report::update_many()
            .set(report)
            .filter(entity::report::Column::Id.eq(report_id))
            .filter(entity::report::Column::Status.eq(ReportStatus::Pending))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Links a report to the statistics row its approval incremented
    pub async fn link_official_stat(
        &self,
        report_id: i32,
        official_stat_id: i32,
    ) -> Result<u64, DbErr> {
        let report = entity::report::ActiveModel {
            official_stat_id: ActiveValue::Set(Some(official_stat_id)),
            ..Default::default()
        };

        let result = entity::prelude::Report::update_many()
            .set(report)
            .filter(entity::report::Column::Id.eq(report_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a report
    ///
    /// Returns OK regardless of report existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, report_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Report::delete_by_id(report_id)
            .exec(self.db)
            .await
    }
}
