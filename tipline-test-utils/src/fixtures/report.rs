use chrono::{Duration, Utc};
use entity::{app_user::UserRole, report::ReportStatus};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn report<'a>(&'a self) -> ReportFixtures<'a> {
        ReportFixtures { setup: self }
    }
}

pub struct ReportFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> ReportFixtures<'a> {
    /// Insert the author, region and crime type a report needs.
    ///
    /// Can only be called once per test as the region & user are unique.
    pub async fn insert_dependencies(
        &self,
    ) -> Result<
        (
            entity::app_user::Model,
            entity::region::Model,
            entity::crime_type::Model,
        ),
        TestError,
    > {
        let user = self
            .setup
            .user()
            .insert_user("reporter@example.com", UserRole::User)
            .await?;
        let region = self
            .setup
            .reference()
            .insert_region("Seoul", Some("Jongno-gu"))
            .await?;
        let crime_type = self
            .setup
            .reference()
            .insert_crime_type("Theft", Some("Pickpocketing"))
            .await?;

        Ok((user, region, crime_type))
    }

    /// Insert a pending report.
    pub async fn insert_report(
        &self,
        user_id: i32,
        region_id: i32,
        crime_type_id: i32,
    ) -> Result<entity::report::Model, TestError> {
        self.insert_report_with(
            user_id,
            region_id,
            crime_type_id,
            "Bicycle stolen",
            "Someone took my bicycle in front of the station",
            ReportStatus::Pending,
            0,
        )
        .await
    }

    /// Insert a report with full control over its contents.
    ///
    /// `age_minutes` shifts `created_at` into the past so tests can assert ordering.
    #[allow(clippy::too_many_arguments)]
    pub async fn insert_report_with(
        &self,
        user_id: i32,
        region_id: i32,
        crime_type_id: i32,
        title: &str,
        content: &str,
        status: ReportStatus,
        age_minutes: i64,
    ) -> Result<entity::report::Model, TestError> {
        let now = Utc::now().naive_utc();
        let created_at = now - Duration::minutes(age_minutes);

        Ok(
            entity::prelude::Report::insert(entity::report::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                region_id: ActiveValue::Set(region_id),
                crime_type_id: ActiveValue::Set(crime_type_id),
                title: ActiveValue::Set(title.to_string()),
                content: ActiveValue::Set(content.to_string()),
                status: ActiveValue::Set(status),
                created_at: ActiveValue::Set(created_at),
                updated_at: ActiveValue::Set(None),
                approved_at: ActiveValue::Set((status == ReportStatus::Approved).then_some(now)),
                rejected_at: ActiveValue::Set((status == ReportStatus::Rejected).then_some(now)),
                official_stat_id: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
