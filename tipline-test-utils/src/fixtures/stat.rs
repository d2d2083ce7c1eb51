use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn stat<'a>(&'a self) -> StatFixtures<'a> {
        StatFixtures { setup: self }
    }
}

pub struct StatFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> StatFixtures<'a> {
    pub async fn insert_official_stat(
        &self,
        region_id: i32,
        crime_type_id: Option<i32>,
        year: i32,
        count: i32,
    ) -> Result<entity::official_stat::Model, TestError> {
        Ok(
            entity::prelude::OfficialStat::insert(entity::official_stat::ActiveModel {
                region_id: ActiveValue::Set(region_id),
                crime_type_id: ActiveValue::Set(crime_type_id),
                year: ActiveValue::Set(year),
                count: ActiveValue::Set(count),
                last_updated: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
