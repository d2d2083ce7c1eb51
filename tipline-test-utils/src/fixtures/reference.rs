use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn reference<'a>(&'a self) -> ReferenceFixtures<'a> {
        ReferenceFixtures { setup: self }
    }
}

pub struct ReferenceFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> ReferenceFixtures<'a> {
    /// Insert a region, deriving its full name from province & city.
    pub async fn insert_region(
        &self,
        province: &str,
        city: Option<&str>,
    ) -> Result<entity::region::Model, TestError> {
        let full_name = match city {
            Some(city) => format!("{} {}", province, city),
            None => province.to_string(),
        };

        Ok(
            entity::prelude::Region::insert(entity::region::ActiveModel {
                province: ActiveValue::Set(province.to_string()),
                city: ActiveValue::Set(city.map(str::to_string)),
                full_name: ActiveValue::Set(full_name),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_crime_type(
        &self,
        major: &str,
        minor: Option<&str>,
    ) -> Result<entity::crime_type::Model, TestError> {
        Ok(
            entity::prelude::CrimeType::insert(entity::crime_type::ActiveModel {
                major: ActiveValue::Set(major.to_string()),
                minor: ActiveValue::Set(minor.map(str::to_string)),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
