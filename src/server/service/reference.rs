use sea_orm::DatabaseConnection;

use crate::{
    model::reference::{CrimeTypeDto, RegionDto},
    server::{
        data::{crime_type::CrimeTypeRepository, region::RegionRepository},
        error::Error,
    },
};

/// Read access to the regions & crime types reports are classified by
pub struct ReferenceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReferenceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_regions(&self) -> Result<Vec<RegionDto>, Error> {
        let regions = RegionRepository::new(self.db).list_all().await?;

        Ok(regions.into_iter().map(RegionDto::from).collect())
    }

    pub async fn list_crime_types(&self) -> Result<Vec<CrimeTypeDto>, Error> {
        let crime_types = CrimeTypeRepository::new(self.db).list_all().await?;

        Ok(crime_types.into_iter().map(CrimeTypeDto::from).collect())
    }
}
