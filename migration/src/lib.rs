pub use sea_orm_migration::prelude::*;

mod m20251101_000001_region;
mod m20251101_000002_crime_type;
mod m20251101_000003_app_user;
mod m20251101_000004_official_stat;
mod m20251101_000005_report;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_region::Migration),
            Box::new(m20251101_000002_crime_type::Migration),
            Box::new(m20251101_000003_app_user::Migration),
            Box::new(m20251101_000004_official_stat::Migration),
            Box::new(m20251101_000005_report::Migration),
        ]
    }
}
