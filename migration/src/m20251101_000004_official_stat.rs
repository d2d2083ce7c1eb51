use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000001_region::Region, m20251101_000002_crime_type::CrimeType};

static IDX_OFFICIAL_STAT_TRIPLE: &str = "idx-official_stat-region_id-crime_type_id-year";
static IDX_OFFICIAL_STAT_YEAR: &str = "idx-official_stat-year";
static FK_OFFICIAL_STAT_REGION_ID: &str = "fk-official_stat-region_id";
static FK_OFFICIAL_STAT_CRIME_TYPE_ID: &str = "fk-official_stat-crime_type_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OfficialStat::Table)
                    .if_not_exists()
                    .col(pk_auto(OfficialStat::Id))
                    .col(integer(OfficialStat::RegionId))
                    .col(integer_null(OfficialStat::CrimeTypeId))
                    .col(integer(OfficialStat::Year))
                    .col(integer(OfficialStat::Count).default(0))
                    .col(timestamp(OfficialStat::LastUpdated))
                    .to_owned(),
            )
            .await?;

        // Serialises concurrent increments for the same triple. Crime types referenced here
        // cannot be deleted, so no further `(region, NULL, year)` rows appear after import
        manager
            .create_index(
                Index::create()
                    .name(IDX_OFFICIAL_STAT_TRIPLE)
                    .table(OfficialStat::Table)
                    .col(OfficialStat::RegionId)
                    .col(OfficialStat::CrimeTypeId)
                    .col(OfficialStat::Year)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_OFFICIAL_STAT_YEAR)
                    .table(OfficialStat::Table)
                    .col(OfficialStat::Year)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_OFFICIAL_STAT_REGION_ID)
                    .from_tbl(OfficialStat::Table)
                    .from_col(OfficialStat::RegionId)
                    .to_tbl(Region::Table)
                    .to_col(Region::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_OFFICIAL_STAT_CRIME_TYPE_ID)
                    .from_tbl(OfficialStat::Table)
                    .from_col(OfficialStat::CrimeTypeId)
                    .to_tbl(CrimeType::Table)
                    .to_col(CrimeType::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_OFFICIAL_STAT_CRIME_TYPE_ID)
                    .table(OfficialStat::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_OFFICIAL_STAT_REGION_ID)
                    .table(OfficialStat::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_OFFICIAL_STAT_YEAR)
                    .table(OfficialStat::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_OFFICIAL_STAT_TRIPLE)
                    .table(OfficialStat::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(OfficialStat::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum OfficialStat {
    Table,
    Id,
    RegionId,
    CrimeTypeId,
    Year,
    Count,
    LastUpdated,
}
