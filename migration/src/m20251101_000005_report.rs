use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000001_region::Region, m20251101_000002_crime_type::CrimeType,
    m20251101_000003_app_user::AppUser, m20251101_000004_official_stat::OfficialStat,
};

static IDX_REPORT_USER_ID: &str = "idx-report-user_id";
static IDX_REPORT_REGION_ID: &str = "idx-report-region_id";
static IDX_REPORT_CRIME_TYPE_ID: &str = "idx-report-crime_type_id";
static IDX_REPORT_STATUS: &str = "idx-report-status";
static FK_REPORT_USER_ID: &str = "fk-report-user_id";
static FK_REPORT_REGION_ID: &str = "fk-report-region_id";
static FK_REPORT_CRIME_TYPE_ID: &str = "fk-report-crime_type_id";
static FK_REPORT_OFFICIAL_STAT_ID: &str = "fk-report-official_stat_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Report::Table)
                    .if_not_exists()
                    .col(pk_auto(Report::Id))
                    .col(integer(Report::UserId))
                    .col(integer(Report::RegionId))
                    .col(integer(Report::CrimeTypeId))
                    .col(string_len(Report::Title, 200))
                    .col(text(Report::Content))
                    .col(string_len(Report::Status, 16).default("pending"))
                    .col(timestamp(Report::CreatedAt))
                    .col(timestamp_null(Report::UpdatedAt))
                    .col(timestamp_null(Report::ApprovedAt))
                    .col(timestamp_null(Report::RejectedAt))
                    .col(integer_null(Report::OfficialStatId))
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            (IDX_REPORT_USER_ID, Report::UserId),
            (IDX_REPORT_REGION_ID, Report::RegionId),
            (IDX_REPORT_CRIME_TYPE_ID, Report::CrimeTypeId),
            (IDX_REPORT_STATUS, Report::Status),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Report::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_REPORT_USER_ID)
                    .from_tbl(Report::Table)
                    .from_col(Report::UserId)
                    .to_tbl(AppUser::Table)
                    .to_col(AppUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_REPORT_REGION_ID)
                    .from_tbl(Report::Table)
                    .from_col(Report::RegionId)
                    .to_tbl(Region::Table)
                    .to_col(Region::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_REPORT_CRIME_TYPE_ID)
                    .from_tbl(Report::Table)
                    .from_col(Report::CrimeTypeId)
                    .to_tbl(CrimeType::Table)
                    .to_col(CrimeType::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_REPORT_OFFICIAL_STAT_ID)
                    .from_tbl(Report::Table)
                    .from_col(Report::OfficialStatId)
                    .to_tbl(OfficialStat::Table)
                    .to_col(OfficialStat::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            FK_REPORT_OFFICIAL_STAT_ID,
            FK_REPORT_CRIME_TYPE_ID,
            FK_REPORT_REGION_ID,
            FK_REPORT_USER_ID,
        ] {
            manager
                .drop_foreign_key(ForeignKey::drop().name(name).table(Report::Table).to_owned())
                .await?;
        }

        for name in [
            IDX_REPORT_STATUS,
            IDX_REPORT_CRIME_TYPE_ID,
            IDX_REPORT_REGION_ID,
            IDX_REPORT_USER_ID,
        ] {
            manager
                .drop_index(Index::drop().name(name).table(Report::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Report::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Report {
    Table,
    Id,
    UserId,
    RegionId,
    CrimeTypeId,
    Title,
    Content,
    Status,
    CreatedAt,
    UpdatedAt,
    ApprovedAt,
    RejectedAt,
    OfficialStatId,
}
