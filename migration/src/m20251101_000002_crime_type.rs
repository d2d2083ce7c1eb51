use sea_orm_migration::{prelude::*, schema::*};

static IDX_CRIME_TYPE_MAJOR_MINOR: &str = "idx-crime_type-major-minor";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CrimeType::Table)
                    .if_not_exists()
                    .col(pk_auto(CrimeType::Id))
                    .col(string_len(CrimeType::Major, 50))
                    .col(string_len_null(CrimeType::Minor, 50))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CRIME_TYPE_MAJOR_MINOR)
                    .table(CrimeType::Table)
                    .col(CrimeType::Major)
                    .col(CrimeType::Minor)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CRIME_TYPE_MAJOR_MINOR)
                    .table(CrimeType::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CrimeType::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CrimeType {
    Table,
    Id,
    Major,
    Minor,
}
