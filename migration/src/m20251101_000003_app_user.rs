use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppUser::Table)
                    .if_not_exists()
                    .col(pk_auto(AppUser::Id))
                    .col(string_uniq(AppUser::Email))
                    .col(string_len(AppUser::Nickname, 50))
                    .col(string_len(AppUser::Role, 16).default("user"))
                    .col(string_len(AppUser::AuthProvider, 16).default("local"))
                    .col(string_null(AppUser::PasswordHash))
                    .col(string_len_null(AppUser::GoogleId, 255).unique_key())
                    .col(timestamp(AppUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AppUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AppUser {
    Table,
    Id,
    Email,
    Nickname,
    Role,
    AuthProvider,
    PasswordHash,
    GoogleId,
    CreatedAt,
}
