use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WikiUser::Table)
                    .if_not_exists()
                    .col(pk_auto(WikiUser::Id))
                    .col(string_uniq(WikiUser::UserName))
                    .col(string(WikiUser::PasswordHash))
                    .col(timestamp(WikiUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WikiUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum WikiUser {
    Table,
    Id,
    UserName,
    PasswordHash,
    CreatedAt,
}
