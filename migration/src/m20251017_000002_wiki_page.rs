use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WikiPage::Table)
                    .if_not_exists()
                    .col(pk_auto(WikiPage::Id))
                    .col(string(WikiPage::Title))
                    .col(string_uniq(WikiPage::Alias))
                    .col(text(WikiPage::Body))
                    .col(timestamp(WikiPage::CreatedAt))
                    .col(timestamp(WikiPage::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WikiPage::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum WikiPage {
    Table,
    Id,
    Title,
    Alias,
    Body,
    CreatedAt,
    UpdatedAt,
}
