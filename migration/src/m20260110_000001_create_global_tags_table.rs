use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GlobalTag::Table)
                    .if_not_exists()
                    .col(string(GlobalTag::Name).primary_key())
                    .col(integer(GlobalTag::Color))
                    .col(boolean(GlobalTag::Hidden).default(false))
                    .col(boolean(GlobalTag::UserSelectedColor).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GlobalTag::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GlobalTag {
    #[sea_orm(iden = "global_tags")]
    Table,
    Name,
    Color,
    Hidden,
    UserSelectedColor,
}
