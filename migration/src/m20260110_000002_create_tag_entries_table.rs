use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TagEntry::Table)
                    .if_not_exists()
                    .col(uuid(TagEntry::Id).primary_key())
                    .col(date(TagEntry::Date))
                    .col(string(TagEntry::Name))
                    .col(string_null(TagEntry::Value))
                    .col(small_integer_null(TagEntry::Rating))
                    .col(
                        timestamp_with_time_zone(TagEntry::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("tag_entries_date_idx")
                    .table(TagEntry::Table)
                    .col(TagEntry::Date)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("tag_entries_name_idx")
                    .table(TagEntry::Table)
                    .col(TagEntry::Name)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("tag_entries_name_idx")
                    .table(TagEntry::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("tag_entries_date_idx")
                    .table(TagEntry::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(TagEntry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TagEntry {
    #[sea_orm(iden = "tag_entries")]
    Table,
    Id,
    Date,
    Name,
    Value,
    Rating,
    CreatedAt,
}
