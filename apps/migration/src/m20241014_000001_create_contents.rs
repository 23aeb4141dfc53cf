use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Contents {
    Table,
    Id,
    Title,
    Keywords,
    ContentType,
    Tone,
    Audience,
    Length,
    GeneratedText,
    CreatedAt,
}

const CREATED_AT_INDEX: &str = "idx_contents_created_at";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contents::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Contents::Id).big_integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Contents::Title).string().not_null())
                    .col(ColumnDef::new(Contents::Keywords).string().not_null())
                    .col(ColumnDef::new(Contents::ContentType).string().not_null())
                    .col(ColumnDef::new(Contents::Tone).string().not_null())
                    .col(ColumnDef::new(Contents::Audience).string().not_null())
                    .col(ColumnDef::new(Contents::Length).string().not_null())
                    .col(ColumnDef::new(Contents::GeneratedText).text().not_null().default(""))
                    .col(ColumnDef::new(Contents::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(CREATED_AT_INDEX)
                    .table(Contents::Table)
                    .col(Contents::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(CREATED_AT_INDEX).table(Contents::Table).to_owned())
            .await?;
        manager.drop_table(Table::drop().table(Contents::Table).to_owned()).await
    }
}
