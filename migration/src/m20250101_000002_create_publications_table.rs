use sea_orm_migration::prelude::*;

use crate::m20250101_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Publications {
    Table,
    Id,
    Title,
    Content,
    AuthorId,
    Likes,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Publications::Table)
                .if_not_exists()
                .col(ColumnDef::new(Publications::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Publications::Title).string().not_null())
                .col(ColumnDef::new(Publications::Content).text().not_null())
                .col(ColumnDef::new(Publications::AuthorId).integer().not_null())
                .col(ColumnDef::new(Publications::Likes).integer().not_null().default(0))
                .col(ColumnDef::new(Publications::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                // declared inline: SQLite cannot add foreign keys after the fact
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_publications_author")
                        .from(Publications::Table, Publications::AuthorId)
                        .to(Users::Table, Users::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_publications_author")
                .table(Publications::Table)
                .col(Publications::AuthorId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Publications::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
