use sea_orm_migration::prelude::*;

use crate::m20250101_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Followers {
    Table,
    FollowedId,
    FollowerId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // The composite PK is what makes concurrent follows race-safe:
        // inserts use ON CONFLICT (followed_id, follower_id) DO NOTHING.
        m.create_table(
            Table::create()
                .table(Followers::Table)
                .if_not_exists()
                .col(ColumnDef::new(Followers::FollowedId).integer().not_null())
                .col(ColumnDef::new(Followers::FollowerId).integer().not_null())
                .primary_key(
                    Index::create()
                        .name("pk_followers")
                        .col(Followers::FollowedId)
                        .col(Followers::FollowerId)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_followers_followed")
                        .from(Followers::Table, Followers::FollowedId)
                        .to(Users::Table, Users::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_followers_follower")
                        .from(Followers::Table, Followers::FollowerId)
                        .to(Users::Table, Users::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_followers_follower")
                .table(Followers::Table)
                .col(Followers::FollowerId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Followers::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
