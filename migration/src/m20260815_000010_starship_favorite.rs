use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260815_000001_user::User, m20260815_000005_starship::Starship};

static FK_STARSHIP_FAVORITE_USER_ID: &str = "fk_starship_favorite_user_id";
static FK_STARSHIP_FAVORITE_STARSHIP_ID: &str = "fk_starship_favorite_starship_id";
static IDX_STARSHIP_FAVORITE_USER_STARSHIP: &str = "idx_starship_favorite_user_id_starship_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StarshipFavorite::Table)
                    .if_not_exists()
                    .col(pk_auto(StarshipFavorite::Id))
                    .col(integer(StarshipFavorite::UserId))
                    .col(integer(StarshipFavorite::StarshipId))
                    .col(timestamp(StarshipFavorite::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STARSHIP_FAVORITE_USER_ID)
                    .from_tbl(StarshipFavorite::Table)
                    .from_col(StarshipFavorite::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STARSHIP_FAVORITE_STARSHIP_ID)
                    .from_tbl(StarshipFavorite::Table)
                    .from_col(StarshipFavorite::StarshipId)
                    .to_tbl(Starship::Table)
                    .to_col(Starship::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_STARSHIP_FAVORITE_USER_STARSHIP)
                    .table(StarshipFavorite::Table)
                    .col(StarshipFavorite::UserId)
                    .col(StarshipFavorite::StarshipId)
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
                    .name(IDX_STARSHIP_FAVORITE_USER_STARSHIP)
                    .table(StarshipFavorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_STARSHIP_FAVORITE_STARSHIP_ID)
                    .table(StarshipFavorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_STARSHIP_FAVORITE_USER_ID)
                    .table(StarshipFavorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(StarshipFavorite::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum StarshipFavorite {
    Table,
    Id,
    UserId,
    StarshipId,
    CreatedAt,
}
