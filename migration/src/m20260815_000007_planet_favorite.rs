use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260815_000001_user::User, m20260815_000002_planet::Planet};

static FK_PLANET_FAVORITE_USER_ID: &str = "fk_planet_favorite_user_id";
static FK_PLANET_FAVORITE_PLANET_ID: &str = "fk_planet_favorite_planet_id";
static IDX_PLANET_FAVORITE_USER_PLANET: &str = "idx_planet_favorite_user_id_planet_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlanetFavorite::Table)
                    .if_not_exists()
                    .col(pk_auto(PlanetFavorite::Id))
                    .col(integer(PlanetFavorite::UserId))
                    .col(integer(PlanetFavorite::PlanetId))
                    .col(timestamp(PlanetFavorite::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PLANET_FAVORITE_USER_ID)
                    .from_tbl(PlanetFavorite::Table)
                    .from_col(PlanetFavorite::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PLANET_FAVORITE_PLANET_ID)
                    .from_tbl(PlanetFavorite::Table)
                    .from_col(PlanetFavorite::PlanetId)
                    .to_tbl(Planet::Table)
                    .to_col(Planet::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLANET_FAVORITE_USER_PLANET)
                    .table(PlanetFavorite::Table)
                    .col(PlanetFavorite::UserId)
                    .col(PlanetFavorite::PlanetId)
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
                    .name(IDX_PLANET_FAVORITE_USER_PLANET)
                    .table(PlanetFavorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PLANET_FAVORITE_PLANET_ID)
                    .table(PlanetFavorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PLANET_FAVORITE_USER_ID)
                    .table(PlanetFavorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PlanetFavorite::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PlanetFavorite {
    Table,
    Id,
    UserId,
    PlanetId,
    CreatedAt,
}
