use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260815_000001_user::User, m20260815_000003_specie::Specie};

static FK_SPECIE_FAVORITE_USER_ID: &str = "fk_specie_favorite_user_id";
static FK_SPECIE_FAVORITE_SPECIE_ID: &str = "fk_specie_favorite_specie_id";
static IDX_SPECIE_FAVORITE_USER_SPECIE: &str = "idx_specie_favorite_user_id_specie_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SpecieFavorite::Table)
                    .if_not_exists()
                    .col(pk_auto(SpecieFavorite::Id))
                    .col(integer(SpecieFavorite::UserId))
                    .col(integer(SpecieFavorite::SpecieId))
                    .col(timestamp(SpecieFavorite::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SPECIE_FAVORITE_USER_ID)
                    .from_tbl(SpecieFavorite::Table)
                    .from_col(SpecieFavorite::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SPECIE_FAVORITE_SPECIE_ID)
                    .from_tbl(SpecieFavorite::Table)
                    .from_col(SpecieFavorite::SpecieId)
                    .to_tbl(Specie::Table)
                    .to_col(Specie::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SPECIE_FAVORITE_USER_SPECIE)
                    .table(SpecieFavorite::Table)
                    .col(SpecieFavorite::UserId)
                    .col(SpecieFavorite::SpecieId)
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
                    .name(IDX_SPECIE_FAVORITE_USER_SPECIE)
                    .table(SpecieFavorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SPECIE_FAVORITE_SPECIE_ID)
                    .table(SpecieFavorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SPECIE_FAVORITE_USER_ID)
                    .table(SpecieFavorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SpecieFavorite::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SpecieFavorite {
    Table,
    Id,
    UserId,
    SpecieId,
    CreatedAt,
}
