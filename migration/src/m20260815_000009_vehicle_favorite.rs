use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260815_000001_user::User, m20260815_000004_vehicle::Vehicle};

static FK_VEHICLE_FAVORITE_USER_ID: &str = "fk_vehicle_favorite_user_id";
static FK_VEHICLE_FAVORITE_VEHICLE_ID: &str = "fk_vehicle_favorite_vehicle_id";
static IDX_VEHICLE_FAVORITE_USER_VEHICLE: &str = "idx_vehicle_favorite_user_id_vehicle_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VehicleFavorite::Table)
                    .if_not_exists()
                    .col(pk_auto(VehicleFavorite::Id))
                    .col(integer(VehicleFavorite::UserId))
                    .col(integer(VehicleFavorite::VehicleId))
                    .col(timestamp(VehicleFavorite::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_VEHICLE_FAVORITE_USER_ID)
                    .from_tbl(VehicleFavorite::Table)
                    .from_col(VehicleFavorite::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_VEHICLE_FAVORITE_VEHICLE_ID)
                    .from_tbl(VehicleFavorite::Table)
                    .from_col(VehicleFavorite::VehicleId)
                    .to_tbl(Vehicle::Table)
                    .to_col(Vehicle::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_VEHICLE_FAVORITE_USER_VEHICLE)
                    .table(VehicleFavorite::Table)
                    .col(VehicleFavorite::UserId)
                    .col(VehicleFavorite::VehicleId)
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
                    .name(IDX_VEHICLE_FAVORITE_USER_VEHICLE)
                    .table(VehicleFavorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_VEHICLE_FAVORITE_VEHICLE_ID)
                    .table(VehicleFavorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_VEHICLE_FAVORITE_USER_ID)
                    .table(VehicleFavorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(VehicleFavorite::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum VehicleFavorite {
    Table,
    Id,
    UserId,
    VehicleId,
    CreatedAt,
}
