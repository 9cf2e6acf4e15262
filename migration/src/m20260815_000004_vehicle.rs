use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicle::Id))
                    .col(string_uniq(Vehicle::Name))
                    .col(integer(Vehicle::Crew))
                    .col(integer(Vehicle::Passengers))
                    .col(string(Vehicle::ClassName))
                    .col(big_integer(Vehicle::CargoCap))
                    .col(string(Vehicle::Consumable))
                    .col(timestamp(Vehicle::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Vehicle {
    Table,
    Id,
    Name,
    Crew,
    Passengers,
    ClassName,
    CargoCap,
    Consumable,
    CreatedAt,
}
