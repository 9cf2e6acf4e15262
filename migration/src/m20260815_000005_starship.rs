use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Starship::Table)
                    .if_not_exists()
                    .col(pk_auto(Starship::Id))
                    .col(string_uniq(Starship::Name))
                    .col(integer(Starship::Crew))
                    .col(integer(Starship::Passengers))
                    .col(string(Starship::ClassName))
                    .col(big_integer(Starship::CargoCap))
                    .col(string(Starship::Consumable))
                    .col(timestamp(Starship::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Starship::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Starship {
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
