use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Specie::Table)
                    .if_not_exists()
                    .col(pk_auto(Specie::Id))
                    .col(string_uniq(Specie::Name))
                    .col(double(Specie::Height))
                    .col(string(Specie::HairColor))
                    .col(string(Specie::SkinColor))
                    .col(string(Specie::Language))
                    .col(integer(Specie::AverageLife))
                    .col(timestamp(Specie::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Specie::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Specie {
    Table,
    Id,
    Name,
    Height,
    HairColor,
    SkinColor,
    Language,
    AverageLife,
    CreatedAt,
}
