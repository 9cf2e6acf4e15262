use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260815_000001_user::User, m20260815_000006_person::Person};

static FK_PERSON_FAVORITE_USER_ID: &str = "fk_person_favorite_user_id";
static FK_PERSON_FAVORITE_PERSON_ID: &str = "fk_person_favorite_person_id";
static IDX_PERSON_FAVORITE_USER_PERSON: &str = "idx_person_favorite_user_id_person_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PersonFavorite::Table)
                    .if_not_exists()
                    .col(pk_auto(PersonFavorite::Id))
                    .col(integer(PersonFavorite::UserId))
                    .col(integer(PersonFavorite::PersonId))
                    .col(timestamp(PersonFavorite::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PERSON_FAVORITE_USER_ID)
                    .from_tbl(PersonFavorite::Table)
                    .from_col(PersonFavorite::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PERSON_FAVORITE_PERSON_ID)
                    .from_tbl(PersonFavorite::Table)
                    .from_col(PersonFavorite::PersonId)
                    .to_tbl(Person::Table)
                    .to_col(Person::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PERSON_FAVORITE_USER_PERSON)
                    .table(PersonFavorite::Table)
                    .col(PersonFavorite::UserId)
                    .col(PersonFavorite::PersonId)
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
                    .name(IDX_PERSON_FAVORITE_USER_PERSON)
                    .table(PersonFavorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PERSON_FAVORITE_PERSON_ID)
                    .table(PersonFavorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PERSON_FAVORITE_USER_ID)
                    .table(PersonFavorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PersonFavorite::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PersonFavorite {
    Table,
    Id,
    UserId,
    PersonId,
    CreatedAt,
}
