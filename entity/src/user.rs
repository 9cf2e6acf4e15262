//! Account entity. Favorites across all five catalog types hang off of it.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub firstname: String,
    pub lastname: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::person_favorite::Entity")]
    PersonFavorite,
    #[sea_orm(has_many = "super::planet_favorite::Entity")]
    PlanetFavorite,
    #[sea_orm(has_many = "super::specie_favorite::Entity")]
    SpecieFavorite,
    #[sea_orm(has_many = "super::starship_favorite::Entity")]
    StarshipFavorite,
    #[sea_orm(has_many = "super::vehicle_favorite::Entity")]
    VehicleFavorite,
}

impl ActiveModelBehavior for ActiveModel {}
