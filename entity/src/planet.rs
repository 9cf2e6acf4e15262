use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "planet")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub diameter: i32,
    pub gravity: f64,
    pub population: i64,
    pub terrain: String,
    pub climate: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::planet_favorite::Entity")]
    PlanetFavorite,
}

impl Related<super::planet_favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlanetFavorite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
