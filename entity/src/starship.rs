use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "starship")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub crew: i32,
    pub passengers: i32,
    pub class_name: String,
    pub cargo_cap: i64,
    pub consumable: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::starship_favorite::Entity")]
    StarshipFavorite,
}

impl Related<super::starship_favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StarshipFavorite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
