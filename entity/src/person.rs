use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "person")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub height: f64,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub gender: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::person_favorite::Entity")]
    PersonFavorite,
}

impl Related<super::person_favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PersonFavorite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
