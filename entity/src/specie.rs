use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "specie")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub height: f64,
    pub hair_color: String,
    pub skin_color: String,
    pub language: String,
    pub average_life: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::specie_favorite::Entity")]
    SpecieFavorite,
}

impl Related<super::specie_favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SpecieFavorite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
