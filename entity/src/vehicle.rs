use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicle")]
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
    #[sea_orm(has_many = "super::vehicle_favorite::Entity")]
    VehicleFavorite,
}

impl Related<super::vehicle_favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VehicleFavorite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
