//! Join record marking a specie as a favorite of a user.
//!
//! Unique per `(user_id, specie_id)`, enforced by a migration-level index.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "specie_favorite")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub specie_id: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::specie::Entity",
        from = "Column::SpecieId",
        to = "super::specie::Column::Id"
    )]
    Specie,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::specie::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Specie.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
