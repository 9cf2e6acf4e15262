use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

use crate::model::catalog::CreateStarshipDto;

pub struct StarshipRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StarshipRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a starship from the request body
    pub async fn create(
        &self,
        starship: CreateStarshipDto,
    ) -> Result<entity::starship::Model, DbErr> {
        let starship = entity::starship::ActiveModel {
            name: ActiveValue::Set(starship.name),
            crew: ActiveValue::Set(starship.crew),
            passengers: ActiveValue::Set(starship.passengers),
            class_name: ActiveValue::Set(starship.class_name),
            cargo_cap: ActiveValue::Set(starship.cargo_cap),
            consumable: ActiveValue::Set(starship.consumable),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        starship.insert(self.db).await
    }

    /// Get all starships
    pub async fn get_all(&self) -> Result<Vec<entity::starship::Model>, DbErr> {
        entity::prelude::Starship::find().all(self.db).await
    }

    /// Get a starship by its primary key
    pub async fn get_by_id(
        &self,
        starship_id: i32,
    ) -> Result<Option<entity::starship::Model>, DbErr> {
        entity::prelude::Starship::find_by_id(starship_id)
            .one(self.db)
            .await
    }

    /// Find a starship by name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::starship::Model>, DbErr> {
        entity::prelude::Starship::find()
            .filter(entity::starship::Column::Name.eq(name))
            .one(self.db)
            .await
    }
}
