use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

use crate::model::catalog::CreateSpecieDto;

pub struct SpecieRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpecieRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a specie from the request body
    pub async fn create(&self, specie: CreateSpecieDto) -> Result<entity::specie::Model, DbErr> {
        let specie = entity::specie::ActiveModel {
            name: ActiveValue::Set(specie.name),
            height: ActiveValue::Set(specie.height),
            hair_color: ActiveValue::Set(specie.hair_color),
            skin_color: ActiveValue::Set(specie.skin_color),
            language: ActiveValue::Set(specie.language),
            average_life: ActiveValue::Set(specie.average_life),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        specie.insert(self.db).await
    }

    /// Get all species
    pub async fn get_all(&self) -> Result<Vec<entity::specie::Model>, DbErr> {
        entity::prelude::Specie::find().all(self.db).await
    }

    /// Get a specie by its primary key
    pub async fn get_by_id(&self, specie_id: i32) -> Result<Option<entity::specie::Model>, DbErr> {
        entity::prelude::Specie::find_by_id(specie_id)
            .one(self.db)
            .await
    }

    /// Find a specie by name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::specie::Model>, DbErr> {
        entity::prelude::Specie::find()
            .filter(entity::specie::Column::Name.eq(name))
            .one(self.db)
            .await
    }
}
