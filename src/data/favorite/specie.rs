use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, QueryFilter,
};

pub struct SpecieFavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpecieFavoriteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a favorite linking a user to a specie
    pub async fn create(
        &self,
        user_id: i32,
        specie_id: i32,
    ) -> Result<entity::specie_favorite::Model, DbErr> {
        let favorite = entity::specie_favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            specie_id: ActiveValue::Set(specie_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Find the favorite for one (user, specie) pair
    pub async fn find(
        &self,
        user_id: i32,
        specie_id: i32,
    ) -> Result<Option<entity::specie_favorite::Model>, DbErr> {
        entity::prelude::SpecieFavorite::find()
            .filter(entity::specie_favorite::Column::UserId.eq(user_id))
            .filter(entity::specie_favorite::Column::SpecieId.eq(specie_id))
            .one(self.db)
            .await
    }

    /// Delete the favorite for one (user, specie) pair
    ///
    /// Returns OK regardless of the favorite existing; check
    /// [`DeleteResult::rows_affected`] for whether a row was removed.
    pub async fn delete(&self, user_id: i32, specie_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::SpecieFavorite::delete_many()
            .filter(entity::specie_favorite::Column::UserId.eq(user_id))
            .filter(entity::specie_favorite::Column::SpecieId.eq(specie_id))
            .exec(self.db)
            .await
    }

    /// Get all specie favorites belonging to a user
    pub async fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::specie_favorite::Model>, DbErr> {
        entity::prelude::SpecieFavorite::find()
            .filter(entity::specie_favorite::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }
}
