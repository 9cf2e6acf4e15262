use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, QueryFilter,
};

pub struct PersonFavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PersonFavoriteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a favorite linking a user to a person
    pub async fn create(
        &self,
        user_id: i32,
        person_id: i32,
    ) -> Result<entity::person_favorite::Model, DbErr> {
        let favorite = entity::person_favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            person_id: ActiveValue::Set(person_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Find the favorite for one (user, person) pair
    pub async fn find(
        &self,
        user_id: i32,
        person_id: i32,
    ) -> Result<Option<entity::person_favorite::Model>, DbErr> {
        entity::prelude::PersonFavorite::find()
            .filter(entity::person_favorite::Column::UserId.eq(user_id))
            .filter(entity::person_favorite::Column::PersonId.eq(person_id))
            .one(self.db)
            .await
    }

    /// Delete the favorite for one (user, person) pair
    ///
    /// Returns OK regardless of the favorite existing; check
    /// [`DeleteResult::rows_affected`] for whether a row was removed.
    pub async fn delete(&self, user_id: i32, person_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::PersonFavorite::delete_many()
            .filter(entity::person_favorite::Column::UserId.eq(user_id))
            .filter(entity::person_favorite::Column::PersonId.eq(person_id))
            .exec(self.db)
            .await
    }

    /// Get all person favorites belonging to a user
    pub async fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::person_favorite::Model>, DbErr> {
        entity::prelude::PersonFavorite::find()
            .filter(entity::person_favorite::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }
}
