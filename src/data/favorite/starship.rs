use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, QueryFilter,
};

pub struct StarshipFavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StarshipFavoriteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a favorite linking a user to a starship
    pub async fn create(
        &self,
        user_id: i32,
        starship_id: i32,
    ) -> Result<entity::starship_favorite::Model, DbErr> {
        let favorite = entity::starship_favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            starship_id: ActiveValue::Set(starship_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Find the favorite for one (user, starship) pair
    pub async fn find(
        &self,
        user_id: i32,
        starship_id: i32,
    ) -> Result<Option<entity::starship_favorite::Model>, DbErr> {
        entity::prelude::StarshipFavorite::find()
            .filter(entity::starship_favorite::Column::UserId.eq(user_id))
            .filter(entity::starship_favorite::Column::StarshipId.eq(starship_id))
            .one(self.db)
            .await
    }

    /// Delete the favorite for one (user, starship) pair
    ///
    /// Returns OK regardless of the favorite existing; check
    /// [`DeleteResult::rows_affected`] for whether a row was removed.
    pub async fn delete(&self, user_id: i32, starship_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::StarshipFavorite::delete_many()
            .filter(entity::starship_favorite::Column::UserId.eq(user_id))
            .filter(entity::starship_favorite::Column::StarshipId.eq(starship_id))
            .exec(self.db)
            .await
    }

    /// Get all starship favorites belonging to a user
    pub async fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::starship_favorite::Model>, DbErr> {
        entity::prelude::StarshipFavorite::find()
            .filter(entity::starship_favorite::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }
}
