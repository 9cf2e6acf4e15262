use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, QueryFilter,
};

pub struct VehicleFavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleFavoriteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a favorite linking a user to a vehicle
    pub async fn create(
        &self,
        user_id: i32,
        vehicle_id: i32,
    ) -> Result<entity::vehicle_favorite::Model, DbErr> {
        let favorite = entity::vehicle_favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            vehicle_id: ActiveValue::Set(vehicle_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Find the favorite for one (user, vehicle) pair
    pub async fn find(
        &self,
        user_id: i32,
        vehicle_id: i32,
    ) -> Result<Option<entity::vehicle_favorite::Model>, DbErr> {
        entity::prelude::VehicleFavorite::find()
            .filter(entity::vehicle_favorite::Column::UserId.eq(user_id))
            .filter(entity::vehicle_favorite::Column::VehicleId.eq(vehicle_id))
            .one(self.db)
            .await
    }

    /// Delete the favorite for one (user, vehicle) pair
    ///
    /// Returns OK regardless of the favorite existing; check
    /// [`DeleteResult::rows_affected`] for whether a row was removed.
    pub async fn delete(&self, user_id: i32, vehicle_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::VehicleFavorite::delete_many()
            .filter(entity::vehicle_favorite::Column::UserId.eq(user_id))
            .filter(entity::vehicle_favorite::Column::VehicleId.eq(vehicle_id))
            .exec(self.db)
            .await
    }

    /// Get all vehicle favorites belonging to a user
    pub async fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::vehicle_favorite::Model>, DbErr> {
        entity::prelude::VehicleFavorite::find()
            .filter(entity::vehicle_favorite::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }
}
