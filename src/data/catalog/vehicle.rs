use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

use crate::model::catalog::CreateVehicleDto;

pub struct VehicleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a vehicle from the request body
    pub async fn create(&self, vehicle: CreateVehicleDto) -> Result<entity::vehicle::Model, DbErr> {
        let vehicle = entity::vehicle::ActiveModel {
            name: ActiveValue::Set(vehicle.name),
            crew: ActiveValue::Set(vehicle.crew),
            passengers: ActiveValue::Set(vehicle.passengers),
            class_name: ActiveValue::Set(vehicle.class_name),
            cargo_cap: ActiveValue::Set(vehicle.cargo_cap),
            consumable: ActiveValue::Set(vehicle.consumable),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        vehicle.insert(self.db).await
    }

    /// Get all vehicles
    pub async fn get_all(&self) -> Result<Vec<entity::vehicle::Model>, DbErr> {
        entity::prelude::Vehicle::find().all(self.db).await
    }

    /// Get a vehicle by its primary key
    pub async fn get_by_id(
        &self,
        vehicle_id: i32,
    ) -> Result<Option<entity::vehicle::Model>, DbErr> {
        entity::prelude::Vehicle::find_by_id(vehicle_id)
            .one(self.db)
            .await
    }

    /// Find a vehicle by name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::vehicle::Model>, DbErr> {
        entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::Name.eq(name))
            .one(self.db)
            .await
    }
}
