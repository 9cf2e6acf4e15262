use sea_orm::DatabaseConnection;

use crate::{
    data::catalog::vehicle::VehicleRepository, error::Error, model::catalog::CreateVehicleDto,
};

/// Service for catalog vehicle operations.
pub struct VehicleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a vehicle after checking name uniqueness.
    pub async fn create_vehicle(
        &self,
        vehicle: CreateVehicleDto,
    ) -> Result<entity::vehicle::Model, Error> {
        let vehicle_repository = VehicleRepository::new(self.db);

        if vehicle_repository
            .find_by_name(&vehicle.name)
            .await?
            .is_some()
        {
            return Err(Error::Conflict(format!(
                "a vehicle named '{}' already exists",
                vehicle.name
            )));
        }

        Ok(vehicle_repository.create(vehicle).await?)
    }
}
