use sea_orm::DatabaseConnection;

use crate::{
    data::catalog::planet::PlanetRepository, error::Error, model::catalog::CreatePlanetDto,
};

/// Service for catalog planet operations.
pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a planet after checking name uniqueness.
    ///
    /// # Returns
    /// - `Ok(Model)` - Planet created
    /// - `Err(Error::Conflict)` - A planet with the same name exists
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_planet(
        &self,
        planet: CreatePlanetDto,
    ) -> Result<entity::planet::Model, Error> {
        let planet_repository = PlanetRepository::new(self.db);

        if planet_repository
            .find_by_name(&planet.name)
            .await?
            .is_some()
        {
            return Err(Error::Conflict(format!(
                "a planet named '{}' already exists",
                planet.name
            )));
        }

        Ok(planet_repository.create(planet).await?)
    }
}

#[cfg(test)]
mod tests {
    use holocron_test_utils::{test_setup_with_tables, TestError};

    use super::PlanetService;
    use crate::{error::Error, model::catalog::CreatePlanetDto};

    fn create_dto(name: &str) -> CreatePlanetDto {
        CreatePlanetDto {
            name: name.to_string(),
            diameter: 7200,
            gravity: 1.1,
            population: 0,
            terrain: "tundra".to_string(),
            climate: "frozen".to_string(),
        }
    }

    /// Creating two planets with the same name should conflict
    #[tokio::test]
    async fn duplicate_name_conflict() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Planet)?;
        let planet_service = PlanetService::new(&test.db);

        planet_service.create_planet(create_dto("Hoth")).await.unwrap();

        let result = planet_service.create_planet(create_dto("Hoth")).await;

        assert!(matches!(result, Err(Error::Conflict(_))));

        Ok(())
    }

    /// Distinct names should both be created
    #[tokio::test]
    async fn distinct_names_ok() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Planet)?;
        let planet_service = PlanetService::new(&test.db);

        planet_service.create_planet(create_dto("Hoth")).await.unwrap();
        let result = planet_service.create_planet(create_dto("Endor")).await;

        assert!(result.is_ok(), "Error: {:?}", result);

        Ok(())
    }
}
