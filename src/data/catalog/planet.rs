use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

use crate::model::catalog::CreatePlanetDto;

pub struct PlanetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a planet from the request body
    pub async fn create(&self, planet: CreatePlanetDto) -> Result<entity::planet::Model, DbErr> {
        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(planet.name),
            diameter: ActiveValue::Set(planet.diameter),
            gravity: ActiveValue::Set(planet.gravity),
            population: ActiveValue::Set(planet.population),
            terrain: ActiveValue::Set(planet.terrain),
            climate: ActiveValue::Set(planet.climate),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        planet.insert(self.db).await
    }

    /// Get all planets
    pub async fn get_all(&self) -> Result<Vec<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find().all(self.db).await
    }

    /// Get a planet by its primary key
    pub async fn get_by_id(&self, planet_id: i32) -> Result<Option<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await
    }

    /// Find a planet by name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find()
            .filter(entity::planet::Column::Name.eq(name))
            .one(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use holocron_test_utils::{test_setup_with_tables, TestError};

    use super::PlanetRepository;
    use crate::model::catalog::CreatePlanetDto;

    fn create_dto(name: &str) -> CreatePlanetDto {
        CreatePlanetDto {
            name: name.to_string(),
            diameter: 10465,
            gravity: 1.0,
            population: 200_000,
            terrain: "desert".to_string(),
            climate: "arid".to_string(),
        }
    }

    /// Should succeed when inserting a planet into its table
    #[tokio::test]
    async fn create_planet() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Planet)?;
        let planet_repo = PlanetRepository::new(&test.db);

        let result = planet_repo.create(create_dto("Tatooine")).await;

        assert!(result.is_ok(), "Error: {:?}", result);
        let created = result.unwrap();

        assert_eq!(created.name, "Tatooine");
        assert_eq!(created.population, 200_000);

        Ok(())
    }

    /// Should return all inserted planets
    #[tokio::test]
    async fn get_all_planets() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Planet)?;
        let planet_repo = PlanetRepository::new(&test.db);

        planet_repo.create(create_dto("Tatooine")).await?;
        planet_repo.create(create_dto("Hoth")).await?;

        let planets = planet_repo.get_all().await?;

        assert_eq!(planets.len(), 2);

        Ok(())
    }

    /// Should return None for an id that does not exist
    #[tokio::test]
    async fn get_planet_by_id_none() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Planet)?;
        let planet_repo = PlanetRepository::new(&test.db);

        let planet = planet_repo.create(create_dto("Tatooine")).await?;

        let result = planet_repo.get_by_id(planet.id + 1).await?;

        assert!(result.is_none());

        Ok(())
    }

    /// Should find a planet by its exact name
    #[tokio::test]
    async fn find_planet_by_name() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Planet)?;
        let planet_repo = PlanetRepository::new(&test.db);

        let created = planet_repo.create(create_dto("Tatooine")).await?;

        let found = planet_repo.find_by_name("Tatooine").await?;

        assert!(found.is_some());
        assert_eq!(found.unwrap().id, created.id);

        Ok(())
    }
}
