//! Favorite operations scoped to one user.
//!
//! Every add checks both sides of the pair exist before inserting, and an
//! add for a pair that already exists is reported as such rather than
//! failing, so clients can retry freely. Removal of a missing pair is a 404.

use sea_orm::DatabaseConnection;

use crate::{
    data::{
        catalog::{
            person::PersonRepository, planet::PlanetRepository, specie::SpecieRepository,
            starship::StarshipRepository, vehicle::VehicleRepository,
        },
        favorite::{
            person::PersonFavoriteRepository, planet::PlanetFavoriteRepository,
            specie::SpecieFavoriteRepository, starship::StarshipFavoriteRepository,
            vehicle::VehicleFavoriteRepository,
        },
        user::UserRepository,
    },
    error::Error,
    model::favorite::{FavoriteDto, UserFavoritesDto},
};

/// Outcome of an add-favorite request.
pub enum AddFavoriteOutcome {
    /// A new favorite row was inserted.
    Created(FavoriteDto),
    /// The (user, entity) pair was already favorited; nothing was written.
    AlreadyExists,
}

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn require_user(&self, user_id: i32) -> Result<(), Error> {
        let user_repository = UserRepository::new(self.db);

        if user_repository.get_by_id(user_id).await?.is_none() {
            return Err(Error::NotFound("user"));
        }

        Ok(())
    }

    /// Collects all of a user's favorites grouped by catalog type.
    ///
    /// # Returns
    /// - `Ok(UserFavoritesDto)` - Favorites grouped by type (lists may be empty)
    /// - `Err(Error::NotFound)` - User does not exist
    pub async fn get_user_favorites(&self, user_id: i32) -> Result<UserFavoritesDto, Error> {
        self.require_user(user_id).await?;

        let planets = PlanetFavoriteRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?;
        let species = SpecieFavoriteRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?;
        let vehicles = VehicleFavoriteRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?;
        let starships = StarshipFavoriteRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?;
        let people = PersonFavoriteRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?;

        Ok(UserFavoritesDto {
            planets: planets.into_iter().map(FavoriteDto::from).collect(),
            species: species.into_iter().map(FavoriteDto::from).collect(),
            vehicles: vehicles.into_iter().map(FavoriteDto::from).collect(),
            starships: starships.into_iter().map(FavoriteDto::from).collect(),
            people: people.into_iter().map(FavoriteDto::from).collect(),
        })
    }

    /// Adds a planet to a user's favorites.
    ///
    /// # Returns
    /// - `Ok(AddFavoriteOutcome)` - Created, or the pair already existed
    /// - `Err(Error::NotFound)` - User or planet does not exist
    pub async fn add_planet_favorite(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<AddFavoriteOutcome, Error> {
        self.require_user(user_id).await?;

        if PlanetRepository::new(self.db)
            .get_by_id(planet_id)
            .await?
            .is_none()
        {
            return Err(Error::NotFound("planet"));
        }

        let favorite_repository = PlanetFavoriteRepository::new(self.db);

        if favorite_repository.find(user_id, planet_id).await?.is_some() {
            return Ok(AddFavoriteOutcome::AlreadyExists);
        }

        let favorite = favorite_repository.create(user_id, planet_id).await?;

        Ok(AddFavoriteOutcome::Created(favorite.into()))
    }

    /// Removes a planet from a user's favorites.
    ///
    /// # Returns
    /// - `Ok(())` - The favorite was removed
    /// - `Err(Error::NotFound)` - No such (user, planet) favorite
    pub async fn remove_planet_favorite(&self, user_id: i32, planet_id: i32) -> Result<(), Error> {
        let result = PlanetFavoriteRepository::new(self.db)
            .delete(user_id, planet_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(Error::NotFound("favorite"));
        }

        Ok(())
    }

    /// Adds a specie to a user's favorites.
    pub async fn add_specie_favorite(
        &self,
        user_id: i32,
        specie_id: i32,
    ) -> Result<AddFavoriteOutcome, Error> {
        self.require_user(user_id).await?;

        if SpecieRepository::new(self.db)
            .get_by_id(specie_id)
            .await?
            .is_none()
        {
            return Err(Error::NotFound("specie"));
        }

        let favorite_repository = SpecieFavoriteRepository::new(self.db);

        if favorite_repository.find(user_id, specie_id).await?.is_some() {
            return Ok(AddFavoriteOutcome::AlreadyExists);
        }

        let favorite = favorite_repository.create(user_id, specie_id).await?;

        Ok(AddFavoriteOutcome::Created(favorite.into()))
    }

    /// Removes a specie from a user's favorites.
    pub async fn remove_specie_favorite(&self, user_id: i32, specie_id: i32) -> Result<(), Error> {
        let result = SpecieFavoriteRepository::new(self.db)
            .delete(user_id, specie_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(Error::NotFound("favorite"));
        }

        Ok(())
    }

    /// Adds a vehicle to a user's favorites.
    pub async fn add_vehicle_favorite(
        &self,
        user_id: i32,
        vehicle_id: i32,
    ) -> Result<AddFavoriteOutcome, Error> {
        self.require_user(user_id).await?;

        if VehicleRepository::new(self.db)
            .get_by_id(vehicle_id)
            .await?
            .is_none()
        {
            return Err(Error::NotFound("vehicle"));
        }

        let favorite_repository = VehicleFavoriteRepository::new(self.db);

        if favorite_repository
            .find(user_id, vehicle_id)
            .await?
            .is_some()
        {
            return Ok(AddFavoriteOutcome::AlreadyExists);
        }

        let favorite = favorite_repository.create(user_id, vehicle_id).await?;

        Ok(AddFavoriteOutcome::Created(favorite.into()))
    }

    /// Removes a vehicle from a user's favorites.
    pub async fn remove_vehicle_favorite(
        &self,
        user_id: i32,
        vehicle_id: i32,
    ) -> Result<(), Error> {
        let result = VehicleFavoriteRepository::new(self.db)
            .delete(user_id, vehicle_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(Error::NotFound("favorite"));
        }

        Ok(())
    }

    /// Adds a starship to a user's favorites.
    pub async fn add_starship_favorite(
        &self,
        user_id: i32,
        starship_id: i32,
    ) -> Result<AddFavoriteOutcome, Error> {
        self.require_user(user_id).await?;

        if StarshipRepository::new(self.db)
            .get_by_id(starship_id)
            .await?
            .is_none()
        {
            return Err(Error::NotFound("starship"));
        }

        let favorite_repository = StarshipFavoriteRepository::new(self.db);

        if favorite_repository
            .find(user_id, starship_id)
            .await?
            .is_some()
        {
            return Ok(AddFavoriteOutcome::AlreadyExists);
        }

        let favorite = favorite_repository.create(user_id, starship_id).await?;

        Ok(AddFavoriteOutcome::Created(favorite.into()))
    }

    /// Removes a starship from a user's favorites.
    pub async fn remove_starship_favorite(
        &self,
        user_id: i32,
        starship_id: i32,
    ) -> Result<(), Error> {
        let result = StarshipFavoriteRepository::new(self.db)
            .delete(user_id, starship_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(Error::NotFound("favorite"));
        }

        Ok(())
    }

    /// Adds a person to a user's favorites.
    pub async fn add_person_favorite(
        &self,
        user_id: i32,
        person_id: i32,
    ) -> Result<AddFavoriteOutcome, Error> {
        self.require_user(user_id).await?;

        if PersonRepository::new(self.db)
            .get_by_id(person_id)
            .await?
            .is_none()
        {
            return Err(Error::NotFound("person"));
        }

        let favorite_repository = PersonFavoriteRepository::new(self.db);

        if favorite_repository.find(user_id, person_id).await?.is_some() {
            return Ok(AddFavoriteOutcome::AlreadyExists);
        }

        let favorite = favorite_repository.create(user_id, person_id).await?;

        Ok(AddFavoriteOutcome::Created(favorite.into()))
    }

    /// Removes a person from a user's favorites.
    pub async fn remove_person_favorite(&self, user_id: i32, person_id: i32) -> Result<(), Error> {
        let result = PersonFavoriteRepository::new(self.db)
            .delete(user_id, person_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(Error::NotFound("favorite"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use holocron_test_utils::{fixtures, test_setup_with_catalog_tables, TestError};

    use super::{AddFavoriteOutcome, FavoriteService};
    use crate::error::Error;

    /// Adding a favorite for a missing user should 404 on the user
    #[tokio::test]
    async fn add_favorite_user_not_found() -> Result<(), TestError> {
        let test = test_setup_with_catalog_tables!()?;
        let planet = fixtures::insert_planet(&test.db, "Tatooine").await?;

        let favorite_service = FavoriteService::new(&test.db);

        let result = favorite_service.add_planet_favorite(1, planet.id).await;

        assert!(matches!(result, Err(Error::NotFound("user"))));

        Ok(())
    }

    /// Adding a favorite for a missing planet should 404 on the planet
    #[tokio::test]
    async fn add_favorite_planet_not_found() -> Result<(), TestError> {
        let test = test_setup_with_catalog_tables!()?;
        let user = fixtures::insert_user(&test.db, "luke", "luke@rebellion.org").await?;

        let favorite_service = FavoriteService::new(&test.db);

        let result = favorite_service.add_planet_favorite(user.id, 1).await;

        assert!(matches!(result, Err(Error::NotFound("planet"))));

        Ok(())
    }

    /// Adding the same pair twice should report AlreadyExists, not error
    #[tokio::test]
    async fn add_favorite_twice_already_exists() -> Result<(), TestError> {
        let test = test_setup_with_catalog_tables!()?;
        let user = fixtures::insert_user(&test.db, "luke", "luke@rebellion.org").await?;
        let planet = fixtures::insert_planet(&test.db, "Tatooine").await?;

        let favorite_service = FavoriteService::new(&test.db);

        let first = favorite_service
            .add_planet_favorite(user.id, planet.id)
            .await
            .unwrap();
        assert!(matches!(first, AddFavoriteOutcome::Created(_)));

        let second = favorite_service
            .add_planet_favorite(user.id, planet.id)
            .await
            .unwrap();
        assert!(matches!(second, AddFavoriteOutcome::AlreadyExists));

        Ok(())
    }

    /// Removing a favorite that was never added should 404
    #[tokio::test]
    async fn remove_missing_favorite_not_found() -> Result<(), TestError> {
        let test = test_setup_with_catalog_tables!()?;
        let user = fixtures::insert_user(&test.db, "luke", "luke@rebellion.org").await?;
        let starship = fixtures::insert_starship(&test.db, "Millennium Falcon").await?;

        let favorite_service = FavoriteService::new(&test.db);

        let result = favorite_service
            .remove_starship_favorite(user.id, starship.id)
            .await;

        assert!(matches!(result, Err(Error::NotFound("favorite"))));

        Ok(())
    }

    /// Grouped favorites should only contain what the user added
    #[tokio::test]
    async fn get_user_favorites_grouped() -> Result<(), TestError> {
        let test = test_setup_with_catalog_tables!()?;
        let user = fixtures::insert_user(&test.db, "luke", "luke@rebellion.org").await?;
        let planet = fixtures::insert_planet(&test.db, "Tatooine").await?;
        let person = fixtures::insert_person(&test.db, "Leia Organa").await?;

        fixtures::insert_planet_favorite(&test.db, user.id, planet.id).await?;
        fixtures::insert_person_favorite(&test.db, user.id, person.id).await?;

        let favorite_service = FavoriteService::new(&test.db);

        let favorites = favorite_service.get_user_favorites(user.id).await.unwrap();

        assert_eq!(favorites.planets.len(), 1);
        assert_eq!(favorites.people.len(), 1);
        assert!(favorites.species.is_empty());
        assert!(favorites.vehicles.is_empty());
        assert!(favorites.starships.is_empty());

        Ok(())
    }

    /// Listing favorites for a missing user should 404
    #[tokio::test]
    async fn get_user_favorites_user_not_found() -> Result<(), TestError> {
        let test = test_setup_with_catalog_tables!()?;

        let favorite_service = FavoriteService::new(&test.db);

        let result = favorite_service.get_user_favorites(42).await;

        assert!(matches!(result, Err(Error::NotFound("user"))));

        Ok(())
    }
}
