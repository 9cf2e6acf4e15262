use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, QueryFilter,
};

pub struct PlanetFavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetFavoriteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a favorite linking a user to a planet
    pub async fn create(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<entity::planet_favorite::Model, DbErr> {
        let favorite = entity::planet_favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(planet_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Find the favorite for one (user, planet) pair
    pub async fn find(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<Option<entity::planet_favorite::Model>, DbErr> {
        entity::prelude::PlanetFavorite::find()
            .filter(entity::planet_favorite::Column::UserId.eq(user_id))
            .filter(entity::planet_favorite::Column::PlanetId.eq(planet_id))
            .one(self.db)
            .await
    }

    /// Delete the favorite for one (user, planet) pair
    ///
    /// Returns OK regardless of the favorite existing; check
    /// [`DeleteResult::rows_affected`] for whether a row was removed.
    pub async fn delete(&self, user_id: i32, planet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::PlanetFavorite::delete_many()
            .filter(entity::planet_favorite::Column::UserId.eq(user_id))
            .filter(entity::planet_favorite::Column::PlanetId.eq(planet_id))
            .exec(self.db)
            .await
    }

    /// Get all planet favorites belonging to a user
    pub async fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::planet_favorite::Model>, DbErr> {
        entity::prelude::PlanetFavorite::find()
            .filter(entity::planet_favorite::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use holocron_test_utils::{fixtures, test_setup_with_tables, TestError};

    use super::PlanetFavoriteRepository;

    /// Should create then find the same (user, planet) favorite
    #[tokio::test]
    async fn create_and_find_favorite() -> Result<(), TestError> {
        let test = test_setup_with_tables!(
            entity::prelude::User,
            entity::prelude::Planet,
            entity::prelude::PlanetFavorite,
        )?;
        let user = fixtures::insert_user(&test.db, "luke", "luke@rebellion.org").await?;
        let planet = fixtures::insert_planet(&test.db, "Tatooine").await?;

        let favorite_repo = PlanetFavoriteRepository::new(&test.db);

        let created = favorite_repo.create(user.id, planet.id).await?;
        let found = favorite_repo.find(user.id, planet.id).await?;

        assert!(found.is_some());
        assert_eq!(found.unwrap().id, created.id);

        Ok(())
    }

    /// Deleting an existing favorite should affect exactly one row
    #[tokio::test]
    async fn delete_favorite() -> Result<(), TestError> {
        let test = test_setup_with_tables!(
            entity::prelude::User,
            entity::prelude::Planet,
            entity::prelude::PlanetFavorite,
        )?;
        let user = fixtures::insert_user(&test.db, "luke", "luke@rebellion.org").await?;
        let planet = fixtures::insert_planet(&test.db, "Tatooine").await?;

        let favorite_repo = PlanetFavoriteRepository::new(&test.db);
        favorite_repo.create(user.id, planet.id).await?;

        let result = favorite_repo.delete(user.id, planet.id).await?;

        assert_eq!(result.rows_affected, 1);
        assert!(favorite_repo.find(user.id, planet.id).await?.is_none());

        Ok(())
    }

    /// Deleting a favorite that does not exist should affect no rows
    #[tokio::test]
    async fn delete_favorite_none() -> Result<(), TestError> {
        let test = test_setup_with_tables!(
            entity::prelude::User,
            entity::prelude::Planet,
            entity::prelude::PlanetFavorite,
        )?;
        let user = fixtures::insert_user(&test.db, "luke", "luke@rebellion.org").await?;
        let planet = fixtures::insert_planet(&test.db, "Tatooine").await?;

        let favorite_repo = PlanetFavoriteRepository::new(&test.db);

        let result = favorite_repo.delete(user.id, planet.id).await?;

        assert_eq!(result.rows_affected, 0);

        Ok(())
    }

    /// Listing by user should only return that user's favorites
    #[tokio::test]
    async fn get_by_user_id_isolated_per_user() -> Result<(), TestError> {
        let test = test_setup_with_tables!(
            entity::prelude::User,
            entity::prelude::Planet,
            entity::prelude::PlanetFavorite,
        )?;
        let luke = fixtures::insert_user(&test.db, "luke", "luke@rebellion.org").await?;
        let leia = fixtures::insert_user(&test.db, "leia", "leia@rebellion.org").await?;
        let planet = fixtures::insert_planet(&test.db, "Tatooine").await?;

        let favorite_repo = PlanetFavoriteRepository::new(&test.db);
        favorite_repo.create(luke.id, planet.id).await?;

        let luke_favorites = favorite_repo.get_by_user_id(luke.id).await?;
        let leia_favorites = favorite_repo.get_by_user_id(leia.id).await?;

        assert_eq!(luke_favorites.len(), 1);
        assert!(leia_favorites.is_empty());

        Ok(())
    }
}
