use sea_orm::DatabaseConnection;

use crate::{
    data::catalog::starship::StarshipRepository, error::Error, model::catalog::CreateStarshipDto,
};

/// Service for catalog starship operations.
pub struct StarshipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StarshipService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a starship after checking name uniqueness.
    pub async fn create_starship(
        &self,
        starship: CreateStarshipDto,
    ) -> Result<entity::starship::Model, Error> {
        let starship_repository = StarshipRepository::new(self.db);

        if starship_repository
            .find_by_name(&starship.name)
            .await?
            .is_some()
        {
            return Err(Error::Conflict(format!(
                "a starship named '{}' already exists",
                starship.name
            )));
        }

        Ok(starship_repository.create(starship).await?)
    }
}
