use sea_orm::DatabaseConnection;

use crate::{
    data::catalog::specie::SpecieRepository, error::Error, model::catalog::CreateSpecieDto,
};

/// Service for catalog specie operations.
pub struct SpecieService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpecieService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a specie after checking name uniqueness.
    pub async fn create_specie(
        &self,
        specie: CreateSpecieDto,
    ) -> Result<entity::specie::Model, Error> {
        let specie_repository = SpecieRepository::new(self.db);

        if specie_repository
            .find_by_name(&specie.name)
            .await?
            .is_some()
        {
            return Err(Error::Conflict(format!(
                "a specie named '{}' already exists",
                specie.name
            )));
        }

        Ok(specie_repository.create(specie).await?)
    }
}
