use sea_orm::DatabaseConnection;

use crate::{
    data::catalog::person::PersonRepository, error::Error, model::catalog::CreatePersonDto,
};

/// Service for catalog person operations.
pub struct PersonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PersonService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a person after checking name uniqueness.
    pub async fn create_person(
        &self,
        person: CreatePersonDto,
    ) -> Result<entity::person::Model, Error> {
        let person_repository = PersonRepository::new(self.db);

        if person_repository
            .find_by_name(&person.name)
            .await?
            .is_some()
        {
            return Err(Error::Conflict(format!(
                "a person named '{}' already exists",
                person.name
            )));
        }

        Ok(person_repository.create(person).await?)
    }
}
