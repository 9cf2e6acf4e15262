use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

use crate::model::catalog::CreatePersonDto;

pub struct PersonRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PersonRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a person from the request body
    pub async fn create(&self, person: CreatePersonDto) -> Result<entity::person::Model, DbErr> {
        let person = entity::person::ActiveModel {
            name: ActiveValue::Set(person.name),
            height: ActiveValue::Set(person.height),
            hair_color: ActiveValue::Set(person.hair_color),
            skin_color: ActiveValue::Set(person.skin_color),
            eye_color: ActiveValue::Set(person.eye_color),
            gender: ActiveValue::Set(person.gender),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        person.insert(self.db).await
    }

    /// Get all people
    pub async fn get_all(&self) -> Result<Vec<entity::person::Model>, DbErr> {
        entity::prelude::Person::find().all(self.db).await
    }

    /// Get a person by its primary key
    pub async fn get_by_id(&self, person_id: i32) -> Result<Option<entity::person::Model>, DbErr> {
        entity::prelude::Person::find_by_id(person_id)
            .one(self.db)
            .await
    }

    /// Find a person by name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::person::Model>, DbErr> {
        entity::prelude::Person::find()
            .filter(entity::person::Column::Name.eq(name))
            .one(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use holocron_test_utils::{test_setup_with_tables, TestError};

    use super::PersonRepository;
    use crate::model::catalog::CreatePersonDto;

    /// Should find a person by name after creating it
    #[tokio::test]
    async fn create_then_find_person() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Person)?;
        let person_repo = PersonRepository::new(&test.db);

        let created = person_repo
            .create(CreatePersonDto {
                name: "Luke Skywalker".to_string(),
                height: 1.72,
                hair_color: "Blond".to_string(),
                skin_color: "Fair".to_string(),
                eye_color: "Blue".to_string(),
                gender: "Male".to_string(),
            })
            .await?;

        let found = person_repo.find_by_name("Luke Skywalker").await?;

        assert!(found.is_some());
        assert_eq!(found.unwrap().id, created.id);

        Ok(())
    }
}
