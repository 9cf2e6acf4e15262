use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

use crate::model::user::CreateUserDto;

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user from the request body
    pub async fn create(&self, user: CreateUserDto) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(user.username),
            email: ActiveValue::Set(user.email),
            password: ActiveValue::Set(user.password),
            firstname: ActiveValue::Set(user.firstname),
            lastname: ActiveValue::Set(user.lastname),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Get all users
    pub async fn get_all(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find().all(self.db).await
    }

    /// Get a user by its primary key
    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Find a user by username
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Find a user by email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use holocron_test_utils::{test_setup_with_tables, TestError};

    use super::UserRepository;
    use crate::model::user::CreateUserDto;

    fn create_dto(username: &str, email: &str) -> CreateUserDto {
        CreateUserDto {
            username: username.to_string(),
            email: email.to_string(),
            password: "hunter2".to_string(),
            firstname: "Luke".to_string(),
            lastname: "Skywalker".to_string(),
        }
    }

    /// Expect success when creating a new user
    #[tokio::test]
    async fn test_create_user_success() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::User)?;
        let user_repository = UserRepository::new(&test.db);

        let result = user_repository
            .create(create_dto("luke", "luke@rebellion.org"))
            .await;

        assert!(result.is_ok(), "Error: {:?}", result);
        let user = result.unwrap();

        assert_eq!(user.username, "luke");
        assert_eq!(user.email, "luke@rebellion.org");

        Ok(())
    }

    /// Expect Error when creating a user without required tables being created
    #[tokio::test]
    async fn test_create_user_error() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        let user_repository = UserRepository::new(&test.db);

        let result = user_repository
            .create(create_dto("luke", "luke@rebellion.org"))
            .await;

        assert!(result.is_err());

        Ok(())
    }

    /// Expect None when looking up a username that was never created
    #[tokio::test]
    async fn test_find_by_username_none() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::User)?;
        let user_repository = UserRepository::new(&test.db);

        user_repository
            .create(create_dto("luke", "luke@rebellion.org"))
            .await?;

        let result = user_repository.find_by_username("leia").await?;

        assert!(result.is_none());

        Ok(())
    }

    /// Expect the created user back when looking up its email
    #[tokio::test]
    async fn test_find_by_email_some() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::User)?;
        let user_repository = UserRepository::new(&test.db);

        let created = user_repository
            .create(create_dto("luke", "luke@rebellion.org"))
            .await?;

        let found = user_repository.find_by_email("luke@rebellion.org").await?;

        assert!(found.is_some());
        assert_eq!(found.unwrap().id, created.id);

        Ok(())
    }
}
