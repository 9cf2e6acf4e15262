use sea_orm::DatabaseConnection;

use crate::{data::user::UserRepository, error::Error, model::user::CreateUserDto};

/// Service for managing user accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user after checking username and email uniqueness.
    ///
    /// # Returns
    /// - `Ok(Model)` - User created
    /// - `Err(Error::Conflict)` - Username or email already in use
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_user(&self, user: CreateUserDto) -> Result<entity::user::Model, Error> {
        let user_repository = UserRepository::new(self.db);

        if user_repository
            .find_by_username(&user.username)
            .await?
            .is_some()
        {
            return Err(Error::Conflict("the username is already in use".to_string()));
        }

        if user_repository.find_by_email(&user.email).await?.is_some() {
            return Err(Error::Conflict("the email is already in use".to_string()));
        }

        Ok(user_repository.create(user).await?)
    }
}

#[cfg(test)]
mod tests {
    use holocron_test_utils::{test_setup_with_tables, TestError};

    use super::UserService;
    use crate::{error::Error, model::user::CreateUserDto};

    fn create_dto(username: &str, email: &str) -> CreateUserDto {
        CreateUserDto {
            username: username.to_string(),
            email: email.to_string(),
            password: "hunter2".to_string(),
            firstname: String::new(),
            lastname: String::new(),
        }
    }

    /// Duplicate usernames should be rejected as a conflict
    #[tokio::test]
    async fn duplicate_username_conflict() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::User)?;
        let user_service = UserService::new(&test.db);

        user_service
            .create_user(create_dto("luke", "luke@rebellion.org"))
            .await
            .unwrap();

        let result = user_service
            .create_user(create_dto("luke", "other@rebellion.org"))
            .await;

        assert!(matches!(result, Err(Error::Conflict(_))));

        Ok(())
    }

    /// Duplicate emails should be rejected as a conflict
    #[tokio::test]
    async fn duplicate_email_conflict() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::User)?;
        let user_service = UserService::new(&test.db);

        user_service
            .create_user(create_dto("luke", "luke@rebellion.org"))
            .await
            .unwrap();

        let result = user_service
            .create_user(create_dto("leia", "luke@rebellion.org"))
            .await;

        assert!(matches!(result, Err(Error::Conflict(_))));

        Ok(())
    }
}
