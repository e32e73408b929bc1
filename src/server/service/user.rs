//! User registration for the password strategy.

use sea_orm::DatabaseConnection;

use crate::{
    model::auth::RegisteredUserDto,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, Error},
        service::auth::hash::hash_password,
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a password user.
    ///
    /// The user name is trimmed, the password is stored as an argon2 hash only.
    ///
    /// # Returns
    /// - `Ok(RegisteredUserDto)` - User created
    /// - `Err(Error::AuthError(AuthError::InvalidRegistration))` - Empty user name or password
    /// - `Err(Error::AuthError(AuthError::UserNameTaken))` - User name already registered
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn register(
        &self,
        user_name: &str,
        password: &str,
    ) -> Result<RegisteredUserDto, Error> {
        let user_name = user_name.trim();

        if user_name.is_empty() {
            return Err(AuthError::InvalidRegistration("user name is empty".to_string()).into());
        }
        if password.is_empty() {
            return Err(AuthError::InvalidRegistration("password is empty".to_string()).into());
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo.get_by_user_name(user_name).await?.is_some() {
            return Err(AuthError::UserNameTaken(user_name.to_string()).into());
        }

        let password_hash = hash_password(password).await?;
        let user = user_repo.create(user_name, &password_hash).await?;

        tracing::info!(user_id = user.id, user_name = %user.user_name, "Registered user");

        Ok(RegisteredUserDto {
            id: user.id,
            user_name: user.user_name,
        })
    }
}
