//! Password-based authentication strategy.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    model::auth::{AuthResult, HIDDEN_IDENTIFIER},
    server::{
        data::user::UserRepository,
        error::{auth::AuthFailure, Error},
        model::session::password::SessionPasswordAuth,
        service::auth::{
            hash::verify_password, AuthPayload, AuthStrategy, Credentials, StrategyKind,
        },
    },
};

/// Validates user name and password against the credential store.
///
/// A successful validation is cached in the session under `"UPAuth"`; while it is present the
/// credential store is not consulted again. Failed validations leave the session untouched.
pub struct PasswordStrategy {
    db: DatabaseConnection,
}

impl PasswordStrategy {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks credentials against the stored hash.
    ///
    /// # Returns
    /// - `Ok(Ok(AuthResult))` - Credentials valid, authenticated result
    /// - `Ok(Err(AuthFailure::ValidationFailure))` - Unknown user or wrong password
    /// - `Err(Error::DbErr)` - Credential store lookup failed
    async fn validate(
        &self,
        credentials: &Credentials,
    ) -> Result<Result<AuthResult, AuthFailure>, Error> {
        let user_repo = UserRepository::new(&self.db);

        let Some(user) = user_repo.get_by_user_name(&credentials.user_name).await? else {
            return Ok(Err(AuthFailure::ValidationFailure));
        };

        if !verify_password(&credentials.password, &user.password_hash).await? {
            return Ok(Err(AuthFailure::ValidationFailure));
        }

        Ok(Ok(AuthResult::authenticated(HIDDEN_IDENTIFIER, user.user_name)))
    }
}

#[async_trait]
impl AuthStrategy for PasswordStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Password
    }

    async fn initialize(
        &self,
        session: &Session,
        payload: AuthPayload,
    ) -> Result<AuthResult, Error> {
        if let Some(result) = SessionPasswordAuth::get(session).await? {
            return Ok(result);
        }

        let AuthPayload::Credentials(credentials) = payload else {
            tracing::trace!("{}", AuthFailure::MissingDependency("Credentials"));

            return Ok(AuthResult::unauthenticated());
        };

        match self.validate(&credentials).await? {
            Ok(result) => {
                SessionPasswordAuth::insert(session, &result).await?;

                tracing::debug!(user_name = %result.name, "Password login succeeded");

                Ok(result)
            }
            Err(failure) => {
                tracing::debug!(user_name = %credentials.user_name, "{}", failure);

                Ok(AuthResult::unauthenticated())
            }
        }
    }

    async fn abandon(&self, session: &Session) -> Result<(), Error> {
        SessionPasswordAuth::remove(session).await
    }
}
