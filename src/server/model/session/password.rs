//! Password login session data.
//!
//! The password strategy stores the visitor's [`AuthResult`] under a single key once their
//! credentials have been validated. Later requests copy it forward without touching the
//! credential store.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::{model::auth::AuthResult, server::error::Error};

/// Session key for the password strategy's authenticated result.
pub const SESSION_PASSWORD_AUTH_KEY: &str = "UPAuth";

/// Session wrapper for the password strategy's authenticated result.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionPasswordAuth(pub AuthResult);

impl SessionPasswordAuth {
    /// Stores the authenticated result in the session.
    ///
    /// # Arguments
    /// - `session` - Visitor's session
    /// - `result` - Result of a successful credential validation
    ///
    /// # Returns
    /// - `Ok(())` - Result stored
    /// - `Err(Error)` - Session storage failed
    pub async fn insert(session: &Session, result: &AuthResult) -> Result<(), Error> {
        session
            .insert(SESSION_PASSWORD_AUTH_KEY, SessionPasswordAuth(result.clone()))
            .await?;

        Ok(())
    }

    /// Retrieves the authenticated result, `None` when the visitor has not logged in.
    pub async fn get(session: &Session) -> Result<Option<AuthResult>, Error> {
        Ok(session
            .get::<SessionPasswordAuth>(SESSION_PASSWORD_AUTH_KEY)
            .await?
            .map(|SessionPasswordAuth(result)| result))
    }

    /// Removes the authenticated result, ending the visitor's login.
    pub async fn remove(session: &Session) -> Result<(), Error> {
        session
            .remove::<SessionPasswordAuth>(SESSION_PASSWORD_AUTH_KEY)
            .await?;

        Ok(())
    }
}
