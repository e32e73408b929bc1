//! Federated login session data.
//!
//! The federated handshake spans several requests. Its progress lives under three keys:
//! - `OpenAuthStep1` holds the [`PendingLogin`] created when the visitor was sent to the provider
//! - `OpenAuthStep2` holds the [`AuthResult`] produced by the provider callback, successful or not
//! - `OpenAuthAbandon` is set by logout and consumed by the next request

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::{
    model::auth::AuthResult,
    server::{error::Error, service::auth::provider::PendingLogin},
};

pub const SESSION_FEDERATED_STEP1_KEY: &str = "OpenAuthStep1";
pub const SESSION_FEDERATED_STEP2_KEY: &str = "OpenAuthStep2";
pub const SESSION_FEDERATED_ABANDON_KEY: &str = "OpenAuthAbandon";

/// Pending redirect to the identity provider.
#[derive(Deserialize, Serialize, Debug)]
pub struct SessionFederatedStep1(pub PendingLogin);

impl SessionFederatedStep1 {
    pub async fn insert(session: &Session, pending: &PendingLogin) -> Result<(), Error> {
        session
            .insert(
                SESSION_FEDERATED_STEP1_KEY,
                SessionFederatedStep1(pending.clone()),
            )
            .await?;

        Ok(())
    }

    pub async fn get(session: &Session) -> Result<Option<PendingLogin>, Error> {
        Ok(session
            .get::<SessionFederatedStep1>(SESSION_FEDERATED_STEP1_KEY)
            .await?
            .map(|SessionFederatedStep1(pending)| pending))
    }

    pub async fn remove(session: &Session) -> Result<(), Error> {
        session
            .remove::<SessionFederatedStep1>(SESSION_FEDERATED_STEP1_KEY)
            .await?;

        Ok(())
    }
}

/// Completed handshake result, the resting state of a federated login.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionFederatedStep2(pub AuthResult);

impl SessionFederatedStep2 {
    pub async fn insert(session: &Session, result: &AuthResult) -> Result<(), Error> {
        session
            .insert(
                SESSION_FEDERATED_STEP2_KEY,
                SessionFederatedStep2(result.clone()),
            )
            .await?;

        Ok(())
    }

    pub async fn get(session: &Session) -> Result<Option<AuthResult>, Error> {
        Ok(session
            .get::<SessionFederatedStep2>(SESSION_FEDERATED_STEP2_KEY)
            .await?
            .map(|SessionFederatedStep2(result)| result))
    }

    pub async fn remove(session: &Session) -> Result<(), Error> {
        session
            .remove::<SessionFederatedStep2>(SESSION_FEDERATED_STEP2_KEY)
            .await?;

        Ok(())
    }
}

/// Logout marker, honored by exactly one subsequent request.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionFederatedAbandon(pub bool);

impl SessionFederatedAbandon {
    pub async fn insert(session: &Session) -> Result<(), Error> {
        session
            .insert(SESSION_FEDERATED_ABANDON_KEY, SessionFederatedAbandon(true))
            .await?;

        Ok(())
    }

    /// Removes the marker and reports whether it was set.
    pub async fn take(session: &Session) -> Result<bool, Error> {
        Ok(session
            .remove::<SessionFederatedAbandon>(SESSION_FEDERATED_ABANDON_KEY)
            .await?
            .is_some_and(|SessionFederatedAbandon(flag)| flag))
    }
}
