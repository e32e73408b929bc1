//! Federated-identity authentication strategy.
//!
//! The handshake moves a session through `Fresh -> Step1 -> Step2`:
//! - **Fresh**: no keys set. A `BeginFederated` payload asks the provider for a redirect URI, stores
//!   the pending login under `OpenAuthStep1` and hands the URI back to the caller.
//! - **Step1**: the provider callback finalizes the login. Whatever the outcome, the result is
//!   stored under `OpenAuthStep2` and the pending login is dropped. There is no automatic retry.
//! - **Step2**: the stored result is copied forward on every request.
//!
//! `abandon` clears both steps and sets `OpenAuthAbandon`. The next request consumes the flag and
//! returns unauthenticated without looking at anything else, so stale handshake state cannot
//! revive the login within the same cycle as the logout.

use std::sync::Arc;

use async_trait::async_trait;
use tower_sessions::Session;

use crate::{
    model::auth::AuthResult,
    server::{
        error::{auth::AuthFailure, Error},
        model::session::federated::{
            SessionFederatedAbandon, SessionFederatedStep1, SessionFederatedStep2,
        },
        service::auth::{
            provider::{CallbackParams, IdentityProvider, PendingLogin},
            AuthPayload, AuthStrategy, StrategyKind,
        },
    },
};

pub struct FederatedStrategy {
    provider: Arc<dyn IdentityProvider>,
    /// Callback URL handed to the provider
    return_url: String,
}

impl FederatedStrategy {
    pub fn new(provider: impl IdentityProvider + 'static, return_url: impl Into<String>) -> Self {
        Self {
            provider: Arc::new(provider),
            return_url: return_url.into(),
        }
    }

    async fn begin(&self, session: &Session, provider: &str) -> Result<AuthResult, Error> {
        match self.provider.begin_login(provider, &self.return_url).await {
            Ok(pending) => {
                SessionFederatedStep1::insert(session, &pending).await?;

                tracing::debug!(provider = %provider, "Federated login started");

                Ok(AuthResult::redirect(pending.redirect_uri))
            }
            Err(err) => {
                let failure = AuthFailure::from(err);

                tracing::warn!(provider = %provider, "{}", failure);

                Ok(failure.to_result())
            }
        }
    }

    async fn finalize(
        &self,
        session: &Session,
        pending: PendingLogin,
        callback: CallbackParams,
    ) -> Result<AuthResult, Error> {
        let result = match self.provider.finalize_login(&pending, &callback).await {
            Ok(claims) => {
                tracing::debug!(
                    provider = %pending.provider,
                    identifier = %claims.identifier,
                    "Federated login completed"
                );

                let name = claims.name.unwrap_or_else(|| claims.identifier.clone());
                AuthResult::authenticated(claims.identifier, name)
            }
            Err(err) => {
                let failure = AuthFailure::from(err);

                tracing::warn!(provider = %pending.provider, "{}", failure);

                failure.to_result()
            }
        };

        SessionFederatedStep1::remove(session).await?;
        SessionFederatedStep2::insert(session, &result).await?;

        Ok(result)
    }
}

#[async_trait]
impl AuthStrategy for FederatedStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Federated
    }

    async fn initialize(
        &self,
        session: &Session,
        payload: AuthPayload,
    ) -> Result<AuthResult, Error> {
        if SessionFederatedAbandon::take(session).await? {
            tracing::debug!("Federated login abandoned, skipping handshake state for one request");

            return Ok(AuthResult::unauthenticated());
        }

        if let Some(result) = SessionFederatedStep2::get(session).await? {
            // A failed handshake may be restarted, an established identity stays until abandoned
            return match payload {
                AuthPayload::BeginFederated { provider } if !result.authenticated => {
                    SessionFederatedStep2::remove(session).await?;
                    self.begin(session, &provider).await
                }
                _ => Ok(result),
            };
        }

        if let Some(pending) = SessionFederatedStep1::get(session).await? {
            return match payload {
                AuthPayload::FederatedCallback(callback) => {
                    self.finalize(session, pending, callback).await
                }
                AuthPayload::BeginFederated { provider } => self.begin(session, &provider).await,
                _ => Ok(AuthResult::unauthenticated()),
            };
        }

        match payload {
            AuthPayload::BeginFederated { provider } => self.begin(session, &provider).await,
            AuthPayload::FederatedCallback(_) => {
                tracing::debug!("{}", AuthFailure::MissingDependency("Pending federated login"));

                Ok(AuthResult::unauthenticated())
            }
            _ => Ok(AuthResult::unauthenticated()),
        }
    }

    async fn abandon(&self, session: &Session) -> Result<(), Error> {
        SessionFederatedStep1::remove(session).await?;
        SessionFederatedStep2::remove(session).await?;
        SessionFederatedAbandon::insert(session).await?;

        Ok(())
    }
}
