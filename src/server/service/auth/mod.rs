//! Authentication strategies and the facade selecting between them.
//!
//! Exactly one [`AuthStrategy`] is active per deployment. It is chosen once at startup from the
//! `AUTH_STRATEGY` setting and wrapped in an [`Authenticator`], which the rest of the application
//! uses without knowing which handshake is behind it:
//!
//! - [`password::PasswordStrategy`] validates a user name and password against the credential store
//! - [`federated::FederatedStrategy`] drives a redirect handshake with an external identity provider
//!
//! Every request handler builds an explicit [`AuthPayload`] from its typed extractors and passes it
//! to [`Authenticator::initialize`]. Strategies ignore payloads that do not belong to them.

pub mod federated;
pub mod hash;
pub mod password;
pub mod provider;

use std::{fmt, str::FromStr, sync::Arc};

use async_trait::async_trait;
use tower_sessions::Session;

use crate::{
    model::auth::{AuthResult, LoginForm},
    server::{error::Error, service::auth::provider::CallbackParams},
};

/// Which authentication strategy a deployment uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyKind {
    Password,
    Federated,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Password => write!(f, "password"),
            Self::Federated => write!(f, "federated"),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "password" => Ok(Self::Password),
            "federated" | "openid" => Ok(Self::Federated),
            other => Err(format!(
                "unknown strategy {other:?}, expected \"password\" or \"federated\""
            )),
        }
    }
}

/// User name and password submitted by the visitor.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub user_name: String,
    pub password: String,
}

impl From<LoginForm> for Credentials {
    fn from(form: LoginForm) -> Self {
        Self {
            user_name: form.user_name,
            password: form.password,
        }
    }
}

/// Authentication input carried by the current request.
#[derive(Clone, Debug, Default)]
pub enum AuthPayload {
    /// Nothing to validate, only restore the session's state
    #[default]
    None,
    /// Password login form
    Credentials(Credentials),
    /// Request to start a federated login with the named provider
    BeginFederated { provider: String },
    /// Identity provider redirecting the visitor back
    FederatedCallback(CallbackParams),
}

/// Shared capability of the interchangeable authentication strategies.
///
/// Login failures never surface as `Err`: they produce an unauthenticated [`AuthResult`],
/// optionally carrying an `error_message`. `Err` is reserved for session store failures.
#[async_trait]
pub trait AuthStrategy: Send + Sync {
    fn kind(&self) -> StrategyKind;

    /// Restores or establishes the visitor's authentication state for this request.
    async fn initialize(&self, session: &Session, payload: AuthPayload)
        -> Result<AuthResult, Error>;

    /// Logs the visitor out.
    async fn abandon(&self, session: &Session) -> Result<(), Error>;
}

/// Facade over the deployment's single active [`AuthStrategy`].
#[derive(Clone)]
pub struct Authenticator {
    strategy: Arc<dyn AuthStrategy>,
}

impl Authenticator {
    pub fn new(strategy: impl AuthStrategy + 'static) -> Self {
        Self {
            strategy: Arc::new(strategy),
        }
    }

    /// Which strategy this deployment was started with.
    pub fn strategy(&self) -> StrategyKind {
        self.strategy.kind()
    }

    pub async fn initialize(
        &self,
        session: &Session,
        payload: AuthPayload,
    ) -> Result<AuthResult, Error> {
        self.strategy.initialize(session, payload).await
    }

    pub async fn abandon(&self, session: &Session) -> Result<(), Error> {
        self.strategy.abandon(session).await
    }
}
