use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    model::auth::AuthResult,
    server::{
        error::{error_response, provider::ProviderError},
        service::auth::StrategyKind,
    },
};

/// Errors rejecting an HTTP request on authentication grounds.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Visitor is not logged in")]
    NotAuthenticated,
    #[error("The {0} authentication strategy is not enabled on this server")]
    StrategyDisabled(StrategyKind),
    #[error("User name {0:?} is already taken")]
    UserNameTaken(String),
    #[error("Invalid registration: {0}")]
    InvalidRegistration(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotAuthenticated => {
                error_response(StatusCode::UNAUTHORIZED, "You must be logged in")
            }
            Self::StrategyDisabled(_) => error_response(StatusCode::NOT_FOUND, self.to_string()),
            Self::UserNameTaken(_) => error_response(StatusCode::CONFLICT, self.to_string()),
            Self::InvalidRegistration(_) => {
                error_response(StatusCode::BAD_REQUEST, self.to_string())
            }
        }
    }
}

/// Reasons a login attempt did not produce an authenticated visitor.
///
/// These never propagate to the caller. Strategies log them and fold them into an
/// unauthenticated `AuthResult`, attaching [`AuthFailure::user_message`] when there is one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthFailure {
    /// Unknown user name or wrong password.
    #[error("Invalid user name or password")]
    ValidationFailure,
    /// The identity provider could not complete the handshake.
    #[error("Login with the identity provider failed: {0}")]
    ProviderFailure(String),
    /// The visitor cancelled at the identity provider.
    #[error("Login was cancelled at the identity provider")]
    ProviderCancelled,
    /// Expected session state or request payload is absent.
    #[error("{0} not present")]
    MissingDependency(&'static str),
}

impl AuthFailure {
    /// Message to show the visitor, `None` for silent failures.
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::ValidationFailure | Self::MissingDependency(_) => None,
            Self::ProviderFailure(_) | Self::ProviderCancelled => Some(self.to_string()),
        }
    }

    /// The unauthenticated result reported for this failure.
    pub fn to_result(&self) -> AuthResult {
        match self.user_message() {
            Some(message) => AuthResult::failed(message),
            None => AuthResult::unauthenticated(),
        }
    }
}

impl From<ProviderError> for AuthFailure {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Cancelled => Self::ProviderCancelled,
            err => Self::ProviderFailure(err.to_string()),
        }
    }
}
