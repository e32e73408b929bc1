use tower_sessions::Session;

use crate::{
    model::auth::AuthResult,
    server::{
        error::{auth::AuthError, Error},
        model::app::AppState,
        service::auth::{AuthPayload, StrategyKind},
    },
};

/// Rejects the request unless the deployment runs the `expected` strategy.
///
/// # Returns
/// - `Ok(())` - Strategy is active
/// - `Err(Error::AuthError(AuthError::StrategyDisabled))` - Another strategy is active
pub fn require_strategy(state: &AppState, expected: StrategyKind) -> Result<(), Error> {
    if state.auth.strategy() != expected {
        return Err(AuthError::StrategyDisabled(expected).into());
    }

    Ok(())
}

/// Restores the visitor's authentication state without submitting anything new.
pub async fn current_auth(state: &AppState, session: &Session) -> Result<AuthResult, Error> {
    state.auth.initialize(session, AuthPayload::None).await
}

/// Restores the visitor's authentication state and rejects anonymous visitors.
///
/// # Returns
/// - `Ok(AuthResult)` - Visitor is authenticated
/// - `Err(Error::AuthError(AuthError::NotAuthenticated))` - Visitor is not logged in
/// - `Err(Error)` - Session store failure
pub async fn require_authenticated(
    state: &AppState,
    session: &Session,
) -> Result<AuthResult, Error> {
    let auth = current_auth(state, session).await?;

    if !auth.authenticated {
        return Err(AuthError::NotAuthenticated.into());
    }

    Ok(auth)
}
