use serde::{Deserialize, Serialize};

/// Identifier reported for password logins, the user record ID is never exposed.
pub const HIDDEN_IDENTIFIER: &str = "hidden";

/// Uniform view of the current visitor's authentication state.
///
/// Rebuilt on every request by the active authentication strategy, either from session state or
/// from a fresh validation. The same record is what strategies persist to the session, so it
/// carries only plain data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AuthResult {
    /// Whether the visitor is logged in
    pub authenticated: bool,
    /// Stable identifier of the visitor, `"hidden"` for password logins
    pub identifier: String,
    /// Display name of the visitor
    pub name: String,
    /// Human readable explanation when a federated login failed or was cancelled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Provider URL the visitor must be sent to in order to continue a federated login
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,
}

impl AuthResult {
    /// An unauthenticated result without any message.
    pub fn unauthenticated() -> Self {
        Self::default()
    }

    /// An authenticated result for the given identity.
    pub fn authenticated(identifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            authenticated: true,
            identifier: identifier.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// An unauthenticated result explaining why login did not complete.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error_message: Some(message.into()),
            ..Default::default()
        }
    }

    /// An unauthenticated result asking the caller to redirect to the identity provider.
    pub fn redirect(redirect_uri: impl Into<String>) -> Self {
        Self {
            redirect_uri: Some(redirect_uri.into()),
            ..Default::default()
        }
    }
}

/// User name and password submitted to the password login route.
#[derive(Clone, Deserialize, utoipa::ToSchema)]
pub struct LoginForm {
    pub user_name: String,
    pub password: String,
}

/// Account created through the registration route.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RegisteredUserDto {
    pub id: i32,
    pub user_name: String,
}
