//! Test configuration constants for the mock identity provider.
//!
//! These values are placeholders, not real credentials.

/// Provider name the mock identity provider is configured under.
pub static TEST_OIDC_PROVIDER: &str = "example";

/// Mock OAuth2 client ID.
pub static TEST_OIDC_CLIENT_ID: &str = "oidc_client_id";

/// Mock OAuth2 client secret.
pub static TEST_OIDC_CLIENT_SECRET: &str = "oidc_client_secret";

/// Callback URL the mock provider sends visitors back to.
pub static TEST_CALLBACK_URL: &str = "http://localhost:8080/api/auth/callback";

/// Authorization endpoint path on the mock server. Never requested, the visitor's browser would.
pub static AUTHORIZE_PATH: &str = "/authorize";

/// Token exchange endpoint path on the mock server.
pub static TOKEN_PATH: &str = "/token";

/// Userinfo endpoint path on the mock server.
pub static USERINFO_PATH: &str = "/userinfo";
