//! Identity provider contract for the federated strategy, and its OAuth2 implementation.
//!
//! A federated login is two provider calls separated by a browser redirect:
//! 1. [`IdentityProvider::begin_login`] produces a [`PendingLogin`] holding the provider URL the
//!    visitor is redirected to, along with the CSRF state and PKCE verifier needed later
//! 2. [`IdentityProvider::finalize_login`] consumes the provider's callback parameters together
//!    with the stored pending login and returns the visitor's [`Claims`]

use std::borrow::Cow;

use async_trait::async_trait;
use oauth2::{
    basic::BasicClient, AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken,
    EndpointNotSet, EndpointSet, PkceCodeChallenge, PkceCodeVerifier, RedirectUrl, Scope,
    TokenResponse, TokenUrl,
};
use serde::{Deserialize, Serialize};

use crate::server::{
    config::FederatedConfig,
    error::{config::ConfigError, provider::ProviderError, Error},
};

/// Error code sent by OAuth2 providers when the visitor declines the login.
pub const ACCESS_DENIED: &str = "access_denied";

/// State of a federated login between the redirect to the provider and its callback.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingLogin {
    /// Provider the login was started with
    pub provider: String,
    /// Provider URL the visitor is sent to
    pub redirect_uri: String,
    /// Callback URL the provider sends the visitor back to
    pub return_url: String,
    pub csrf_state: String,
    pub pkce_verifier: String,
}

/// Query parameters of the provider's redirect back to this application.
#[derive(Clone, Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    /// Set instead of `code` when the provider did not authenticate the visitor
    pub error: Option<String>,
    pub error_description: Option<String>,
}

impl CallbackParams {
    /// Checks the callback against the pending login and returns the authorization code.
    ///
    /// # Returns
    /// - `Ok(&str)` - Authorization code to exchange
    /// - `Err(ProviderError::Cancelled)` - Visitor declined at the provider
    /// - `Err(ProviderError::Denied)` - Provider reported any other error
    /// - `Err(ProviderError::StateMismatch)` - Callback does not belong to this pending login
    /// - `Err(ProviderError::MissingCode)` - Callback carries neither an error nor a code
    pub fn authorization_code(&self, pending: &PendingLogin) -> Result<&str, ProviderError> {
        if let Some(error) = &self.error {
            if error == ACCESS_DENIED {
                return Err(ProviderError::Cancelled);
            }

            let reason = self.error_description.as_ref().unwrap_or(error);
            return Err(ProviderError::Denied(reason.clone()));
        }

        if self.state.as_deref() != Some(pending.csrf_state.as_str()) {
            return Err(ProviderError::StateMismatch);
        }

        self.code.as_deref().ok_or(ProviderError::MissingCode)
    }
}

/// Identity attributes returned by the provider after a successful login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Claims {
    /// Provider's stable subject identifier
    pub identifier: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Starts a login with `provider`, asking it to send the visitor back to `return_url`.
    async fn begin_login(
        &self,
        provider: &str,
        return_url: &str,
    ) -> Result<PendingLogin, ProviderError>;

    /// Completes the login started by `pending` using the provider's callback parameters.
    async fn finalize_login(
        &self,
        pending: &PendingLogin,
        callback: &CallbackParams,
    ) -> Result<Claims, ProviderError>;
}

type OAuth2Client =
    BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

#[derive(Deserialize)]
struct UserInfo {
    sub: String,
    name: Option<String>,
    preferred_username: Option<String>,
    email: Option<String>,
}

/// OpenID Connect style provider: authorization code flow with PKCE, claims from the
/// userinfo endpoint.
pub struct OAuth2Provider {
    name: String,
    client: OAuth2Client,
    userinfo_url: String,
    http_client: reqwest::Client,
}

impl OAuth2Provider {
    /// Builds the provider client from configuration.
    ///
    /// # Returns
    /// - `Ok(OAuth2Provider)` - Provider ready for use
    /// - `Err(Error::ConfigError)` - An endpoint URL could not be parsed
    /// - `Err(Error::HttpClientError)` - HTTP client could not be built
    pub fn new(config: &FederatedConfig) -> Result<Self, Error> {
        let auth_url = AuthUrl::new(config.auth_url.clone()).map_err(|e| {
            ConfigError::InvalidEnvValue {
                var: "OIDC_AUTH_URL".to_string(),
                reason: e.to_string(),
            }
        })?;
        let token_url = TokenUrl::new(config.token_url.clone()).map_err(|e| {
            ConfigError::InvalidEnvValue {
                var: "OIDC_TOKEN_URL".to_string(),
                reason: e.to_string(),
            }
        })?;

        let client = BasicClient::new(ClientId::new(config.client_id.clone()))
            .set_client_secret(ClientSecret::new(config.client_secret.clone()))
            .set_auth_uri(auth_url)
            .set_token_uri(token_url);

        // Following redirects from the token endpoint would expose the client secret
        let http_client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            name: config.provider.clone(),
            client,
            userinfo_url: config.userinfo_url.clone(),
            http_client,
        })
    }

    fn redirect_url(return_url: &str) -> Result<RedirectUrl, ProviderError> {
        RedirectUrl::new(return_url.to_string())
            .map_err(|e| ProviderError::Request(format!("invalid return URL: {}", e)))
    }
}

#[async_trait]
impl IdentityProvider for OAuth2Provider {
    async fn begin_login(
        &self,
        provider: &str,
        return_url: &str,
    ) -> Result<PendingLogin, ProviderError> {
        if provider != self.name {
            return Err(ProviderError::UnknownProvider(provider.to_string()));
        }

        let (pkce_challenge, pkce_verifier) = PkceCodeChallenge::new_random_sha256();

        let (auth_url, csrf_state) = self
            .client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .set_pkce_challenge(pkce_challenge)
            .set_redirect_uri(Cow::Owned(Self::redirect_url(return_url)?))
            .url();

        Ok(PendingLogin {
            provider: provider.to_string(),
            redirect_uri: auth_url.to_string(),
            return_url: return_url.to_string(),
            csrf_state: csrf_state.secret().to_string(),
            pkce_verifier: pkce_verifier.secret().to_string(),
        })
    }

    async fn finalize_login(
        &self,
        pending: &PendingLogin,
        callback: &CallbackParams,
    ) -> Result<Claims, ProviderError> {
        let code = callback.authorization_code(pending)?;

        let token = self
            .client
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .set_pkce_verifier(PkceCodeVerifier::new(pending.pkce_verifier.clone()))
            .set_redirect_uri(Cow::Owned(Self::redirect_url(&pending.return_url)?))
            .request_async(&self.http_client)
            .await
            .map_err(|e| ProviderError::Request(format!("token exchange failed: {}", e)))?;

        let user_info: UserInfo = self
            .http_client
            .get(&self.userinfo_url)
            .bearer_auth(token.access_token().secret())
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| ProviderError::Request(format!("userinfo request failed: {}", e)))?
            .json()
            .await
            .map_err(|e| ProviderError::Request(format!("invalid userinfo response: {}", e)))?;

        Ok(Claims {
            identifier: user_info.sub,
            name: user_info.name.or(user_info.preferred_username),
            email: user_info.email,
        })
    }
}
