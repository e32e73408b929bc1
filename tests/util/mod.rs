//! Shared helpers for integration tests.

use std::sync::Arc;

use axum::response::Response;
use serde::de::DeserializeOwned;
use wikiroute::server::{
    config::FederatedConfig,
    model::app::AppState,
    service::{
        auth::{
            federated::FederatedStrategy, password::PasswordStrategy, provider::OAuth2Provider,
            Authenticator,
        },
        route::RouteTable,
    },
    startup::build_route_table,
};
use wikiroute_test_utils::{
    constant::{
        TEST_CALLBACK_URL, TEST_OIDC_CLIENT_ID, TEST_OIDC_CLIENT_SECRET, TEST_OIDC_PROVIDER,
    },
    TestContext,
};

/// Builds application state on top of a [`TestContext`].
pub trait TestContextExt {
    /// Identity provider settings pointing at the mock server
    fn federated_config(&self) -> FederatedConfig;

    /// State running the password strategy, with only the built-in routes
    fn password_state(&self) -> AppState;

    /// State running the federated strategy against the mock server
    fn federated_state(&self) -> AppState;

    /// State running the password strategy, with routes synchronized from the page table
    async fn password_state_with_routes(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn federated_config(&self) -> FederatedConfig {
        let urls = self.oidc_urls();

        FederatedConfig {
            provider: TEST_OIDC_PROVIDER.to_string(),
            client_id: TEST_OIDC_CLIENT_ID.to_string(),
            client_secret: TEST_OIDC_CLIENT_SECRET.to_string(),
            auth_url: urls.auth_url,
            token_url: urls.token_url,
            userinfo_url: urls.userinfo_url,
            callback_url: TEST_CALLBACK_URL.to_string(),
        }
    }

    fn password_state(&self) -> AppState {
        AppState {
            db: self.db.clone(),
            auth: Authenticator::new(PasswordStrategy::new(self.db.clone())),
            routes: Arc::new(RouteTable::with_builtin_routes()),
        }
    }

    fn federated_state(&self) -> AppState {
        let config = self.federated_config();
        let provider = OAuth2Provider::new(&config).unwrap();

        AppState {
            db: self.db.clone(),
            auth: Authenticator::new(FederatedStrategy::new(provider, config.callback_url)),
            routes: Arc::new(RouteTable::with_builtin_routes()),
        }
    }

    async fn password_state_with_routes(&self) -> AppState {
        AppState {
            routes: build_route_table(&self.db).await.unwrap(),
            ..self.password_state()
        }
    }
}

/// Reads and deserializes a JSON response body
pub async fn json_body<T: DeserializeOwned>(response: Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
