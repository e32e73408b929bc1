//! Mock identity provider endpoints.
//!
//! The authorization endpoint is never requested by the server, only by the visitor's browser,
//! so only the token exchange and userinfo endpoints are mocked.

use mockito::{Matcher, Mock};
use serde_json::json;

use crate::{
    constant::{TOKEN_PATH, USERINFO_PATH},
    TestContext,
};

impl TestContext {
    pub fn provider<'a>(&'a mut self) -> ProviderFixtures<'a> {
        ProviderFixtures { setup: self }
    }
}

pub struct ProviderFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> ProviderFixtures<'a> {
    /// Mock `POST /token` answering any authorization code grant with `access_token`.
    pub fn create_token_endpoint(&mut self, access_token: &str, expected_requests: usize) -> Mock {
        let body = json!({
            "access_token": access_token,
            "token_type": "Bearer",
            "expires_in": 3600,
        });

        self.setup
            .server
            .mock("POST", TOKEN_PATH)
            .match_body(Matcher::Regex("grant_type=authorization_code".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Mock `GET /userinfo` returning the claims of `sub` to requests bearing `access_token`.
    pub fn create_userinfo_endpoint(
        &mut self,
        access_token: &str,
        sub: &str,
        name: Option<&str>,
        expected_requests: usize,
    ) -> Mock {
        let body = match name {
            Some(name) => json!({ "sub": sub, "name": name }),
            None => json!({ "sub": sub }),
        };

        self.setup
            .server
            .mock("GET", USERINFO_PATH)
            .match_header("authorization", format!("Bearer {}", access_token).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }
}
