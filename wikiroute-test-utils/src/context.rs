//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context includes an
//! in-memory SQLite database, a session backed by a memory store, and a mock HTTP server
//! standing in for the identity provider.

use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::{
    constant::{AUTHORIZE_PATH, TOKEN_PATH, USERINFO_PATH},
    error::TestError,
};

/// Identity provider endpoint URLs served by the mock server.
#[derive(Clone, Debug)]
pub struct OidcUrls {
    pub auth_url: String,
    pub token_url: String,
    pub userinfo_url: String,
}

/// Test context structure returned by `TestBuilder`
///
/// ```ignore
/// let test = TestBuilder::new().with_user_tables().build().await?;
///
/// // Access the database
/// let db = &test.db;
///
/// // Assert all mocks were called
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session of a single visitor, stored in `store`
    pub session: Session,
    /// Session store, shared with session layers built by router tests
    pub store: Arc<MemoryStore>,

    /// Mock HTTP server for identity provider endpoints
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let mock_server = Server::new_async().await;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store.clone(), None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            server: mock_server,
            db,
            session,
            store,
            mocks: Vec::new(),
        })
    }

    /// Create database tables from schema statements.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Endpoint URLs of the mock identity provider.
    pub fn oidc_urls(&self) -> OidcUrls {
        let base = self.server.url();

        OidcUrls {
            auth_url: format!("{}{}", base, AUTHORIZE_PATH),
            token_url: format!("{}{}", base, TOKEN_PATH),
            userinfo_url: format!("{}{}", base, USERINFO_PATH),
        }
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
