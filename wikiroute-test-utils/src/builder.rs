//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_user_tables: bool,
    include_page_tables: bool,

    // Database fixtures to insert
    users: Vec<(String, String)>, // (user_name, password)
    pages: Vec<(String, String)>, // (title, alias)

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured identity provider endpoints
    token_endpoints: Vec<(String, usize)>, // (access_token, expected_requests)
    userinfo_endpoints: Vec<(String, String, Option<String>, usize)>, // (access_token, sub, name, expected_requests)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables, fixtures, or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_user_tables: false,
            include_page_tables: false,
            users: Vec::new(),
            pages: Vec::new(),
            mock_builders: Vec::new(),
            token_endpoints: Vec::new(),
            userinfo_endpoints: Vec::new(),
        }
    }

    /// Add the credential store table (`wiki_user`) to the test database.
    pub fn with_user_tables(mut self) -> Self {
        self.include_user_tables = true;
        self
    }

    /// Add the wiki page table (`wiki_page`) to the test database.
    pub fn with_page_tables(mut self) -> Self {
        self.include_page_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use wikiroute_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), wikiroute_test_utils::TestError> {
    /// let test = TestBuilder::new().with_table(WikiPage).build().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a password user into the database.
    ///
    /// Requires `with_user_tables`. The password is stored as an argon2 hash.
    pub fn with_user(mut self, user_name: impl Into<String>, password: impl Into<String>) -> Self {
        self.users.push((user_name.into(), password.into()));
        self
    }

    /// Insert a wiki page into the database.
    ///
    /// Requires `with_page_tables`. Pages get IDs in insertion order starting at 1.
    pub fn with_page(mut self, title: impl Into<String>, alias: impl Into<String>) -> Self {
        self.pages.push((title.into(), alias.into()));
        self
    }

    /// Add a mock token endpoint answering code exchanges with `access_token`.
    pub fn with_token_endpoint(
        mut self,
        access_token: impl Into<String>,
        expected_requests: usize,
    ) -> Self {
        self.token_endpoints
            .push((access_token.into(), expected_requests));
        self
    }

    /// Add a mock userinfo endpoint returning the claims of `sub` for `access_token`.
    pub fn with_userinfo_endpoint(
        mut self,
        access_token: impl Into<String>,
        sub: impl Into<String>,
        name: Option<&str>,
        expected_requests: usize,
    ) -> Self {
        self.userinfo_endpoints.push((
            access_token.into(),
            sub.into(),
            name.map(str::to_string),
            expected_requests,
        ));
        self
    }

    /// Add a custom mock endpoint with full control over the mockito server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context by creating all configured tables, fixtures, and mock endpoints.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables
    /// 2. Inserts database fixtures (users, then pages)
    /// 3. Creates mock HTTP endpoints (custom endpoints first, then provider endpoints)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    /// - `Err(TestError::Fixture)` - Fixture data could not be prepared
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        let mut all_tables = Vec::new();

        if self.include_user_tables {
            all_tables.push(schema.create_table_from_entity(entity::prelude::WikiUser));
        }
        if self.include_page_tables {
            all_tables.push(schema.create_table_from_entity(entity::prelude::WikiPage));
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for (user_name, password) in self.users {
            setup.user().insert_user(&user_name, &password).await?;
        }

        for (title, alias) in self.pages {
            setup.page().insert_page(&title, &alias).await?;
        }

        // 3. Create mock endpoints
        // Custom endpoints are created first so tests can stack an error response ahead of the
        // pre-configured success response for the same path
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (access_token, expected) in self.token_endpoints {
            mocks.push(
                setup
                    .provider()
                    .create_token_endpoint(&access_token, expected),
            );
        }

        for (access_token, sub, name, expected) in self.userinfo_endpoints {
            mocks.push(setup.provider().create_userinfo_endpoint(
                &access_token,
                &sub,
                name.as_deref(),
                expected,
            ));
        }

        // Store mocks in context so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
