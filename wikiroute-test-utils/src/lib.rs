//! Test utilities for wikiroute.
//!
//! Tests are set up in two phases:
//! 1. [`TestBuilder`] declares tables, fixtures and mock identity provider endpoints
//! 2. [`TestBuilder::build`] creates them and returns a [`TestContext`] holding an in-memory
//!    SQLite database, a session backed by a memory store and the mock HTTP server

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::{OidcUrls, TestContext};
pub use error::TestError;

pub mod prelude {
    pub use crate::{OidcUrls, TestBuilder, TestContext, TestError};
}
