//! Test fixture modules for database and HTTP mock creation.
//!
//! - `page` - Wiki page records
//! - `provider` - Mock identity provider token and userinfo endpoints
//! - `user` - Password users with argon2 hashes

pub mod page;
pub mod provider;
pub mod user;
