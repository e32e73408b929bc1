//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations, one per table:
//! the credential store ([`user::UserRepository`]) and wiki pages ([`page::PageRepository`]).

pub mod page;
pub mod user;
