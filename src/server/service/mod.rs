//! Service layer for business logic.
//!
//! Services implement the authentication strategies and their facade, user registration,
//! wiki page operations and the route table that maps page aliases to handlers.

pub mod auth;
pub mod page;
pub mod route;
pub mod user;
