//! Tests for authentication controller endpoints.
//!
//! Covers password login and registration, the federated redirect handshake, logout and
//! retrieval of the visitor's authentication state.

mod callback;
mod federated;
mod login;
mod register;
mod user;

use super::*;
