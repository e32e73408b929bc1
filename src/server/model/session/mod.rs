//! Session data models and utilities.
//!
//! This module provides type-safe wrappers for the session keys read and written by the
//! authentication strategies. Each wrapper stores plain serializable records through
//! tower-sessions, never strategy objects.

pub mod federated;
pub mod password;
