//! Server application models and type definitions.
//!
//! This module contains data models for the server application, including application state
//! and session data structures. These models bridge the gap between HTTP handlers and the
//! authentication strategies.

pub mod app;
pub mod session;
