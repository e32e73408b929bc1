//! Server application core modules.
//!
//! This module contains all server-side functionality for the wikiroute application: HTTP
//! routing, the interchangeable authentication strategies and their session state, the route
//! table derived from stored wiki pages, and database access.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
