//! Routing, authentication and session glue for a small wiki web application.

pub mod model;
pub mod server;
