//! HTTP controller endpoints for the wikiroute web API.
//!
//! This module contains Axum handlers for authentication, wiki pages and the route table
//! fallback. Controllers turn typed extractors into service calls, pass an explicit
//! [`AuthPayload`](crate::server::service::auth::AuthPayload) to the active authentication
//! strategy, and use utoipa for OpenAPI documentation.

pub mod auth;
pub mod page;
pub mod route;
pub mod util;
