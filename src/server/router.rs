//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.
//! Every other path falls through to the route table.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/auth/login` - Password login
/// - `GET /api/auth/federated` - Begin a federated login
/// - `GET /api/auth/callback` - Identity provider callback
/// - `GET /api/auth/logout` - Logout current visitor
/// - `GET /api/auth/user` - Current authentication state
/// - `POST /api/auth/register` - Register a password user
/// - `GET /api/page/{id}` - Get a page by ID
/// - `POST /api/page` - Create a page
/// - Fallback - Page aliases, the wiki index and `wiki-` add page forms
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db, auth, routes };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "wikiroute", description = "wikiroute API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::page::PAGE_TAG, description = "Wiki page API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::federated_login))
        .routes(routes!(controller::auth::callback))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::page::get_page))
        .routes(routes!(controller::page::create_page))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .fallback(controller::route::resolve)
}
