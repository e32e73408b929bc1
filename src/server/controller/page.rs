use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        page::{NewPageForm, PageDto},
    },
    server::{
        controller::util::auth::require_authenticated, error::Error, model::app::AppState,
        service::page::PageService,
    },
};

pub static PAGE_TAG: &str = "page";

/// Get a wiki page by ID
#[utoipa::path(
    get,
    path = "/api/page/{id}",
    tag = PAGE_TAG,
    params(("id" = i32, Path, description = "Page ID")),
    responses(
        (status = 200, description = "Page found", body = PageDto),
        (status = 404, description = "Page not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_page(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let page = PageService::new(&state.db).get_page(id).await?;

    Ok(Json(page))
}

/// Create a wiki page
///
/// The alias is derived from the title. The page is reachable through `/api/page/{id}` right
/// away and through its alias after the next server start.
///
/// # Responses
/// - 201 (Created): Page created
/// - 400 (Bad Request): Title has no letter or digit
/// - 401 (Unauthorized): Visitor is not logged in
/// - 409 (Conflict): Another page already uses the derived alias
/// - 500 (Internal Server Error): Session or database failure
#[utoipa::path(
    post,
    path = "/api/page",
    tag = PAGE_TAG,
    request_body = NewPageForm,
    responses(
        (status = 201, description = "Page created", body = PageDto),
        (status = 400, description = "Invalid title", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "Alias already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_page(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<NewPageForm>,
) -> Result<impl IntoResponse, Error> {
    let auth = require_authenticated(&state, &session).await?;

    let page = PageService::new(&state.db).create_page(form).await?;

    tracing::debug!(page_id = page.id, author = %auth.name, "Page created through API");

    Ok((StatusCode::CREATED, Json(page)))
}
