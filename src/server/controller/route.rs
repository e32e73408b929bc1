use axum::{
    extract::State,
    http::Uri,
    response::{IntoResponse, Response},
    Json,
};
use tower_sessions::Session;

use crate::server::{
    controller::util::auth::current_auth,
    error::{page::PageError, Error},
    model::app::AppState,
    service::{page::PageService, route::RouteTarget},
};

/// Fallback resolving every path not handled by the API through the route table
///
/// - Registered page aliases return the page
/// - `/` returns the wiki index
/// - Unmatched paths ending in a `wiki-<title>` segment return the prefilled "add page" form
/// - Anything else is 404
///
/// The visitor's authentication state is restored on every request, which also consumes a
/// pending logout marker of the federated strategy.
pub async fn resolve(
    State(state): State<AppState>,
    session: Session,
    uri: Uri,
) -> Result<Response, Error> {
    current_auth(&state, &session).await?;

    let path = uri.path();
    let Some(route) = state.routes.find_route(path) else {
        return Err(PageError::NoRoute(path.to_string()).into());
    };

    let page_service = PageService::new(&state.db);

    let response = match route.target {
        RouteTarget::Index => Json(page_service.get_index().await?).into_response(),
        RouteTarget::ShowPage { id } => Json(page_service.get_page(id).await?).into_response(),
        RouteTarget::AddPage { title } => {
            Json(PageService::new_page_form(&title)).into_response()
        }
    };

    Ok(response)
}
