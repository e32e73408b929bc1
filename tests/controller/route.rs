use axum::{extract::State, http::StatusCode, http::Uri};
use wikiroute::{
    model::page::{NewPageDto, PageDto, PageSummaryDto},
    server::controller::route::resolve,
};

use super::*;

async fn setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_page_tables()
        .with_page("Home", "home")
        .with_page("FAQ", "faq")
        .build()
        .await
}

#[tokio::test]
/// Expect a page alias to resolve to its page
async fn resolves_page_alias() -> Result<(), TestError> {
    let test = setup().await?;
    let state = test.password_state_with_routes().await;

    let result = resolve(State(state), test.session.clone(), Uri::from_static("/faq")).await;

    assert!(result.is_ok());
    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let page: PageDto = json_body(resp).await;
    assert_eq!(page.title, "FAQ");

    Ok(())
}

#[tokio::test]
/// Expect `/` to list every page
async fn resolves_index() -> Result<(), TestError> {
    let test = setup().await?;
    let state = test.password_state_with_routes().await;

    let resp = resolve(State(state), test.session.clone(), Uri::from_static("/"))
        .await
        .unwrap();

    let index: Vec<PageSummaryDto> = json_body(resp).await;
    assert_eq!(index.len(), 2);

    Ok(())
}

#[tokio::test]
/// Expect an unmatched `wiki-` path to return the add page form
async fn resolves_add_page_form() -> Result<(), TestError> {
    let test = setup().await?;
    let state = test.password_state_with_routes().await;

    let resp = resolve(
        State(state),
        test.session.clone(),
        Uri::from_static("/wiki-newpage"),
    )
    .await
    .unwrap();

    let form: NewPageDto = json_body(resp).await;
    assert_eq!(form.title, "newpage");
    assert_eq!(form.alias, "/newpage");

    Ok(())
}

#[tokio::test]
/// Expect 404 for a path matching neither a page nor the `wiki-` fallback
async fn returns_not_found_for_unknown_path() -> Result<(), TestError> {
    let test = setup().await?;
    let state = test.password_state_with_routes().await;

    let result = resolve(
        State(state),
        test.session.clone(),
        Uri::from_static("/unknown"),
    )
    .await;

    assert!(result.is_err());
    let resp = axum::response::IntoResponse::into_response(result.err().unwrap());
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect a page created after startup to have no alias route until the next start
async fn new_page_has_no_route_until_restart() -> Result<(), TestError> {
    let test = setup().await?;
    let state = test.password_state_with_routes().await;
    test.page().insert_page("News", "news").await?;

    let result = resolve(
        State(state.clone()),
        test.session.clone(),
        Uri::from_static("/news"),
    )
    .await;
    assert!(result.is_err());

    let restarted = test.password_state_with_routes().await;
    let result = resolve(
        State(restarted),
        test.session.clone(),
        Uri::from_static("/news"),
    )
    .await;
    assert!(result.is_ok());

    Ok(())
}
