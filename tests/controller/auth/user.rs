use axum::{extract::State, http::StatusCode, response::IntoResponse};
use wikiroute::{
    model::auth::AuthResult,
    server::{controller::auth::get_user, model::session::password::SessionPasswordAuth},
};

use super::*;

#[tokio::test]
/// Expect 200 with an unauthenticated result for an anonymous visitor
async fn returns_unauthenticated_for_anonymous_visitor() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_user(State(test.password_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: AuthResult = json_body(resp).await;
    assert_eq!(body, AuthResult::unauthenticated());

    Ok(())
}

#[tokio::test]
/// Expect the stored result without database access for a logged in visitor
async fn returns_stored_result() -> Result<(), TestError> {
    // No tables: the stored result must be returned without revalidation
    let test = TestBuilder::new().build().await?;
    let stored = AuthResult::authenticated("hidden", "alice");
    SessionPasswordAuth::insert(&test.session, &stored)
        .await
        .unwrap();

    let resp = get_user(State(test.password_state()), test.session.clone())
        .await
        .unwrap()
        .into_response();

    let body: AuthResult = json_body(resp).await;
    assert_eq!(body, stored);

    Ok(())
}
