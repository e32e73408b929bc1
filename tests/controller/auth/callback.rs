use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use wikiroute::{
    model::auth::AuthResult,
    server::{
        controller::auth::{callback, federated_login, get_user, FederatedLoginParams},
        model::{app::AppState, session::federated::SessionFederatedStep1},
        service::auth::provider::CallbackParams,
    },
};
use wikiroute_test_utils::{constant::TEST_OIDC_PROVIDER, TestContext};

use super::*;

/// Starts a federated login and returns the CSRF state the provider would echo back
async fn begin(state: &AppState, test: &TestContext) -> String {
    federated_login(
        State(state.clone()),
        test.session.clone(),
        Query(FederatedLoginParams {
            provider: TEST_OIDC_PROVIDER.to_string(),
        }),
    )
    .await
    .unwrap();

    SessionFederatedStep1::get(&test.session)
        .await
        .unwrap()
        .unwrap()
        .csrf_state
}

#[tokio::test]
/// Expect 307 redirect home and an authenticated visitor after a successful callback
async fn completes_login() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_token_endpoint("access-token", 1)
        .with_userinfo_endpoint("access-token", "user-123", Some("Test User"), 1)
        .build()
        .await?;
    let state = test.federated_state();
    let csrf_state = begin(&state, &test).await;

    let result = callback(
        State(state.clone()),
        test.session.clone(),
        Query(CallbackParams {
            code: Some("code".to_string()),
            state: Some(csrf_state),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    let resp = get_user(State(state), test.session.clone())
        .await
        .unwrap()
        .into_response();
    let body: AuthResult = json_body(resp).await;
    assert!(body.authenticated);
    assert_eq!(body.identifier, "user-123");
    assert_eq!(body.name, "Test User");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 401 with an error message when the visitor cancelled at the provider
async fn reports_cancellation() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_token_endpoint("access-token", 0)
        .build()
        .await?;
    let state = test.federated_state();
    begin(&state, &test).await;

    let resp = callback(
        State(state.clone()),
        test.session.clone(),
        Query(CallbackParams {
            error: Some("access_denied".to_string()),
            ..Default::default()
        }),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: AuthResult = json_body(resp).await;
    assert!(!body.authenticated);
    assert!(!body.error_message.unwrap_or_default().is_empty());

    // The failed result is the resting state until a new login is started
    let resp = get_user(State(state), test.session.clone())
        .await
        .unwrap()
        .into_response();
    let body: AuthResult = json_body(resp).await;
    assert!(body.error_message.is_some());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 401 without contacting the provider when the state does not match
async fn rejects_state_mismatch() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_token_endpoint("access-token", 0)
        .build()
        .await?;
    let state = test.federated_state();
    begin(&state, &test).await;

    let resp = callback(
        State(state),
        test.session.clone(),
        Query(CallbackParams {
            code: Some("code".to_string()),
            state: Some("forged".to_string()),
            ..Default::default()
        }),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 401 without an error message for a callback without a pending login
async fn ignores_unexpected_callback() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = callback(
        State(test.federated_state()),
        test.session.clone(),
        Query(CallbackParams {
            code: Some("code".to_string()),
            state: Some("state".to_string()),
            ..Default::default()
        }),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: AuthResult = json_body(resp).await;
    assert_eq!(body, AuthResult::unauthenticated());

    Ok(())
}
