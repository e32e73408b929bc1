use axum::{
    extract::{Query, State},
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
};
use wikiroute::{
    model::auth::AuthResult,
    server::{
        controller::auth::{federated_login, FederatedLoginParams},
        model::session::federated::SessionFederatedStep1,
    },
};
use wikiroute_test_utils::constant::TEST_OIDC_PROVIDER;

use super::*;

fn params(provider: &str) -> Query<FederatedLoginParams> {
    Query(FederatedLoginParams {
        provider: provider.to_string(),
    })
}

#[tokio::test]
/// Expect 307 redirect to the provider's authorization endpoint with a pending login stored
async fn redirects_to_provider() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = federated_login(
        State(test.federated_state()),
        test.session.clone(),
        params(TEST_OIDC_PROVIDER),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    let location = resp.headers()[LOCATION].to_str().unwrap();
    assert!(location.starts_with(&test.oidc_urls().auth_url));

    let pending = SessionFederatedStep1::get(&test.session).await.unwrap();
    assert!(pending.is_some_and(|pending| location.contains(&pending.csrf_state)));

    Ok(())
}

#[tokio::test]
/// Expect 401 with an error message for a provider that is not configured
async fn returns_unauthorized_for_unknown_provider() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = federated_login(
        State(test.federated_state()),
        test.session.clone(),
        params("elsewhere"),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: AuthResult = json_body(resp).await;
    assert!(!body.authenticated);
    assert!(body.error_message.is_some());

    Ok(())
}

#[tokio::test]
/// Expect 404 when the server runs the password strategy
async fn returns_not_found_for_password_strategy() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = federated_login(
        State(test.password_state()),
        test.session.clone(),
        params(TEST_OIDC_PROVIDER),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
