use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use wikiroute::{
    model::auth::{AuthResult, LoginForm},
    server::{controller::auth::login, model::session::password::SessionPasswordAuth},
};

use super::*;

fn form(user_name: &str, password: &str) -> Json<LoginForm> {
    Json(LoginForm {
        user_name: user_name.to_string(),
        password: password.to_string(),
    })
}

#[tokio::test]
/// Expect 200 with the authenticated result for valid credentials
async fn returns_ok_for_valid_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("alice", "wonderland")
        .build()
        .await?;

    let result = login(
        State(test.password_state()),
        test.session.clone(),
        form("alice", "wonderland"),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: AuthResult = json_body(resp).await;
    assert!(body.authenticated);
    assert_eq!(body.name, "alice");
    assert_eq!(body.identifier, "hidden");

    Ok(())
}

#[tokio::test]
/// Expect 401 and no session state for a wrong password
async fn returns_unauthorized_for_wrong_password() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("alice", "wonderland")
        .build()
        .await?;

    let result = login(
        State(test.password_state()),
        test.session.clone(),
        form("alice", "looking-glass"),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: AuthResult = json_body(resp).await;
    assert_eq!(body, AuthResult::unauthenticated());
    assert!(SessionPasswordAuth::get(&test.session).await.unwrap().is_none());

    Ok(())
}

#[tokio::test]
/// Expect 401 for a user whose stored hash is malformed
async fn returns_unauthorized_for_malformed_hash() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    test.user().insert_user_with_malformed_hash("bob").await?;

    let result = login(
        State(test.password_state()),
        test.session.clone(),
        form("bob", "not-a-hash"),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect the first identity to stay until logout when logging in again as someone else
async fn keeps_identity_until_logout() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("alice", "wonderland")
        .with_user("bob", "builder")
        .build()
        .await?;
    let state = test.password_state();

    login(
        State(state.clone()),
        test.session.clone(),
        form("alice", "wonderland"),
    )
    .await
    .unwrap();
    let resp = login(State(state), test.session.clone(), form("bob", "builder"))
        .await
        .unwrap()
        .into_response();

    let body: AuthResult = json_body(resp).await;
    assert_eq!(body.name, "alice");

    Ok(())
}

#[tokio::test]
/// Expect 404 when the server runs the federated strategy
async fn returns_not_found_for_federated_strategy() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = login(
        State(test.federated_state()),
        test.session.clone(),
        form("alice", "wonderland"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 500 internal server error when the credential store table does not exist
async fn error_when_required_tables_dont_exist() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = login(
        State(test.password_state()),
        test.session.clone(),
        form("alice", "wonderland"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
