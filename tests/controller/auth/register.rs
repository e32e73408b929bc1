use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use wikiroute::{
    model::auth::{LoginForm, RegisteredUserDto},
    server::controller::auth::{login, register},
};

use super::*;

fn form(user_name: &str, password: &str) -> Json<LoginForm> {
    Json(LoginForm {
        user_name: user_name.to_string(),
        password: password.to_string(),
    })
}

#[tokio::test]
/// Expect 201 and a user that can log in afterwards
async fn registers_user_who_can_log_in() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let state = test.password_state();

    let resp = register(State(state.clone()), form("carol", "secret"))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let user: RegisteredUserDto = json_body(resp).await;
    assert_eq!(user.user_name, "carol");

    let resp = login(State(state), test.session.clone(), form("carol", "secret"))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 409 conflict for a taken user name
async fn returns_conflict_for_taken_user_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("alice", "wonderland")
        .build()
        .await?;

    let result = register(State(test.password_state()), form("alice", "other")).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request for an empty password
async fn returns_bad_request_for_empty_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = register(State(test.password_state()), form("carol", "")).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 404 when the server runs the federated strategy
async fn returns_not_found_for_federated_strategy() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = register(State(test.federated_state()), form("carol", "secret")).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
