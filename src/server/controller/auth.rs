use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        auth::{AuthResult, LoginForm, RegisteredUserDto},
    },
    server::{
        controller::util::auth::{current_auth, require_strategy},
        error::Error,
        model::app::AppState,
        service::{
            auth::{provider::CallbackParams, AuthPayload, StrategyKind},
            user::UserService,
        },
    },
};

pub static AUTH_TAG: &str = "auth";

/// Where visitors land after logging in or out
const HOME_PATH: &str = "/";

#[derive(Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FederatedLoginParams {
    /// Name of the configured identity provider
    pub provider: String,
}

/// Reports an authentication outcome: 200 when authenticated, 401 otherwise.
fn auth_response(result: AuthResult) -> Response {
    let status = if result.authenticated {
        StatusCode::OK
    } else {
        StatusCode::UNAUTHORIZED
    };

    (status, Json(result)).into_response()
}

/// Log in with user name and password
///
/// Validates the submitted credentials with the password strategy. A visitor who is already
/// logged in keeps their identity, whatever credentials are submitted; log out first to switch.
///
/// # Responses
/// - 200 (OK): Visitor is authenticated
/// - 401 (Unauthorized): Invalid user name or password
/// - 404 (Not Found): Password login is not enabled on this server
/// - 500 (Internal Server Error): Session or database failure
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginForm,
    responses(
        (status = 200, description = "Visitor is authenticated", body = AuthResult),
        (status = 401, description = "Invalid user name or password", body = AuthResult),
        (status = 404, description = "Password login is not enabled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<LoginForm>,
) -> Result<impl IntoResponse, Error> {
    require_strategy(&state, StrategyKind::Password)?;

    let result = state
        .auth
        .initialize(&session, AuthPayload::Credentials(form.into()))
        .await?;

    Ok(auth_response(result))
}

/// Begin a login with an external identity provider
///
/// Redirects the visitor to the provider's login page. A visitor who already completed a
/// federated login is sent home instead.
///
/// # Responses
/// - 307 (Temporary Redirect): To the identity provider, or home when already logged in
/// - 401 (Unauthorized): Login could not be started, see `error_message`
/// - 404 (Not Found): Federated login is not enabled on this server
/// - 500 (Internal Server Error): Session failure
#[utoipa::path(
    get,
    path = "/api/auth/federated",
    tag = AUTH_TAG,
    params(FederatedLoginParams),
    responses(
        (status = 307, description = "Redirect to the identity provider"),
        (status = 401, description = "Login could not be started", body = AuthResult),
        (status = 404, description = "Federated login is not enabled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn federated_login(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<FederatedLoginParams>,
) -> Result<impl IntoResponse, Error> {
    require_strategy(&state, StrategyKind::Federated)?;

    let result = state
        .auth
        .initialize(
            &session,
            AuthPayload::BeginFederated {
                provider: params.provider,
            },
        )
        .await?;

    if let Some(redirect_uri) = &result.redirect_uri {
        return Ok(Redirect::temporary(redirect_uri).into_response());
    }

    if result.authenticated {
        return Ok(Redirect::temporary(HOME_PATH).into_response());
    }

    Ok(auth_response(result))
}

/// Callback route the identity provider redirects the visitor to
///
/// Completes the pending federated login. The outcome is kept in the session either way; a
/// failed or cancelled login can be restarted through `/api/auth/federated`.
///
/// # Responses
/// - 307 (Temporary Redirect): Login completed, redirect home
/// - 401 (Unauthorized): Login failed or was cancelled, see `error_message`
/// - 404 (Not Found): Federated login is not enabled on this server
/// - 500 (Internal Server Error): Session failure
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(CallbackParams),
    responses(
        (status = 307, description = "Login completed, redirect home"),
        (status = 401, description = "Login failed or was cancelled", body = AuthResult),
        (status = 404, description = "Federated login is not enabled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, Error> {
    require_strategy(&state, StrategyKind::Federated)?;

    let result = state
        .auth
        .initialize(&session, AuthPayload::FederatedCallback(params))
        .await?;

    if result.authenticated {
        return Ok(Redirect::temporary(HOME_PATH).into_response());
    }

    Ok(auth_response(result))
}

/// Logs the visitor out
///
/// # Responses
/// - 307 (Temporary Redirect): Logged out, redirect home
/// - 500 (Internal Server Error): There was an issue updating the session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Logged out, redirect home"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    state.auth.abandon(&session).await?;

    Ok(Redirect::temporary(HOME_PATH))
}

/// Get the visitor's authentication state
///
/// # Responses
/// - 200 (OK): Current authentication state, `authenticated` is false for anonymous visitors
/// - 500 (Internal Server Error): Session failure
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current authentication state", body = AuthResult),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let result = current_auth(&state, &session).await?;

    Ok(Json(result))
}

/// Register a password user
///
/// # Responses
/// - 201 (Created): User registered, log in through `/api/auth/login`
/// - 400 (Bad Request): Empty user name or password
/// - 404 (Not Found): Password login is not enabled on this server
/// - 409 (Conflict): User name already taken
/// - 500 (Internal Server Error): Database failure
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = LoginForm,
    responses(
        (status = 201, description = "User registered", body = RegisteredUserDto),
        (status = 400, description = "Empty user name or password", body = ErrorDto),
        (status = 404, description = "Password login is not enabled", body = ErrorDto),
        (status = 409, description = "User name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(form): Json<LoginForm>,
) -> Result<impl IntoResponse, Error> {
    require_strategy(&state, StrategyKind::Password)?;

    let user = UserService::new(&state.db)
        .register(&form.user_name, &form.password)
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}
