use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        auth::{AccountDto, LoginDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::account::LoginParams,
        service::auth::AuthService,
        state::AppState,
        util::json::ApiJson,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Log in as an organizer, participant or mentor/judge.
///
/// On success the account is stored in the session cookie. The account type decides which
/// table the email is looked up in, so the same email may log in as different account types.
///
/// # Returns
/// - `200 OK` - Logged in
/// - `400 Bad Request` - Missing email, password or account type
/// - `401 Unauthorized` - Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = AccountDto),
        (status = 400, description = "Missing fields", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    ApiJson(payload): ApiJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, state.password_hasher);

    let account = service.login(LoginParams::from_dto(payload)).await?;

    AuthSession::new(&session)
        .set_account(account.id, account.account_type)
        .await?;

    Ok((StatusCode::OK, Json(account.into_dto())))
}

/// Log out and delete the session.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the logged-in account.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged-in account", body = AccountDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let account = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(account.into_dto())))
}
