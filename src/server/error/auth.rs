use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No account is stored in the session.
    #[error("No account in session")]
    NotLoggedIn,

    /// The session references an account that no longer exists.
    ///
    /// Happens after an account deletes itself while another session is still open.
    #[error("Account {0} in session no longer exists")]
    AccountNotFound(i32),

    /// Login with an unknown email or a wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The account is authenticated but not allowed to perform the operation.
    ///
    /// # Fields
    /// - Account ID making the request
    /// - Description of the denied operation, logged only
    #[error("Account {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// # Returns
/// - 401 Unauthorized - Not logged in, stale session or bad credentials
/// - 403 Forbidden - Authenticated but not permitted
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotLoggedIn | Self::AccountNotFound(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid email or password".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "You do not have permission to perform this action".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
