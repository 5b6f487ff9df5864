//! Type-safe session access.
//!
//! Handlers never touch raw session keys; they go through `AuthSession`, which stores the
//! logged-in account as an ID plus the table it lives in.

use tower_sessions::Session;

use crate::{
    model::auth::AccountType,
    server::error::{internal::InternalError, AppError},
};

const SESSION_AUTH_ACCOUNT_ID: &str = "auth:account_id";
const SESSION_AUTH_ACCOUNT_TYPE: &str = "auth:account_type";

/// Authentication state of a session.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the logged-in account.
    ///
    /// The session ID is cycled first so a pre-login session ID cannot be reused.
    pub async fn set_account(&self, id: i32, account_type: AccountType) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_ACCOUNT_ID, id).await?;
        self.session
            .insert(SESSION_AUTH_ACCOUNT_TYPE, account_type.as_str())
            .await?;

        Ok(())
    }

    /// Gets the logged-in account's ID and type.
    ///
    /// # Returns
    /// - `Ok(Some((id, account_type)))` - An account is logged in
    /// - `Ok(None)` - Not logged in
    /// - `Err(AppError::InternalErr)` - Stored account type is not recognized
    /// - `Err(AppError::SessionErr)` - Session store failure
    pub async fn get_account(&self) -> Result<Option<(i32, AccountType)>, AppError> {
        let Some(id) = self.session.get::<i32>(SESSION_AUTH_ACCOUNT_ID).await? else {
            return Ok(None);
        };
        let Some(account_type) = self
            .session
            .get::<String>(SESSION_AUTH_ACCOUNT_TYPE)
            .await?
        else {
            return Ok(None);
        };

        let account_type = account_type.parse::<AccountType>().map_err(|reason| {
            InternalError::InvalidSessionValue {
                key: SESSION_AUTH_ACCOUNT_TYPE,
                value: account_type.clone(),
                reason,
            }
        })?;

        Ok(Some((id, account_type)))
    }

    /// Removes all session data and deletes the stored session.
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.flush().await?;

        Ok(())
    }
}
