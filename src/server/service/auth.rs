use sea_orm::DatabaseConnection;

use crate::server::{
    data::account::AccountRepository,
    error::{auth::AuthError, AppError},
    model::account::{Account, LoginParams},
    util::password::PasswordHasher,
    validation::Validate,
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    hasher: PasswordHasher,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, hasher: PasswordHasher) -> Self {
        Self { db, hasher }
    }

    /// Checks credentials against the table for the requested account type.
    ///
    /// Unknown email and wrong password produce the same error.
    ///
    /// # Returns
    /// - `Ok(Account)` - Credentials are valid
    /// - `Err(AppError::ValidationErr)` - Email, password or account type missing
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - No match
    pub async fn login(&self, params: LoginParams) -> Result<Account, AppError> {
        params.validate()?;

        let Some((account, password_hash)) = AccountRepository::new(self.db)
            .find_credentials(&params.email, params.account_type)
            .await?
        else {
            tracing::debug!("Login failed: no {} with that email", params.account_type);
            return Err(AuthError::InvalidCredentials.into());
        };

        if !self.hasher.verify(params.password, password_hash).await? {
            tracing::debug!("Login failed: wrong password for account {}", account.id);
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::info!("{} {} logged in", account.account_type, account.id);

        Ok(account)
    }
}
