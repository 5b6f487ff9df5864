use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    model::auth::AccountType,
    server::{
        data::{account::AccountRepository, hackathon::HackathonRepository},
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        model::account::Account,
    },
};

pub enum Permission {
    /// Any logged-in organizer.
    Organizer,
    /// Any logged-in participant.
    Participant,
    /// The account itself, for profile updates and deletion.
    Account(AccountType, i32),
    /// The organizer who created the hackathon.
    HackathonOwner(i32),
}

/// Resolves the session's account and checks it against a list of permissions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Gets the logged-in account if it satisfies every permission.
    ///
    /// # Returns
    /// - `Ok(Account)` - Logged in and permitted
    /// - `Err(AuthError::NotLoggedIn)` - No account in session
    /// - `Err(AuthError::AccountNotFound)` - Session account was deleted
    /// - `Err(AuthError::AccessDenied)` - A permission is not met
    /// - `Err(AppError::NotFound)` - `HackathonOwner` names a hackathon that does not exist
    pub async fn require(&self, permissions: &[Permission]) -> Result<Account, AppError> {
        let Some((id, account_type)) = AuthSession::new(self.session).get_account().await? else {
            return Err(AuthError::NotLoggedIn.into());
        };

        let Some(account) = AccountRepository::new(self.db)
            .find_by_id(id, account_type)
            .await?
        else {
            return Err(AuthError::AccountNotFound(id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Organizer => {
                    require_type(&account, AccountType::Organizer)?;
                }
                Permission::Participant => {
                    require_type(&account, AccountType::Participant)?;
                }
                Permission::Account(account_type, account_id) => {
                    if account.account_type != *account_type || account.id != *account_id {
                        return Err(AuthError::AccessDenied(
                            account.id,
                            format!(
                                "{} attempted to act as {} {}",
                                account.account_type, account_type, account_id
                            ),
                        )
                        .into());
                    }
                }
                Permission::HackathonOwner(hackathon_id) => {
                    require_type(&account, AccountType::Organizer)?;

                    let Some(hackathon) = HackathonRepository::new(self.db)
                        .find_by_id(*hackathon_id)
                        .await?
                    else {
                        return Err(AppError::NotFound("Hackathon not found".to_string()));
                    };

                    if hackathon.organizer_id != account.id {
                        return Err(AuthError::AccessDenied(
                            account.id,
                            format!("organizer does not own hackathon {}", hackathon_id),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(account)
    }
}

fn require_type(account: &Account, expected: AccountType) -> Result<(), AuthError> {
    if account.account_type != expected {
        return Err(AuthError::AccessDenied(
            account.id,
            format!(
                "{} access required, session holds a {}",
                expected, account.account_type
            ),
        ));
    }

    Ok(())
}
