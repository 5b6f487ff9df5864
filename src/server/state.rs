//! Application state shared across all request handlers.
//!
//! Holds the database pool and the password hasher. Cloned into every handler through
//! Axum's state extraction; both fields are cheap to clone.

use sea_orm::DatabaseConnection;

use crate::server::util::password::PasswordHasher;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Bcrypt hasher configured with the cost from `Config`.
    pub password_hasher: PasswordHasher,
}

impl AppState {
    pub fn new(db: DatabaseConnection, password_hasher: PasswordHasher) -> Self {
        Self {
            db,
            password_hasher,
        }
    }
}
