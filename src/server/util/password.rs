use crate::server::error::AppError;

/// Bcrypt password hashing.
///
/// Hashing is CPU bound, so both operations run on the blocking thread pool.
#[derive(Clone, Copy, Debug)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub async fn hash(&self, password: String) -> Result<String, AppError> {
        let cost = self.cost;
        let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;

        Ok(hash)
    }

    /// Checks a plaintext password against a stored hash.
    ///
    /// # Returns
    /// - `Ok(true)` - Password matches
    /// - `Ok(false)` - Password does not match
    /// - `Err(AppError::BcryptErr)` - Stored hash is malformed
    pub async fn verify(&self, password: String, hash: String) -> Result<bool, AppError> {
        let valid = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;

        Ok(valid)
    }
}
