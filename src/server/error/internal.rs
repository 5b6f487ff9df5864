use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Every generated team code collided with an existing one.
    ///
    /// With 36^6 possible codes this only happens when the generator is broken.
    #[error("Failed to generate a unique team code after {attempts} attempts")]
    TeamCodeExhausted {
        /// Number of codes tried
        attempts: usize,
    },

    /// A session entry holds a value this build cannot interpret.
    #[error("Invalid session value '{value}' for key {key}: {reason}")]
    InvalidSessionValue {
        /// Session key
        key: &'static str,
        /// Stored value
        value: String,
        /// Parse failure
        reason: String,
    },
}
