//! Request validation.
//!
//! Every create and update parameter type implements [`Validate`]. Implementations record
//! problems into a [`Violations`] collector: empty required fields are gathered and reported
//! together, otherwise the first broken rule is reported. Both map to a 400 response.

pub mod account;
pub mod hackathon;
pub mod team;
pub mod timeline;

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::server::error::validation::ValidationError;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[\d\s-]{10,}$").expect("phone pattern is valid"));

pub trait Validate {
    /// Records every problem with `self` into `violations`.
    fn check(&self, violations: &mut Violations);

    fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Violations::default();
        self.check(&mut violations);
        violations.into_result()
    }
}

#[derive(Debug, Default)]
pub struct Violations {
    missing: Vec<String>,
    invalid: Vec<String>,
}

impl Violations {
    /// Requires a non-blank string.
    ///
    /// # Returns
    /// `true` when the value is present, so format checks can be chained on it
    pub fn require(&mut self, field: &str, value: &str) -> bool {
        let present = !value.trim().is_empty();
        if !present {
            self.missing.push(field.to_string());
        }
        present
    }

    /// Requires a non-empty list.
    pub fn require_list<T>(&mut self, field: &str, values: &[T]) -> bool {
        let present = !values.is_empty();
        if !present {
            self.missing.push(field.to_string());
        }
        present
    }

    /// Records `message` unless `ok` holds.
    pub fn check(&mut self, ok: bool, message: impl Into<String>) {
        if !ok {
            self.invalid.push(message.into());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.invalid.is_empty()
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        if !self.missing.is_empty() {
            return Err(ValidationError::MissingFields(self.missing));
        }

        match self.invalid.into_iter().next() {
            Some(message) => Err(ValidationError::Invalid(message)),
            None => Ok(()),
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}

/// Accepts http(s) URLs with a dotted host; the scheme may be omitted.
pub fn is_valid_url(value: &str) -> bool {
    let candidate = if value.contains("://") {
        value.to_string()
    } else {
        format!("https://{}", value)
    };

    match Url::parse(&candidate) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https")
                && url
                    .host_str()
                    .is_some_and(|host| host.contains('.') && !host.ends_with('.'))
        }
        Err(_) => false,
    }
}
