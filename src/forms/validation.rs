//! Field validation predicates
//!
//! Validation is field-local: a value is checked against its own rules only,
//! and the result is an error kind the form turns into a localized message.

use std::sync::LazyLock;

use regex::Regex;

/// `local@domain.tld` with no whitespace and a single `@`.
#[allow(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Why a field value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldError {
    /// Empty after trimming
    Required,
    /// Non-empty but not shaped like an email address
    InvalidEmail,
}

/// Rules attached to one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldRules {
    pub required: bool,
    pub email: bool,
}

impl FieldRules {
    pub const REQUIRED: Self = Self { required: true, email: false };
    pub const REQUIRED_EMAIL: Self = Self { required: true, email: true };
    pub const OPTIONAL: Self = Self { required: false, email: false };

    /// Check `value`; the required rule is reported before the email rule.
    #[must_use]
    pub fn check(&self, value: &str) -> Option<FieldError> {
        if value.trim().is_empty() {
            return self.required.then_some(FieldError::Required);
        }
        if self.email && !is_valid_email(value) {
            return Some(FieldError::InvalidEmail);
        }
        None
    }
}

/// Whether `value` looks like `local@domain.tld`.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}
