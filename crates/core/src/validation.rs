//! Client-side form validation
//!
//! These checks run before anything is sent. The backend stays authoritative;
//! passing here only means the request is worth making.

use crate::error::ValidationError;
use crate::types::{Credentials, Rank};

/// Allowed trimmed essay length, in characters
pub const ESSAY_MIN_CHARS: usize = 1024;
pub const ESSAY_MAX_CHARS: usize = 4096;

/// Allowed trimmed review length, in characters
pub const REVIEW_MIN_CHARS: usize = 256;
pub const REVIEW_MAX_CHARS: usize = 1024;

/// Common validation helpers
pub mod validators {
    /// Non-empty and ASCII alphanumeric only
    pub fn is_alphanumeric(value: &str) -> bool {
        !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric())
    }

    /// Length of the trimmed text, counted in characters rather than bytes
    pub fn trimmed_len(value: &str) -> usize {
        value.trim().chars().count()
    }
}

pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if validators::is_alphanumeric(username) {
        Ok(())
    } else {
        Err(ValidationError::InvalidUsername)
    }
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if validators::is_alphanumeric(password) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPassword)
    }
}

/// Username first, then password; the first failure wins
pub fn validate_credentials(credentials: &Credentials) -> Result<(), ValidationError> {
    validate_username(&credentials.username)?;
    validate_password(&credentials.password)
}

pub fn validate_essay_content(content: &str) -> Result<(), ValidationError> {
    let actual = validators::trimmed_len(content);
    if (ESSAY_MIN_CHARS..=ESSAY_MAX_CHARS).contains(&actual) {
        Ok(())
    } else {
        Err(ValidationError::EssayLength {
            min: ESSAY_MIN_CHARS,
            max: ESSAY_MAX_CHARS,
            actual,
        })
    }
}

pub fn validate_review_content(content: &str) -> Result<(), ValidationError> {
    let actual = validators::trimmed_len(content);
    if (REVIEW_MIN_CHARS..=REVIEW_MAX_CHARS).contains(&actual) {
        Ok(())
    } else {
        Err(ValidationError::ReviewLength {
            min: REVIEW_MIN_CHARS,
            max: REVIEW_MAX_CHARS,
            actual,
        })
    }
}

/// Validate a review form: content length, then rank
pub fn validate_review(rank: i64, content: &str) -> Result<Rank, ValidationError> {
    validate_review_content(content)?;
    Rank::try_from(rank)
}
