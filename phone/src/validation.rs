//! Digit-count and character validation.
//!
//! Validation failures are advisory data for the caller, never `Err` values.

use serde::Serialize;
use thiserror::Error;

pub const MIN_DIGITS: usize = 7;
pub const MAX_DIGITS: usize = 15;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Error)]
#[serde(rename_all = "camelCase")]
pub enum PhoneValidationError {
    #[error("Digits only")]
    DigitsOnly,

    #[error("Phone number must be at least 7 digits.")]
    TooShort,

    #[error("Phone number must be at most 15 digits.")]
    TooLong,
}

/// True if the raw input contains an ASCII letter.
pub fn contains_letters(raw: &str) -> bool {
    raw.chars().any(|c| c.is_ascii_alphabetic())
}

/// Validate a local number.
///
/// `has_letters` comes from the raw input before stripping and takes
/// precedence over the length checks. An empty local number is the neutral,
/// untouched state and never an error.
pub fn validate(has_letters: bool, local_digits: &str) -> Option<PhoneValidationError> {
    if has_letters {
        return Some(PhoneValidationError::DigitsOnly);
    }
    let len = local_digits.len();
    if len == 0 {
        None
    } else if len < MIN_DIGITS {
        Some(PhoneValidationError::TooShort)
    } else if len > MAX_DIGITS {
        Some(PhoneValidationError::TooLong)
    } else {
        None
    }
}
