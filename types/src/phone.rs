//! E.164 phone value.

use crate::error::TypesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A phone number in E.164 form: `+` followed by the dial code and the
/// subscriber digits, no grouping or punctuation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct E164(String);

impl E164 {
    /// Concatenate a dial code and local digits. Both are expected to be
    /// digit-only already; no validation is performed.
    pub fn from_parts(dial_code: &str, local_digits: &str) -> Self {
        let mut value = String::with_capacity(1 + dial_code.len() + local_digits.len());
        value.push('+');
        value.push_str(dial_code);
        value.push_str(local_digits);
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Every digit after the leading `+`.
    pub fn digits(&self) -> &str {
        &self.0[1..]
    }
}

impl fmt::Display for E164 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for E164 {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix('+') {
            Some(rest) if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) => {
                Ok(Self(s.to_string()))
            }
            _ => Err(TypesError::InvalidE164(s.to_string())),
        }
    }
}

impl TryFrom<String> for E164 {
    type Error = TypesError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<E164> for String {
    fn from(value: E164) -> Self {
        value.0
    }
}
