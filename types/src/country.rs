//! Country option: ISO code, display name, dialing prefix.

use serde::Serialize;
use std::fmt;

/// One entry of the country directory.
///
/// Entries are static data, so every field borrows for `'static`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryOption {
    /// Two-letter ISO 3166-1 code, e.g. `"GB"`.
    pub code: &'static str,
    /// Display name, e.g. `"United Kingdom"`.
    pub name: &'static str,
    /// International dialing prefix, digits only (no leading `+`).
    pub dial_code: &'static str,
}

impl CountryOption {
    pub const fn new(code: &'static str, name: &'static str, dial_code: &'static str) -> Self {
        Self {
            code,
            name,
            dial_code,
        }
    }

    /// The dial code with its leading `+`, e.g. `"+44"`.
    pub fn dial_prefix(&self) -> String {
        format!("+{}", self.dial_code)
    }
}

impl fmt::Display for CountryOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (+{})", self.name, self.dial_code)
    }
}
