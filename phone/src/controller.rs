//! Phone input controller.
//!
//! Owns the state behind one phone input: the selected country, the local
//! (subscriber) digits, and the current validation error and warning. The
//! internal country/local split never leaves the controller; callers only see
//! E.164 values.
//!
//! Every entry point returns a [`PhoneUpdate`] describing what the caller
//! should propagate, in place of change/error callbacks.

use crate::countries::{country_by_code, default_country};
use crate::normalize::{build_e164, find_country_by_dial_code, normalize_digits};
use crate::validation::{contains_letters, validate, PhoneValidationError};
use idkit_types::{CountryOption, E164};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// A value emitted to the caller after a mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PhoneChange {
    /// A new E.164 value.
    Value(E164),
    /// No phone value (all digits removed).
    Cleared,
}

impl PhoneChange {
    /// The emitted string; empty for [`PhoneChange::Cleared`].
    pub fn as_str(&self) -> &str {
        match self {
            Self::Value(value) => value.as_str(),
            Self::Cleared => "",
        }
    }
}

/// Transient, non-blocking notice about the raw input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PhoneWarning {
    /// Characters other than digits (and one leading `+`) were dropped.
    OnlyNumbers,
}

impl fmt::Display for PhoneWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OnlyNumbers => f.write_str("Only numbers are allowed."),
        }
    }
}

/// Result of one controller mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhoneUpdate {
    /// Value to hand to the caller's change handler, if any was emitted.
    pub change: Option<PhoneChange>,
    /// Validation error after the mutation.
    pub error: Option<PhoneValidationError>,
    /// Warning after the mutation.
    pub warning: Option<PhoneWarning>,
}

#[derive(Debug, Clone)]
pub struct PhoneController {
    country: &'static CountryOption,
    local_digits: String,
    has_letters: bool,
    error: Option<PhoneValidationError>,
    warning: Option<PhoneWarning>,
}

impl PhoneController {
    /// Create a controller for the given default country code. Unknown codes
    /// fall back to the first directory entry.
    pub fn new(default_country_code: &str) -> Self {
        let country = country_by_code(default_country_code).unwrap_or_else(default_country);
        Self {
            country,
            local_digits: String::new(),
            has_letters: false,
            error: None,
            warning: None,
        }
    }

    pub fn country(&self) -> &'static CountryOption {
        self.country
    }

    pub fn local_digits(&self) -> &str {
        &self.local_digits
    }

    pub fn error(&self) -> Option<PhoneValidationError> {
        self.error
    }

    pub fn warning(&self) -> Option<PhoneWarning> {
        self.warning
    }

    /// The current E.164 value, or `None` while no digits are entered.
    pub fn value(&self) -> Option<E164> {
        if self.local_digits.is_empty() {
            None
        } else {
            Some(build_e164(self.country.dial_code, &self.local_digits))
        }
    }

    /// Explicit country selection. Unknown codes are ignored. Entered digits
    /// are kept and re-emitted under the new dial code.
    pub fn set_country(&mut self, code: &str) -> PhoneUpdate {
        let Some(selected) = country_by_code(code) else {
            debug!(code, "ignoring unknown country selection");
            return self.update(None);
        };
        self.country = selected;
        let change = if self.local_digits.is_empty() {
            None
        } else {
            Some(PhoneChange::Value(build_e164(
                selected.dial_code,
                &self.local_digits,
            )))
        };
        self.update(change)
    }

    /// Free-text entry.
    pub fn set_raw_input(&mut self, text: &str) -> PhoneUpdate {
        let digits = normalize_digits(text);
        self.has_letters = contains_letters(text);

        let plus_prefixed = text.trim_start().starts_with('+');
        let body = if plus_prefixed {
            text.replacen('+', "", 1)
        } else {
            text.to_string()
        };
        self.warning = (body != digits).then_some(PhoneWarning::OnlyNumbers);

        if plus_prefixed {
            if let Some(matched) = find_country_by_dial_code(&digits) {
                self.switch_country(matched);
                self.local_digits = digits[matched.dial_code.len()..].to_string();
                let change = PhoneChange::Value(build_e164(matched.dial_code, &self.local_digits));
                return self.update(Some(change));
            }
        }

        let change = if digits.is_empty() {
            PhoneChange::Cleared
        } else {
            PhoneChange::Value(build_e164(self.country.dial_code, &digits))
        };
        self.local_digits = digits;
        self.update(Some(change))
    }

    /// Reconcile an externally supplied value, e.g. one restored from storage.
    ///
    /// Unrecognized values leave the local digits untouched. Nothing is
    /// emitted: the caller already holds this value.
    pub fn sync_external(&mut self, value: &str) -> PhoneUpdate {
        let normalized = normalize_digits(value);
        if normalized.is_empty() {
            self.local_digits.clear();
            return self.update(None);
        }

        if value.starts_with('+') {
            if let Some(matched) = find_country_by_dial_code(&normalized) {
                self.switch_country(matched);
                self.local_digits = normalized[matched.dial_code.len()..].to_string();
                return self.update(None);
            }
        }

        let prefix = self.country.dial_prefix();
        if let Some(rest) = value.strip_prefix(prefix.as_str()) {
            self.local_digits = normalize_digits(rest);
        }
        self.update(None)
    }

    fn switch_country(&mut self, country: &'static CountryOption) {
        if country.code != self.country.code {
            debug!(from = self.country.code, to = country.code, "detected country from dial code");
        }
        self.country = country;
    }

    fn update(&mut self, change: Option<PhoneChange>) -> PhoneUpdate {
        self.error = validate(self.has_letters, &self.local_digits);
        PhoneUpdate {
            change,
            error: self.error,
            warning: self.warning,
        }
    }
}

impl Default for PhoneController {
    fn default() -> Self {
        Self::new(default_country().code)
    }
}
