//! Required-field validation.

use idkit_types::{AddressField, AddressValue};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Message recorded for a blank required field.
pub const REQUIRED_MESSAGE: &str = "Required";

/// The fields that must be non-blank.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequiredFieldSet(BTreeSet<AddressField>);

impl RequiredFieldSet {
    pub fn new(fields: impl IntoIterator<Item = AddressField>) -> Self {
        Self(fields.into_iter().collect())
    }

    /// No field is required.
    pub fn none() -> Self {
        Self(BTreeSet::new())
    }

    pub fn contains(&self, field: AddressField) -> bool {
        self.0.contains(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = AddressField> + '_ {
        self.0.iter().copied()
    }
}

impl Default for RequiredFieldSet {
    /// Everything except the second address line.
    fn default() -> Self {
        Self::new([
            AddressField::Line1,
            AddressField::City,
            AddressField::Region,
            AddressField::PostalCode,
            AddressField::Country,
        ])
    }
}

/// Per-field validation messages. Never empty: "no errors" is `None`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<AddressField, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: AddressField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: AddressField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = AddressField> + '_ {
        self.0.keys().copied()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Report every required field whose trimmed value is empty.
pub fn validate_required(value: &AddressValue, required: &RequiredFieldSet) -> Option<FieldErrors> {
    let errors: BTreeMap<_, _> = required
        .iter()
        .filter(|field| value.get(*field).trim().is_empty())
        .map(|field| (field, REQUIRED_MESSAGE))
        .collect();
    if errors.is_empty() {
        None
    } else {
        Some(FieldErrors(errors))
    }
}
