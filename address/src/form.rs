//! Address form interaction state.
//!
//! Keeps the validation and interaction rules of an address form in one place:
//! the current value, which fields are required, which fields the user has
//! visited, and label/placeholder overrides. Errors are only shown for fields
//! that are both invalid and touched.

use crate::validate::{validate_required, FieldErrors, RequiredFieldSet};
use idkit_types::{AddressField, AddressValue};
use std::collections::{BTreeSet, HashMap};

/// Default field labels, indexed in [`AddressField::ALL`] order.
pub const DEFAULT_LABELS: [&str; 6] = [
    "Address line 1",
    "Address line 2",
    "City",
    "State / Region",
    "Postal code",
    "Country",
];

/// Default field placeholders, indexed in [`AddressField::ALL`] order.
pub const DEFAULT_PLACEHOLDERS: [&str; 6] = [
    "Street address",
    "Apartment, suite, unit, etc",
    "City",
    "State or region",
    "Postal code",
    "Select country",
];

fn field_index(field: AddressField) -> usize {
    match field {
        AddressField::Line1 => 0,
        AddressField::Line2 => 1,
        AddressField::City => 2,
        AddressField::Region => 3,
        AddressField::PostalCode => 4,
        AddressField::Country => 5,
    }
}

#[derive(Clone, Debug, Default)]
pub struct AddressForm {
    value: AddressValue,
    required: RequiredFieldSet,
    touched: BTreeSet<AddressField>,
    labels: HashMap<AddressField, String>,
    placeholders: HashMap<AddressField, String>,
}

impl AddressForm {
    pub fn new(value: AddressValue, required: RequiredFieldSet) -> Self {
        Self {
            value,
            required,
            ..Self::default()
        }
    }

    pub fn with_label(mut self, field: AddressField, label: impl Into<String>) -> Self {
        self.labels.insert(field, label.into());
        self
    }

    pub fn with_placeholder(mut self, field: AddressField, placeholder: impl Into<String>) -> Self {
        self.placeholders.insert(field, placeholder.into());
        self
    }

    pub fn value(&self) -> &AddressValue {
        &self.value
    }

    /// Replace the whole value, e.g. when the caller restores saved input.
    pub fn set_value(&mut self, value: AddressValue) {
        self.value = value;
    }

    /// Update one field. Returns `false` when the value is unchanged, in which
    /// case nothing needs to be propagated.
    pub fn update_field(&mut self, field: AddressField, next: &str) -> bool {
        if self.value.get(field) == next {
            return false;
        }
        self.value.set(field, next);
        true
    }

    pub fn mark_touched(&mut self, field: AddressField) {
        self.touched.insert(field);
    }

    pub fn is_touched(&self, field: AddressField) -> bool {
        self.touched.contains(&field)
    }

    /// Current required-field errors, `None` when the form is complete.
    pub fn errors(&self) -> Option<FieldErrors> {
        validate_required(&self.value, &self.required)
    }

    /// Whether the field's error should be displayed.
    pub fn show_error(&self, field: AddressField) -> bool {
        self.is_touched(field) && self.errors().is_some_and(|errors| errors.contains(field))
    }

    /// The field's error message, or an empty string.
    pub fn error_text(&self, field: AddressField) -> &'static str {
        self.errors()
            .and_then(|errors| errors.get(field))
            .unwrap_or("")
    }

    pub fn is_required(&self, field: AddressField) -> bool {
        self.required.contains(field)
    }

    pub fn label(&self, field: AddressField) -> &str {
        self.labels
            .get(&field)
            .map(String::as_str)
            .unwrap_or(DEFAULT_LABELS[field_index(field)])
    }

    pub fn placeholder(&self, field: AddressField) -> &str {
        self.placeholders
            .get(&field)
            .map(String::as_str)
            .unwrap_or(DEFAULT_PLACEHOLDERS[field_index(field)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_show_only_after_touch() {
        let mut form = AddressForm::new(AddressValue::default(), RequiredFieldSet::default());
        assert!(form.errors().is_some());
        assert!(!form.show_error(AddressField::City));
        assert_eq!(form.error_text(AddressField::City), "Required");

        form.mark_touched(AddressField::City);
        assert!(form.show_error(AddressField::City));

        assert!(form.update_field(AddressField::City, "Oakland"));
        assert!(!form.show_error(AddressField::City));
        assert_eq!(form.error_text(AddressField::City), "");
    }

    #[test]
    fn filling_every_required_field_clears_errors() {
        let mut form = AddressForm::new(AddressValue::default(), RequiredFieldSet::default());
        for field in [
            AddressField::Line1,
            AddressField::City,
            AddressField::Region,
            AddressField::PostalCode,
            AddressField::Country,
        ] {
            form.update_field(field, "x");
        }
        assert_eq!(form.errors(), None);
    }

    #[test]
    fn unchanged_update_is_a_no_op() {
        let mut form = AddressForm::default();
        assert!(!form.update_field(AddressField::Line2, ""));
        assert!(form.update_field(AddressField::Line2, "Apt 4"));
        assert!(!form.update_field(AddressField::Line2, "Apt 4"));
    }

    #[test]
    fn labels_and_placeholders_fall_back_to_defaults() {
        let form = AddressForm::default()
            .with_label(AddressField::Region, "State")
            .with_placeholder(AddressField::PostalCode, "ZIP");
        assert_eq!(form.label(AddressField::Region), "State");
        assert_eq!(form.label(AddressField::Line1), "Address line 1");
        assert_eq!(form.placeholder(AddressField::PostalCode), "ZIP");
        assert_eq!(form.placeholder(AddressField::Country), "Select country");
    }

    #[test]
    fn required_flags_follow_the_set() {
        let form = AddressForm::default();
        assert!(form.is_required(AddressField::Line1));
        assert!(!form.is_required(AddressField::Line2));
    }
}
