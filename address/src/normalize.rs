//! Address shape normalization.

use crate::error::AddressError;
use crate::format::format_address_line;
use idkit_types::{Address, AddressInput, AddressValue};
use serde_json::Value;

/// Shape test for untagged input: an object carrying `line1` or `region` is
/// the form-entry shape, anything else is treated as canonical.
pub fn is_address_value(input: &Value) -> bool {
    input
        .as_object()
        .is_some_and(|object| object.contains_key("line1") || object.contains_key("region"))
}

/// Classify untagged JSON into an [`AddressInput`]. Missing fields default to
/// empty strings.
pub fn parse_address_input(input: Value) -> Result<AddressInput, AddressError> {
    if !input.is_object() {
        return Err(AddressError::NotAnObject);
    }
    if is_address_value(&input) {
        Ok(AddressInput::Form(serde_json::from_value::<AddressValue>(input)?))
    } else {
        Ok(AddressInput::Canonical(serde_json::from_value::<Address>(input)?))
    }
}

/// Produce the canonical address.
///
/// Form input: `street` joins the non-empty lines with `", "`, and `region`
/// becomes `state`. Canonical input is returned as-is.
pub fn normalize_address(input: AddressInput) -> Address {
    match input {
        AddressInput::Form(value) => {
            let street = format_address_line(&value.line1, &value.line2);
            Address {
                street,
                city: value.city,
                state: value.region,
                country: value.country,
                postal_code: value.postal_code,
            }
        }
        AddressInput::Canonical(address) => address,
    }
}
