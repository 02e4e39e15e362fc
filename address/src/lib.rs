//! Address handling.
//!
//! - [`normalize`]: converts the form-entry shape into the canonical shape, and
//!   classifies untagged JSON input into one of the two shapes.
//! - [`validate`]: required-field checks.
//! - [`form`]: interaction state for an address form (touched fields, labels).
//! - [`format`]: single-line display helpers.

pub mod error;
pub mod form;
pub mod format;
pub mod normalize;
pub mod validate;

pub use error::AddressError;
pub use form::{AddressForm, DEFAULT_LABELS, DEFAULT_PLACEHOLDERS};
pub use format::{format_address_line, format_city_line};
pub use normalize::{is_address_value, normalize_address, parse_address_input};
pub use validate::{validate_required, FieldErrors, RequiredFieldSet, REQUIRED_MESSAGE};
