//! Phone number capture.
//!
//! Three layers:
//! 1. **Directory**: the static table of supported countries and their dial codes.
//! 2. **Normalizer**: pure functions that strip input to digits, detect the
//!    country by longest dial-code prefix, build E.164 strings, and validate
//!    digit counts.
//! 3. **Controller**: per-input state (country, local digits, error, warning)
//!    driven by free-text entry and explicit country selection.
//!
//! This is not a libphonenumber replacement: there is no carrier lookup and no
//! per-country numbering plan.

pub mod controller;
pub mod countries;
pub mod normalize;
pub mod validation;

pub use controller::{PhoneChange, PhoneController, PhoneUpdate, PhoneWarning};
pub use countries::{country_by_code, default_country, COUNTRIES};
pub use normalize::{build_e164, find_country_by_dial_code, normalize_digits};
pub use validation::{contains_letters, validate, PhoneValidationError, MAX_DIGITS, MIN_DIGITS};
