//! Fundamental types for idkit.
//!
//! This crate defines the records shared across every other crate in the workspace:
//! country options, E.164 phone values, the two address shapes, and the
//! identity verification record.

pub mod address;
pub mod country;
pub mod error;
pub mod identity;
pub mod phone;

pub use address::{Address, AddressField, AddressInput, AddressValue};
pub use country::CountryOption;
pub use error::TypesError;
pub use identity::{IdentityData, IdentityInput, IdentityStatus, PASS_THRESHOLD};
pub use phone::E164;
