//! Session layer: configuration and the verification flow.
//!
//! [`VerificationFlow`] walks a user through three steps (selfie, phone,
//! address) and submits the collected data to a
//! [`VerificationMethod`](idkit_verification::VerificationMethod) exactly once
//! per request.

pub mod config;
pub mod error;
pub mod flow;

pub use config::IdkitConfig;
pub use error::SessionError;
pub use flow::{VerificationFlow, VerificationStep};
