//! Pluggable verification method trait.
//!
//! The flow only needs *a* verdict for the collected identity data, not a
//! particular way of producing it. The simulated scorer is one implementation;
//! a real backend client would be another.

use crate::error::VerificationError;
use idkit_types::{IdentityData, IdentityInput};
use std::future::Future;

pub trait VerificationMethod {
    /// Human-readable name of this method.
    fn name(&self) -> &str;

    /// Assess the collected identity data and produce the verification record.
    fn verify(
        &mut self,
        input: IdentityInput,
    ) -> impl Future<Output = Result<IdentityData, VerificationError>>;
}
