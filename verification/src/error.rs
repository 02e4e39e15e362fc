use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    /// Simulated transient outage; the caller may retry.
    #[error("Verification service unavailable. Please try again.")]
    ServiceUnavailable,
}
