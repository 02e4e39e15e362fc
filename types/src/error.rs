//! Parse errors for the shared types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypesError {
    #[error("unknown address field: {0}")]
    UnknownAddressField(String),

    #[error("invalid E.164 value: {0}")]
    InvalidE164(String),

    #[error("unknown identity status: {0}")]
    UnknownStatus(String),
}
