use thiserror::Error;

#[derive(Debug, Error)]
pub enum AddressError {
    #[error("address must be a JSON object")]
    NotAnObject,

    #[error("malformed address: {0}")]
    Malformed(#[from] serde_json::Error),
}
