use idkit_address::FieldErrors;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("config error: {0}")]
    Config(String),

    #[error("verification error: {0}")]
    Verification(#[from] idkit_verification::VerificationError),

    #[error("camera error: {0}")]
    Camera(#[from] idkit_camera::CameraError),

    #[error("no camera frame available")]
    NoFrame,

    #[error("a selfie is required before verification")]
    MissingSelfie,

    #[error("Complete required fields.")]
    IncompleteAddress(FieldErrors),

    #[error("verification already in progress")]
    VerificationInFlight,
}
