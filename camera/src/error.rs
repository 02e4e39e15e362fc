use thiserror::Error;

/// Camera failures surfaced to the caller. The messages are user-facing copy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CameraError {
    #[error("Camera not supported in this browser")]
    NotSupported,

    #[error("Camera permission denied")]
    PermissionDenied,

    #[error("No camera found")]
    NotFound,

    #[error("Failed to access camera")]
    Generic,

    /// A stream was acquired but there was no video sink to attach it to.
    #[error("Video element not found")]
    SinkUnavailable,
}

/// Cause reported by the platform when stream acquisition fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AcquireError {
    #[error("permission refused")]
    PermissionDenied,

    #[error("no capture device present")]
    NotFound,

    #[error("{0}")]
    Other(String),
}

impl AcquireError {
    /// Classify a DOM exception name as reported by `getUserMedia`.
    pub fn from_dom_name(name: &str, message: impl Into<String>) -> Self {
        match name {
            "NotAllowedError" | "PermissionDeniedError" => Self::PermissionDenied,
            "NotFoundError" | "DevicesNotFoundError" => Self::NotFound,
            _ => Self::Other(message.into()),
        }
    }
}

impl From<AcquireError> for CameraError {
    fn from(err: AcquireError) -> Self {
        match err {
            AcquireError::PermissionDenied => Self::PermissionDenied,
            AcquireError::NotFound => Self::NotFound,
            AcquireError::Other(_) => Self::Generic,
        }
    }
}

/// The sink could not confirm that frames are rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("playback failed: {0}")]
pub struct PlaybackError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("drawing context unavailable")]
    ContextUnavailable,

    #[error("draw failed: {0}")]
    Draw(String),

    #[error("encode failed: {0}")]
    Encode(String),
}
