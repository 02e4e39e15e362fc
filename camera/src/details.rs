//! User-facing copy for camera errors: a title, an explanation, next steps,
//! and the label for the retry button.

use crate::error::CameraError;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraErrorDetails {
    pub title: &'static str,
    pub message: String,
    pub steps: &'static [&'static str],
    pub button_label: &'static str,
}

impl CameraError {
    pub fn details(&self) -> CameraErrorDetails {
        match self {
            Self::PermissionDenied => CameraErrorDetails {
                title: "Camera permission needed",
                message: "Allow camera access in your browser to continue.".into(),
                steps: &[
                    "Click the camera icon in the address bar",
                    "Allow access and refresh this page",
                ],
                button_label: "Grant Access",
            },
            Self::NotFound => CameraErrorDetails {
                title: "No camera detected",
                message: "We could not find a camera on this device.".into(),
                steps: &["Connect a camera and try again", "Check OS camera permissions"],
                button_label: "Try Again",
            },
            Self::NotSupported => CameraErrorDetails {
                title: "Camera not supported",
                message: "Your browser does not support camera access.".into(),
                steps: &["Try a modern browser like Chrome or Safari"],
                button_label: "Try Again",
            },
            Self::Generic | Self::SinkUnavailable => CameraErrorDetails {
                title: "Camera error",
                message: self.to_string(),
                steps: &["Try again or refresh the page"],
                button_label: "Try Again",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_copy() {
        let details = CameraError::PermissionDenied.details();
        assert_eq!(details.title, "Camera permission needed");
        assert_eq!(details.button_label, "Grant Access");
        assert_eq!(details.steps.len(), 2);
    }

    #[test]
    fn generic_copy_carries_the_raw_message() {
        let details = CameraError::Generic.details();
        assert_eq!(details.title, "Camera error");
        assert_eq!(details.message, "Failed to access camera");
    }
}
