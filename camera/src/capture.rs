use crate::device::{FacingMode, VideoConstraints};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

pub const DEFAULT_IDEAL_WIDTH: u32 = 1280;
pub const DEFAULT_IDEAL_HEIGHT: u32 = 720;
pub const DEFAULT_QUALITY: f64 = 0.92;

/// Encoding used for captured stills.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    #[default]
    #[serde(rename = "image/jpeg")]
    Jpeg,
    #[serde(rename = "image/png")]
    Png,
    #[serde(rename = "image/webp")]
    Webp,
}

impl ImageFormat {
    pub fn mime(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Webp => "image/webp",
        }
    }
}

/// Stream request and still-encoding parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaptureSettings {
    #[serde(default = "default_ideal_width")]
    pub ideal_width: u32,
    #[serde(default = "default_ideal_height")]
    pub ideal_height: u32,
    #[serde(default)]
    pub facing_mode: FacingMode,
    #[serde(default)]
    pub image_format: ImageFormat,
    #[serde(default = "default_quality")]
    pub quality: f64,
}

fn default_ideal_width() -> u32 {
    DEFAULT_IDEAL_WIDTH
}

fn default_ideal_height() -> u32 {
    DEFAULT_IDEAL_HEIGHT
}

fn default_quality() -> f64 {
    DEFAULT_QUALITY
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            ideal_width: DEFAULT_IDEAL_WIDTH,
            ideal_height: DEFAULT_IDEAL_HEIGHT,
            facing_mode: FacingMode::User,
            image_format: ImageFormat::Jpeg,
            quality: DEFAULT_QUALITY,
        }
    }
}

impl CaptureSettings {
    pub fn constraints(&self) -> VideoConstraints {
        VideoConstraints {
            ideal_width: self.ideal_width,
            ideal_height: self.ideal_height,
            facing_mode: self.facing_mode,
            audio: false,
        }
    }

    /// Encoder quality in `[0, 1]`.
    pub fn quality(&self) -> f64 {
        if self.quality.is_nan() {
            DEFAULT_QUALITY
        } else {
            self.quality.clamp(0.0, 1.0)
        }
    }
}

/// Build a base64 `data:` URL for `bytes`.
pub fn data_url(format: ImageFormat, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", format.mime(), STANDARD.encode(bytes))
}
