//! Toolkit configuration with TOML file support.

use idkit_address::RequiredFieldSet;
use idkit_camera::CaptureSettings;
use idkit_utils::LogFormat;
use idkit_verification::VerifyOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::SessionError;

/// Configuration for an idkit session.
///
/// Can be loaded from a TOML file via [`IdkitConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IdkitConfig {
    /// ISO code of the country preselected in the phone input.
    #[serde(default = "default_country")]
    pub default_country: String,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Address fields that must be non-blank.
    #[serde(default)]
    pub required_fields: RequiredFieldSet,

    #[serde(default)]
    pub verification: VerifyOptions,

    #[serde(default)]
    pub capture: CaptureSettings,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_country() -> String {
    "US".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl IdkitConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, SessionError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SessionError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, SessionError> {
        toml::from_str(s).map_err(|e| SessionError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("IdkitConfig is always serializable to TOML")
    }
}

impl Default for IdkitConfig {
    fn default() -> Self {
        Self {
            default_country: default_country(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
            required_fields: RequiredFieldSet::default(),
            verification: VerifyOptions::default(),
            capture: CaptureSettings::default(),
        }
    }
}
