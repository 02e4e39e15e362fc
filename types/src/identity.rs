//! Identity verification input and result records.

use crate::address::{Address, AddressInput};
use crate::error::TypesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scores at or above this value are verified.
pub const PASS_THRESHOLD: u8 = 50;

/// Outcome of a verification attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityStatus {
    Verified,
    Failed,
}

impl IdentityStatus {
    /// The status is fully determined by the score.
    pub fn from_score(score: u8) -> Self {
        if score >= PASS_THRESHOLD {
            Self::Verified
        } else {
            Self::Failed
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for IdentityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentityStatus {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "verified" => Ok(Self::Verified),
            "failed" => Ok(Self::Failed),
            other => Err(TypesError::UnknownStatus(other.to_string())),
        }
    }
}

/// Everything collected from the user before a verification attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityInput {
    /// Captured selfie as a data URL.
    pub selfie_url: String,
    /// Phone number in E.164 form (or empty when none was entered).
    pub phone: String,
    pub address: AddressInput,
}

/// The verification record. Built once per successful verification and
/// never modified afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityData {
    pub selfie_url: String,
    pub phone: String,
    pub address: Address,
    /// 0–100 inclusive.
    pub score: u8,
    pub status: IdentityStatus,
}

impl IdentityData {
    pub fn is_verified(&self) -> bool {
        self.status == IdentityStatus::Verified
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_threshold_is_fifty() {
        assert_eq!(IdentityStatus::from_score(49), IdentityStatus::Failed);
        assert_eq!(IdentityStatus::from_score(50), IdentityStatus::Verified);
        assert_eq!(IdentityStatus::from_score(100), IdentityStatus::Verified);
        assert_eq!(IdentityStatus::from_score(0), IdentityStatus::Failed);
    }

    #[test]
    fn identity_data_wire_format() {
        let data = IdentityData {
            selfie_url: "data:image/jpeg;base64,abc".into(),
            phone: "+14155552671".into(),
            address: Address::default(),
            score: 72,
            status: IdentityStatus::Verified,
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["selfieUrl"], "data:image/jpeg;base64,abc");
        assert_eq!(json["status"], "verified");
        assert_eq!(json["address"]["postalCode"], "");
    }
}
