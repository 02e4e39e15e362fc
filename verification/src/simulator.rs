//! Simulated verification scoring.

use crate::error::VerificationError;
use crate::method::VerificationMethod;
use crate::random::{RandomSource, ThreadRandom};
use idkit_address::normalize_address;
use idkit_types::{IdentityData, IdentityInput, IdentityStatus, PASS_THRESHOLD};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub const DEFAULT_ERROR_RATE: f64 = 0.05;
pub const DEFAULT_PASS_RATE: f64 = 0.7;

/// Tuning for the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerifyOptions {
    /// Probability of a simulated outage.
    #[serde(default = "default_error_rate")]
    pub error_rate: f64,
    /// Probability of a passing score. Clamped to `[0, 1]` when used.
    #[serde(default = "default_pass_rate")]
    pub pass_rate: f64,
}

fn default_error_rate() -> f64 {
    DEFAULT_ERROR_RATE
}

fn default_pass_rate() -> f64 {
    DEFAULT_PASS_RATE
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            error_rate: DEFAULT_ERROR_RATE,
            pass_rate: DEFAULT_PASS_RATE,
        }
    }
}

impl VerifyOptions {
    /// Probability that the pass/fail roll lands in the fail band.
    pub fn fail_probability(&self) -> f64 {
        let pass_rate = if self.pass_rate.is_nan() {
            DEFAULT_PASS_RATE
        } else {
            self.pass_rate.clamp(0.0, 1.0)
        };
        (1.0 - pass_rate).clamp(0.0, 1.0)
    }
}

/// Map the pass/fail roll and the magnitude roll to a score.
///
/// Fail band: `floor(magnitude * 50)`, 0–49. Pass band:
/// `50 + floor(magnitude * 51)`, 50–100.
pub fn score_from_rolls(score_roll: f64, magnitude_roll: f64, options: &VerifyOptions) -> u8 {
    let magnitude = magnitude_roll.clamp(0.0, 1.0);
    if score_roll < options.fail_probability() {
        ((magnitude * 50.0).floor() as u8).min(PASS_THRESHOLD - 1)
    } else {
        PASS_THRESHOLD + ((magnitude * 51.0).floor() as u8).min(100 - PASS_THRESHOLD)
    }
}

/// Verification by seeded simulation.
///
/// Draws are consumed in a fixed order on every call: outage roll, pass/fail
/// roll, magnitude roll. An outage consumes only the first.
#[derive(Debug)]
pub struct SimulatedVerifier<R> {
    options: VerifyOptions,
    rng: R,
}

impl SimulatedVerifier<ThreadRandom> {
    pub fn with_thread_rng(options: VerifyOptions) -> Self {
        Self::new(options, ThreadRandom)
    }
}

impl<R: RandomSource> SimulatedVerifier<R> {
    pub fn new(options: VerifyOptions, rng: R) -> Self {
        Self { options, rng }
    }

    pub fn options(&self) -> &VerifyOptions {
        &self.options
    }

    /// Run one verification attempt.
    pub async fn verify(
        &mut self,
        input: IdentityInput,
    ) -> Result<IdentityData, VerificationError> {
        let error_roll = self.rng.next_f64();
        if error_roll < self.options.error_rate {
            warn!(error_roll, "simulated verification outage");
            return Err(VerificationError::ServiceUnavailable);
        }

        let score_roll = self.rng.next_f64();
        let magnitude_roll = self.rng.next_f64();
        let score = score_from_rolls(score_roll, magnitude_roll, &self.options);
        let status = IdentityStatus::from_score(score);
        info!(score, %status, "verification complete");

        Ok(IdentityData {
            selfie_url: input.selfie_url,
            phone: input.phone,
            address: normalize_address(input.address),
            score,
            status,
        })
    }
}

impl<R: RandomSource> VerificationMethod for SimulatedVerifier<R> {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn verify(&mut self, input: IdentityInput) -> Result<IdentityData, VerificationError> {
        SimulatedVerifier::verify(self, input).await
    }
}

/// One verification with default options and the thread-local generator.
pub async fn get_identity_data(input: IdentityInput) -> Result<IdentityData, VerificationError> {
    SimulatedVerifier::with_thread_rng(VerifyOptions::default())
        .verify(input)
        .await
}
