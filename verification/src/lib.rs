//! Identity verification.
//!
//! The verification *method* is pluggable: callers depend on
//! [`VerificationMethod`], and this crate ships one implementation,
//! [`SimulatedVerifier`], which mimics a scoring backend with a seeded random
//! simulation:
//! 1. a small chance of a simulated service outage,
//! 2. a pass/fail roll weighted by the configured pass rate,
//! 3. a magnitude roll that places the score inside the pass or fail band.
//!
//! All randomness flows through [`RandomSource`] so the whole pipeline can be
//! driven deterministically in tests.

pub mod error;
pub mod method;
pub mod random;
pub mod simulator;

pub use error::VerificationError;
pub use method::VerificationMethod;
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use simulator::{get_identity_data, score_from_rolls, SimulatedVerifier, VerifyOptions};
