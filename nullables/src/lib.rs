//! Nullable infrastructure for deterministic testing.
//!
//! Everything that reaches outside the process (randomness, camera hardware,
//! the preview element, the drawing surface) sits behind a trait. This crate
//! provides test-friendly implementations that:
//! - Return scripted values
//! - Can be controlled and inspected programmatically
//! - Never touch real devices
//!
//! Camera doubles share their state through `Rc`, so a test keeps a clone and
//! observes what the controller did to the one it owns.

pub mod media;
pub mod preview;
pub mod random;

pub use media::{NullAcquisition, NullMediaDevices, NullStream, NullTrack, PendingGrant};
pub use preview::{NullSurface, NullVideoSink};
pub use random::NullRandom;
