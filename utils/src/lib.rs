//! Shared utilities for idkit.

pub mod logging;

pub use logging::{init_logging, LogFormat, UnknownLogFormat};
