//! Camera capture.
//!
//! The [`CameraController`] owns the lifecycle of one camera stream:
//!
//! ```text
//! Idle ──start──▶ Loading ──acquired──▶ Streaming ──capture──▶ Captured
//!  ▲                 │                      ▲                      │
//!  │   (error)       │                      └────────retake────────┘
//!  └────failed───────┘
//!  ◀──────────────────────── stop (from any phase) ──────────────────
//! ```
//!
//! Platform access sits behind the traits in [`device`]: stream acquisition
//! ([`MediaDevices`]), the live preview ([`VideoSink`]), and the offscreen
//! drawing surface used to encode stills ([`Surface`]). Browser bindings for
//! these traits live in the `web` module on `wasm32` targets.
//!
//! The controller is the sole owner of any acquired stream and releases every
//! track on `stop()` and on drop.

pub mod capture;
pub mod controller;
pub mod details;
pub mod device;
pub mod error;
pub mod state;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use capture::{data_url, CaptureSettings, ImageFormat};
pub use controller::CameraController;
pub use details::CameraErrorDetails;
pub use device::{
    FacingMode, FrameSize, LocalBoxFuture, MediaDevices, MediaStream, MediaTrack, Surface,
    VideoConstraints, VideoSink,
};
pub use error::{AcquireError, CameraError, PlaybackError, SurfaceError};
pub use state::{CameraEvent, CameraPhase, CameraState};
