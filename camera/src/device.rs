//! Platform seams for the camera controller.
//!
//! Futures are returned through associated types so an acquisition in flight
//! never borrows the device it came from.

use crate::capture::ImageFormat;
use crate::error::{AcquireError, PlaybackError, SurfaceError};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

/// Boxed future without a `Send` bound, for single-threaded platforms.
pub type LocalBoxFuture<T> = Pin<Box<dyn Future<Output = T>>>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacingMode {
    #[default]
    User,
    Environment,
}

impl FacingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Environment => "environment",
        }
    }
}

/// What the controller asks for when acquiring a stream. Video only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VideoConstraints {
    pub ideal_width: u32,
    pub ideal_height: u32,
    pub facing_mode: FacingMode,
    pub audio: bool,
}

/// Intrinsic pixel size of the current video frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

impl FrameSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// No frame has been decoded yet.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

pub trait MediaTrack {
    /// Stop the track and release the underlying hardware. Idempotent.
    fn stop(&self);
}

pub trait MediaStream {
    type Track: MediaTrack;

    fn tracks(&self) -> Vec<Self::Track>;

    /// Stop every track in the stream.
    fn release(&self) {
        for track in self.tracks() {
            track.stop();
        }
    }
}

/// Access to the platform's capture devices.
pub trait MediaDevices {
    type Stream: MediaStream;
    type Acquire: Future<Output = Result<Self::Stream, AcquireError>>;

    /// Whether the platform exposes camera capture at all.
    fn is_supported(&self) -> bool;

    fn get_user_media(&self, constraints: &VideoConstraints) -> Self::Acquire;
}

/// The live preview a stream renders into.
pub trait VideoSink<S: MediaStream> {
    type Play: Future<Output = Result<(), PlaybackError>>;

    fn attach(&mut self, stream: &S);
    fn detach(&mut self);
    fn play(&mut self) -> Self::Play;
    fn frame_size(&self) -> FrameSize;
}

/// Offscreen surface the current frame is copied into before encoding.
pub trait Surface<K> {
    fn draw_frame(&mut self, source: &K, size: FrameSize) -> Result<(), SurfaceError>;

    /// Encode the last drawn frame as a `data:` URL.
    fn encode(&self, format: ImageFormat, quality: f64) -> Result<String, SurfaceError>;
}
