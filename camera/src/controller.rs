//! Single-owner camera controller.
//!
//! State lives in a `RefCell`; no borrow is held across an await point, so
//! `stop()` can run while `start()` is suspended on acquisition. Each `stop()`
//! bumps a generation counter and an acquisition that resolves under an older
//! generation is released immediately instead of being adopted.

use crate::capture::CaptureSettings;
use crate::device::{MediaDevices, MediaStream, Surface, VideoSink};
use crate::error::CameraError;
use crate::state::{CameraEvent, CameraPhase, CameraState};
use std::cell::RefCell;
use tracing::{debug, info, warn};

struct Inner<S, K, F> {
    state: CameraState,
    stream: Option<S>,
    sink: Option<K>,
    surface: Option<F>,
    generation: u64,
}

impl<S, K, F> Inner<S, K, F> {
    fn fail(&mut self, error: CameraError) -> CameraError {
        warn!(%error, "camera start failed");
        self.state.fail(error.clone());
        error
    }
}

pub struct CameraController<D, K, F>
where
    D: MediaDevices,
    K: VideoSink<D::Stream>,
    F: Surface<K>,
{
    devices: D,
    settings: CaptureSettings,
    inner: RefCell<Inner<D::Stream, K, F>>,
}

impl<D, K, F> CameraController<D, K, F>
where
    D: MediaDevices,
    K: VideoSink<D::Stream>,
    F: Surface<K>,
{
    pub fn new(devices: D, settings: CaptureSettings) -> Self {
        Self {
            devices,
            settings,
            inner: RefCell::new(Inner {
                state: CameraState::default(),
                stream: None,
                sink: None,
                surface: None,
                generation: 0,
            }),
        }
    }

    /// Bind the preview sink. Replaces any previous sink.
    pub fn attach_sink(&self, sink: K) {
        self.inner.borrow_mut().sink = Some(sink);
    }

    pub fn attach_surface(&self, surface: F) {
        self.inner.borrow_mut().surface = Some(surface);
    }

    pub fn settings(&self) -> &CaptureSettings {
        &self.settings
    }

    pub fn state(&self) -> CameraState {
        self.inner.borrow().state.clone()
    }

    pub fn phase(&self) -> CameraPhase {
        self.inner.borrow().state.phase
    }

    pub fn error(&self) -> Option<CameraError> {
        self.inner.borrow().state.error.clone()
    }

    /// Whether a stream is currently held.
    pub fn has_stream(&self) -> bool {
        self.inner.borrow().stream.is_some()
    }

    /// Acquire a stream and start the preview.
    ///
    /// Ignored unless the controller is idle. On failure the controller
    /// returns to idle with the error recorded and the same error is
    /// returned. A playback failure after a successful attach is not an
    /// error: the stream is treated as live.
    pub async fn start(&self) -> Result<(), CameraError> {
        let generation = {
            let mut inner = self.inner.borrow_mut();
            if inner.state.phase != CameraPhase::Idle {
                debug!(phase = %inner.state.phase, "camera start ignored");
                return Ok(());
            }
            if !self.devices.is_supported() {
                return Err(inner.fail(CameraError::NotSupported));
            }
            inner.state.apply(CameraEvent::Start);
            inner.generation
        };

        let constraints = self.settings.constraints();
        debug!(
            width = constraints.ideal_width,
            height = constraints.ideal_height,
            facing = constraints.facing_mode.as_str(),
            "requesting camera stream"
        );
        let acquired = self.devices.get_user_media(&constraints).await;

        let play = {
            let mut inner = self.inner.borrow_mut();
            if inner.generation != generation {
                if let Ok(stream) = acquired {
                    stream.release();
                }
                debug!("discarding camera stream that resolved after stop");
                return Ok(());
            }
            let stream = match acquired {
                Ok(stream) => stream,
                Err(err) => {
                    debug!(cause = %err, "camera acquisition rejected");
                    return Err(inner.fail(CameraError::from(err)));
                }
            };
            let play = match inner.sink.as_mut() {
                Some(sink) => {
                    sink.attach(&stream);
                    sink.play()
                }
                None => {
                    stream.release();
                    return Err(inner.fail(CameraError::SinkUnavailable));
                }
            };
            inner.stream = Some(stream);
            play
        };

        if let Err(err) = play.await {
            debug!(%err, "preview playback did not start");
        }

        let mut inner = self.inner.borrow_mut();
        if inner.generation == generation && inner.state.apply(CameraEvent::Acquired) {
            info!("camera streaming");
        }
        Ok(())
    }

    /// Release the stream, detach the sink and reset to idle with no error.
    /// Safe to call in any phase.
    pub fn stop(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.generation = inner.generation.wrapping_add(1);
        let had_stream = match inner.stream.take() {
            Some(stream) => {
                stream.release();
                true
            }
            None => false,
        };
        if let Some(sink) = inner.sink.as_mut() {
            sink.detach();
        }
        inner.state.apply(CameraEvent::Stop);
        if had_stream {
            info!("camera stopped");
        }
    }

    /// Copy the current frame to the surface and encode it.
    ///
    /// Returns `None` unless streaming, when no frame has been decoded yet,
    /// or when the surface is missing or fails.
    pub fn capture_image(&self) -> Option<String> {
        let mut guard = self.inner.borrow_mut();
        let inner = &mut *guard;
        if inner.state.phase != CameraPhase::Streaming {
            debug!(phase = %inner.state.phase, "capture ignored");
            return None;
        }
        let (Some(sink), Some(surface)) = (inner.sink.as_ref(), inner.surface.as_mut()) else {
            debug!("capture without sink or surface");
            return None;
        };
        let size = sink.frame_size();
        if size.is_empty() {
            debug!("capture before first frame");
            return None;
        }
        if let Err(err) = surface.draw_frame(sink, size) {
            warn!(%err, "frame draw failed");
            return None;
        }
        let encoded = match surface.encode(self.settings.image_format, self.settings.quality()) {
            Ok(url) => url,
            Err(err) => {
                warn!(%err, "frame encode failed");
                return None;
            }
        };
        inner.state.apply(CameraEvent::Capture);
        debug!(width = size.width, height = size.height, "frame captured");
        Some(encoded)
    }

    /// Return from a captured still to the live preview.
    pub fn retake(&self) {
        let mut inner = self.inner.borrow_mut();
        if !inner.state.apply(CameraEvent::Retake) {
            debug!(phase = %inner.state.phase, "retake ignored");
        }
    }
}

impl<D, K, F> Drop for CameraController<D, K, F>
where
    D: MediaDevices,
    K: VideoSink<D::Stream>,
    F: Surface<K>,
{
    fn drop(&mut self) {
        self.stop();
    }
}
