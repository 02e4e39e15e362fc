//! Nullable preview sink and drawing surface.

use crate::media::NullStream;
use idkit_camera::{
    data_url, FrameSize, ImageFormat, PlaybackError, Surface, SurfaceError, VideoSink,
};
use std::cell::RefCell;
use std::future::{ready, Ready};
use std::rc::Rc;

#[derive(Default)]
struct SinkState {
    attached: Option<NullStream>,
    attaches: usize,
    detaches: usize,
    plays: usize,
    play_error: Option<PlaybackError>,
    frame: FrameSize,
}

/// A preview sink that records attach/detach/play. Clones share state.
#[derive(Clone, Default)]
pub struct NullVideoSink {
    state: Rc<RefCell<SinkState>>,
}

impl NullVideoSink {
    /// A sink that reports `frame` as the decoded video size.
    pub fn with_frame(width: u32, height: u32) -> Self {
        let sink = Self::default();
        sink.state.borrow_mut().frame = FrameSize::new(width, height);
        sink
    }

    /// Make every `play()` reject.
    pub fn failing_playback(self, reason: &str) -> Self {
        self.state.borrow_mut().play_error = Some(PlaybackError(reason.into()));
        self
    }

    pub fn set_frame(&self, width: u32, height: u32) {
        self.state.borrow_mut().frame = FrameSize::new(width, height);
    }

    pub fn is_attached(&self) -> bool {
        self.state.borrow().attached.is_some()
    }

    pub fn attaches(&self) -> usize {
        self.state.borrow().attaches
    }

    pub fn detaches(&self) -> usize {
        self.state.borrow().detaches
    }

    pub fn plays(&self) -> usize {
        self.state.borrow().plays
    }
}

impl VideoSink<NullStream> for NullVideoSink {
    type Play = Ready<Result<(), PlaybackError>>;

    fn attach(&mut self, stream: &NullStream) {
        let mut state = self.state.borrow_mut();
        state.attached = Some(stream.clone());
        state.attaches += 1;
    }

    fn detach(&mut self) {
        let mut state = self.state.borrow_mut();
        state.attached = None;
        state.detaches += 1;
    }

    fn play(&mut self) -> Self::Play {
        let mut state = self.state.borrow_mut();
        state.plays += 1;
        ready(match &state.play_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        })
    }

    fn frame_size(&self) -> FrameSize {
        self.state.borrow().frame
    }
}

struct SurfaceState {
    payload: Vec<u8>,
    draws: Vec<FrameSize>,
    encode_error: Option<SurfaceError>,
}

/// A surface that encodes a fixed payload and records every draw.
#[derive(Clone)]
pub struct NullSurface {
    state: Rc<RefCell<SurfaceState>>,
}

impl NullSurface {
    pub fn new(payload: &[u8]) -> Self {
        Self {
            state: Rc::new(RefCell::new(SurfaceState {
                payload: payload.to_vec(),
                draws: Vec::new(),
                encode_error: None,
            })),
        }
    }

    /// Make every `encode()` fail.
    pub fn failing(self) -> Self {
        self.state.borrow_mut().encode_error = Some(SurfaceError::Encode("null surface".into()));
        self
    }

    pub fn draws(&self) -> Vec<FrameSize> {
        self.state.borrow().draws.clone()
    }
}

impl Default for NullSurface {
    fn default() -> Self {
        Self::new(b"frame")
    }
}

impl Surface<NullVideoSink> for NullSurface {
    fn draw_frame(&mut self, _source: &NullVideoSink, size: FrameSize) -> Result<(), SurfaceError> {
        self.state.borrow_mut().draws.push(size);
        Ok(())
    }

    fn encode(&self, format: ImageFormat, _quality: f64) -> Result<String, SurfaceError> {
        let state = self.state.borrow();
        match &state.encode_error {
            Some(err) => Err(err.clone()),
            None => Ok(data_url(format, &state.payload)),
        }
    }
}
