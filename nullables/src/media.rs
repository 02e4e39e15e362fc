//! Nullable capture devices, streams, and tracks.

use idkit_camera::{
    AcquireError, LocalBoxFuture, MediaDevices, MediaStream, MediaTrack, VideoConstraints,
};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use tokio::sync::oneshot;

/// A track that records whether it was stopped.
#[derive(Clone, Default)]
pub struct NullTrack {
    stopped: Rc<Cell<bool>>,
}

impl NullTrack {
    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }
}

impl MediaTrack for NullTrack {
    fn stop(&self) {
        self.stopped.set(true);
    }
}

/// A stream of [`NullTrack`]s. Clones share track state.
#[derive(Clone)]
pub struct NullStream {
    tracks: Vec<NullTrack>,
}

impl NullStream {
    pub fn with_tracks(count: usize) -> Self {
        Self {
            tracks: (0..count).map(|_| NullTrack::default()).collect(),
        }
    }

    /// Every track has been stopped.
    pub fn is_released(&self) -> bool {
        self.tracks.iter().all(NullTrack::is_stopped)
    }
}

impl Default for NullStream {
    fn default() -> Self {
        Self::with_tracks(1)
    }
}

impl MediaStream for NullStream {
    type Track = NullTrack;

    fn tracks(&self) -> Vec<NullTrack> {
        self.tracks.clone()
    }
}

/// Scripted outcome of one `get_user_media` call.
pub enum NullAcquisition {
    Grant(NullStream),
    Deny(AcquireError),
    Pending(oneshot::Receiver<Result<NullStream, AcquireError>>),
}

/// Resolves a [`NullAcquisition::Pending`] acquisition from the test.
pub struct PendingGrant {
    sender: oneshot::Sender<Result<NullStream, AcquireError>>,
}

impl PendingGrant {
    pub fn grant(self, stream: NullStream) {
        let _ = self.sender.send(Ok(stream));
    }

    pub fn deny(self, error: AcquireError) {
        let _ = self.sender.send(Err(error));
    }
}

/// Capture devices that answer from a script and record every request.
///
/// Unscripted requests are denied with [`AcquireError::NotFound`].
pub struct NullMediaDevices {
    supported: bool,
    script: RefCell<VecDeque<NullAcquisition>>,
    requests: Rc<RefCell<Vec<VideoConstraints>>>,
}

impl NullMediaDevices {
    pub fn new() -> Self {
        Self {
            supported: true,
            script: RefCell::new(VecDeque::new()),
            requests: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// A platform with no capture capability at all.
    pub fn unsupported() -> Self {
        Self {
            supported: false,
            ..Self::new()
        }
    }

    pub fn granting(stream: NullStream) -> Self {
        Self::new().then(NullAcquisition::Grant(stream))
    }

    pub fn denying(error: AcquireError) -> Self {
        Self::new().then(NullAcquisition::Deny(error))
    }

    /// Devices whose first request stays pending until the returned handle
    /// resolves it.
    pub fn pending() -> (Self, PendingGrant) {
        let (sender, receiver) = oneshot::channel();
        (
            Self::new().then(NullAcquisition::Pending(receiver)),
            PendingGrant { sender },
        )
    }

    /// Queue another scripted outcome.
    pub fn then(self, acquisition: NullAcquisition) -> Self {
        self.script.borrow_mut().push_back(acquisition);
        self
    }

    /// Shared handle on the recorded requests.
    pub fn requests(&self) -> Rc<RefCell<Vec<VideoConstraints>>> {
        Rc::clone(&self.requests)
    }
}

impl Default for NullMediaDevices {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaDevices for NullMediaDevices {
    type Stream = NullStream;
    type Acquire = LocalBoxFuture<Result<NullStream, AcquireError>>;

    fn is_supported(&self) -> bool {
        self.supported
    }

    fn get_user_media(&self, constraints: &VideoConstraints) -> Self::Acquire {
        self.requests.borrow_mut().push(*constraints);
        let next = self.script.borrow_mut().pop_front();
        Box::pin(async move {
            match next {
                Some(NullAcquisition::Grant(stream)) => Ok(stream),
                Some(NullAcquisition::Deny(error)) => Err(error),
                Some(NullAcquisition::Pending(receiver)) => receiver
                    .await
                    .unwrap_or_else(|_| Err(AcquireError::Other("request abandoned".into()))),
                None => Err(AcquireError::NotFound),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_stops_every_track() {
        let stream = NullStream::with_tracks(2);
        let observer = stream.clone();
        assert!(!observer.is_released());
        stream.release();
        assert!(observer.is_released());
    }
}
