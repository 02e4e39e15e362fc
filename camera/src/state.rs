//! Camera lifecycle state.
//!
//! ## Transitions
//!
//! | from \ event | Start   | Acquired  | Failed | Stop | Capture  | Retake    |
//! |--------------|---------|-----------|--------|------|----------|-----------|
//! | Idle         | Loading | –         | Idle   | Idle | –        | –         |
//! | Loading      | –       | Streaming | Idle   | Idle | –        | –         |
//! | Streaming    | –       | –         | –      | Idle | Captured | –         |
//! | Captured     | –       | –         | –      | Idle | –        | Streaming |
//!
//! A `–` is a rejected event: the controller ignores it and the phase is
//! unchanged.

use crate::error::CameraError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mutually exclusive lifecycle phases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraPhase {
    #[default]
    Idle,
    Loading,
    Streaming,
    Captured,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraEvent {
    Start,
    Acquired,
    Failed,
    Stop,
    Capture,
    Retake,
}

impl CameraPhase {
    /// The phase after `event`, or `None` if the event is invalid here.
    pub fn next(self, event: CameraEvent) -> Option<CameraPhase> {
        use CameraEvent as E;
        use CameraPhase as P;
        match (self, event) {
            (_, E::Stop) => Some(P::Idle),
            (P::Idle, E::Start) => Some(P::Loading),
            (P::Idle | P::Loading, E::Failed) => Some(P::Idle),
            (P::Loading, E::Acquired) => Some(P::Streaming),
            (P::Streaming, E::Capture) => Some(P::Captured),
            (P::Captured, E::Retake) => Some(P::Streaming),
            _ => None,
        }
    }
}

impl fmt::Display for CameraPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Streaming => "streaming",
            Self::Captured => "captured",
        };
        f.write_str(s)
    }
}

/// Observable controller state. `error` is only ever set alongside
/// [`CameraPhase::Idle`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CameraState {
    pub phase: CameraPhase,
    pub error: Option<CameraError>,
}

impl CameraState {
    pub fn is_loading(&self) -> bool {
        self.phase == CameraPhase::Loading
    }

    pub fn is_streaming(&self) -> bool {
        self.phase == CameraPhase::Streaming
    }

    pub fn is_captured(&self) -> bool {
        self.phase == CameraPhase::Captured
    }

    /// Apply an event. Returns `false` (and changes nothing) when the event is
    /// invalid for the current phase. Any accepted event other than `Failed`
    /// clears the error.
    pub fn apply(&mut self, event: CameraEvent) -> bool {
        match self.phase.next(event) {
            Some(next) => {
                self.phase = next;
                if event != CameraEvent::Failed {
                    self.error = None;
                }
                true
            }
            None => false,
        }
    }

    /// Move to `Idle` carrying `error`.
    pub fn fail(&mut self, error: CameraError) -> bool {
        if self.apply(CameraEvent::Failed) {
            self.error = Some(error);
            true
        } else {
            false
        }
    }
}
