//! Tracking-frame history: correlates an outbound video frame with the
//! view transforms predicted when that frame was requested.
//!
//! A streamed frame takes variable time to cross the network and decode;
//! by the time it can be shown, "now" has moved on. Compositing it with a
//! freshly predicted view would visibly swim, so the view used for display
//! must be the one predicted at request time. The history trades a bounded
//! map (1080 small entries) for that temporal correlation without any
//! synchronous round-trip.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::controller::Pose;

/// Upper bound on retained frames (three seconds at 360 Hz).
pub const MAX_TRACKING_FRAMES: usize = 360 * 3;

/// Field of view half-angles in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Fov {
    pub left: f32,
    pub right: f32,
    pub up: f32,
    pub down: f32,
}

/// One eye's view: pose plus field of view.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewTransform {
    pub pose: Pose,
    pub fov: Fov,
}

/// View transforms and display time captured when a frame was requested.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrackingFrame {
    pub views: [ViewTransform; 2],
    pub display_time_ns: i64,
}

/// Whether the client is compositing the local lobby or a streamed frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Lobby,
    Stream,
}

/// Bounded, time-ordered map from outbound frame id to [`TrackingFrame`].
///
/// Written by the pose-prediction path, read by the render and tracking
/// query paths; a single reader/writer lock with O(1) hold times covers
/// all access. Keys are monotonically increasing timestamps in practice,
/// and eviction is always the smallest key (deliberately *not*
/// oldest-inserted; see the out-of-order test).
#[derive(Debug, Default)]
pub struct TrackingHistory {
    frames: RwLock<BTreeMap<u64, TrackingFrame>>,
}

impl TrackingHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the frame for `frame_id`, evicting the lowest
    /// key once the bound is exceeded.
    pub fn insert(&self, frame_id: u64, frame: TrackingFrame) {
        let mut frames = self.frames.write().unwrap_or_else(|e| e.into_inner());
        frames.insert(frame_id, frame);
        if frames.len() > MAX_TRACKING_FRAMES {
            if let Some(&oldest) = frames.keys().next() {
                frames.remove(&oldest);
            }
        }
    }

    /// Exact-key lookup.
    pub fn get(&self, frame_id: u64) -> Option<TrackingFrame> {
        let frames = self.frames.read().unwrap_or_else(|e| e.into_inner());
        frames.get(&frame_id).copied()
    }

    /// The entry with the highest frame id, if any.
    pub fn latest(&self) -> Option<TrackingFrame> {
        let frames = self.frames.read().unwrap_or_else(|e| e.into_inner());
        frames.iter().next_back().map(|(_, frame)| *frame)
    }

    pub fn len(&self) -> usize {
        let frames = self.frames.read().unwrap_or_else(|e| e.into_inner());
        frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve the views to composite a frame with.
    ///
    /// Lobby rendering always uses a live prediction (`live` is the
    /// immediate-query fallback and is never cached). Streaming prefers the
    /// exact cached entry for `frame_id`, then the latest cached entry,
    /// then the live fallback when the history is empty.
    pub fn views_for_frame(
        &self,
        mode: RenderMode,
        frame_id: Option<u64>,
        live: impl FnOnce() -> TrackingFrame,
    ) -> TrackingFrame {
        if mode == RenderMode::Lobby {
            return live();
        }
        {
            let frames = self.frames.read().unwrap_or_else(|e| e.into_inner());
            if let Some(id) = frame_id {
                if let Some(frame) = frames.get(&id) {
                    return *frame;
                }
            }
            if let Some((_, frame)) = frames.iter().next_back() {
                return *frame;
            }
        }
        live()
    }
}
