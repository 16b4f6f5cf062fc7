//! Core data model for the Parallax XR client.
//!
//! This crate provides:
//! - Semantic input identifiers and the per-kind action name tables
//! - The interaction-profile catalog (hardware control mapping tables)
//! - Controller state as produced by the per-tick input poll
//! - The tracking-frame history correlating video frames with view poses
//! - The session lifecycle state machine
//!
//! Nothing in here talks to a device runtime; the runtime-facing half lives
//! in `parallax-input` and `parallax-openxr`.

#![forbid(unsafe_code)]

pub mod catalog;
pub mod controller;
pub mod error;
pub mod input;
pub mod paths;
pub mod profile;
pub mod session;
pub mod settings;
pub mod tracking;

pub use controller::{ControllerState, Pose, PoseVelocity, HAND_BONE_COUNT};
pub use error::{Error, Result};
pub use input::{ButtonMask, SemanticInput};
pub use profile::{ButtonMap, InputMap, InteractionProfile, PassthroughModeButtons};
pub use session::{LoopSignals, SessionLifecycle, SessionState};
pub use settings::{ClientOptions, StreamSettings, TrackingSpace};
pub use tracking::{RenderMode, TrackingFrame, TrackingHistory, ViewTransform};

/// Number of tracked hands; index 0 is the left hand, index 1 the right.
pub const HAND_COUNT: usize = 2;

/// Left/right hand identifier, usable as an index into two-element arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hand {
    Left = 0,
    Right = 1,
}

impl Hand {
    pub const BOTH: [Hand; HAND_COUNT] = [Hand::Left, Hand::Right];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Initialize tracing with sensible defaults.
///
/// Log level is controlled by the `RUST_LOG` environment variable.
/// Defaults to `info` if not set.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
