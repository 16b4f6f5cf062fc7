//! Runtime-generic input layer for the Parallax XR client.
//!
//! Negotiates interaction profiles against the connected runtime, creates
//! and binds the action set, folds per-tick action state into controller
//! snapshots, and detects the hold-to-quit and passthrough gestures.
//!
//! The device runtime is reached only through [`RuntimeInterface`]; the
//! OpenXR implementation lives in `parallax-openxr`.

#![forbid(unsafe_code)]

pub mod context;
pub mod eye_gaze;
pub mod gesture;
pub mod negotiate;
pub mod poll;
pub mod registry;
pub mod runtime;

pub use context::{InteractionContext, PollOutput};
pub use eye_gaze::EyeGazeTracker;
pub use gesture::{PassthroughGesture, PassthroughMode, QuitGesture, QUIT_HOLD_DURATION};
pub use poll::PolledHand;
pub use registry::ActionRegistry;
pub use runtime::{
    ActionHandle, ActionKind, Binding, BoolState, HapticFeedback, PathHandle, RuntimeInterface,
    RuntimeKind, ScalarState, SpaceHandle, TrackedPaths, Vector2State,
};
