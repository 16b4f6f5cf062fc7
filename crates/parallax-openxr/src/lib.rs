//! OpenXR backend for the Parallax XR client.
//!
//! Implements the `parallax-input` runtime seam over a live OpenXR
//! instance/session pair and translates session lifecycle events for the
//! state machine in `parallax-core`.

#![forbid(unsafe_code)]

pub mod events;
pub mod runtime;

pub use events::{
    preferred_blend_mode, recommended_eye_resolution, session_state, state_change,
    OpenXrSessionHooks,
};
pub use runtime::OpenXrRuntime;
