//! Eye-gaze interaction.
//!
//! Created only when the hardware reports gaze support, the gating
//! extension is enabled, and the user has not opted out. Absence is an
//! expected configuration, not an error.

use parallax_core::catalog::EYE_GAZE_PROFILE;
use parallax_core::{paths, ClientOptions, Pose, Result};
use tracing::info;

use crate::negotiate;
use crate::runtime::{ActionHandle, ActionKind, Binding, PathHandle, RuntimeInterface, SpaceHandle};

pub struct EyeGazeTracker {
    action: ActionHandle,
    space: SpaceHandle,
    /// Refreshed once per tick after `sync_actions`; gates location reads
    /// so a tracker that lost focus stops reporting stale poses.
    active: bool,
}

impl EyeGazeTracker {
    /// Negotiate eye gaze; `Ok(None)` when unavailable or disabled.
    pub fn new<R: RuntimeInterface>(
        runtime: &mut R,
        options: &ClientOptions,
    ) -> Result<Option<Self>> {
        if !negotiate::is_profile_supported(runtime, options, &EYE_GAZE_PROFILE) {
            info!("eye gaze interaction unavailable, gaze tracking disabled");
            return Ok(None);
        }
        let action =
            runtime.create_action("eye_gaze_pose", "Eye Gaze Pose", ActionKind::Pose, &[])?;
        let space = runtime.create_action_space(action, PathHandle::NULL)?;
        info!("eye gaze interaction enabled");
        Ok(Some(Self {
            action,
            space,
            active: false,
        }))
    }

    /// Suggest the single gaze-pose binding on the eye-gaze profile.
    pub fn suggest_bindings<R: RuntimeInterface>(&self, runtime: &mut R) -> Result<()> {
        let gaze_pose = EYE_GAZE_PROFILE
            .eye_gaze_pose_path
            .unwrap_or(paths::GAZE_EXT_POSE);
        let path =
            runtime.string_to_path(&format!("{}/input/{gaze_pose}", paths::USER_EYES_EXT))?;
        runtime.suggest_bindings(
            EYE_GAZE_PROFILE.path,
            &[Binding {
                action: self.action,
                path,
            }],
        )
    }

    /// Refresh the tracker's active flag. Call once per tick, after sync.
    pub fn poll<R: RuntimeInterface>(&mut self, runtime: &R) -> Result<()> {
        self.active = runtime.pose_active(self.action, PathHandle::NULL)?;
        Ok(())
    }

    /// The current gaze pose; `None` while the tracker reports no data.
    pub fn gaze_location<R: RuntimeInterface>(
        &self,
        runtime: &R,
        time_ns: i64,
    ) -> Result<Option<Pose>> {
        if !self.active {
            return Ok(None);
        }
        Ok(runtime
            .locate_space(self.space, time_ns)?
            .map(|location| location.pose))
    }
}
