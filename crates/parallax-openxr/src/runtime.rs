//! OpenXR-backed implementation of the runtime seam.

use std::collections::HashSet;

use openxr as xr;
use parallax_core::{Error, Pose, PoseVelocity, Result};
use parallax_input::{
    ActionHandle, ActionKind, Binding, BoolState, HapticFeedback, PathHandle, RuntimeInterface,
    RuntimeKind, ScalarState, SpaceHandle, Vector2State,
};

enum AnyAction {
    Bool(xr::Action<bool>),
    Scalar(xr::Action<f32>),
    Vector2(xr::Action<xr::Vector2f>),
    Pose(xr::Action<xr::Posef>),
    Haptic(xr::Action<xr::Haptic>),
}

/// One OpenXR instance/session pair exposed through [`RuntimeInterface`].
///
/// Owns the single action set; handles index into the creation-ordered
/// action and space tables. Spaces are located against the reference space
/// chosen at startup.
pub struct OpenXrRuntime<G: xr::Graphics> {
    instance: xr::Instance,
    session: xr::Session<G>,
    action_set: xr::ActionSet,
    reference_space: xr::Space,
    actions: Vec<AnyAction>,
    spaces: Vec<xr::Space>,
    kind: RuntimeKind,
    enabled_extensions: HashSet<String>,
    eye_gaze_supported: bool,
}

impl<G: xr::Graphics> OpenXrRuntime<G> {
    /// Wrap an already-initialized instance and session.
    ///
    /// `enabled_extensions` and `eye_gaze_supported` come from instance
    /// creation and the system properties query the bootstrap performs.
    pub fn new(
        instance: xr::Instance,
        session: xr::Session<G>,
        reference_space: xr::Space,
        enabled_extensions: HashSet<String>,
        eye_gaze_supported: bool,
    ) -> Result<Self> {
        let properties = instance
            .properties()
            .map_err(|e| Error::runtime(format!("OpenXR instance properties: {e:?}")))?;
        let kind = RuntimeKind::from_runtime_name(&properties.runtime_name);
        tracing::info!(
            runtime = %properties.runtime_name,
            ?kind,
            "connected to OpenXR runtime"
        );

        let action_set = instance
            .create_action_set("parallax_input", "Parallax Input", 0)
            .map_err(|e| Error::runtime(format!("OpenXR action set: {e:?}")))?;

        Ok(Self {
            instance,
            session,
            action_set,
            reference_space,
            actions: Vec::new(),
            spaces: Vec::new(),
            kind,
            enabled_extensions,
            eye_gaze_supported,
        })
    }

    fn action(&self, handle: ActionHandle) -> Result<&AnyAction> {
        handle
            .0
            .checked_sub(1)
            .and_then(|i| self.actions.get(i as usize))
            .ok_or_else(|| Error::runtime(format!("unknown action handle {}", handle.0)))
    }

    fn space(&self, handle: SpaceHandle) -> Result<&xr::Space> {
        handle
            .0
            .checked_sub(1)
            .and_then(|i| self.spaces.get(i as usize))
            .ok_or_else(|| Error::runtime(format!("unknown space handle {}", handle.0)))
    }
}

fn raw_path(path: PathHandle) -> xr::Path {
    xr::Path::from_raw(path.0)
}

impl<G: xr::Graphics> RuntimeInterface for OpenXrRuntime<G> {
    fn string_to_path(&self, path: &str) -> Result<PathHandle> {
        let resolved = self
            .instance
            .string_to_path(path)
            .map_err(|e| Error::runtime(format!("OpenXR path {path}: {e:?}")))?;
        Ok(PathHandle(resolved.into_raw()))
    }

    fn create_action(
        &mut self,
        name: &str,
        localized: &str,
        kind: ActionKind,
        subaction_paths: &[PathHandle],
    ) -> Result<ActionHandle> {
        let subactions: Vec<xr::Path> =
            subaction_paths.iter().map(|&p| raw_path(p)).collect();
        let action = match kind {
            ActionKind::Bool => self
                .action_set
                .create_action::<bool>(name, localized, &subactions)
                .map(AnyAction::Bool),
            ActionKind::Scalar => self
                .action_set
                .create_action::<f32>(name, localized, &subactions)
                .map(AnyAction::Scalar),
            ActionKind::Vector2 => self
                .action_set
                .create_action::<xr::Vector2f>(name, localized, &subactions)
                .map(AnyAction::Vector2),
            ActionKind::Pose => self
                .action_set
                .create_action::<xr::Posef>(name, localized, &subactions)
                .map(AnyAction::Pose),
            ActionKind::Haptic => self
                .action_set
                .create_action::<xr::Haptic>(name, localized, &subactions)
                .map(AnyAction::Haptic),
        }
        .map_err(|e| Error::runtime(format!("OpenXR action {name}: {e:?}")))?;

        self.actions.push(action);
        Ok(ActionHandle(self.actions.len() as u64))
    }

    fn create_action_space(
        &mut self,
        action: ActionHandle,
        subaction: PathHandle,
    ) -> Result<SpaceHandle> {
        let AnyAction::Pose(pose_action) = self.action(action)? else {
            return Err(Error::runtime("action space requires a pose action"));
        };
        let space = pose_action
            .create_space(&self.session, raw_path(subaction), xr::Posef::IDENTITY)
            .map_err(|e| Error::runtime(format!("OpenXR action space: {e:?}")))?;
        self.spaces.push(space);
        Ok(SpaceHandle(self.spaces.len() as u64))
    }

    fn suggest_bindings(&mut self, profile_path: &str, bindings: &[Binding]) -> Result<()> {
        let profile = self
            .instance
            .string_to_path(profile_path)
            .map_err(|e| Error::runtime(format!("OpenXR profile path {profile_path}: {e:?}")))?;
        let mut converted = Vec::with_capacity(bindings.len());
        for binding in bindings {
            let path = raw_path(binding.path);
            converted.push(match self.action(binding.action)? {
                AnyAction::Bool(a) => xr::Binding::new(a, path),
                AnyAction::Scalar(a) => xr::Binding::new(a, path),
                AnyAction::Vector2(a) => xr::Binding::new(a, path),
                AnyAction::Pose(a) => xr::Binding::new(a, path),
                AnyAction::Haptic(a) => xr::Binding::new(a, path),
            });
        }
        self.instance
            .suggest_interaction_profile_bindings(profile, &converted)
            .map_err(|e| {
                Error::runtime(format!("OpenXR suggest bindings {profile_path}: {e:?}"))
            })
    }

    fn attach_action_set(&mut self) -> Result<()> {
        self.session
            .attach_action_sets(&[&self.action_set])
            .map_err(|e| Error::runtime(format!("OpenXR attach action set: {e:?}")))
    }

    fn sync_actions(&mut self) -> Result<()> {
        self.session
            .sync_actions(&[xr::ActiveActionSet::new(&self.action_set)])
            .map_err(|e| Error::runtime(format!("OpenXR sync actions: {e:?}")))
    }

    fn bool_state(&self, action: ActionHandle, subaction: PathHandle) -> Result<Option<BoolState>> {
        let AnyAction::Bool(action) = self.action(action)? else {
            return Err(Error::runtime("bool state on a non-bool action"));
        };
        let state = action
            .state(&self.session, raw_path(subaction))
            .map_err(|e| Error::runtime(format!("OpenXR bool state: {e:?}")))?;
        if !state.is_active {
            return Ok(None);
        }
        Ok(Some(BoolState {
            current: state.current_state,
            changed: state.changed_since_last_sync,
        }))
    }

    fn scalar_state(
        &self,
        action: ActionHandle,
        subaction: PathHandle,
    ) -> Result<Option<ScalarState>> {
        let AnyAction::Scalar(action) = self.action(action)? else {
            return Err(Error::runtime("scalar state on a non-scalar action"));
        };
        let state = action
            .state(&self.session, raw_path(subaction))
            .map_err(|e| Error::runtime(format!("OpenXR scalar state: {e:?}")))?;
        if !state.is_active {
            return Ok(None);
        }
        Ok(Some(ScalarState {
            current: state.current_state,
        }))
    }

    fn vector2_state(
        &self,
        action: ActionHandle,
        subaction: PathHandle,
    ) -> Result<Option<Vector2State>> {
        let AnyAction::Vector2(action) = self.action(action)? else {
            return Err(Error::runtime("vector2 state on a non-vector2 action"));
        };
        let state = action
            .state(&self.session, raw_path(subaction))
            .map_err(|e| Error::runtime(format!("OpenXR vector2 state: {e:?}")))?;
        if !state.is_active {
            return Ok(None);
        }
        Ok(Some(Vector2State {
            current: [state.current_state.x, state.current_state.y],
        }))
    }

    fn pose_active(&self, action: ActionHandle, subaction: PathHandle) -> Result<bool> {
        let AnyAction::Pose(action) = self.action(action)? else {
            return Err(Error::runtime("pose query on a non-pose action"));
        };
        action
            .is_active(&self.session, raw_path(subaction))
            .map_err(|e| Error::runtime(format!("OpenXR pose active: {e:?}")))
    }

    fn current_profile(&self, top_level: PathHandle) -> Result<Option<String>> {
        let profile = self
            .session
            .current_interaction_profile(raw_path(top_level))
            .map_err(|e| Error::runtime(format!("OpenXR current profile: {e:?}")))?;
        if profile.into_raw() == 0 {
            return Ok(None);
        }
        let path = self
            .instance
            .path_to_string(profile)
            .map_err(|e| Error::runtime(format!("OpenXR profile name: {e:?}")))?;
        Ok(Some(path))
    }

    fn locate_space(&self, space: SpaceHandle, time_ns: i64) -> Result<Option<PoseVelocity>> {
        let space = self.space(space)?;
        let (location, velocity) = space
            .relate(&self.reference_space, xr::Time::from_nanos(time_ns))
            .map_err(|e| Error::runtime(format!("OpenXR locate space: {e:?}")))?;

        let tracked = xr::SpaceLocationFlags::POSITION_VALID
            | xr::SpaceLocationFlags::ORIENTATION_VALID;
        if !location.location_flags.contains(tracked) {
            return Ok(None);
        }

        let orientation = location.pose.orientation;
        let position = location.pose.position;
        let mut located = PoseVelocity {
            pose: Pose {
                orientation: [orientation.x, orientation.y, orientation.z, orientation.w],
                position: [position.x, position.y, position.z],
            },
            ..PoseVelocity::default()
        };
        if velocity
            .velocity_flags
            .contains(xr::SpaceVelocityFlags::LINEAR_VALID)
        {
            let v = velocity.linear_velocity;
            located.linear = [v.x, v.y, v.z];
        }
        if velocity
            .velocity_flags
            .contains(xr::SpaceVelocityFlags::ANGULAR_VALID)
        {
            let v = velocity.angular_velocity;
            located.angular = [v.x, v.y, v.z];
        }
        Ok(Some(located))
    }

    fn apply_haptic(
        &self,
        action: ActionHandle,
        subaction: PathHandle,
        feedback: &HapticFeedback,
    ) -> Result<()> {
        let AnyAction::Haptic(action) = self.action(action)? else {
            return Err(Error::runtime("haptic feedback on a non-haptic action"));
        };
        let vibration = xr::HapticVibration::new()
            .amplitude(feedback.amplitude.clamp(0.0, 1.0))
            .frequency(feedback.frequency)
            .duration(xr::Duration::from_nanos(feedback.duration_ns));
        action
            .apply_feedback(&self.session, raw_path(subaction), &vibration)
            .map_err(|e| Error::runtime(format!("OpenXR haptic feedback: {e:?}")))
    }

    fn request_exit(&self) -> Result<()> {
        self.session
            .request_exit()
            .map_err(|e| Error::runtime(format!("OpenXR request exit: {e:?}")))
    }

    fn runtime_kind(&self) -> RuntimeKind {
        self.kind
    }

    fn extension_enabled(&self, name: &str) -> bool {
        self.enabled_extensions.contains(name)
    }

    fn eye_gaze_supported(&self) -> bool {
        self.eye_gaze_supported
    }
}
