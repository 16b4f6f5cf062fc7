//! The device-runtime seam.
//!
//! Everything in this crate talks to the device runtime through
//! [`RuntimeInterface`], so the negotiation, registry, and polling logic can
//! run against a fake in tests and against the OpenXR adapter in production.
//!
//! Conventions at this seam:
//! - "not currently active" observations come back as `Ok(None)`, never as
//!   an error;
//! - unexpected runtime failures come back as [`Error::Runtime`] and are
//!   treated as session-fatal by callers;
//! - handles are opaque; [`PathHandle::NULL`] means "unresolved" for paths
//!   and "no subaction filter" when passed as a subaction.

use parallax_core::{Error, Hand, PoseVelocity, Result};

/// Opaque semantic-path handle as interned by the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathHandle(pub u64);

impl PathHandle {
    /// The null path: an unresolved path, or "no subaction filter".
    pub const NULL: PathHandle = PathHandle(0);
}

/// Opaque handle to a created action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionHandle(pub u64);

/// Opaque handle to an action space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpaceHandle(pub u64);

/// The value type an action carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Bool,
    Scalar,
    Vector2,
    Pose,
    Haptic,
}

/// State of a boolean action for one subaction path.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolState {
    pub current: bool,
    /// True iff the value flipped since the previous sync.
    pub changed: bool,
}

/// State of a scalar action for one subaction path.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarState {
    pub current: f32,
}

/// State of a 2-axis action for one subaction path.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector2State {
    pub current: [f32; 2],
}

/// One suggested binding: an action tied to a resolved hardware path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub action: ActionHandle,
    pub path: PathHandle,
}

/// A haptic vibration request for one hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HapticFeedback {
    pub hand: Hand,
    pub duration_ns: i64,
    pub frequency: f32,
    pub amplitude: f32,
}

/// Vendor family of the connected runtime, derived from its reported name.
///
/// Only [`RuntimeKind::Wave`] changes behavior (profile negotiation); the
/// rest exist so logs and platform hooks can tell the families apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeKind {
    Generic,
    Oculus,
    SteamVr,
    Wave,
}

impl RuntimeKind {
    /// Classify a runtime by the name it reports for itself.
    pub fn from_runtime_name(name: &str) -> Self {
        let lower = name.to_ascii_lowercase();
        if lower.contains("wave") {
            RuntimeKind::Wave
        } else if lower.contains("oculus") {
            RuntimeKind::Oculus
        } else if lower.contains("steamvr") {
            RuntimeKind::SteamVr
        } else {
            RuntimeKind::Generic
        }
    }
}

/// What the crate needs from a device runtime.
///
/// One action set is implied; `attach_action_set` finalizes it, after which
/// action creation is a usage error on the implementor's side.
pub trait RuntimeInterface {
    /// Intern a semantic path string.
    fn string_to_path(&self, path: &str) -> Result<PathHandle>;

    /// Create an action in the implied action set.
    fn create_action(
        &mut self,
        name: &str,
        localized: &str,
        kind: ActionKind,
        subaction_paths: &[PathHandle],
    ) -> Result<ActionHandle>;

    /// Create a space tracking a pose action, filtered by `subaction`.
    fn create_action_space(
        &mut self,
        action: ActionHandle,
        subaction: PathHandle,
    ) -> Result<SpaceHandle>;

    /// Suggest bindings for one interaction profile path.
    fn suggest_bindings(&mut self, profile_path: &str, bindings: &[Binding]) -> Result<()>;

    /// Attach the implied action set to the session. Once only.
    fn attach_action_set(&mut self) -> Result<()>;

    /// Sync action state for this tick.
    fn sync_actions(&mut self) -> Result<()>;

    fn bool_state(
        &self,
        action: ActionHandle,
        subaction: PathHandle,
    ) -> Result<Option<BoolState>>;

    fn scalar_state(
        &self,
        action: ActionHandle,
        subaction: PathHandle,
    ) -> Result<Option<ScalarState>>;

    fn vector2_state(
        &self,
        action: ActionHandle,
        subaction: PathHandle,
    ) -> Result<Option<Vector2State>>;

    /// Whether a pose action is currently receiving data.
    fn pose_active(&self, action: ActionHandle, subaction: PathHandle) -> Result<bool>;

    /// The interaction profile currently bound for a top-level user path,
    /// or `None` when nothing is bound yet.
    fn current_profile(&self, top_level: PathHandle) -> Result<Option<String>>;

    /// Locate a space at a given time; `None` while the space is untracked.
    fn locate_space(&self, space: SpaceHandle, time_ns: i64) -> Result<Option<PoseVelocity>>;

    /// Fire a haptic pulse on an output action.
    fn apply_haptic(
        &self,
        action: ActionHandle,
        subaction: PathHandle,
        feedback: &HapticFeedback,
    ) -> Result<()>;

    /// Ask the runtime to wind the session down.
    fn request_exit(&self) -> Result<()>;

    /// Human-readable names of the sources bound to an action, for logs.
    /// Implementors without the query just return nothing.
    fn bound_source_names(&self, _action: ActionHandle) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    fn runtime_kind(&self) -> RuntimeKind;

    /// Whether an instance extension was enabled at startup.
    fn extension_enabled(&self, name: &str) -> bool;

    /// Whether the system hardware reports eye-gaze tracking support.
    fn eye_gaze_supported(&self) -> bool;
}

/// The well-known top-level paths, resolved once at startup.
#[derive(Debug, Clone, Copy)]
pub struct TrackedPaths {
    pub user_hand: [PathHandle; 2],
    pub user_hand_htc: [PathHandle; 2],
    pub user_eyes: PathHandle,
}

impl TrackedPaths {
    /// Resolve every well-known path, failing fast if any comes back null.
    pub fn resolve<R: RuntimeInterface + ?Sized>(runtime: &R) -> Result<Self> {
        use parallax_core::paths;

        let resolved = Self {
            user_hand: [
                runtime.string_to_path(paths::USER_HAND_LEFT)?,
                runtime.string_to_path(paths::USER_HAND_RIGHT)?,
            ],
            user_hand_htc: [
                runtime.string_to_path(paths::USER_HAND_LEFT_HTC)?,
                runtime.string_to_path(paths::USER_HAND_RIGHT_HTC)?,
            ],
            user_eyes: runtime.string_to_path(paths::USER_EYES_EXT)?,
        };
        if !resolved.is_resolved() {
            return Err(Error::runtime("a well-known user path resolved to null"));
        }
        Ok(resolved)
    }

    pub fn is_resolved(&self) -> bool {
        self.user_hand
            .iter()
            .chain(self.user_hand_htc.iter())
            .chain([&self.user_eyes])
            .all(|&p| p != PathHandle::NULL)
    }

    /// The subaction handle for one of a profile's hands.
    pub fn hand_subaction(
        &self,
        profile: &parallax_core::InteractionProfile,
        hand: Hand,
    ) -> PathHandle {
        if profile.user_hand_paths == parallax_core::paths::USER_HAND_HTC_PATHS {
            self.user_hand_htc[hand.index()]
        } else {
            self.user_hand[hand.index()]
        }
    }
}
