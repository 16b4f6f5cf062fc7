//! Interaction-profile data model.
//!
//! A profile describes how one hardware family maps physical controls onto
//! semantic inputs. Mapping tables are fixed-capacity, sentinel-terminated
//! arrays so the catalog can live entirely in `const` data; [`entries`]
//! stops at the first empty slot.

use crate::input::{ButtonMask, SemanticInput};
use crate::paths;

/// Maximum entries per mapping table, including unused trailing slots.
pub const INPUT_MAP_CAPACITY: usize = 12;

/// One (semantic input, hardware control path fragment) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonMap {
    pub input: SemanticInput,
    pub path: &'static str,
}

/// Fixed-capacity mapping table; `None` terminates the useful entries.
pub type InputMap = [Option<ButtonMap>; INPUT_MAP_CAPACITY];

/// Per-hand pair of mapping tables (index 0 = left, 1 = right).
pub type HandInputMap = [InputMap; 2];

pub const EMPTY_MAP: InputMap = [None; INPUT_MAP_CAPACITY];
pub const EMPTY_HAND_MAP: HandInputMap = [EMPTY_MAP, EMPTY_MAP];

/// Iterate a table's entries up to the terminating sentinel.
pub fn entries(map: &InputMap) -> impl Iterator<Item = &ButtonMap> {
    map.iter().map_while(|slot| slot.as_ref())
}

/// Build a sentinel-padded table from a short entry list.
///
/// Panics at compile time if the list exceeds [`INPUT_MAP_CAPACITY`].
pub const fn input_map(list: &[ButtonMap]) -> InputMap {
    let mut out: InputMap = EMPTY_MAP;
    let mut i = 0;
    while i < list.len() {
        out[i] = Some(list[i]);
        i += 1;
    }
    out
}

/// Two-hand button combos that toggle passthrough compositing modes.
///
/// Masks refer to entries in the owning profile's boolean map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassthroughModeButtons {
    pub blend_mode: [ButtonMask; 2],
    pub mask_mode: [ButtonMask; 2],
}

/// One hardware family's declared mapping from semantic inputs to its
/// physical controls, plus the per-profile binding policy knobs.
#[derive(Debug, Clone, Copy)]
pub struct InteractionProfile {
    pub bool_map: HandInputMap,
    pub scalar_map: HandInputMap,
    pub vector2_map: HandInputMap,
    pub bool_to_scalar_map: HandInputMap,
    pub scalar_to_bool_map: HandInputMap,

    /// Interaction profile path, e.g. `/interaction_profiles/khr/simple_controller`.
    pub path: &'static str,
    /// Gating extension; `None` means the profile needs no extension.
    pub extension_name: Option<&'static str>,
    /// Control driving the hold-to-quit gesture (left hand), if any.
    pub quit_path: Option<&'static str>,
    /// Haptic output fragment, if the hardware has a vibration motor.
    pub haptic_path: Option<&'static str>,
    /// Pose input fragment for the per-hand aim pose.
    pub pose_path: Option<&'static str>,
    /// Gaze pose fragment; set only on the ambient eye-gaze profile, which
    /// has no hand maps and is never a selectable active profile.
    pub eye_gaze_pose_path: Option<&'static str>,

    pub user_hand_paths: [&'static str; 2],
    pub user_eyes_path: Option<&'static str>,

    pub passthrough_modes: Option<PassthroughModeButtons>,
}

/// Baseline profile for struct-update construction in the catalog: empty
/// maps, standard hand paths, menu-click quit, aim pose, haptic output.
pub const PROFILE_DEFAULTS: InteractionProfile = InteractionProfile {
    bool_map: EMPTY_HAND_MAP,
    scalar_map: EMPTY_HAND_MAP,
    vector2_map: EMPTY_HAND_MAP,
    bool_to_scalar_map: EMPTY_HAND_MAP,
    scalar_to_bool_map: EMPTY_HAND_MAP,
    path: "",
    extension_name: None,
    quit_path: Some(paths::MENU_CLICK),
    haptic_path: Some(paths::HAPTIC),
    pose_path: Some(paths::AIM_POSE),
    eye_gaze_pose_path: None,
    user_hand_paths: paths::USER_HAND_PATHS,
    user_eyes_path: None,
    passthrough_modes: None,
};

impl InteractionProfile {
    /// A profile is "core" iff it needs no gating extension.
    #[inline]
    pub const fn is_core(&self) -> bool {
        self.extension_name.is_none()
    }

    /// Ambient input-only profile driving gaze, never hand controls.
    #[inline]
    pub const fn is_eye_gaze(&self) -> bool {
        self.eye_gaze_pose_path.is_some()
    }

    /// True for bare-hand interaction profiles (no physical controller).
    pub fn is_hand_interaction(&self) -> bool {
        self.path.ends_with("hand_interaction")
    }

    /// Whether the profile declares any bindable control at all.
    ///
    /// A catalog entry that returns false is malformed: every hand
    /// profile carries at least a pose, and the eye-gaze profile a gaze
    /// pose.
    pub fn declares_controls(&self) -> bool {
        self.pose_path.is_some()
            || self.haptic_path.is_some()
            || self.quit_path.is_some()
            || self.eye_gaze_pose_path.is_some()
            || [
                &self.bool_map,
                &self.scalar_map,
                &self.vector2_map,
                &self.bool_to_scalar_map,
                &self.scalar_to_bool_map,
            ]
            .iter()
            .any(|maps| maps.iter().any(|map| entries(map).next().is_some()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_stop_at_sentinel() {
        let map = input_map(&[
            ButtonMap {
                input: SemanticInput::AClick,
                path: paths::A_CLICK,
            },
            ButtonMap {
                input: SemanticInput::BClick,
                path: paths::B_CLICK,
            },
        ]);
        let collected: Vec<_> = entries(&map).collect();
        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0].input, SemanticInput::AClick);
        assert_eq!(collected[1].input, SemanticInput::BClick);
    }

    #[test]
    fn test_empty_map_has_no_entries() {
        assert_eq!(entries(&EMPTY_MAP).count(), 0);
    }
}
