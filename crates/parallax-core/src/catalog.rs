//! The static interaction-profile catalog.
//!
//! One entry per supported hardware family, plus the ambient eye-gaze
//! profile which is kept out of the selectable table. Mapping data is
//! reproduced from the device vendors' published interaction profiles;
//! the `htc/hand_interaction` scalar tables intentionally carry duplicate
//! semantic inputs bound to two different control paths (see the catalog
//! tests), matching the shipped binding set.

use crate::input::{mask_of, SemanticInput};
use crate::paths;
use crate::profile::{
    input_map, ButtonMap, InteractionProfile, PassthroughModeButtons, EMPTY_MAP, PROFILE_DEFAULTS,
};

pub const EXT_EYE_GAZE_INTERACTION: &str = "XR_EXT_eye_gaze_interaction";
pub const EXT_HTC_VIVE_COSMOS_CONTROLLER: &str = "XR_HTC_vive_cosmos_controller_interaction";
pub const EXT_HTC_VIVE_FOCUS3_CONTROLLER: &str = "XR_HTC_vive_focus3_controller_interaction";
pub const EXT_HTC_HAND_INTERACTION: &str = "XR_HTC_hand_interaction";
pub const EXT_MSFT_HAND_INTERACTION: &str = "XR_MSFT_hand_interaction";
pub const EXT_ML_ML2_CONTROLLER: &str = "XR_ML_ml2_controller_interaction";

const fn bm(input: SemanticInput, path: &'static str) -> ButtonMap {
    ButtonMap { input, path }
}

use SemanticInput::*;

/// System + A on the right toggles blend passthrough; System + B masks.
/// Shared by every profile that declares passthrough combos.
const PASSTHROUGH_SYSTEM_AB: PassthroughModeButtons = PassthroughModeButtons {
    blend_mode: [mask_of(&[SystemClick]), mask_of(&[AClick])],
    mask_mode: [mask_of(&[SystemClick]), mask_of(&[BClick])],
};

/// Ambient eye-gaze profile: input-only, no hand maps, never selectable.
pub const EYE_GAZE_PROFILE: InteractionProfile = InteractionProfile {
    path: "/interaction_profiles/ext/eye_gaze_interaction",
    extension_name: Some(EXT_EYE_GAZE_INTERACTION),
    quit_path: None,
    haptic_path: None,
    pose_path: None,
    eye_gaze_pose_path: Some(paths::GAZE_EXT_POSE),
    user_eyes_path: Some(paths::USER_EYES_EXT),
    ..PROFILE_DEFAULTS
};

/// All selectable interaction profiles.
pub static PROFILES: [InteractionProfile; 10] = [
    InteractionProfile {
        bool_map: [
            input_map(&[
                bm(SystemClick, paths::MENU_CLICK),
                bm(GripClick, paths::SELECT_CLICK),
            ]),
            input_map(&[
                bm(SystemClick, paths::MENU_CLICK),
                bm(GripClick, paths::SELECT_CLICK),
            ]),
        ],
        path: "/interaction_profiles/khr/simple_controller",
        ..PROFILE_DEFAULTS
    },
    InteractionProfile {
        bool_map: [
            input_map(&[
                bm(SystemClick, paths::MENU_CLICK),
                bm(XClick, paths::X_CLICK),
                bm(XTouch, paths::X_TOUCH),
                bm(YClick, paths::Y_CLICK),
                bm(YTouch, paths::Y_TOUCH),
                bm(JoystickClick, paths::THUMBSTICK_CLICK),
                bm(JoystickTouch, paths::THUMBSTICK_TOUCH),
                bm(TriggerTouch, paths::TRIGGER_TOUCH),
                bm(ThumbrestTouch, paths::THUMBREST_TOUCH),
            ]),
            input_map(&[
                bm(SystemClick, paths::SYSTEM_CLICK),
                bm(AClick, paths::A_CLICK),
                bm(ATouch, paths::A_TOUCH),
                bm(BClick, paths::B_CLICK),
                bm(BTouch, paths::B_TOUCH),
                bm(JoystickClick, paths::THUMBSTICK_CLICK),
                bm(JoystickTouch, paths::THUMBSTICK_TOUCH),
                bm(TriggerTouch, paths::TRIGGER_TOUCH),
                bm(ThumbrestTouch, paths::THUMBREST_TOUCH),
            ]),
        ],
        scalar_map: [
            input_map(&[
                bm(GripValue, paths::SQUEEZE_VALUE),
                bm(JoystickX, paths::THUMBSTICK_X),
                bm(JoystickY, paths::THUMBSTICK_Y),
                bm(TriggerValue, paths::TRIGGER_VALUE),
            ]),
            input_map(&[
                bm(GripValue, paths::SQUEEZE_VALUE),
                bm(JoystickX, paths::THUMBSTICK_X),
                bm(JoystickY, paths::THUMBSTICK_Y),
                bm(TriggerValue, paths::TRIGGER_VALUE),
            ]),
        ],
        scalar_to_bool_map: [
            input_map(&[
                bm(GripClick, paths::SQUEEZE_VALUE),
                bm(TriggerClick, paths::TRIGGER_VALUE),
            ]),
            input_map(&[
                bm(GripClick, paths::SQUEEZE_VALUE),
                bm(TriggerClick, paths::TRIGGER_VALUE),
            ]),
        ],
        path: "/interaction_profiles/oculus/touch_controller",
        quit_path: None,
        passthrough_modes: Some(PASSTHROUGH_SYSTEM_AB),
        ..PROFILE_DEFAULTS
    },
    InteractionProfile {
        bool_map: [
            input_map(&[
                bm(SystemClick, paths::MENU_CLICK),
                bm(JoystickClick, paths::TRACKPAD_CLICK),
                bm(JoystickTouch, paths::TRACKPAD_TOUCH),
                bm(TriggerClick, paths::TRIGGER_CLICK),
            ]),
            input_map(&[
                bm(SystemClick, paths::MENU_CLICK),
                bm(JoystickClick, paths::TRACKPAD_CLICK),
                bm(JoystickTouch, paths::TRACKPAD_TOUCH),
                bm(TriggerClick, paths::TRIGGER_CLICK),
            ]),
        ],
        scalar_map: [
            input_map(&[
                bm(TriggerValue, paths::TRIGGER_VALUE),
                bm(TrackpadX, paths::TRACKPAD_X),
                bm(TrackpadY, paths::TRACKPAD_Y),
            ]),
            input_map(&[
                bm(TriggerValue, paths::TRIGGER_VALUE),
                bm(TrackpadX, paths::TRACKPAD_X),
                bm(TrackpadY, paths::TRACKPAD_Y),
            ]),
        ],
        path: "/interaction_profiles/htc/vive_controller",
        ..PROFILE_DEFAULTS
    },
    InteractionProfile {
        bool_map: [
            input_map(&[
                bm(AClick, paths::A_CLICK),
                bm(ATouch, paths::A_TOUCH),
                bm(BClick, paths::B_CLICK),
                bm(BTouch, paths::B_TOUCH),
                bm(JoystickClick, paths::THUMBSTICK_CLICK),
                bm(JoystickTouch, paths::THUMBSTICK_TOUCH),
                bm(TriggerClick, paths::TRIGGER_CLICK),
                bm(TriggerTouch, paths::TRIGGER_TOUCH),
                bm(TrackpadTouch, paths::TRACKPAD_TOUCH),
            ]),
            input_map(&[
                bm(AClick, paths::A_CLICK),
                bm(ATouch, paths::A_TOUCH),
                bm(BClick, paths::B_CLICK),
                bm(BTouch, paths::B_TOUCH),
                bm(JoystickClick, paths::THUMBSTICK_CLICK),
                bm(JoystickTouch, paths::THUMBSTICK_TOUCH),
                bm(TriggerClick, paths::TRIGGER_CLICK),
                bm(TriggerTouch, paths::TRIGGER_TOUCH),
                bm(TrackpadTouch, paths::TRACKPAD_TOUCH),
            ]),
        ],
        scalar_map: [
            input_map(&[
                bm(GripValue, paths::SQUEEZE_VALUE),
                bm(JoystickX, paths::THUMBSTICK_X),
                bm(JoystickY, paths::THUMBSTICK_Y),
                bm(TriggerValue, paths::TRIGGER_VALUE),
                bm(TrackpadX, paths::TRACKPAD_X),
                bm(TrackpadY, paths::TRACKPAD_Y),
            ]),
            input_map(&[
                bm(GripValue, paths::SQUEEZE_VALUE),
                bm(JoystickX, paths::THUMBSTICK_X),
                bm(JoystickY, paths::THUMBSTICK_Y),
                bm(TriggerValue, paths::TRIGGER_VALUE),
                bm(TrackpadX, paths::TRACKPAD_X),
                bm(TrackpadY, paths::TRACKPAD_Y),
            ]),
        ],
        path: "/interaction_profiles/valve/index_controller",
        quit_path: Some(paths::THUMBSTICK_CLICK),
        ..PROFILE_DEFAULTS
    },
    InteractionProfile {
        bool_map: [
            input_map(&[
                bm(ApplicationMenuClick, paths::MENU_CLICK),
                bm(GripClick, paths::SQUEEZE_CLICK),
                bm(JoystickClick, paths::THUMBSTICK_CLICK),
                bm(TrackpadClick, paths::TRACKPAD_CLICK),
                bm(TrackpadTouch, paths::TRACKPAD_TOUCH),
            ]),
            input_map(&[
                bm(SystemClick, paths::MENU_CLICK),
                bm(GripClick, paths::SQUEEZE_CLICK),
                bm(JoystickClick, paths::THUMBSTICK_CLICK),
                bm(TrackpadClick, paths::TRACKPAD_CLICK),
                bm(TrackpadTouch, paths::TRACKPAD_TOUCH),
            ]),
        ],
        scalar_map: [
            input_map(&[
                bm(JoystickX, paths::THUMBSTICK_X),
                bm(JoystickY, paths::THUMBSTICK_Y),
                bm(TriggerValue, paths::TRIGGER_VALUE),
            ]),
            input_map(&[
                bm(JoystickX, paths::THUMBSTICK_X),
                bm(JoystickY, paths::THUMBSTICK_Y),
                bm(TriggerValue, paths::TRIGGER_VALUE),
            ]),
        ],
        bool_to_scalar_map: [
            input_map(&[bm(GripValue, paths::SQUEEZE_CLICK)]),
            input_map(&[bm(GripValue, paths::SQUEEZE_CLICK)]),
        ],
        path: "/interaction_profiles/microsoft/motion_controller",
        ..PROFILE_DEFAULTS
    },
    InteractionProfile {
        bool_map: [
            input_map(&[
                bm(SystemClick, paths::MENU_CLICK),
                bm(GripClick, paths::SQUEEZE_CLICK),
                bm(XClick, paths::X_CLICK),
                bm(YClick, paths::Y_CLICK),
                bm(JoystickClick, paths::THUMBSTICK_CLICK),
                bm(JoystickTouch, paths::THUMBSTICK_TOUCH),
                bm(TriggerClick, paths::TRIGGER_CLICK),
            ]),
            input_map(&[
                bm(GripClick, paths::SQUEEZE_CLICK),
                bm(AClick, paths::A_CLICK),
                bm(BClick, paths::B_CLICK),
                bm(JoystickClick, paths::THUMBSTICK_CLICK),
                bm(JoystickTouch, paths::THUMBSTICK_TOUCH),
                bm(TriggerClick, paths::TRIGGER_CLICK),
            ]),
        ],
        scalar_map: [
            input_map(&[
                bm(JoystickX, paths::THUMBSTICK_X),
                bm(JoystickY, paths::THUMBSTICK_Y),
                bm(TriggerValue, paths::TRIGGER_VALUE),
            ]),
            input_map(&[
                bm(JoystickX, paths::THUMBSTICK_X),
                bm(JoystickY, paths::THUMBSTICK_Y),
                bm(TriggerValue, paths::TRIGGER_VALUE),
            ]),
        ],
        path: "/interaction_profiles/htc/vive_cosmos_controller",
        extension_name: Some(EXT_HTC_VIVE_COSMOS_CONTROLLER),
        ..PROFILE_DEFAULTS
    },
    InteractionProfile {
        bool_map: [
            input_map(&[
                bm(SystemClick, paths::MENU_CLICK),
                bm(GripClick, paths::SQUEEZE_CLICK),
                bm(GripTouch, paths::SQUEEZE_TOUCH),
                bm(XClick, paths::X_CLICK),
                bm(YClick, paths::Y_CLICK),
                bm(JoystickClick, paths::THUMBSTICK_CLICK),
                bm(JoystickTouch, paths::THUMBSTICK_TOUCH),
                bm(TriggerClick, paths::TRIGGER_CLICK),
                bm(TriggerTouch, paths::TRIGGER_TOUCH),
                bm(ThumbrestTouch, paths::THUMBREST_TOUCH),
            ]),
            input_map(&[
                bm(GripClick, paths::SQUEEZE_CLICK),
                bm(GripTouch, paths::SQUEEZE_TOUCH),
                bm(AClick, paths::A_CLICK),
                bm(BClick, paths::B_CLICK),
                bm(JoystickClick, paths::THUMBSTICK_CLICK),
                bm(JoystickTouch, paths::THUMBSTICK_TOUCH),
                bm(TriggerClick, paths::TRIGGER_CLICK),
                bm(TriggerTouch, paths::TRIGGER_TOUCH),
                bm(ThumbrestTouch, paths::THUMBREST_TOUCH),
            ]),
        ],
        scalar_map: [
            input_map(&[
                bm(GripValue, paths::SQUEEZE_VALUE),
                bm(JoystickX, paths::THUMBSTICK_X),
                bm(JoystickY, paths::THUMBSTICK_Y),
                bm(TriggerValue, paths::TRIGGER_VALUE),
            ]),
            input_map(&[
                bm(GripValue, paths::SQUEEZE_VALUE),
                bm(JoystickX, paths::THUMBSTICK_X),
                bm(JoystickY, paths::THUMBSTICK_Y),
                bm(TriggerValue, paths::TRIGGER_VALUE),
            ]),
        ],
        path: "/interaction_profiles/htc/vive_focus3_controller",
        extension_name: Some(EXT_HTC_VIVE_FOCUS3_CONTROLLER),
        quit_path: None,
        passthrough_modes: Some(PASSTHROUGH_SYSTEM_AB),
        ..PROFILE_DEFAULTS
    },
    // Both scalar tables deliberately bind the same semantic input to two
    // control paths; see test_hand_interaction_duplicate_scalar_entries.
    InteractionProfile {
        scalar_map: [
            input_map(&[
                bm(GripValue, paths::SELECT_VALUE),
                bm(GripValue, paths::SQUEEZE_VALUE),
            ]),
            input_map(&[
                bm(TriggerValue, paths::SELECT_VALUE),
                bm(TriggerValue, paths::SQUEEZE_VALUE),
            ]),
        ],
        path: "/interaction_profiles/htc/hand_interaction",
        extension_name: Some(EXT_HTC_HAND_INTERACTION),
        quit_path: None,
        haptic_path: None,
        user_hand_paths: paths::USER_HAND_HTC_PATHS,
        ..PROFILE_DEFAULTS
    },
    InteractionProfile {
        bool_map: [
            input_map(&[
                bm(GripClick, paths::SELECT_VALUE),
                bm(GripClick, paths::SQUEEZE_VALUE),
            ]),
            input_map(&[
                bm(TriggerClick, paths::SELECT_VALUE),
                bm(TriggerClick, paths::SQUEEZE_VALUE),
            ]),
        ],
        scalar_map: [
            input_map(&[
                bm(GripValue, paths::SELECT_VALUE),
                bm(GripValue, paths::SQUEEZE_VALUE),
            ]),
            input_map(&[
                bm(TriggerValue, paths::SELECT_VALUE),
                bm(TriggerValue, paths::SQUEEZE_VALUE),
            ]),
        ],
        path: "/interaction_profiles/microsoft/hand_interaction",
        extension_name: Some(EXT_MSFT_HAND_INTERACTION),
        quit_path: None,
        haptic_path: None,
        ..PROFILE_DEFAULTS
    },
    InteractionProfile {
        bool_map: [
            EMPTY_MAP,
            input_map(&[
                bm(SystemClick, paths::MENU_CLICK),
                bm(GripClick, paths::SHOULDER_CLICK),
                bm(TriggerClick, paths::TRIGGER_CLICK),
                bm(TrackpadClick, paths::TRACKPAD_CLICK),
                bm(TrackpadTouch, paths::TRACKPAD_TOUCH),
            ]),
        ],
        scalar_map: [
            EMPTY_MAP,
            input_map(&[
                bm(TriggerValue, paths::TRIGGER_VALUE),
                bm(TrackpadX, paths::TRACKPAD_X),
                bm(TrackpadY, paths::TRACKPAD_Y),
            ]),
        ],
        path: "/interaction_profiles/ml/ml2_controller",
        extension_name: Some(EXT_ML_ML2_CONTROLLER),
        quit_path: None,
        ..PROFILE_DEFAULTS
    },
];

/// Index of a selectable profile in [`PROFILES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProfileId(pub usize);

impl ProfileId {
    #[inline]
    pub fn get(self) -> &'static InteractionProfile {
        &PROFILES[self.0]
    }
}

/// Find a selectable profile by its interaction-profile path.
pub fn find_by_path(path: &str) -> Option<ProfileId> {
    PROFILES
        .iter()
        .position(|p| p.path == path)
        .map(ProfileId)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{
        find_action, BOOL_ACTIONS, BOOL_TO_SCALAR_ACTIONS, SCALAR_ACTIONS, SCALAR_TO_BOOL_ACTIONS,
        VECTOR2_ACTIONS,
    };
    use crate::profile::{entries, HandInputMap};

    fn check_registered(profile: &InteractionProfile, maps: &HandInputMap, table: &'static [crate::input::ActionName]) {
        for hand_map in maps {
            for entry in entries(hand_map) {
                assert!(
                    find_action(table, entry.input).is_some(),
                    "{}: {:?} has no registered action of the required kind",
                    profile.path,
                    entry.input
                );
            }
        }
    }

    #[test]
    fn test_catalog_self_consistency() {
        for profile in &PROFILES {
            check_registered(profile, &profile.bool_map, BOOL_ACTIONS);
            check_registered(profile, &profile.scalar_map, SCALAR_ACTIONS);
            check_registered(profile, &profile.vector2_map, VECTOR2_ACTIONS);
            check_registered(profile, &profile.bool_to_scalar_map, BOOL_TO_SCALAR_ACTIONS);
            check_registered(profile, &profile.scalar_to_bool_map, SCALAR_TO_BOOL_ACTIONS);
        }
    }

    #[test]
    fn test_every_profile_declares_controls() {
        for profile in PROFILES.iter().chain([&EYE_GAZE_PROFILE]) {
            assert!(profile.declares_controls(), "{} is empty", profile.path);
        }
    }

    #[test]
    fn test_is_core_iff_no_extension() {
        for profile in PROFILES.iter().chain([&EYE_GAZE_PROFILE]) {
            assert_eq!(profile.is_core(), profile.extension_name.is_none());
        }
    }

    #[test]
    fn test_eye_gaze_profile_is_input_only() {
        assert!(EYE_GAZE_PROFILE.is_eye_gaze());
        assert!(EYE_GAZE_PROFILE.pose_path.is_none());
        assert!(EYE_GAZE_PROFILE.haptic_path.is_none());
        assert!(EYE_GAZE_PROFILE.quit_path.is_none());
        for hand in 0..2 {
            assert_eq!(entries(&EYE_GAZE_PROFILE.bool_map[hand]).count(), 0);
            assert_eq!(entries(&EYE_GAZE_PROFILE.scalar_map[hand]).count(), 0);
        }
        // Never selectable: it must not appear in the catalog table.
        assert!(find_by_path(EYE_GAZE_PROFILE.path).is_none());
    }

    /// No selectable profile is eye-gaze flavored, and every profile with
    /// passthrough combos names only boolean-map inputs in its masks.
    #[test]
    fn test_passthrough_masks_refer_to_bool_entries() {
        for profile in &PROFILES {
            assert!(!profile.is_eye_gaze());
            let Some(modes) = profile.passthrough_modes else {
                continue;
            };
            for masks in [modes.blend_mode, modes.mask_mode] {
                for (hand, mask) in masks.iter().enumerate() {
                    for input in crate::input::inputs_in(*mask) {
                        assert!(
                            entries(&profile.bool_map[hand]).any(|e| e.input == input),
                            "{}: passthrough mask input {:?} missing from hand {} bool map",
                            profile.path,
                            input,
                            hand
                        );
                    }
                }
            }
        }
    }

    /// The duplicate entries are intentional (shipped binding data): the
    /// same semantic input is bound to both the select and squeeze paths
    /// for one hand. An accidental dedup would break here.
    #[test]
    fn test_hand_interaction_duplicate_scalar_entries() {
        let profile = find_by_path("/interaction_profiles/htc/hand_interaction")
            .expect("htc hand interaction in catalog")
            .get();
        let left: Vec<_> = entries(&profile.scalar_map[0]).collect();
        assert_eq!(left.len(), 2);
        assert_eq!(left[0].input, SemanticInput::GripValue);
        assert_eq!(left[1].input, SemanticInput::GripValue);
        assert_ne!(left[0].path, left[1].path);

        let right: Vec<_> = entries(&profile.scalar_map[1]).collect();
        assert_eq!(right.len(), 2);
        assert_eq!(right[0].input, SemanticInput::TriggerValue);
        assert_eq!(right[1].input, SemanticInput::TriggerValue);
    }

    /// Other than the documented hand-interaction duplicates, no semantic
    /// input appears twice for one hand within one table.
    #[test]
    fn test_no_unexpected_duplicates() {
        for profile in &PROFILES {
            if profile.is_hand_interaction() {
                continue;
            }
            for maps in [
                &profile.bool_map,
                &profile.scalar_map,
                &profile.vector2_map,
                &profile.bool_to_scalar_map,
                &profile.scalar_to_bool_map,
            ] {
                for hand_map in maps.iter() {
                    let list: Vec<_> = entries(hand_map).map(|e| e.input).collect();
                    for (i, input) in list.iter().enumerate() {
                        assert!(
                            !list[i + 1..].contains(input),
                            "{}: duplicate {:?}",
                            profile.path,
                            input
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_find_by_path() {
        let id = find_by_path("/interaction_profiles/khr/simple_controller").unwrap();
        assert!(id.get().is_core());
        assert!(find_by_path("/interaction_profiles/nonexistent").is_none());
    }
}
