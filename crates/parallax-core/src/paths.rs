//! Hardware control path fragments and top-level user paths.
//!
//! Input/output fragments are relative to a per-hand user path; the full
//! binding path is `<user path>/input/<fragment>` (or `/output/` for
//! haptics).

pub const USER_HAND_LEFT: &str = "/user/hand/left";
pub const USER_HAND_RIGHT: &str = "/user/hand/right";
pub const USER_HAND_LEFT_HTC: &str = "/user/hand_htc/left";
pub const USER_HAND_RIGHT_HTC: &str = "/user/hand_htc/right";
pub const USER_EYES_EXT: &str = "/user/eyes_ext";

pub const USER_HAND_PATHS: [&str; 2] = [USER_HAND_LEFT, USER_HAND_RIGHT];
pub const USER_HAND_HTC_PATHS: [&str; 2] = [USER_HAND_LEFT_HTC, USER_HAND_RIGHT_HTC];

pub const SELECT_CLICK: &str = "select/click";
pub const SELECT_VALUE: &str = "select/value";
pub const SQUEEZE_VALUE: &str = "squeeze/value";
pub const SQUEEZE_CLICK: &str = "squeeze/click";
pub const SQUEEZE_TOUCH: &str = "squeeze/touch";
pub const GRIP_POSE: &str = "grip/pose";
pub const AIM_POSE: &str = "aim/pose";
pub const HAPTIC: &str = "haptic";
pub const SYSTEM_CLICK: &str = "system/click";
pub const MENU_CLICK: &str = "menu/click";
pub const BACK_CLICK: &str = "back/click";
pub const A_CLICK: &str = "a/click";
pub const A_TOUCH: &str = "a/touch";
pub const B_CLICK: &str = "b/click";
pub const B_TOUCH: &str = "b/touch";
pub const X_CLICK: &str = "x/click";
pub const X_TOUCH: &str = "x/touch";
pub const Y_CLICK: &str = "y/click";
pub const Y_TOUCH: &str = "y/touch";
pub const TRIGGER_CLICK: &str = "trigger/click";
pub const TRIGGER_TOUCH: &str = "trigger/touch";
pub const TRIGGER_VALUE: &str = "trigger/value";
pub const THUMBSTICK_POS: &str = "thumbstick";
pub const THUMBSTICK_X: &str = "thumbstick/x";
pub const THUMBSTICK_Y: &str = "thumbstick/y";
pub const THUMBSTICK_CLICK: &str = "thumbstick/click";
pub const THUMBSTICK_TOUCH: &str = "thumbstick/touch";
pub const THUMBREST_TOUCH: &str = "thumbrest/touch";
pub const TRACKPAD_X: &str = "trackpad/x";
pub const TRACKPAD_Y: &str = "trackpad/y";
pub const TRACKPAD_CLICK: &str = "trackpad/click";
pub const TRACKPAD_TOUCH: &str = "trackpad/touch";
pub const SHOULDER_CLICK: &str = "shoulder/click";
pub const GAZE_EXT_POSE: &str = "gaze_ext/pose";
