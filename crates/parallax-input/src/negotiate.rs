//! Profile capability negotiation.
//!
//! Decides which catalog profiles may receive suggested bindings on the
//! connected runtime. Unsupported profiles are simply skipped; nothing here
//! is an error.

use parallax_core::catalog::{
    ProfileId, EXT_HTC_HAND_INTERACTION, EXT_HTC_VIVE_FOCUS3_CONTROLLER, PROFILES,
};
use parallax_core::{ClientOptions, InteractionProfile};
use tracing::info;

use crate::runtime::{RuntimeInterface, RuntimeKind};

/// Whether one profile can be negotiated on this runtime.
///
/// Eye gaze additionally needs hardware support and the user not having
/// opted out. The HTC Wave runtime rejects suggested bindings for any
/// profile outside its own controller and hand extensions, so those are
/// the only two offered there.
pub fn is_profile_supported<R: RuntimeInterface + ?Sized>(
    runtime: &R,
    options: &ClientOptions,
    profile: &InteractionProfile,
) -> bool {
    if profile.is_eye_gaze() {
        return !options.disable_eye_tracking
            && runtime.eye_gaze_supported()
            && profile
                .extension_name
                .is_some_and(|ext| runtime.extension_enabled(ext));
    }
    if runtime.runtime_kind() == RuntimeKind::Wave {
        return match profile.extension_name {
            Some(ext @ (EXT_HTC_VIVE_FOCUS3_CONTROLLER | EXT_HTC_HAND_INTERACTION)) => {
                runtime.extension_enabled(ext)
            }
            _ => false,
        };
    }
    match profile.extension_name {
        None => true,
        Some(ext) => runtime.extension_enabled(ext),
    }
}

/// The catalog profiles negotiable on this runtime, in catalog order.
pub fn supported_profiles<R: RuntimeInterface + ?Sized>(
    runtime: &R,
    options: &ClientOptions,
) -> Vec<ProfileId> {
    let supported: Vec<ProfileId> = PROFILES
        .iter()
        .enumerate()
        .filter(|(_, profile)| is_profile_supported(runtime, options, profile))
        .map(|(i, _)| ProfileId(i))
        .collect();
    info!(
        count = supported.len(),
        total = PROFILES.len(),
        "negotiated interaction profiles"
    );
    supported
}
