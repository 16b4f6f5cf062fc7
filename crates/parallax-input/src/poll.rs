//! Per-tick input polling.
//!
//! Folds every mapping entry of the active profile into one
//! [`ControllerState`] per hand. Inactive actions contribute nothing. A
//! hand counts as enabled when its pose is tracked, an analog input
//! reports a value, or any button reads pressed; an active button that
//! merely reads false does not enable it.

use parallax_core::profile::entries;
use parallax_core::{ControllerState, Hand, InteractionProfile, Result};
use parallax_core::input::ButtonMask;

use crate::registry::ActionRegistry;
use crate::runtime::{RuntimeInterface, TrackedPaths};

/// One hand's poll result: the folded state plus which buttons flipped
/// this tick (consumed by the gesture detectors, not forwarded).
#[derive(Debug, Clone, Copy, Default)]
pub struct PolledHand {
    pub state: ControllerState,
    pub changed: ButtonMask,
}

/// Fold the active profile's mapping tables into one hand's state.
///
/// Call after `sync_actions`; panics if the action set was never attached.
pub fn poll_hand<R: RuntimeInterface>(
    runtime: &R,
    registry: &ActionRegistry,
    paths: &TrackedPaths,
    profile: &InteractionProfile,
    hand: Hand,
) -> Result<PolledHand> {
    assert!(registry.is_attached(), "poll before action set attach");

    let subaction = paths.hand_subaction(profile, hand);
    let mut state = ControllerState {
        is_hand: profile.is_hand_interaction(),
        ..ControllerState::default()
    };
    let mut changed: ButtonMask = 0;

    state.enabled = runtime.pose_active(registry.pose_action(), subaction)?;

    for entry in entries(&profile.bool_map[hand.index()]) {
        let Some(action) = registry.bool_action(entry.input) else {
            continue;
        };
        if let Some(value) = runtime.bool_state(action, subaction)? {
            if value.current {
                state.press(entry.input);
            }
            if value.changed {
                changed |= entry.input.bit();
            }
        }
    }

    for entry in entries(&profile.scalar_map[hand.index()]) {
        let Some(action) = registry.scalar_action(entry.input) else {
            continue;
        };
        if let Some(value) = runtime.scalar_state(action, subaction)? {
            state.enabled = true;
            *state.scalar_slot(entry.input) = value.current;
        }
    }

    for entry in entries(&profile.vector2_map[hand.index()]) {
        let Some(action) = registry.vector2_action(entry.input) else {
            continue;
        };
        if let Some(value) = runtime.vector2_state(action, subaction)? {
            state.enabled = true;
            state.trackpad_position = value.current;
        }
    }

    // Scalar-backed clicks: the runtime thresholds, we see a bool.
    for entry in entries(&profile.scalar_to_bool_map[hand.index()]) {
        let Some(action) = registry.scalar_to_bool_action(entry.input) else {
            continue;
        };
        if let Some(value) = runtime.bool_state(action, subaction)? {
            if value.current {
                state.press(entry.input);
            }
            if value.changed {
                changed |= entry.input.bit();
            }
        }
    }

    // Click-backed analog values: while pressed the value reads full scale.
    for entry in entries(&profile.bool_to_scalar_map[hand.index()]) {
        let Some(action) = registry.bool_to_scalar_action(entry.input) else {
            continue;
        };
        if let Some(value) = runtime.bool_state(action, subaction)? {
            if value.current {
                state.enabled = true;
                *state.scalar_slot(entry.input) = 1.0;
            }
        }
    }

    if state.buttons != 0 {
        state.enabled = true;
    }

    Ok(PolledHand { state, changed })
}

/// Poll both hands of the active profile.
pub fn poll_hands<R: RuntimeInterface>(
    runtime: &R,
    registry: &ActionRegistry,
    paths: &TrackedPaths,
    profile: &InteractionProfile,
) -> Result<[PolledHand; 2]> {
    Ok([
        poll_hand(runtime, registry, paths, profile, Hand::Left)?,
        poll_hand(runtime, registry, paths, profile, Hand::Right)?,
    ])
}
