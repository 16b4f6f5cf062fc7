//! Per-hand controller state produced by the input poll.

use crate::input::{ButtonMask, SemanticInput};

/// Finger bones reported per hand when hand tracking is available.
pub const HAND_BONE_COUNT: usize = 19;

pub const IDENTITY_ORIENTATION: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Position + orientation sample (orientation as an x/y/z/w quaternion).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub orientation: [f32; 4],
    pub position: [f32; 3],
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            orientation: IDENTITY_ORIENTATION,
            position: [0.0; 3],
        }
    }
}

/// A pose plus its linear and angular velocity.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PoseVelocity {
    pub pose: Pose,
    pub linear: [f32; 3],
    pub angular: [f32; 3],
}

/// Snapshot of one hand's input state for a single tick.
///
/// Re-created as the disabled identity value at the start of every poll
/// tick and mutated in place; nothing but the default bone pose survives
/// from one tick to the next.
#[derive(Debug, Clone, Copy)]
pub struct ControllerState {
    pub enabled: bool,
    pub is_hand: bool,
    pub buttons: ButtonMask,
    pub trackpad_position: [f32; 2],
    pub trigger_value: f32,
    pub grip_value: f32,
    pub pose: Pose,
    pub linear_velocity: [f32; 3],
    pub angular_velocity: [f32; 3],
    pub bone_rotations: [[f32; 4]; HAND_BONE_COUNT],
    pub bone_positions: [[f32; 3]; HAND_BONE_COUNT],
    pub bone_root: Pose,
    pub hand_confidence: u32,
}

impl Default for ControllerState {
    fn default() -> Self {
        Self {
            enabled: false,
            is_hand: false,
            buttons: 0,
            trackpad_position: [0.0; 2],
            trigger_value: 0.0,
            grip_value: 0.0,
            pose: Pose::default(),
            linear_velocity: [0.0; 3],
            angular_velocity: [0.0; 3],
            bone_rotations: [IDENTITY_ORIENTATION; HAND_BONE_COUNT],
            bone_positions: [[0.0; 3]; HAND_BONE_COUNT],
            bone_root: Pose::default(),
            hand_confidence: 0,
        }
    }
}

impl ControllerState {
    /// Record a pressed boolean observation.
    #[inline]
    pub fn press(&mut self, input: SemanticInput) {
        self.buttons |= input.bit();
    }

    #[inline]
    pub fn is_pressed(&self, input: SemanticInput) -> bool {
        self.buttons & input.bit() != 0
    }

    /// The scalar field a given semantic input writes into.
    ///
    /// Joystick and trackpad axes share one 2-axis field; anything that is
    /// not an axis or the trigger lands on grip, matching the shipped
    /// fold-in behavior.
    pub fn scalar_slot(&mut self, input: SemanticInput) -> &mut f32 {
        match input {
            SemanticInput::JoystickX | SemanticInput::TrackpadX => &mut self.trackpad_position[0],
            SemanticInput::JoystickY | SemanticInput::TrackpadY => &mut self.trackpad_position[1],
            SemanticInput::TriggerValue => &mut self.trigger_value,
            _ => &mut self.grip_value,
        }
    }
}
