//! Semantic input identifiers and per-kind action name tables.
//!
//! A [`SemanticInput`] names a logical control independently of which
//! hardware family is connected; the interaction-profile catalog maps each
//! one onto a physical control path. Boolean observations fold into a
//! [`ButtonMask`] with one bit per input.

/// Button bitmask with one bit per [`SemanticInput`].
pub type ButtonMask = u64;

/// A hardware-independent name for a logical control.
///
/// The set is the superset of everything the profile catalog references.
/// Bit positions are process-internal; nothing here crosses a wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum SemanticInput {
    SystemClick,
    ApplicationMenuClick,
    GripClick,
    GripValue,
    GripTouch,
    AClick,
    ATouch,
    BClick,
    BTouch,
    XClick,
    XTouch,
    YClick,
    YTouch,
    JoystickClick,
    JoystickX,
    JoystickY,
    JoystickTouch,
    BackClick,
    TriggerClick,
    TriggerValue,
    TriggerTouch,
    TrackpadX,
    TrackpadY,
    TrackpadClick,
    TrackpadTouch,
    ThumbrestTouch,
}

impl SemanticInput {
    pub const COUNT: usize = 26;

    pub const ALL: [SemanticInput; Self::COUNT] = [
        SemanticInput::SystemClick,
        SemanticInput::ApplicationMenuClick,
        SemanticInput::GripClick,
        SemanticInput::GripValue,
        SemanticInput::GripTouch,
        SemanticInput::AClick,
        SemanticInput::ATouch,
        SemanticInput::BClick,
        SemanticInput::BTouch,
        SemanticInput::XClick,
        SemanticInput::XTouch,
        SemanticInput::YClick,
        SemanticInput::YTouch,
        SemanticInput::JoystickClick,
        SemanticInput::JoystickX,
        SemanticInput::JoystickY,
        SemanticInput::JoystickTouch,
        SemanticInput::BackClick,
        SemanticInput::TriggerClick,
        SemanticInput::TriggerValue,
        SemanticInput::TriggerTouch,
        SemanticInput::TrackpadX,
        SemanticInput::TrackpadY,
        SemanticInput::TrackpadClick,
        SemanticInput::TrackpadTouch,
        SemanticInput::ThumbrestTouch,
    ];

    /// The bit this input occupies in a [`ButtonMask`].
    #[inline]
    pub const fn bit(self) -> ButtonMask {
        1u64 << (self as u64)
    }
}

/// Build a mask from a set of inputs.
pub const fn mask_of(inputs: &[SemanticInput]) -> ButtonMask {
    let mut mask = 0u64;
    let mut i = 0;
    while i < inputs.len() {
        mask |= inputs[i].bit();
        i += 1;
    }
    mask
}

/// Iterate over the inputs whose bits are set in `mask`.
pub fn inputs_in(mask: ButtonMask) -> impl Iterator<Item = SemanticInput> {
    SemanticInput::ALL
        .into_iter()
        .filter(move |input| mask & input.bit() != 0)
}

/// One registered action: a semantic input plus its runtime-facing names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionName {
    pub input: SemanticInput,
    pub name: &'static str,
    pub localized: &'static str,
}

const fn an(input: SemanticInput, name: &'static str, localized: &'static str) -> ActionName {
    ActionName {
        input,
        name,
        localized,
    }
}

/// Boolean actions, one per clickable/touchable control.
pub const BOOL_ACTIONS: &[ActionName] = &[
    an(SemanticInput::SystemClick, "system_click", "System Click"),
    an(
        SemanticInput::ApplicationMenuClick,
        "application_click",
        "Application Click",
    ),
    an(SemanticInput::GripClick, "grip_click", "Grip Click"),
    an(SemanticInput::GripTouch, "grip_touch", "Grip Touch"),
    an(SemanticInput::AClick, "a_click", "A Click"),
    an(SemanticInput::ATouch, "a_touch", "A Touch"),
    an(SemanticInput::BClick, "b_click", "B Click"),
    an(SemanticInput::BTouch, "b_touch", "B Touch"),
    an(SemanticInput::XClick, "x_click", "X Click"),
    an(SemanticInput::XTouch, "x_touch", "X Touch"),
    an(SemanticInput::YClick, "y_click", "Y Click"),
    an(SemanticInput::YTouch, "y_touch", "Y Touch"),
    an(
        SemanticInput::JoystickClick,
        "joystick_click",
        "Joystick Click",
    ),
    an(
        SemanticInput::JoystickTouch,
        "joystick_touch",
        "Joystick Touch",
    ),
    an(SemanticInput::BackClick, "back_click", "Back Click"),
    an(
        SemanticInput::TriggerClick,
        "trigger_click",
        "Trigger Click",
    ),
    an(
        SemanticInput::TriggerTouch,
        "trigger_touch",
        "Trigger Touch",
    ),
    an(
        SemanticInput::TrackpadClick,
        "trackpad_click",
        "Trackpad Click",
    ),
    an(
        SemanticInput::TrackpadTouch,
        "trackpad_touch",
        "Trackpad Touch",
    ),
    an(
        SemanticInput::ThumbrestTouch,
        "thumbrest_touch",
        "Thumbrest Touch",
    ),
];

/// Scalar (float) actions.
pub const SCALAR_ACTIONS: &[ActionName] = &[
    an(SemanticInput::GripValue, "grip_value", "Grip Value"),
    an(SemanticInput::JoystickX, "joystick_x", "Joystick X"),
    an(SemanticInput::JoystickY, "joystick_y", "Joystick Y"),
    an(
        SemanticInput::TriggerValue,
        "trigger_value",
        "Trigger Value",
    ),
    an(SemanticInput::TrackpadX, "trackpad_x", "Trackpad X"),
    an(SemanticInput::TrackpadY, "trackpad_y", "Trackpad Y"),
];

/// 2-axis actions. Keyed by the X component of the pair they feed.
pub const VECTOR2_ACTIONS: &[ActionName] = &[an(
    SemanticInput::JoystickX,
    "joystick_pos",
    "Joystick Pos",
)];

/// Analog controls presented as booleans: the runtime applies the click
/// threshold, we see a bool. Backed by a scalar hardware control.
pub const SCALAR_TO_BOOL_ACTIONS: &[ActionName] = &[
    an(
        SemanticInput::GripClick,
        "grip_value_to_click",
        "Grip Value To Click",
    ),
    an(
        SemanticInput::TriggerClick,
        "trigger_value_to_click",
        "Trigger Value To Click",
    ),
];

/// Click-only controls presented as analog values (forced to 1.0 while
/// pressed). Backed by a boolean hardware control.
pub const BOOL_TO_SCALAR_ACTIONS: &[ActionName] = &[an(
    SemanticInput::GripValue,
    "grip_click_to_value",
    "Grip Click To Value",
)];

/// Look up an input in one of the action name tables.
pub fn find_action(table: &'static [ActionName], input: SemanticInput) -> Option<&'static ActionName> {
    table.iter().find(|a| a.input == input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_are_unique() {
        let mut seen: ButtonMask = 0;
        for input in SemanticInput::ALL {
            assert_eq!(seen & input.bit(), 0, "{input:?} reuses a bit");
            seen |= input.bit();
        }
        assert_eq!(seen.count_ones() as usize, SemanticInput::COUNT);
    }

    #[test]
    fn test_mask_roundtrip() {
        let mask = mask_of(&[SemanticInput::SystemClick, SemanticInput::BClick]);
        let inputs: Vec<_> = inputs_in(mask).collect();
        assert_eq!(
            inputs,
            vec![SemanticInput::SystemClick, SemanticInput::BClick]
        );
    }

    #[test]
    fn test_action_tables_have_no_duplicates() {
        for table in [
            BOOL_ACTIONS,
            SCALAR_ACTIONS,
            VECTOR2_ACTIONS,
            SCALAR_TO_BOOL_ACTIONS,
            BOOL_TO_SCALAR_ACTIONS,
        ] {
            for (i, a) in table.iter().enumerate() {
                for b in &table[i + 1..] {
                    assert_ne!(a.input, b.input, "duplicate action for {:?}", a.input);
                    assert_ne!(a.name, b.name, "duplicate action name {}", a.name);
                }
            }
        }
    }
}
