//! Hold-to-quit and passthrough button-combo detection.

use std::time::{Duration, Instant};

use parallax_core::input::ButtonMask;
use parallax_core::PassthroughModeButtons;

use crate::poll::PolledHand;

/// How long the quit control must be held before the session exits.
pub const QUIT_HOLD_DURATION: Duration = Duration::from_secs(4);

/// Hold-to-quit detector.
///
/// Arms only on an observed press edge (`changed` set by the runtime's
/// sync) and fires once the hold duration elapses; the timer then re-arms
/// from the firing instant, so a control held down indefinitely fires once
/// per hold period rather than every tick. A hold that predates the first
/// observed edge never arms.
#[derive(Debug, Default)]
pub struct QuitGesture {
    hold_start: Option<Instant>,
}

impl QuitGesture {
    /// Feed one tick's observation; returns true when the gesture fires.
    pub fn observe(&mut self, pressed: bool, changed: bool, now: Instant) -> bool {
        if !pressed {
            self.hold_start = None;
            return false;
        }
        if changed {
            self.hold_start = Some(now);
            return false;
        }
        let Some(start) = self.hold_start else {
            return false;
        };
        if now.duration_since(start) >= QUIT_HOLD_DURATION {
            self.hold_start = Some(now);
            true
        } else {
            false
        }
    }
}

/// Passthrough compositing mode selected by controller combos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PassthroughMode {
    #[default]
    None,
    Blend,
    Mask,
}

/// A two-hand combo is "clicked" on the tick where it is fully held and
/// at least one of its buttons flipped. Holding past that tick does not
/// re-fire.
pub fn combo_clicked(hands: &[PolledHand; 2], combo: &[ButtonMask; 2]) -> bool {
    let mut any_changed = false;
    for (hand, mask) in hands.iter().zip(combo) {
        if hand.state.buttons & mask != *mask {
            return false;
        }
        any_changed |= hand.changed & mask != 0;
    }
    any_changed
}

/// Tracks the passthrough mode toggled by the active profile's combos.
#[derive(Debug, Default)]
pub struct PassthroughGesture {
    mode: PassthroughMode,
}

impl PassthroughGesture {
    #[inline]
    pub fn mode(&self) -> PassthroughMode {
        self.mode
    }

    /// Feed one tick's hands; returns the new mode when it changed.
    ///
    /// The blend combo is checked first; a profile whose combos share
    /// buttons resolves ties in favor of blend.
    pub fn observe(
        &mut self,
        combos: Option<&PassthroughModeButtons>,
        hands: &[PolledHand; 2],
    ) -> Option<PassthroughMode> {
        let combos = combos?;
        let next = if combo_clicked(hands, &combos.blend_mode) {
            match self.mode {
                PassthroughMode::Blend => PassthroughMode::None,
                _ => PassthroughMode::Blend,
            }
        } else if combo_clicked(hands, &combos.mask_mode) {
            match self.mode {
                PassthroughMode::Mask => PassthroughMode::None,
                _ => PassthroughMode::Mask,
            }
        } else {
            return None;
        };
        if next == self.mode {
            return None;
        }
        self.mode = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parallax_core::input::{mask_of, SemanticInput};

    fn at(base: Instant, millis: u64) -> Instant {
        base + Duration::from_millis(millis)
    }

    #[test]
    fn test_quit_fires_after_hold_duration() {
        let base = Instant::now();
        let mut quit = QuitGesture::default();
        assert!(!quit.observe(true, true, at(base, 0)));
        assert!(!quit.observe(true, false, at(base, 3900)));
        assert!(quit.observe(true, false, at(base, 4100)));
    }

    #[test]
    fn test_quit_rearms_after_firing() {
        let base = Instant::now();
        let mut quit = QuitGesture::default();
        assert!(!quit.observe(true, true, at(base, 0)));
        assert!(quit.observe(true, false, at(base, 4100)));
        // Held through: no fire until another full hold elapses.
        assert!(!quit.observe(true, false, at(base, 6000)));
        assert!(quit.observe(true, false, at(base, 8200)));
    }

    #[test]
    fn test_quit_release_resets_the_hold() {
        let base = Instant::now();
        let mut quit = QuitGesture::default();
        assert!(!quit.observe(true, true, at(base, 0)));
        assert!(!quit.observe(false, true, at(base, 3000)));
        assert!(!quit.observe(true, true, at(base, 3500)));
        // Only 3.6s since the re-press edge.
        assert!(!quit.observe(true, false, at(base, 7100)));
        assert!(quit.observe(true, false, at(base, 7600)));
    }

    /// A control already held when observation starts (no press edge ever
    /// seen) must not arm the hold.
    #[test]
    fn test_quit_hold_predating_first_edge_never_fires() {
        let base = Instant::now();
        let mut quit = QuitGesture::default();
        assert!(!quit.observe(true, false, at(base, 0)));
        assert!(!quit.observe(true, false, at(base, 5000)));
        assert!(!quit.observe(true, false, at(base, 10000)));
    }

    fn hand(buttons: &[SemanticInput], changed: &[SemanticInput]) -> PolledHand {
        let mut polled = PolledHand::default();
        polled.state.buttons = mask_of(buttons);
        polled.changed = mask_of(changed);
        polled
    }

    const COMBO: [ButtonMask; 2] = [
        mask_of(&[SemanticInput::SystemClick]),
        mask_of(&[SemanticInput::AClick]),
    ];

    #[test]
    fn test_combo_requires_all_buttons() {
        let hands = [
            hand(&[SemanticInput::SystemClick], &[SemanticInput::SystemClick]),
            hand(&[], &[]),
        ];
        assert!(!combo_clicked(&hands, &COMBO));
    }

    #[test]
    fn test_combo_fires_only_on_the_edge() {
        let pressed_edge = [
            hand(&[SemanticInput::SystemClick], &[]),
            hand(&[SemanticInput::AClick], &[SemanticInput::AClick]),
        ];
        assert!(combo_clicked(&pressed_edge, &COMBO));

        let held = [
            hand(&[SemanticInput::SystemClick], &[]),
            hand(&[SemanticInput::AClick], &[]),
        ];
        assert!(!combo_clicked(&held, &COMBO));
    }

    #[test]
    fn test_passthrough_toggles() {
        let combos = PassthroughModeButtons {
            blend_mode: COMBO,
            mask_mode: [
                mask_of(&[SemanticInput::SystemClick]),
                mask_of(&[SemanticInput::BClick]),
            ],
        };
        let mut gesture = PassthroughGesture::default();

        let blend_edge = [
            hand(&[SemanticInput::SystemClick], &[SemanticInput::SystemClick]),
            hand(&[SemanticInput::AClick], &[SemanticInput::AClick]),
        ];
        assert_eq!(
            gesture.observe(Some(&combos), &blend_edge),
            Some(PassthroughMode::Blend)
        );
        // Same edge again toggles back off.
        assert_eq!(
            gesture.observe(Some(&combos), &blend_edge),
            Some(PassthroughMode::None)
        );

        let mask_edge = [
            hand(&[SemanticInput::SystemClick], &[SemanticInput::SystemClick]),
            hand(&[SemanticInput::BClick], &[SemanticInput::BClick]),
        ];
        assert_eq!(
            gesture.observe(Some(&combos), &mask_edge),
            Some(PassthroughMode::Mask)
        );
        // Blend wins over an active mask mode.
        assert_eq!(
            gesture.observe(Some(&combos), &blend_edge),
            Some(PassthroughMode::Blend)
        );
    }

    #[test]
    fn test_no_combos_means_no_mode_changes() {
        let mut gesture = PassthroughGesture::default();
        let hands = [
            hand(&[SemanticInput::SystemClick], &[SemanticInput::SystemClick]),
            hand(&[SemanticInput::AClick], &[SemanticInput::AClick]),
        ];
        assert_eq!(gesture.observe(None, &hands), None);
        assert_eq!(gesture.mode(), PassthroughMode::None);
    }
}
