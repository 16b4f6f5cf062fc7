//! The interaction context: one object owning the runtime seam, the action
//! registry, the gesture detectors, and the active-profile selection.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use parallax_core::catalog::{self, ProfileId};
use parallax_core::{ClientOptions, ControllerState, Hand, Pose, PoseVelocity, Result};
use tracing::{info, warn};

use crate::eye_gaze::EyeGazeTracker;
use crate::gesture::{PassthroughGesture, PassthroughMode, QuitGesture};
use crate::poll;
use crate::registry::ActionRegistry;
use crate::runtime::{HapticFeedback, PathHandle, RuntimeInterface, TrackedPaths};

/// Result of one `poll_actions` tick.
#[derive(Debug, Clone, Copy)]
pub struct PollOutput {
    pub hands: [ControllerState; 2],
    /// Set on the tick a passthrough combo toggled the compositing mode.
    pub passthrough: Option<PassthroughMode>,
    /// True on the tick the hold-to-quit gesture fired (exit requested).
    pub quit_requested: bool,
}

/// Sentinel stored in the active-profile cell while no profile is bound.
const NO_PROFILE: usize = usize::MAX;

/// Owns everything input: built once at startup, polled every tick.
pub struct InteractionContext<R: RuntimeInterface> {
    runtime: R,
    paths: TrackedPaths,
    registry: ActionRegistry,
    eye_gaze: Option<EyeGazeTracker>,
    options: ClientOptions,
    active: AtomicUsize,
    quit: QuitGesture,
    passthrough: PassthroughGesture,
}

impl<R: RuntimeInterface> InteractionContext<R> {
    /// Resolve paths, create all actions, suggest bindings, and attach.
    pub fn new(mut runtime: R, options: ClientOptions) -> Result<Self> {
        let paths = TrackedPaths::resolve(&runtime)?;
        let mut registry = ActionRegistry::new(&mut runtime, &paths)?;
        let eye_gaze = EyeGazeTracker::new(&mut runtime, &options)?;

        registry.suggest_bindings(&mut runtime, &options)?;
        if let Some(tracker) = &eye_gaze {
            tracker.suggest_bindings(&mut runtime)?;
        }
        registry.attach(&mut runtime)?;

        Ok(Self {
            runtime,
            paths,
            registry,
            eye_gaze,
            options,
            active: AtomicUsize::new(NO_PROFILE),
            quit: QuitGesture::default(),
            passthrough: PassthroughGesture::default(),
        })
    }

    #[inline]
    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    #[inline]
    pub fn runtime_mut(&mut self) -> &mut R {
        &mut self.runtime
    }

    /// The currently bound profile, or `None` before the runtime has
    /// reported one (and after it reports an unbound or unknown one).
    #[inline]
    pub fn active_profile(&self) -> Option<ProfileId> {
        match self.active.load(Ordering::Relaxed) {
            NO_PROFILE => None,
            index => Some(ProfileId(index)),
        }
    }

    pub fn set_active_profile(&self, id: ProfileId) {
        self.active.store(id.0, Ordering::Relaxed);
    }

    pub fn clear_active_profile(&self) {
        self.active.store(NO_PROFILE, Ordering::Relaxed);
    }

    /// Adopt whatever profile the runtime reports as currently bound.
    ///
    /// An unbound or unrecognized report clears the selection so polling
    /// stops folding input that no longer matches any known layout.
    pub fn set_active_from_current(&self) -> Result<()> {
        let Some(path) = self.runtime.current_profile(self.paths.user_hand[0])? else {
            self.clear_active_profile();
            return Ok(());
        };
        match catalog::find_by_path(&path) {
            Some(id) => {
                info!(profile = %path, "active interaction profile changed");
                self.set_active_profile(id);
            }
            None => {
                warn!(
                    profile = %path,
                    "runtime reported an unrecognized interaction profile"
                );
                self.clear_active_profile();
            }
        }
        Ok(())
    }

    /// Sync and fold one tick of input.
    ///
    /// Drives the quit and passthrough gestures as a side effect; a fired
    /// quit gesture asks the runtime to wind the session down.
    pub fn poll_actions(&mut self, now: Instant) -> Result<PollOutput> {
        self.runtime.sync_actions()?;
        if let Some(tracker) = &mut self.eye_gaze {
            tracker.poll(&self.runtime)?;
        }

        let Some(profile) = self.active_profile().map(ProfileId::get) else {
            self.quit.observe(false, false, now);
            return Ok(PollOutput {
                hands: [ControllerState::default(); 2],
                passthrough: None,
                quit_requested: false,
            });
        };
        let hands = poll::poll_hands(&self.runtime, &self.registry, &self.paths, profile)?;

        let mut quit_requested = false;
        if self.options.disable_quit_gesture || profile.quit_path.is_none() {
            self.quit.observe(false, false, now);
        } else {
            let (pressed, edge) = self
                .runtime
                .bool_state(self.registry.quit_action(), PathHandle::NULL)?
                .map_or((false, false), |s| (s.current, s.changed));
            if self.quit.observe(pressed, edge, now) {
                info!("quit gesture held, requesting session exit");
                self.runtime.request_exit()?;
                quit_requested = true;
            }
        }

        let passthrough = self
            .passthrough
            .observe(profile.passthrough_modes.as_ref(), &hands);

        Ok(PollOutput {
            hands: [hands[0].state, hands[1].state],
            passthrough,
            quit_requested,
        })
    }

    /// Locate one hand's aim pose; untracked hands read as identity.
    pub fn hand_location(&self, hand: Hand, time_ns: i64) -> Result<PoseVelocity> {
        Ok(self
            .runtime
            .locate_space(self.registry.hand_space(hand), time_ns)?
            .unwrap_or_default())
    }

    /// The current gaze pose, when eye tracking is negotiated and active.
    pub fn eye_gaze_location(&self, time_ns: i64) -> Result<Option<Pose>> {
        match &self.eye_gaze {
            Some(tracker) => tracker.gaze_location(&self.runtime, time_ns),
            None => Ok(None),
        }
    }

    #[inline]
    pub fn eye_gaze_enabled(&self) -> bool {
        self.eye_gaze.is_some()
    }

    /// Fire a haptic pulse on one hand.
    ///
    /// Profiles without a haptic output absorb the request silently, as
    /// does the window before any profile is bound.
    pub fn apply_haptic(&self, feedback: &HapticFeedback) -> Result<()> {
        let Some(profile) = self.active_profile().map(ProfileId::get) else {
            return Ok(());
        };
        if profile.haptic_path.is_none() {
            return Ok(());
        }
        let subaction = self.paths.hand_subaction(profile, feedback.hand);
        self.runtime
            .apply_haptic(self.registry.haptic_action(), subaction, feedback)
    }

    /// Debug-log what the runtime bound to each action.
    pub fn log_bound_sources(&self) {
        self.registry.log_bound_sources(&self.runtime);
    }
}
