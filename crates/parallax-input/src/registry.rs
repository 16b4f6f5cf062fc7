//! Action registration and suggested-binding construction.
//!
//! One action per entry in the action-name tables, created once at startup
//! for all four hand subaction paths, plus the dedicated quit, pose, and
//! haptic actions. Suggested bindings are emitted profile by profile in a
//! fixed table order, so two runs over the same runtime produce the same
//! binding list.

use parallax_core::input::{
    ActionName, SemanticInput, BOOL_ACTIONS, BOOL_TO_SCALAR_ACTIONS, SCALAR_ACTIONS,
    SCALAR_TO_BOOL_ACTIONS, VECTOR2_ACTIONS,
};
use parallax_core::profile::{entries, HandInputMap};
use parallax_core::{ClientOptions, Hand, InteractionProfile, Result};
use tracing::{debug, info, warn};

use crate::negotiate;
use crate::runtime::{
    ActionHandle, ActionKind, Binding, PathHandle, RuntimeInterface, SpaceHandle, TrackedPaths,
};

/// An action created from one action-name table entry.
#[derive(Debug, Clone, Copy)]
pub struct RegisteredAction {
    pub input: SemanticInput,
    pub name: &'static str,
    pub handle: ActionHandle,
}

fn find(actions: &[RegisteredAction], input: SemanticInput) -> Option<&RegisteredAction> {
    actions.iter().find(|a| a.input == input)
}

/// All actions the client ever creates, plus the per-hand pose spaces.
pub struct ActionRegistry {
    bool_actions: Vec<RegisteredAction>,
    scalar_actions: Vec<RegisteredAction>,
    vector2_actions: Vec<RegisteredAction>,
    scalar_to_bool_actions: Vec<RegisteredAction>,
    bool_to_scalar_actions: Vec<RegisteredAction>,
    quit: ActionHandle,
    pose: ActionHandle,
    haptic: ActionHandle,
    hand_spaces: [SpaceHandle; 2],
    attached: bool,
}

impl ActionRegistry {
    /// Create every action and the per-hand pose spaces.
    pub fn new<R: RuntimeInterface>(runtime: &mut R, paths: &TrackedPaths) -> Result<Self> {
        // Hand actions carry all four hand subaction paths so the same
        // action works under the standard and the HTC top-level paths.
        let hand_subactions = [
            paths.user_hand[0],
            paths.user_hand[1],
            paths.user_hand_htc[0],
            paths.user_hand_htc[1],
        ];

        let create_table = |runtime: &mut R,
                                table: &'static [ActionName],
                                kind: ActionKind|
         -> Result<Vec<RegisteredAction>> {
            table
                .iter()
                .map(|action| {
                    let handle = runtime.create_action(
                        action.name,
                        action.localized,
                        kind,
                        &hand_subactions,
                    )?;
                    Ok(RegisteredAction {
                        input: action.input,
                        name: action.name,
                        handle,
                    })
                })
                .collect()
        };

        let bool_actions = create_table(runtime, BOOL_ACTIONS, ActionKind::Bool)?;
        let scalar_actions = create_table(runtime, SCALAR_ACTIONS, ActionKind::Scalar)?;
        let vector2_actions = create_table(runtime, VECTOR2_ACTIONS, ActionKind::Vector2)?;
        // Conversion actions are boolean on our side: the runtime applies
        // the click threshold for scalar-backed entries, and we expand the
        // click to 1.0 for scalar-presented entries during the poll.
        let scalar_to_bool_actions =
            create_table(runtime, SCALAR_TO_BOOL_ACTIONS, ActionKind::Bool)?;
        let bool_to_scalar_actions =
            create_table(runtime, BOOL_TO_SCALAR_ACTIONS, ActionKind::Bool)?;

        let quit = runtime.create_action("quit_session", "Quit Session", ActionKind::Bool, &[])?;
        let pose =
            runtime.create_action("hand_pose", "Hand Pose", ActionKind::Pose, &hand_subactions)?;
        let haptic = runtime.create_action(
            "hand_haptics",
            "Hand Haptics",
            ActionKind::Haptic,
            &hand_subactions,
        )?;

        let hand_spaces = [
            runtime.create_action_space(pose, paths.user_hand[0])?,
            runtime.create_action_space(pose, paths.user_hand[1])?,
        ];

        Ok(Self {
            bool_actions,
            scalar_actions,
            vector2_actions,
            scalar_to_bool_actions,
            bool_to_scalar_actions,
            quit,
            pose,
            haptic,
            hand_spaces,
            attached: false,
        })
    }

    /// Suggest bindings for every profile the runtime negotiates.
    ///
    /// A fragment that fails to resolve is logged and skipped; a profile
    /// the runtime rejects outright is logged and skipped. Neither aborts
    /// startup.
    pub fn suggest_bindings<R: RuntimeInterface>(
        &self,
        runtime: &mut R,
        options: &ClientOptions,
    ) -> Result<()> {
        if options.no_suggested_bindings {
            info!("suggested bindings disabled by client options");
            return Ok(());
        }
        for id in negotiate::supported_profiles(runtime, options) {
            let profile = id.get();
            let bindings = self.bindings_for(runtime, profile);
            if bindings.is_empty() {
                // A controls-free catalog entry is a programming error;
                // a fully unresolvable one is a runtime quirk.
                debug_assert!(
                    profile.declares_controls(),
                    "catalog profile {} declares no controls",
                    profile.path
                );
                warn!(
                    profile = profile.path,
                    "every binding path failed to resolve, skipping profile"
                );
                continue;
            }
            match runtime.suggest_bindings(profile.path, &bindings) {
                Ok(()) => debug!(
                    profile = profile.path,
                    count = bindings.len(),
                    "suggested bindings"
                ),
                Err(err) => warn!(
                    profile = profile.path,
                    %err,
                    "runtime rejected suggested bindings for profile"
                ),
            }
        }
        Ok(())
    }

    fn bindings_for<R: RuntimeInterface>(
        &self,
        runtime: &R,
        profile: &InteractionProfile,
    ) -> Vec<Binding> {
        let tables: [(&HandInputMap, &[RegisteredAction]); 5] = [
            (&profile.bool_map, &self.bool_actions),
            (&profile.scalar_map, &self.scalar_actions),
            (&profile.vector2_map, &self.vector2_actions),
            (&profile.scalar_to_bool_map, &self.scalar_to_bool_actions),
            (&profile.bool_to_scalar_map, &self.bool_to_scalar_actions),
        ];

        let mut out = Vec::new();
        if let Some(pose) = profile.pose_path {
            for user in profile.user_hand_paths {
                push_binding(runtime, &mut out, self.pose, &format!("{user}/input/{pose}"));
            }
        }
        if let Some(haptic) = profile.haptic_path {
            for user in profile.user_hand_paths {
                push_binding(
                    runtime,
                    &mut out,
                    self.haptic,
                    &format!("{user}/output/{haptic}"),
                );
            }
        }
        // The quit gesture listens on the left hand only.
        if let Some(quit) = profile.quit_path {
            push_binding(
                runtime,
                &mut out,
                self.quit,
                &format!("{}/input/{quit}", profile.user_hand_paths[0]),
            );
        }
        for (hand, user) in profile.user_hand_paths.iter().enumerate() {
            for (maps, actions) in tables {
                for entry in entries(&maps[hand]) {
                    // Catalog self-consistency tests guarantee the lookup.
                    let Some(action) = find(actions, entry.input) else {
                        continue;
                    };
                    push_binding(
                        runtime,
                        &mut out,
                        action.handle,
                        &format!("{user}/input/{}", entry.path),
                    );
                }
            }
        }
        out
    }

    /// Attach the action set. Panics on a second call.
    pub fn attach<R: RuntimeInterface>(&mut self, runtime: &mut R) -> Result<()> {
        assert!(!self.attached, "action set attached twice");
        runtime.attach_action_set()?;
        self.attached = true;
        Ok(())
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn bool_action(&self, input: SemanticInput) -> Option<ActionHandle> {
        find(&self.bool_actions, input).map(|a| a.handle)
    }

    pub fn scalar_action(&self, input: SemanticInput) -> Option<ActionHandle> {
        find(&self.scalar_actions, input).map(|a| a.handle)
    }

    pub fn vector2_action(&self, input: SemanticInput) -> Option<ActionHandle> {
        find(&self.vector2_actions, input).map(|a| a.handle)
    }

    pub fn scalar_to_bool_action(&self, input: SemanticInput) -> Option<ActionHandle> {
        find(&self.scalar_to_bool_actions, input).map(|a| a.handle)
    }

    pub fn bool_to_scalar_action(&self, input: SemanticInput) -> Option<ActionHandle> {
        find(&self.bool_to_scalar_actions, input).map(|a| a.handle)
    }

    #[inline]
    pub fn quit_action(&self) -> ActionHandle {
        self.quit
    }

    #[inline]
    pub fn pose_action(&self) -> ActionHandle {
        self.pose
    }

    #[inline]
    pub fn haptic_action(&self) -> ActionHandle {
        self.haptic
    }

    #[inline]
    pub fn hand_space(&self, hand: Hand) -> SpaceHandle {
        self.hand_spaces[hand.index()]
    }

    /// Debug-log the sources the runtime actually bound to each action.
    pub fn log_bound_sources<R: RuntimeInterface>(&self, runtime: &R) {
        let groups = [
            &self.bool_actions,
            &self.scalar_actions,
            &self.vector2_actions,
            &self.scalar_to_bool_actions,
            &self.bool_to_scalar_actions,
        ];
        for action in groups.into_iter().flatten() {
            match runtime.bound_source_names(action.handle) {
                Ok(sources) if !sources.is_empty() => {
                    debug!(action = action.name, ?sources, "bound sources")
                }
                Ok(_) => {}
                Err(err) => debug!(action = action.name, %err, "bound source query failed"),
            }
        }
    }
}

fn push_binding<R: RuntimeInterface>(
    runtime: &R,
    out: &mut Vec<Binding>,
    action: ActionHandle,
    path: &str,
) {
    match runtime.string_to_path(path) {
        Ok(handle) if handle != PathHandle::NULL => out.push(Binding {
            action,
            path: handle,
        }),
        Ok(_) => warn!(path, "binding path resolved to null, skipping"),
        Err(err) => warn!(path, %err, "failed to resolve binding path, skipping"),
    }
}
