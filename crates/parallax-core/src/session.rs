//! Session lifecycle state machine.
//!
//! States are driven solely by device-runtime notifications; the machine
//! performs no rendering itself and communicates with the render/poll loop
//! through [`LoopSignals`]. Side effects on transitions go through the
//! [`SessionHooks`] trait so this stays testable without a live runtime.

use tracing::{error, info, warn};

use crate::error::Result;

/// Coarse device-runtime session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unknown,
    Idle,
    Ready,
    Synchronized,
    Visible,
    Focused,
    Stopping,
    LossPending,
    Exiting,
}

/// A state-change notification as delivered by the device runtime.
#[derive(Debug, Clone, Copy)]
pub struct StateChange {
    pub state: SessionState,
    /// Opaque session handle the notification refers to; 0 means "ours".
    pub session: u64,
    pub time_ns: i64,
}

/// What the render loop should do after a transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopSignals {
    pub exit_render_loop: bool,
    pub request_restart: bool,
}

/// Side effects triggered by lifecycle transitions.
pub trait SessionHooks {
    /// Begin the session. Called on Ready.
    fn begin_session(&mut self) -> Result<()>;
    /// End the session. Called on Stopping.
    fn end_session(&mut self) -> Result<()>;
    /// Stop any active passthrough compositing mode. Called on Stopping.
    fn stop_passthrough(&mut self);
    /// Request elevated CPU/GPU performance levels and bind thread
    /// priority hints. Called after a successful begin.
    fn request_performance_hints(&mut self);
}

/// Tracks the runtime's session lifecycle and gates polling/prediction.
#[derive(Debug)]
pub struct SessionLifecycle {
    state: SessionState,
    session_handle: u64,
    running: bool,
    defer_bounds_event: bool,
}

impl SessionLifecycle {
    pub fn new(session_handle: u64) -> Self {
        Self {
            state: SessionState::Unknown,
            session_handle,
            running: false,
            defer_bounds_event: false,
        }
    }

    #[inline]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether per-tick polling and pose prediction should run at all.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn is_focused(&self) -> bool {
        self.state == SessionState::Focused
    }

    /// Consume the "defer the next bounds-changed event" flag set when the
    /// session synchronizes (bounds are not stable until the runtime has
    /// settled).
    pub fn take_deferred_bounds_event(&mut self) -> bool {
        std::mem::take(&mut self.defer_bounds_event)
    }

    /// Apply one state-change notification.
    ///
    /// Notifications for foreign session handles are logged and ignored.
    /// A begin failure leaves the machine in Ready but not running; an end
    /// failure is propagated (the runtime is assumed broken).
    pub fn handle(
        &mut self,
        change: StateChange,
        hooks: &mut impl SessionHooks,
    ) -> Result<LoopSignals> {
        if change.session != 0 && change.session != self.session_handle {
            error!(
                session = change.session,
                "session state change for unknown session"
            );
            return Ok(LoopSignals::default());
        }

        let old = self.state;
        self.state = change.state;
        info!(
            from = ?old,
            to = ?change.state,
            time_ns = change.time_ns,
            "session state changed"
        );

        let mut signals = LoopSignals::default();
        match change.state {
            SessionState::Synchronized => {
                self.defer_bounds_event = true;
            }
            SessionState::Ready => {
                match hooks.begin_session() {
                    Ok(()) => {
                        self.running = true;
                        hooks.request_performance_hints();
                    }
                    Err(err) => {
                        warn!(%err, "failed to begin session");
                        self.running = false;
                    }
                }
            }
            SessionState::Stopping => {
                hooks.stop_passthrough();
                hooks.end_session()?;
                self.running = false;
            }
            SessionState::Exiting => {
                // User closed the session: stop and do not restart.
                signals.exit_render_loop = true;
                signals.request_restart = false;
            }
            SessionState::LossPending => {
                // The instance is going away; poll for a new one.
                signals.exit_render_loop = true;
                signals.request_restart = true;
            }
            _ => {}
        }
        Ok(signals)
    }
}
