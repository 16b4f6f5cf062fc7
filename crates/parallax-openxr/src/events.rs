//! OpenXR event translation and session lifecycle hooks.

use openxr as xr;
use openxr::sys::Handle;
use parallax_core::session::{SessionHooks, SessionState, StateChange};
use parallax_core::{Error, Result};
use tracing::debug;

/// Map the raw OpenXR session state onto the lifecycle machine's states.
pub fn session_state(raw: xr::SessionState) -> SessionState {
    match raw {
        xr::SessionState::IDLE => SessionState::Idle,
        xr::SessionState::READY => SessionState::Ready,
        xr::SessionState::SYNCHRONIZED => SessionState::Synchronized,
        xr::SessionState::VISIBLE => SessionState::Visible,
        xr::SessionState::FOCUSED => SessionState::Focused,
        xr::SessionState::STOPPING => SessionState::Stopping,
        xr::SessionState::LOSS_PENDING => SessionState::LossPending,
        xr::SessionState::EXITING => SessionState::Exiting,
        _ => SessionState::Unknown,
    }
}

/// Translate a session-state-changed event for the lifecycle machine.
pub fn state_change(event: &xr::Event<'_>) -> Option<StateChange> {
    match event {
        xr::Event::SessionStateChanged(changed) => Some(StateChange {
            state: session_state(changed.state()),
            session: changed.session().into_raw(),
            time_ns: changed.time().as_nanos(),
        }),
        _ => None,
    }
}

type HookCallback = Box<dyn FnMut() + Send>;

/// [`SessionHooks`] over a live OpenXR session.
///
/// Passthrough teardown and performance hints are platform-owned concerns,
/// so they arrive as callbacks from whoever builds the hooks.
pub struct OpenXrSessionHooks<G: xr::Graphics> {
    session: xr::Session<G>,
    view_config: xr::ViewConfigurationType,
    on_stop_passthrough: Option<HookCallback>,
    on_performance_hints: Option<HookCallback>,
}

impl<G: xr::Graphics> OpenXrSessionHooks<G> {
    pub fn new(session: xr::Session<G>, view_config: xr::ViewConfigurationType) -> Self {
        Self {
            session,
            view_config,
            on_stop_passthrough: None,
            on_performance_hints: None,
        }
    }

    pub fn on_stop_passthrough(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_stop_passthrough = Some(Box::new(callback));
        self
    }

    pub fn on_performance_hints(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_performance_hints = Some(Box::new(callback));
        self
    }
}

impl<G: xr::Graphics> SessionHooks for OpenXrSessionHooks<G> {
    fn begin_session(&mut self) -> Result<()> {
        self.session
            .begin(self.view_config)
            .map(|_| ())
            .map_err(|e| Error::runtime(format!("OpenXR begin session: {e:?}")))
    }

    fn end_session(&mut self) -> Result<()> {
        self.session
            .end()
            .map(|_| ())
            .map_err(|e| Error::runtime(format!("OpenXR end session: {e:?}")))
    }

    fn stop_passthrough(&mut self) {
        if let Some(callback) = &mut self.on_stop_passthrough {
            callback();
        }
    }

    fn request_performance_hints(&mut self) {
        if let Some(callback) = &mut self.on_performance_hints {
            callback();
        } else {
            debug!("no performance hint callback installed");
        }
    }
}

/// The per-eye render resolution the runtime recommends.
pub fn recommended_eye_resolution(
    instance: &xr::Instance,
    system: xr::SystemId,
) -> Result<(u32, u32)> {
    let views = instance
        .enumerate_view_configuration_views(
            system,
            xr::ViewConfigurationType::PRIMARY_STEREO,
        )
        .map_err(|e| Error::runtime(format!("OpenXR view configuration: {e:?}")))?;
    let view = views
        .first()
        .ok_or_else(|| Error::runtime("no view configuration views"))?;
    Ok((
        view.recommended_image_rect_width,
        view.recommended_image_rect_height,
    ))
}

/// The runtime's preferred environment blend mode (first enumerated).
pub fn preferred_blend_mode(
    instance: &xr::Instance,
    system: xr::SystemId,
) -> Result<xr::EnvironmentBlendMode> {
    let modes = instance
        .enumerate_environment_blend_modes(system, xr::ViewConfigurationType::PRIMARY_STEREO)
        .map_err(|e| Error::runtime(format!("OpenXR blend modes: {e:?}")))?;
    modes
        .first()
        .copied()
        .ok_or_else(|| Error::runtime("no environment blend modes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_state_mapping() {
        assert_eq!(session_state(xr::SessionState::IDLE), SessionState::Idle);
        assert_eq!(session_state(xr::SessionState::READY), SessionState::Ready);
        assert_eq!(
            session_state(xr::SessionState::SYNCHRONIZED),
            SessionState::Synchronized
        );
        assert_eq!(
            session_state(xr::SessionState::LOSS_PENDING),
            SessionState::LossPending
        );
        assert_eq!(
            session_state(xr::SessionState::EXITING),
            SessionState::Exiting
        );
        assert_eq!(
            session_state(xr::SessionState::UNKNOWN),
            SessionState::Unknown
        );
    }
}
