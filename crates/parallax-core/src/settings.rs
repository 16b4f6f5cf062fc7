//! Client options and mutable stream settings.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Startup options affecting input negotiation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientOptions {
    /// Skip suggested-binding creation for all controller profiles.
    pub no_suggested_bindings: bool,
    /// Disable the hold-to-quit gesture (storefront policy on some builds).
    pub disable_quit_gesture: bool,
    /// Never negotiate eye-gaze interaction, even on capable hardware.
    pub disable_eye_tracking: bool,
}

/// Reference space used as the tracking origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackingSpace {
    Local,
    Stage,
    View,
}

/// Mutable per-session stream configuration.
///
/// Requests outside the supported sets are logged and ignored; the
/// previous configuration is retained. Misconfiguration never interrupts
/// the session.
#[derive(Debug, Clone)]
pub struct StreamSettings {
    supported_refresh_rates: Vec<f32>,
    supported_spaces: Vec<TrackingSpace>,
    refresh_rate: f32,
    tracking_space: TrackingSpace,
}

impl StreamSettings {
    pub fn new(supported_refresh_rates: Vec<f32>, supported_spaces: Vec<TrackingSpace>) -> Self {
        let refresh_rate = supported_refresh_rates.first().copied().unwrap_or(60.0);
        let tracking_space = supported_spaces
            .first()
            .copied()
            .unwrap_or(TrackingSpace::Local);
        Self {
            supported_refresh_rates,
            supported_spaces,
            refresh_rate,
            tracking_space,
        }
    }

    #[inline]
    pub fn refresh_rate(&self) -> f32 {
        self.refresh_rate
    }

    #[inline]
    pub fn tracking_space(&self) -> TrackingSpace {
        self.tracking_space
    }

    pub fn supported_refresh_rates(&self) -> &[f32] {
        &self.supported_refresh_rates
    }

    /// Select a refresh rate; out-of-set requests keep the current rate.
    pub fn set_refresh_rate(&mut self, rate: f32) {
        if self.supported_refresh_rates.iter().any(|&r| r == rate) {
            self.refresh_rate = rate;
        } else {
            warn!(
                requested = rate,
                current = self.refresh_rate,
                "requested refresh rate is not supported, keeping current"
            );
        }
    }

    /// Select a tracking space; unsupported requests keep the current one.
    pub fn set_tracking_space(&mut self, space: TrackingSpace) {
        if self.supported_spaces.contains(&space) {
            self.tracking_space = space;
        } else {
            warn!(
                requested = ?space,
                current = ?self.tracking_space,
                "requested tracking space is not supported, keeping current"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_refresh_rate_in_set() {
        let mut settings =
            StreamSettings::new(vec![72.0, 90.0, 120.0], vec![TrackingSpace::Local]);
        settings.set_refresh_rate(90.0);
        assert_eq!(settings.refresh_rate(), 90.0);
    }

    #[test]
    fn test_unsupported_refresh_rate_is_retained() {
        let mut settings = StreamSettings::new(vec![72.0, 90.0], vec![TrackingSpace::Local]);
        settings.set_refresh_rate(90.0);
        settings.set_refresh_rate(144.0);
        assert_eq!(settings.refresh_rate(), 90.0);
    }

    #[test]
    fn test_unsupported_tracking_space_is_retained() {
        let mut settings =
            StreamSettings::new(vec![72.0], vec![TrackingSpace::Local, TrackingSpace::Stage]);
        settings.set_tracking_space(TrackingSpace::Stage);
        settings.set_tracking_space(TrackingSpace::View);
        assert_eq!(settings.tracking_space(), TrackingSpace::Stage);
    }
}
