//! Common error types for Parallax.

use thiserror::Error;

/// Result type alias using Parallax's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for Parallax operations.
///
/// Two classes of failure deliberately do *not* appear here:
/// - "not currently active" observations from the device runtime are
///   expected and surface as `Option::None`, never as an error;
/// - caller contract violations (double-attach, polling before the action
///   set is built) panic at the violation site, since they indicate a
///   broken caller rather than a recoverable condition.
#[derive(Debug, Error)]
pub enum Error {
    /// The device runtime returned an unexpected failure from an otherwise
    /// valid call. Treated as session-fatal by callers.
    #[error("runtime failure: {0}")]
    Runtime(String),

    /// A requested extension, profile, or capability is not available on
    /// this device. The feature is disabled and the session continues.
    #[error("unsupported: {0}")]
    Unsupported(String),
}

impl Error {
    /// Create a runtime failure from any displayable type.
    pub fn runtime(msg: impl std::fmt::Display) -> Self {
        Self::Runtime(msg.to_string())
    }

    /// Create an unsupported-capability error from any displayable type.
    pub fn unsupported(msg: impl std::fmt::Display) -> Self {
        Self::Unsupported(msg.to_string())
    }
}
