//! Error types for built-in operations.

use thiserror::Error;

/// Errors surfaced to guest code, translated from what the host would throw.
///
/// The `Display` form is the message guest code sees, prefixed the same way
/// for every variant (`JavaScript error: ...`).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuiltinError {
    /// A percent-escape sequence did not decode to a valid character
    /// (the host's `URIError`).
    #[error("JavaScript error: URI malformed")]
    MalformedUri,

    /// `new` was applied to something that cannot construct objects.
    #[error("JavaScript error: {0} is not a constructor")]
    NotAConstructor(String),

    /// A required global was missing when the bridge was connected.
    #[error("JavaScript error: {0} is not defined")]
    HostNotReady(String),

    /// Any other exception thrown by the host, carrying its message.
    #[error("JavaScript error: {0}")]
    Host(String),
}

/// Convenience alias used throughout jsbuiltin.
pub type Result<T> = std::result::Result<T, BuiltinError>;
