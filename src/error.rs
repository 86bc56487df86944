//! Error taxonomy for the two request paths.

use thiserror::Error;

/// Errors surfaced by the callback-bridge requester and the poster.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The script resource could not be loaded: transport error or a
    /// non-success status. Fixed message; the underlying cause is
    /// logged, not carried.
    #[error("Script load failed")]
    ScriptLoadFailed,

    /// The POST transport call itself failed (e.g. network unreachable).
    /// Carries the underlying error's message.
    #[error("{0}")]
    Transport(String),

    /// A loaded script body did not perform a usable callback invocation.
    #[error("malformed script response: {0}")]
    MalformedScript(String),

    /// The completion handle vanished before delivering a value.
    #[error("callback completed without a value")]
    CallbackDropped,
}
