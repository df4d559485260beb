//! Typed errors for the classification core.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling. Every variant is terminal
//! for its request and converts to a fail-open response at the handler
//! boundary; nothing here is retried.

use thiserror::Error;

use crate::settings::Provider;

/// Errors that can occur during a classification request.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// No credential configured
    #[error("No API key configured")]
    MissingCredential,

    /// Credential contains characters outside the Latin-1 range
    #[error("API key invalid (non Latin-1)")]
    InvalidCredential,

    /// Configured provider identifier not in the known set
    #[error("Unknown provider: {name}")]
    UnknownProvider { name: String },

    /// Non-success HTTP status from an outbound call
    #[error("{provider} API error: {status} {body}")]
    Provider {
        provider: Provider,
        status: u16,
        body: String,
    },

    /// Transport-level failure (connection, timeout, body decode)
    #[error("network error: {0}")]
    Network(String),

    /// Structurally incomplete success response
    #[error("malformed provider response: {0}")]
    Malformed(String),

    /// Configuration store failure
    #[error("settings error: {0}")]
    Settings(String),
}

/// Result type alias for classification operations.
pub type Result<T> = std::result::Result<T, ClassifyError>;
