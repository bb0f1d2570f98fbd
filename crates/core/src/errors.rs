//! Error types for the gitmirror core library.
//!
//! Each subsystem has its own error type derived with `thiserror`, and a
//! top-level [`MirrorError`] enum unifies them all for callers that want a
//! single error type.
//!
//! Error text only ever carries the host/path portion of an endpoint —
//! credentials must never appear in a formatted error.

use thiserror::Error;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Unified error type for a mirror run.
#[derive(Debug, Error)]
pub enum MirrorError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Workspace(#[from] WorkspaceError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Errors from configuration and credential loading. Always raised at
/// startup, before any transport operation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Repository list file not found.
    #[error("repository list file not found: {0}")]
    FileNotFound(String),

    /// JSON parse error in the repository list.
    #[error("repository list parse error: {0}")]
    ParseError(String),

    /// A required environment variable is not set (or is empty).
    #[error("required environment variable '{0}' is not set")]
    EnvVarMissing(String),

    /// A repository record is invalid.
    #[error("invalid configuration value for '{field}': {detail}")]
    InvalidValue {
        field: String,
        detail: String,
    },

    /// Generic I/O error reading the repository list.
    #[error("configuration I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Workspace errors
// ---------------------------------------------------------------------------

/// Errors from the scratch workspace provider. The provider is assumed
/// reliable; any failure indicates an unrecoverable environment problem.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    /// Could not create a scratch directory.
    #[error("failed to create scratch workspace: {0}")]
    CreateFailed(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Transport errors
// ---------------------------------------------------------------------------

/// Errors from git transport operations (clone, remote registration, push).
#[derive(Debug, Error)]
pub enum TransportError {
    /// Cloning the source repository failed (auth, network, missing repo).
    #[error("clone failed for '{location}': {source}")]
    CloneFailed {
        location: String,
        #[source]
        source: git2::Error,
    },

    /// Registering the target remote in the cloned workspace failed.
    #[error("failed to register remote '{name}' for '{location}': {source}")]
    RemoteRegistration {
        location: String,
        name: String,
        #[source]
        source: git2::Error,
    },

    /// Pushing branches to the target failed.
    #[error("push failed for '{location}': {source}")]
    PushFailed {
        location: String,
        #[source]
        source: git2::Error,
    },

    /// The remote accepted the connection but rejected a ref update.
    #[error("push rejected for '{location}' on '{refname}': {detail}")]
    PushRejected {
        location: String,
        refname: String,
        detail: String,
    },
}
