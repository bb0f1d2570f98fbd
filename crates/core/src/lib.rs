//! gitmirror core library.
//!
//! This crate provides the components for one-shot Git repository mirroring:
//! configuration and credential loading, scratch workspace management, the
//! git transport layer, and the mirror engine that drives each repository
//! pair through clone, remote registration, and force-push.

pub mod config;
pub mod engine;
pub mod errors;
pub mod git;
pub mod models;
pub mod workspace;

// Re-exports for convenience.
pub use config::Credentials;
pub use engine::MirrorEngine;
pub use errors::MirrorError;
pub use git::Git2Transport;
pub use models::{RepositoryPair, SyncOutcome};
pub use workspace::TempWorkspaces;
