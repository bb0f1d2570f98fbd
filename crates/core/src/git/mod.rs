//! Git transport for gitmirror.
//!
//! The engine depends only on the [`GitTransport`] capability surface;
//! [`client::Git2Transport`] is the git2-backed implementation used in
//! production.

pub mod client;
pub mod endpoint;

pub use client::Git2Transport;
pub use endpoint::Endpoint;

use std::path::Path;

use crate::config::Credential;
use crate::errors::TransportError;

/// Result of a push attempt against the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushStatus {
    /// At least one ref on the remote was rewritten.
    Updated,
    /// Every branch already matched the remote; nothing was sent.
    UpToDate,
}

/// Capability surface over the underlying version-control transport.
pub trait GitTransport {
    /// Handle to a cloned repository in a scratch workspace.
    type Repo;

    /// Full-history, all-branches bare clone of `source` into `dest`.
    fn clone_mirror(
        &self,
        source: &Endpoint,
        cred: &Credential,
        dest: &Path,
    ) -> Result<Self::Repo, TransportError>;

    /// Register an additional named remote pointing at `target`.
    fn register_remote(
        &self,
        repo: &mut Self::Repo,
        name: &str,
        target: &Endpoint,
    ) -> Result<(), TransportError>;

    /// Force-push every local branch to the named remote. Reports
    /// [`PushStatus::UpToDate`] when all refs already match.
    fn push_all(
        &self,
        repo: &Self::Repo,
        remote_name: &str,
        target: &Endpoint,
        cred: &Credential,
    ) -> Result<PushStatus, TransportError>;
}
