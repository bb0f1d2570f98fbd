//! Scratch workspace acquisition.
//!
//! Every repository pair is cloned into a fresh, uniquely named temporary
//! directory which is deleted again when the pair's sync attempt finishes,
//! whatever the outcome. Release is tied to `Drop`, so it happens on every
//! exit path — normal return, classified failure, or propagated error.

use std::path::Path;

use tracing::debug;

use crate::errors::WorkspaceError;

/// An exclusively owned scratch directory. Dropping the workspace deletes
/// it recursively.
pub trait ScratchWorkspace {
    fn path(&self) -> &Path;
}

/// Source of scratch workspaces. Sequential processing means at most one
/// workspace is alive at a time.
pub trait WorkspaceProvider {
    type Workspace: ScratchWorkspace;

    fn acquire(&self) -> Result<Self::Workspace, WorkspaceError>;
}

// ---------------------------------------------------------------------------
// tempfile-backed provider
// ---------------------------------------------------------------------------

/// Workspace provider backed by [`tempfile::TempDir`] in the system temp
/// directory.
#[derive(Debug, Default)]
pub struct TempWorkspaces;

impl TempWorkspaces {
    pub fn new() -> Self {
        Self
    }
}

impl ScratchWorkspace for tempfile::TempDir {
    fn path(&self) -> &Path {
        tempfile::TempDir::path(self)
    }
}

impl WorkspaceProvider for TempWorkspaces {
    type Workspace = tempfile::TempDir;

    fn acquire(&self) -> Result<Self::Workspace, WorkspaceError> {
        let dir = tempfile::Builder::new().prefix("gitmirror-").tempdir()?;
        debug!(path = %dir.path().display(), "acquired scratch workspace");
        Ok(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_creates_unique_directories() {
        let provider = TempWorkspaces::new();
        let a = provider.acquire().unwrap();
        let b = provider.acquire().unwrap();
        assert!(a.path().is_dir());
        assert!(b.path().is_dir());
        assert_ne!(a.path(), b.path());
    }

    #[test]
    fn test_release_on_drop() {
        let provider = TempWorkspaces::new();
        let ws = provider.acquire().unwrap();
        let path = ws.path().to_path_buf();
        std::fs::write(path.join("packed-refs"), "ref data").unwrap();
        drop(ws);
        assert!(!path.exists());
    }
}
