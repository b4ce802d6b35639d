//! Per-request scratch directories
//!
//! Each merge request gets an exclusively-owned, collision-resistantly
//! named temporary directory. It is never reused, and it is removed on
//! every exit path: [`Workspace::close`] is the logged path, and `Drop`
//! on the inner [`TempDir`] is the backstop if the value is simply
//! dropped.

use std::path::{Path, PathBuf};
use tempfile::TempDir;
use crate::error::Result;

/// An exclusively-owned temporary directory scoped to one merge request.
#[derive(Debug)]
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Create a fresh workspace under `root`, or under the system temp
    /// directory when `root` is `None`.
    pub fn create(root: Option<&Path>) -> Result<Self> {
        let dir = match root {
            Some(root) => tempfile::Builder::new().prefix("pdf-merge-").tempdir_in(root)?,
            None => tempfile::Builder::new().prefix("pdf-merge-").tempdir()?,
        };
        tracing::debug!(path = %dir.path().display(), "created workspace");
        Ok(Self { dir })
    }

    /// Directory path; valid only while the workspace lives.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path for a file inside the workspace.
    pub fn file_path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Remove the workspace tree.
    ///
    /// A removal failure is logged as a warning and swallowed; it must
    /// never override the primary result of the merge itself.
    pub fn close(self) {
        let path = self.dir.path().to_path_buf();
        if let Err(e) = self.dir.close() {
            tracing::warn!(path = %path.display(), error = %e, "could not clean up workspace");
        }
    }
}
