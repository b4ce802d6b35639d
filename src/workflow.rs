//! The merge-with-cleanup workflow
//!
//! Orchestrates one request's worth of work: validate the batch, stage
//! each payload into a fresh [`Workspace`], run the merge primitive over
//! the staged files in upload order, and hand the result back as a
//! [`MergedArtifact`] that owns the workspace. Every failure after
//! validation tears the workspace down before the error is returned;
//! consuming the artifact tears it down after the output is read.
//!
//! Each execution is strictly sequential and synchronous. Concurrent
//! requests are independent: they share nothing but the temp-dir
//! namespace, and workspace names are collision-resistant.

use std::fs;
use std::path::{Path, PathBuf};

use crate::batch::{sanitize_filename, UploadBatch, UploadItem};
use crate::config::{ServiceConfig, MERGED_FILENAME};
use crate::error::{Error, Result};
use crate::pdf::merge_documents;
use crate::workspace::Workspace;

/// Runs the validate → stage → merge → cleanup workflow for one batch.
#[derive(Debug, Clone)]
pub struct MergeWorkflow {
    config: ServiceConfig,
}

/// The merged output, alive only as long as its workspace.
///
/// The artifact owns the workspace it was produced in, so the caller
/// must fully consume the output (via [`MergedArtifact::into_bytes`] or
/// by reading [`MergedArtifact::path`]) before letting it go; dropping
/// or consuming the artifact removes the workspace and the file with it.
#[derive(Debug)]
pub struct MergedArtifact {
    path: PathBuf,
    workspace: Workspace,
}

impl MergedArtifact {
    /// Path of the merged document inside the workspace.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the merged document and release the workspace.
    pub fn into_bytes(self) -> Result<Vec<u8>> {
        let bytes = fs::read(&self.path)?;
        self.workspace.close();
        Ok(bytes)
    }
}

impl MergeWorkflow {
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Validate a batch without touching the filesystem.
    ///
    /// Filters out items with empty filenames, then rejects the whole
    /// batch if any remaining item has a disallowed extension or fewer
    /// than two items remain. A single invalid file invalidates the
    /// entire batch; there are no partial merges.
    pub fn validate<'a>(&self, batch: &'a UploadBatch) -> Result<Vec<&'a UploadItem>> {
        let named: Vec<&UploadItem> = batch
            .items()
            .iter()
            .filter(|item| !item.filename.is_empty())
            .collect();

        if named.is_empty() {
            return Err(Error::NoFilesSelected);
        }

        for item in &named {
            if !self.config.is_allowed_file(&item.filename) {
                return Err(Error::InvalidFileType(item.filename.clone()));
            }
        }

        if named.len() < 2 {
            return Err(Error::InsufficientFiles);
        }

        Ok(named)
    }

    /// Write each validated item into the workspace under its sanitized
    /// name, preserving upload order.
    fn stage(&self, items: &[&UploadItem], workspace: &Workspace) -> Result<Vec<PathBuf>> {
        let mut staged = Vec::with_capacity(items.len());

        for item in items {
            let filename = sanitize_filename(&item.filename);
            let path = workspace.file_path(&filename);
            fs::write(&path, &item.payload).map_err(Error::StagingFailed)?;
            tracing::info!(file = %filename, "Saved file");
            staged.push(path);
        }

        Ok(staged)
    }

    /// Run the full workflow for one batch.
    ///
    /// On success the returned artifact owns the workspace; on any
    /// failure the workspace has already been removed.
    pub fn run(&self, batch: &UploadBatch) -> Result<MergedArtifact> {
        let validated = self.validate(batch)?;

        let workspace = Workspace::create(self.config.temp_root.as_deref())?;

        match self.stage_and_merge(&validated, &workspace) {
            Ok(output_path) => Ok(MergedArtifact { path: output_path, workspace }),
            Err(e) => {
                workspace.close();
                Err(e)
            }
        }
    }

    fn stage_and_merge(&self, items: &[&UploadItem], workspace: &Workspace) -> Result<PathBuf> {
        let staged = self.stage(items, workspace)?;

        let output_path = workspace.file_path(MERGED_FILENAME);
        merge_documents(&staged, &output_path).map_err(Error::merge_failed)?;

        tracing::info!(
            inputs = staged.len(),
            output = %output_path.display(),
            "Merged documents"
        );
        Ok(output_path)
    }
}
