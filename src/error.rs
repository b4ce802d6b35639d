//! Error types for the merge service

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the merge service
#[derive(Error, Debug)]
pub enum Error {
    /// Upload contained no items with a filename
    #[error("No files selected")]
    NoFilesSelected,

    /// A file in the batch has a disallowed extension; rejects the whole batch
    #[error("Invalid file type: {0}. Only PDF files are allowed.")]
    InvalidFileType(String),

    /// Fewer than two valid files remained after filtering
    #[error("Please select at least 2 PDF files to merge")]
    InsufficientFiles,

    /// Writing an upload into the workspace failed
    #[error("Failed to stage uploaded file: {0}")]
    StagingFailed(#[source] std::io::Error),

    /// The merge primitive failed; the original cause is preserved
    #[error("Error merging PDFs: {0}")]
    MergeFailed(#[source] Box<Error>),

    /// A required document URL was absent from the request
    #[error("Missing file URL: {0}")]
    MissingUrl(&'static str),

    /// Fetching a remote document failed
    #[error("Failed to fetch remote document: {0}")]
    Fetch(#[from] reqwest::Error),

    /// A remote document exceeded the configured size limit
    #[error("Remote document too large: exceeds {0} bytes")]
    RemoteTooLarge(usize),

    /// Reading the multipart upload failed
    #[error("Failed to read upload: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    /// PDF processing error
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// Invalid PDF (no pages)
    #[error("PDF has no pages: {}", .0.display())]
    EmptyPdf(PathBuf),

    /// File not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// General error
    #[error("{0}")]
    General(String),
}

impl Error {
    /// Wrap a merge-primitive failure, keeping the cause for diagnostics.
    pub fn merge_failed(cause: Error) -> Self {
        Error::MergeFailed(Box::new(cause))
    }
}
