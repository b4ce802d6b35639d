//! PDF Merge Service Library
//!
//! A small web service that concatenates uploaded PDF files into a
//! single downloadable document. The core is the merge-with-cleanup
//! workflow: validate a batch of uploads, stage them into a per-request
//! workspace, merge them in upload order, and remove the workspace on
//! every exit path. The HTTP layer is a thin adapter over that
//! workflow.
//!
//! # Example
//!
//! ```no_run
//! use pdf_merge_service::batch::{UploadBatch, UploadItem};
//! use pdf_merge_service::config::ServiceConfig;
//! use pdf_merge_service::workflow::MergeWorkflow;
//!
//! let workflow = MergeWorkflow::new(ServiceConfig::default());
//!
//! let mut batch = UploadBatch::new();
//! batch.push(UploadItem::new("a.pdf", std::fs::read("a.pdf").unwrap()));
//! batch.push(UploadItem::new("b.pdf", std::fs::read("b.pdf").unwrap()));
//!
//! let artifact = workflow.run(&batch).expect("Failed to merge PDFs");
//! let bytes = artifact.into_bytes().expect("Failed to read output");
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod fetch;
pub mod pdf;
pub mod server;
pub mod workflow;
pub mod workspace;

// Re-export commonly used items
pub use batch::{UploadBatch, UploadItem, UploadSource};
pub use config::ServiceConfig;
pub use error::{Error, Result};
pub use server::MergeServer;
pub use workflow::{MergeWorkflow, MergedArtifact};
pub use workspace::Workspace;
