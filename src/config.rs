//! Service configuration
//!
//! All tunables live in an explicit [`ServiceConfig`] passed into the
//! workflow and server constructors; there is no ambient global state.

use std::net::SocketAddr;
use std::path::PathBuf;
use serde::{Deserialize, Serialize};

/// Default maximum total upload size (50MB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Fixed filename of the merged output inside the workspace
pub const MERGED_FILENAME: &str = "merged.pdf";

/// Configuration for the merge service
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Address the HTTP server binds to
    pub bind_addr: SocketAddr,
    /// Maximum total request body size in bytes; larger uploads are
    /// rejected before the workflow runs
    pub max_upload_bytes: usize,
    /// Acceptable file extensions, matched case-insensitively
    pub allowed_extensions: Vec<String>,
    /// Suggested filename for the download
    pub download_filename: String,
    /// Root directory for per-request workspaces; `None` uses the system
    /// temp directory
    pub temp_root: Option<PathBuf>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:5000".parse().unwrap(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            allowed_extensions: vec!["pdf".to_string()],
            download_filename: "merged.pdf".to_string(),
            temp_root: None,
        }
    }
}

impl ServiceConfig {
    /// Check whether a declared filename has an allowed extension.
    ///
    /// Only the text after the last dot counts; a file with no dot at
    /// all is never allowed.
    pub fn is_allowed_file(&self, filename: &str) -> bool {
        match filename.rsplit_once('.') {
            Some((_, ext)) => self
                .allowed_extensions
                .iter()
                .any(|a| a.eq_ignore_ascii_case(ext)),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let c = ServiceConfig::default();
        assert_eq!(c.max_upload_bytes, 50 * 1024 * 1024);
        assert_eq!(c.allowed_extensions, vec!["pdf"]);
        assert_eq!(c.download_filename, "merged.pdf");
        assert!(c.temp_root.is_none());
    }

    #[test]
    fn test_allowed_file_case_insensitive() {
        let c = ServiceConfig::default();
        assert!(c.is_allowed_file("contract.pdf"));
        assert!(c.is_allowed_file("contract.PDF"));
        assert!(c.is_allowed_file("Contract.Pdf"));
    }

    #[test]
    fn test_disallowed_files() {
        let c = ServiceConfig::default();
        assert!(!c.is_allowed_file("notes.txt"));
        assert!(!c.is_allowed_file("archive.pdf.zip"));
        assert!(!c.is_allowed_file("no_extension"));
        assert!(!c.is_allowed_file("trailing."));
    }

    #[test]
    fn test_bare_extension_allowed() {
        // Only the text after the last dot counts, so ".pdf" passes.
        let c = ServiceConfig::default();
        assert!(c.is_allowed_file(".pdf"));
    }
}
