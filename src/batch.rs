//! Upload batch types
//!
//! The workflow never talks to a transport directly. Anything that can
//! hand over a declared filename and a byte payload (a multipart field,
//! a fetched URL buffer) satisfies [`UploadSource`] and can be folded
//! into an [`UploadBatch`].

/// Narrow capability interface for an upload transport.
pub trait UploadSource {
    /// Filename as declared by the client; may be empty for blank
    /// form selections.
    fn declared_name(&self) -> &str;

    /// The full buffered payload.
    fn payload(&self) -> &[u8];
}

/// A single uploaded document: declared filename plus buffered bytes.
#[derive(Debug, Clone)]
pub struct UploadItem {
    pub filename: String,
    pub payload: Vec<u8>,
}

impl UploadItem {
    pub fn new(filename: impl Into<String>, payload: Vec<u8>) -> Self {
        Self { filename: filename.into(), payload }
    }
}

impl UploadSource for UploadItem {
    fn declared_name(&self) -> &str {
        &self.filename
    }

    fn payload(&self) -> &[u8] {
        &self.payload
    }
}

/// Ordered sequence of uploaded documents.
///
/// Order is load-bearing: the merged output's page order equals the
/// batch order.
#[derive(Debug, Clone, Default)]
pub struct UploadBatch {
    items: Vec<UploadItem>,
}

impl UploadBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a batch from any collection of upload sources, preserving
    /// iteration order.
    pub fn from_sources<S, I>(sources: I) -> Self
    where
        S: UploadSource,
        I: IntoIterator<Item = S>,
    {
        let items = sources
            .into_iter()
            .map(|s| UploadItem::new(s.declared_name().to_string(), s.payload().to_vec()))
            .collect();
        Self { items }
    }

    pub fn push(&mut self, item: UploadItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[UploadItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Sanitize a declared filename for use inside a workspace.
///
/// Keeps only the final path component, then replaces every character
/// outside `[A-Za-z0-9._-]` with an underscore. The result can never
/// escape the workspace directory.
pub fn sanitize_filename(name: &str) -> String {
    let base = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(name);

    let sanitized: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    // Leading dots would produce hidden files or "..".
    let sanitized = sanitized.trim_start_matches('.').to_string();

    if sanitized.is_empty() {
        "unnamed".to_string()
    } else {
        sanitized
    }
}
