//! PDF manipulation module

pub mod merge;
pub mod metadata;

// Re-export commonly used items
pub use merge::merge_documents;
pub use metadata::count_pages;
