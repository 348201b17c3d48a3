use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure classes for a split run. Every variant is fatal: the run aborts
/// on the first error, and chunk files already written stay on disk.
#[derive(Debug, Error)]
pub enum SplitError {
    #[error("pages per chunk must be at least 1, got {0}")]
    InvalidChunkSize(u32),

    #[error("failed to resolve current working directory")]
    CurrentDir(#[source] io::Error),

    #[error("failed to create output directory {}", .path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to open PDF {}", .path.display())]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },

    #[error("invalid page selection {selection:?}")]
    InvalidSelection { selection: String },

    #[error("page {page} is out of range (1-{total})")]
    PageOutOfRange { page: u32, total: u32 },

    #[error("failed to extract pages {selection} to {}", .output.display())]
    Extraction {
        selection: String,
        output: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
