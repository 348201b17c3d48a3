pub mod document;

pub use document::LopdfEngine;

use crate::error::SplitError;
use std::path::Path;

/// Narrow contract over the document engine: page-count introspection and
/// page-range extraction. The split logic only talks to this trait, so it
/// can be exercised with a fake engine in tests.
pub trait DocumentEngine {
    /// Open the document at `path` and return its total page count.
    fn page_count(&self, path: &Path) -> Result<u32, SplitError>;

    /// Extract the pages named by `selection` (`"{start}-{end}"`) from
    /// `input` into a new document written at `output`.
    fn extract_range(
        &self,
        input: &Path,
        output: &Path,
        selection: &str,
    ) -> Result<(), SplitError>;
}
