use crate::error::SplitError;
use crate::page_selection::PageSelection;
use crate::pdf::DocumentEngine;
use lopdf::Document;
use std::path::Path;
use tracing::debug;

/// Thin wrapper over a parsed `lopdf` document.
pub struct PdfDocument {
    doc: Document,
}

impl PdfDocument {
    pub fn open(path: &Path) -> Result<Self, SplitError> {
        let doc = Document::load(path).map_err(|source| SplitError::DocumentRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(PdfDocument { doc })
    }

    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Build a new document containing only `pages` (1-based), by cloning
    /// the source and deleting every page not in the list.
    pub fn extract_pages(&self, pages: &[u32]) -> Document {
        let mut new_doc = self.doc.clone();

        let pages_to_delete: Vec<u32> = self
            .doc
            .get_pages()
            .into_keys()
            .filter(|num| !pages.contains(num))
            .collect();

        if !pages_to_delete.is_empty() {
            new_doc.delete_pages(&pages_to_delete);
        }

        new_doc
    }
}

/// `lopdf`-backed document engine. Each extraction re-opens the input, so
/// no document handle is held across the run.
pub struct LopdfEngine;

impl DocumentEngine for LopdfEngine {
    fn page_count(&self, path: &Path) -> Result<u32, SplitError> {
        Ok(PdfDocument::open(path)?.page_count())
    }

    fn extract_range(
        &self,
        input: &Path,
        output: &Path,
        selection: &str,
    ) -> Result<(), SplitError> {
        let doc = PdfDocument::open(input)?;
        let pages = PageSelection::parse(selection)?.expand(doc.page_count())?;

        debug!("extracting pages {} to {}", selection, output.display());

        let mut part = doc.extract_pages(&pages);
        part.save(output).map_err(|source| SplitError::Extraction {
            selection: selection.to_string(),
            output: output.to_path_buf(),
            source: Box::new(source),
        })?;

        Ok(())
    }
}
