use crate::chunk::{self, PageWindow};
use crate::error::SplitError;
use crate::pdf::DocumentEngine;
use std::num::NonZeroU32;
use std::path::PathBuf;
use tracing::debug;

/// Immutable configuration for one split run.
#[derive(Debug, Clone)]
pub struct SplitRequest {
    pub input: PathBuf,
    /// Defaults to the current working directory when `None`.
    pub output_dir: Option<PathBuf>,
    pub pages_per_chunk: u32,
}

/// One written output file and the page window it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    pub path: PathBuf,
    pub window: PageWindow,
}

/// Split the input into fixed-size chunks, one output file per window.
///
/// Windows are processed sequentially in ascending order. The first engine
/// failure aborts the run: chunks already written stay on disk, and later
/// windows are never attempted.
pub fn run(
    engine: &dyn DocumentEngine,
    request: &SplitRequest,
) -> Result<Vec<OutputTarget>, SplitError> {
    let pages_per_chunk = NonZeroU32::new(request.pages_per_chunk)
        .ok_or(SplitError::InvalidChunkSize(request.pages_per_chunk))?;

    let output_dir = match &request.output_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().map_err(SplitError::CurrentDir)?,
    };
    std::fs::create_dir_all(&output_dir).map_err(|source| SplitError::DirectoryCreation {
        path: output_dir.clone(),
        source,
    })?;

    let base = chunk::base_name(&request.input);
    let total_pages = engine.page_count(&request.input)?;
    debug!("{} has {} pages", request.input.display(), total_pages);

    let mut targets = Vec::new();
    for window in chunk::windows(total_pages, pages_per_chunk) {
        let path = output_dir.join(window.file_name(base));

        engine.extract_range(&request.input, &path, &window.selection())?;

        println!(
            "Created {} with pages {} to {}",
            path.display(),
            window.start,
            window.end
        );
        targets.push(OutputTarget { path, window });
    }

    Ok(targets)
}
