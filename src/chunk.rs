use std::num::NonZeroU32;
use std::path::Path;

/// A contiguous inclusive range of 1-based page numbers assigned to one
/// output file, tagged with its 1-based part number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start: u32,
    pub end: u32,
    pub part: u32,
}

impl PageWindow {
    /// Output file name for this window: `{base}-part{NN}.pdf`, with the
    /// part number zero-padded to at least two digits.
    pub fn file_name(&self, base: &str) -> String {
        format!("{}-part{:02}.pdf", base, self.part)
    }

    /// Page-selection descriptor in the document engine's syntax.
    pub fn selection(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }
}

/// Partition `[1, total_pages]` into ascending windows of at most
/// `pages_per_chunk` pages each. Windows are contiguous, non-overlapping,
/// and cover the full range; `total_pages == 0` yields no windows.
pub fn windows(total_pages: u32, pages_per_chunk: NonZeroU32) -> Vec<PageWindow> {
    let step = pages_per_chunk.get();
    let mut out = Vec::new();
    let mut start = 1u32;
    let mut part = 1u32;
    while start <= total_pages {
        let end = start.saturating_add(step - 1).min(total_pages);
        out.push(PageWindow { start, end, part });
        if end == total_pages {
            break;
        }
        start = end + 1;
        part += 1;
    }
    out
}

/// Base name of the input file: the final path segment with a single
/// trailing `.pdf` stripped. A file named just `.pdf` keeps its name.
pub fn base_name(input: &Path) -> &str {
    let name = input
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("document");
    match name.strip_suffix(".pdf") {
        Some(stem) if !stem.is_empty() => stem,
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn chunk(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn test_even_split() {
        let wins = windows(1000, chunk(500));
        assert_eq!(
            wins,
            vec![
                PageWindow {
                    start: 1,
                    end: 500,
                    part: 1
                },
                PageWindow {
                    start: 501,
                    end: 1000,
                    part: 2
                },
            ]
        );
    }

    #[test]
    fn test_document_smaller_than_chunk() {
        let wins = windows(10, chunk(500));
        assert_eq!(
            wins,
            vec![PageWindow {
                start: 1,
                end: 10,
                part: 1
            }]
        );
    }

    #[test]
    fn test_empty_document() {
        assert!(windows(0, chunk(500)).is_empty());
    }

    #[test]
    fn test_short_final_window() {
        let wins = windows(10, chunk(3));
        let bounds: Vec<_> = wins.iter().map(|w| (w.start, w.end)).collect();
        assert_eq!(bounds, vec![(1, 3), (4, 6), (7, 9), (10, 10)]);
    }

    #[test]
    fn test_file_name_zero_padding() {
        let w = PageWindow {
            start: 1,
            end: 5,
            part: 1,
        };
        assert_eq!(w.file_name("report"), "report-part01.pdf");

        let w = PageWindow {
            start: 991,
            end: 1000,
            part: 100,
        };
        assert_eq!(w.file_name("report"), "report-part100.pdf");
    }

    #[test]
    fn test_selection_syntax() {
        let w = PageWindow {
            start: 501,
            end: 1000,
            part: 2,
        };
        assert_eq!(w.selection(), "501-1000");
    }

    #[test]
    fn test_base_name_strips_pdf_extension() {
        assert_eq!(base_name(Path::new("report.pdf")), "report");
        assert_eq!(base_name(Path::new("docs/archive.tar.pdf")), "archive.tar");
    }

    #[test]
    fn test_base_name_keeps_other_extensions() {
        assert_eq!(base_name(Path::new("notes.txt")), "notes.txt");
        assert_eq!(base_name(Path::new("report")), "report");
    }

    #[test]
    fn test_base_name_bare_extension() {
        assert_eq!(base_name(Path::new(".pdf")), ".pdf");
    }

    proptest! {
        #[test]
        fn windows_partition_the_page_range(total in 0u32..5000, step in 1u32..600) {
            let step = chunk(step);
            let wins = windows(total, step);

            prop_assert_eq!(wins.len() as u32, total.div_ceil(step.get()));

            let mut next_start = 1u32;
            for (i, w) in wins.iter().enumerate() {
                prop_assert_eq!(w.start, next_start);
                prop_assert_eq!(w.part as usize, i + 1);
                prop_assert!(w.end >= w.start);
                prop_assert!(w.end - w.start + 1 <= step.get());
                next_start = w.end + 1;
            }

            match wins.last() {
                Some(last) => prop_assert_eq!(last.end, total),
                None => prop_assert_eq!(total, 0),
            }
        }
    }
}
