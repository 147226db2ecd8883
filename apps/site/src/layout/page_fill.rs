//! Page Fill Analysis: how much of the A4 sheet the exported résumé uses.
//!
//! The export is meant to read as one continuously flowing page. The PDF
//! engine still paginates when content runs past the bottom padding, and this
//! module turns the final cursor position into a verdict the engine logs.

use serde::{Deserialize, Serialize};

use crate::layout::font_metrics::PageConfig;

/// Overall page fill verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PageFillVerdict {
    /// Everything fits on the first page.
    SinglePage,
    /// Fits on one page but leaves more than a third of it empty.
    Sparse,
    /// Content flowed onto additional pages.
    Overflow { extra_pages: usize },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageFillAnalysis {
    pub pages: usize,
    /// Fraction of the last page's content area in use (0.0 – 1.0).
    pub last_page_fill: f32,
    pub whitespace_fraction: f32,
    pub verdict: PageFillVerdict,
}

const SPARSE_WHITESPACE: f32 = 0.33;

/// Analyzes the fill given the page count and the final cursor `y` (points
/// from the top edge) on the last page.
pub fn analyze_page_fill(pages: usize, last_cursor_y: f32, config: &PageConfig) -> PageFillAnalysis {
    let pages = pages.max(1);
    let used = (last_cursor_y - config.padding_top_pt).max(0.0);
    let last_page_fill = (used / config.content_height()).clamp(0.0, 1.0);
    let whitespace_fraction = 1.0 - last_page_fill;

    let verdict = if pages > 1 {
        PageFillVerdict::Overflow {
            extra_pages: pages - 1,
        }
    } else if whitespace_fraction > SPARSE_WHITESPACE {
        PageFillVerdict::Sparse
    } else {
        PageFillVerdict::SinglePage
    };

    PageFillAnalysis {
        pages,
        last_page_fill,
        whitespace_fraction,
        verdict,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::a4_page_config;

    #[test]
    fn test_full_single_page() {
        let config = a4_page_config();
        let analysis = analyze_page_fill(1, config.content_bottom() - 20.0, &config);
        assert_eq!(analysis.verdict, PageFillVerdict::SinglePage);
        assert!(analysis.last_page_fill > 0.9);
    }

    #[test]
    fn test_sparse_single_page() {
        let config = a4_page_config();
        let analysis = analyze_page_fill(1, config.padding_top_pt + 100.0, &config);
        assert_eq!(analysis.verdict, PageFillVerdict::Sparse);
        assert!(analysis.whitespace_fraction > 0.8);
    }

    #[test]
    fn test_overflow_counts_extra_pages() {
        let config = a4_page_config();
        let analysis = analyze_page_fill(3, 200.0, &config);
        assert_eq!(analysis.verdict, PageFillVerdict::Overflow { extra_pages: 2 });
        assert_eq!(analysis.pages, 3);
    }

    #[test]
    fn test_zero_pages_treated_as_one() {
        let config = a4_page_config();
        let analysis = analyze_page_fill(0, config.padding_top_pt, &config);
        assert_eq!(analysis.pages, 1);
        assert_eq!(analysis.last_page_fill, 0.0);
    }
}
