//! Per-run processing report.

use serde::Serialize;

use crate::selector::SelectorOutcome;

/// Aggregated counts for one pass over the site tree.
///
/// Built up page by page while the walker runs and logged once at the end;
/// there is no global state, a run owns its report (and tests can assert on
/// it directly).
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct ProcessingReport {
    /// HTML pages visited
    pub pages_scanned: usize,
    /// Pages whose markup was modified (or would be, in dry-run mode)
    pub pages_changed: usize,
    /// Selector links whose href was rewritten
    pub links_rewritten: usize,
    /// Selector entries removed for matching the active language
    pub entries_removed: usize,
    /// Snippet demo blocks that had their escape character stripped
    pub snippet_fixes: usize,
    /// Pages skipped because they could not be read or written back
    pub pages_failed: usize,
}

impl ProcessingReport {
    /// Fold one page's results into the report.
    pub fn record_page(&mut self, selector: SelectorOutcome, snippet_fixed: bool) {
        self.pages_scanned += 1;
        self.links_rewritten += selector.links_rewritten;
        self.entries_removed += selector.entries_removed;
        if snippet_fixed {
            self.snippet_fixes += 1;
        }
        if selector.changed() || snippet_fixed {
            self.pages_changed += 1;
        }
    }

    /// Record a page that failed to process.
    pub fn record_failure(&mut self) {
        self.pages_scanned += 1;
        self.pages_failed += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_page_accumulates() {
        let mut report = ProcessingReport::default();
        report.record_page(
            SelectorOutcome {
                links_rewritten: 2,
                entries_removed: 1,
            },
            true,
        );
        report.record_page(SelectorOutcome::default(), false);

        assert_eq!(report.pages_scanned, 2);
        assert_eq!(report.pages_changed, 1);
        assert_eq!(report.links_rewritten, 2);
        assert_eq!(report.entries_removed, 1);
        assert_eq!(report.snippet_fixes, 1);
        assert_eq!(report.pages_failed, 0);
    }

    #[test]
    fn test_snippet_only_page_counts_as_changed() {
        let mut report = ProcessingReport::default();
        report.record_page(SelectorOutcome::default(), true);
        assert_eq!(report.pages_changed, 1);
    }

    #[test]
    fn test_record_failure() {
        let mut report = ProcessingReport::default();
        report.record_failure();
        assert_eq!(report.pages_scanned, 1);
        assert_eq!(report.pages_failed, 1);
    }

    #[test]
    fn test_serializes_to_json() {
        let report = ProcessingReport::default();
        let json = serde_json::to_string(&report).expect("serialize");
        assert!(json.contains("\"pages_scanned\":0"));
    }
}
