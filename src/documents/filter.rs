// SPDX-License-Identifier: MPL-2.0
//! Search, category filter and sort for the document list.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Document category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Resume,
    CoverLetter,
    Other,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::Resume,
        DocumentKind::CoverLetter,
        DocumentKind::Other,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Resume => "Resume",
            DocumentKind::CoverLetter => "Cover letter",
            DocumentKind::Other => "Other",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the document list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRow {
    pub title: String,
    pub kind: DocumentKind,
    pub date: NaiveDate,
}

impl DocumentRow {
    pub fn new(title: impl Into<String>, kind: DocumentKind, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            kind,
            date,
        }
    }
}

/// Category filter: everything, or a single kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KindFilter {
    #[default]
    All,
    Only(DocumentKind),
}

impl KindFilter {
    fn matches(self, kind: DocumentKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Only(only) => only == kind,
        }
    }
}

impl fmt::Display for KindFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KindFilter::All => f.write_str("All"),
            KindFilter::Only(kind) => kind.fmt(f),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    DateDesc,
    DateAsc,
    TitleAsc,
    TitleDesc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        SortOrder::DateDesc,
        SortOrder::DateAsc,
        SortOrder::TitleAsc,
        SortOrder::TitleDesc,
    ];

    /// Parses `date-desc`, `date-asc`, `title-asc` or `title-desc`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "date-desc" => Some(SortOrder::DateDesc),
            "date-asc" => Some(SortOrder::DateAsc),
            "title-asc" => Some(SortOrder::TitleAsc),
            "title-desc" => Some(SortOrder::TitleDesc),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SortOrder::DateDesc => "date-desc",
            SortOrder::DateAsc => "date-asc",
            SortOrder::TitleAsc => "title-asc",
            SortOrder::TitleDesc => "title-desc",
        }
    }

    fn compare(self, a: &DocumentRow, b: &DocumentRow) -> Ordering {
        match self {
            SortOrder::DateDesc => b.date.cmp(&a.date),
            SortOrder::DateAsc => a.date.cmp(&b.date),
            SortOrder::TitleAsc => compare_titles(&a.title, &b.title),
            SortOrder::TitleDesc => compare_titles(&b.title, &a.title),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortOrder::DateDesc => "Newest first",
            SortOrder::DateAsc => "Oldest first",
            SortOrder::TitleAsc => "Title A-Z",
            SortOrder::TitleDesc => "Title Z-A",
        })
    }
}

/// Case-insensitive first, so `apple` sorts next to `Apple`.
fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[derive(Debug, Clone, Default)]
pub struct DocumentFilter {
    rows: Vec<DocumentRow>,
    search: String,
    kind: KindFilter,
    sort: SortOrder,
}

impl DocumentFilter {
    #[must_use]
    pub fn new(rows: Vec<DocumentRow>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    /// Stores the query lower-cased.
    pub fn set_search(&mut self, query: &str) {
        self.search = query.to_lowercase();
    }

    pub fn set_kind(&mut self, kind: KindFilter) {
        self.kind = kind;
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
    }

    /// Applies a sort by name. Unknown names leave the order unchanged.
    pub fn set_sort_name(&mut self, name: &str) -> bool {
        match SortOrder::from_name(name) {
            Some(sort) => {
                self.sort = sort;
                true
            }
            None => {
                tracing::debug!(name, "ignoring unknown sort order");
                false
            }
        }
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    #[must_use]
    pub fn kind(&self) -> KindFilter {
        self.kind
    }

    #[must_use]
    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    #[must_use]
    pub fn rows(&self) -> &[DocumentRow] {
        &self.rows
    }

    /// Rows matching the search and the kind filter, in sort order.
    #[must_use]
    pub fn visible(&self) -> Vec<&DocumentRow> {
        let mut rows: Vec<&DocumentRow> = self
            .rows
            .iter()
            .filter(|row| self.kind.matches(row.kind))
            .filter(|row| row.title.to_lowercase().contains(&self.search))
            .collect();
        rows.sort_by(|a, b| self.sort.compare(a, b));
        rows
    }

    #[must_use]
    pub fn result_count(&self) -> usize {
        self.visible().len()
    }

    #[must_use]
    pub fn has_no_results(&self) -> bool {
        self.result_count() == 0
    }

    /// Returns whether a search or kind filter is active.
    #[must_use]
    pub fn is_filtered(&self) -> bool {
        !self.search.is_empty() || self.kind != KindFilter::All
    }

    /// Clears the search and kind filter and restores the default sort.
    pub fn reset(&mut self) {
        self.search.clear();
        self.kind = KindFilter::All;
        self.sort = SortOrder::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
    }

    fn filter() -> DocumentFilter {
        DocumentFilter::new(vec![
            DocumentRow::new("Backend resume", DocumentKind::Resume, date("2024-03-01")),
            DocumentRow::new("Cover letter for Acme", DocumentKind::CoverLetter, date("2024-05-10")),
            DocumentRow::new("applied jobs", DocumentKind::Other, date("2023-12-24")),
            DocumentRow::new("Frontend Resume", DocumentKind::Resume, date("2024-01-15")),
        ])
    }

    fn titles(filter: &DocumentFilter) -> Vec<&str> {
        filter.visible().into_iter().map(|row| row.title.as_str()).collect()
    }

    #[test]
    fn default_sort_is_newest_first() {
        let filter = filter();
        assert_eq!(
            titles(&filter),
            vec![
                "Cover letter for Acme",
                "Backend resume",
                "Frontend Resume",
                "applied jobs"
            ]
        );
        assert!(!filter.is_filtered());
    }

    #[test]
    fn search_is_case_insensitive() {
        let mut filter = filter();
        filter.set_search("RESUME");
        assert_eq!(titles(&filter), vec!["Backend resume", "Frontend Resume"]);
        assert!(filter.is_filtered());
    }

    #[test]
    fn search_and_kind_combine() {
        let mut filter = filter();
        filter.set_kind(KindFilter::Only(DocumentKind::Resume));
        filter.set_search("front");
        assert_eq!(titles(&filter), vec!["Frontend Resume"]);
        assert_eq!(filter.result_count(), 1);
    }

    #[test]
    fn no_match_reports_empty() {
        let mut filter = filter();
        filter.set_search("nothing like this");
        assert!(filter.has_no_results());
    }

    #[test]
    fn title_sorts_ignore_case() {
        let mut filter = filter();
        filter.set_sort(SortOrder::TitleAsc);
        assert_eq!(
            titles(&filter),
            vec![
                "applied jobs",
                "Backend resume",
                "Cover letter for Acme",
                "Frontend Resume"
            ]
        );

        assert!(filter.set_sort_name("title-desc"));
        assert_eq!(titles(&filter).first(), Some(&"Frontend Resume"));
    }

    #[test]
    fn unknown_sort_name_is_ignored() {
        let mut filter = filter();
        filter.set_sort(SortOrder::DateAsc);
        assert!(!filter.set_sort_name("random"));
        assert_eq!(filter.sort(), SortOrder::DateAsc);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut filter = filter();
        filter.set_search("acme");
        filter.set_kind(KindFilter::Only(DocumentKind::CoverLetter));
        filter.set_sort(SortOrder::TitleDesc);

        filter.reset();

        assert!(!filter.is_filtered());
        assert_eq!(filter.sort(), SortOrder::DateDesc);
        assert_eq!(filter.result_count(), 4);
    }
}
