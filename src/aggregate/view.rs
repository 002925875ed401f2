// SPDX-License-Identifier: PMPL-1.0-or-later

//! Filter and sort engine for the unified collection
//!
//! Pure functions over `UnifiedIssue` slices: conjunctive tool/severity
//! predicates, then an ordered projection by one sort key. Unknown filter
//! values and sort keys degrade to identity at the parse boundary instead
//! of erroring.

use crate::severity::SeverityBucket;
use crate::types::{ToolKind, UnifiedIssue};
use std::cmp::Ordering;

/// Tool predicate: everything, or one tool exactly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolFilter {
    #[default]
    All,
    Only(ToolKind),
}

impl ToolFilter {
    /// Lenient parse: "all" and unknown values are identity
    pub fn parse(value: &str) -> Self {
        match ToolKind::parse(value) {
            Some(tool) => ToolFilter::Only(tool),
            None => ToolFilter::All,
        }
    }

    pub fn matches(&self, issue: &UnifiedIssue) -> bool {
        match self {
            ToolFilter::All => true,
            ToolFilter::Only(tool) => issue.tool == *tool,
        }
    }
}

/// Severity predicate: everything, or one canonical bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeverityFilter {
    #[default]
    All,
    Bucket(SeverityBucket),
}

impl SeverityFilter {
    /// Lenient parse through the canonical classifier, so "high" and
    /// "error" select the same bucket. "all" and unknown values are
    /// identity.
    pub fn parse(value: &str) -> Self {
        match SeverityBucket::classify(value) {
            SeverityBucket::Unranked => SeverityFilter::All,
            bucket => SeverityFilter::Bucket(bucket),
        }
    }

    pub fn matches(&self, issue: &UnifiedIssue) -> bool {
        match self {
            SeverityFilter::All => true,
            SeverityFilter::Bucket(bucket) => issue.bucket() == *bucket,
        }
    }
}

/// Sortable columns. Combined views expose severity/tool/file; per-tool
/// views add line and rule/check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Severity,
    Tool,
    File,
    Line,
    Rule,
}

impl SortKey {
    /// Lenient parse; unknown keys yield `None`, which leaves the baseline
    /// concatenation order untouched
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "severity" => Some(SortKey::Severity),
            "tool" => Some(SortKey::Tool),
            "file" => Some(SortKey::File),
            "line" => Some(SortKey::Line),
            "rule" | "check" => Some(SortKey::Rule),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => SortOrder::Ascending,
            _ => SortOrder::Descending,
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Current filter and sort selection for a results view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    pub tool: ToolFilter,
    pub severity: SeverityFilter,
    pub sort_key: Option<SortKey>,
    pub sort_order: SortOrder,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            tool: ToolFilter::All,
            severity: SeverityFilter::All,
            sort_key: Some(SortKey::Severity),
            sort_order: SortOrder::Descending,
        }
    }
}

impl ViewOptions {
    /// Column-header toggle: selecting the active key flips the direction,
    /// selecting a new key resets to descending (most severe first)
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort_key == Some(key) {
            self.sort_order = self.sort_order.flipped();
        } else {
            self.sort_key = Some(key);
            self.sort_order = SortOrder::Descending;
        }
    }
}

/// Apply the view's predicates and ordering to the unified collection.
///
/// Pure: the input slice is never mutated; a fresh ordered sequence is
/// returned. Ties keep their prior relative order: `slice::sort_by` is a
/// stable sort and direction is applied inside the comparator, so
/// equal-key runs are never flipped. Tie order is implementation-defined
/// stability, not a contract callers should build on.
pub fn filter_and_sort(unified: &[UnifiedIssue], options: &ViewOptions) -> Vec<UnifiedIssue> {
    let mut selected: Vec<UnifiedIssue> = unified
        .iter()
        .filter(|issue| options.tool.matches(issue) && options.severity.matches(issue))
        .cloned()
        .collect();

    if let Some(key) = options.sort_key {
        selected.sort_by(|a, b| {
            let base = compare_by_key(a, b, key);
            // Severity's descending direction means most severe first,
            // which is ascending bucket rank; other keys descend from
            // their natural ascending order.
            match (key, options.sort_order) {
                (SortKey::Severity, SortOrder::Descending) => base,
                (SortKey::Severity, SortOrder::Ascending) => base.reverse(),
                (_, SortOrder::Ascending) => base,
                (_, SortOrder::Descending) => base.reverse(),
            }
        });
    }

    selected
}

/// Base ordering per key: bucket rank for severity (rank 0 = CRITICAL
/// first), lexical for tool/file/rule, numeric for line.
fn compare_by_key(a: &UnifiedIssue, b: &UnifiedIssue, key: SortKey) -> Ordering {
    match key {
        SortKey::Severity => a.bucket().rank().cmp(&b.bucket().rank()),
        SortKey::Tool => a.tool.tag().cmp(b.tool.tag()),
        SortKey::File => a.file().cmp(b.file()),
        // Findings without a line number sort after numbered ones
        SortKey::Line => a
            .line()
            .unwrap_or(u32::MAX)
            .cmp(&b.line().unwrap_or(u32::MAX)),
        SortKey::Rule => a.identifier().cmp(b.identifier()),
    }
}
