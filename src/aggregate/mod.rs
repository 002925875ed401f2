// SPDX-License-Identifier: PMPL-1.0-or-later

//! Result aggregation
//!
//! Merges the three per-tool finding arrays into one tagged collection for
//! combined filtering, sorting, and statistics. The per-tool arrays are the
//! source of truth; everything here is recomputed from them on demand and
//! never cached.

pub mod stats;
pub mod view;

use crate::types::{AnalysisResultSet, Issue, ToolKind, UnifiedIssue};

pub use stats::{compute_stats, IssueStats, SeverityCounts, ToolCounts};
pub use view::{filter_and_sort, SeverityFilter, SortKey, SortOrder, ToolFilter, ViewOptions};

/// Tag each finding with its source tool.
///
/// Order-preserving structural copy; no deduplication and no field
/// validation. The input slice is left untouched.
pub fn tag_with_tool<I>(issues: &[I], tool: ToolKind) -> Vec<UnifiedIssue>
where
    I: Clone + Into<Issue>,
{
    issues
        .iter()
        .map(|issue| UnifiedIssue {
            tool,
            issue: issue.clone().into(),
        })
        .collect()
}

/// Merge a result set into one unified collection, in the fixed order
/// pattern scan, dependency scan, lint.
///
/// Always allocates fresh: the underlying set can be replaced at any time
/// and there is no invalidation mechanism.
pub fn build_unified(set: &AnalysisResultSet) -> Vec<UnifiedIssue> {
    let mut unified = Vec::with_capacity(set.len());
    unified.extend(tag_with_tool(&set.pattern_scan, ToolKind::PatternScan));
    unified.extend(tag_with_tool(&set.dependency_scan, ToolKind::DependencyScan));
    unified.extend(tag_with_tool(&set.lint, ToolKind::Lint));
    unified
}
