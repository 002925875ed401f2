// SPDX-License-Identifier: PMPL-1.0-or-later

//! Summary statistics over the unified collection

use crate::severity::SeverityBucket;
use crate::types::{ToolKind, UnifiedIssue};
use serde::{Deserialize, Serialize};

/// Counts per canonical severity bucket. Unranked findings are counted in
/// `IssueStats::total` but in none of these, so the bucket sum can fall
/// short of the total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl SeverityCounts {
    pub fn sum(&self) -> usize {
        self.critical + self.high + self.medium + self.low
    }
}

/// Counts per source tool
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCounts {
    pub pattern_scan: usize,
    pub dependency_scan: usize,
    pub lint: usize,
}

impl ToolCounts {
    pub fn sum(&self) -> usize {
        self.pattern_scan + self.dependency_scan + self.lint
    }
}

/// Aggregate counts for a unified collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueStats {
    pub total: usize,
    pub by_severity: SeverityCounts,
    pub by_tool: ToolCounts,
}

/// One pass over the unified collection, bucketing through the canonical
/// classifier. `total` always equals the per-tool sum.
pub fn compute_stats(unified: &[UnifiedIssue]) -> IssueStats {
    let mut stats = IssueStats {
        total: unified.len(),
        ..IssueStats::default()
    };

    for issue in unified {
        match issue.bucket() {
            SeverityBucket::Critical => stats.by_severity.critical += 1,
            SeverityBucket::High => stats.by_severity.high += 1,
            SeverityBucket::Medium => stats.by_severity.medium += 1,
            SeverityBucket::Low => stats.by_severity.low += 1,
            SeverityBucket::Unranked => {}
        }
        match issue.tool {
            ToolKind::PatternScan => stats.by_tool.pattern_scan += 1,
            ToolKind::DependencyScan => stats.by_tool.dependency_scan += 1,
            ToolKind::Lint => stats.by_tool.lint += 1,
        }
    }

    stats
}
