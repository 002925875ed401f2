// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report generation module

pub mod formatter;
pub mod output;
pub mod sarif;

use crate::aggregate::{compute_stats, filter_and_sort, IssueStats, ViewOptions};
use crate::types::UnifiedIssue;
use anyhow::Result;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub use formatter::ReportFormatter;
pub use output::ReportOutputFormat;

/// The serialized report artifact: statistics over the whole unified
/// collection plus the filtered, ordered sequence a view displays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedReport {
    pub generated_at: String,
    pub stats: IssueStats,
    pub issues: Vec<UnifiedIssue>,
}

/// Build a combined report: stats always cover the full collection, the
/// issue list carries the view's filter and ordering
pub fn build_report(unified: &[UnifiedIssue], view: &ViewOptions) -> CombinedReport {
    CombinedReport {
        generated_at: Utc::now().to_rfc3339(),
        stats: compute_stats(unified),
        issues: filter_and_sort(unified, view),
    }
}

/// Save report JSON to file
pub fn save_report<P: AsRef<Path>>(report: &CombinedReport, path: P) -> Result<()> {
    let formatter = ReportFormatter::new();
    formatter.save(report, path)
}

/// Print report to console
pub fn print_report(report: &CombinedReport) {
    let formatter = ReportFormatter::new();
    formatter.print(report);
}
