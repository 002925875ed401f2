// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report formatting and output

use super::CombinedReport;
use crate::aggregate::IssueStats;
use crate::severity::SeverityBucket;
use crate::types::{ToolKind, UnifiedIssue};
use anyhow::Result;
use colored::*;
use regex::Regex;
use std::fs;
use std::path::Path;

pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print(&self, report: &CombinedReport) {
        println!("\n{}", "=== COMBINED ANALYSIS RESULTS ===".bold().cyan());
        println!();

        self.print_summary(&report.stats);
        println!();

        self.print_tool_counts(&report.stats);
        println!();

        self.print_issues(&report.issues);
        println!();
    }

    fn print_summary(&self, stats: &IssueStats) {
        println!("{}", "SUMMARY".bold().yellow());
        println!("  Total issues: {}", stats.total.to_string().bold());
        println!(
            "  {}: {}   {}: {}   {}: {}   {}: {}",
            "Critical".red(),
            stats.by_severity.critical,
            "High".yellow(),
            stats.by_severity.high,
            "Medium".blue(),
            stats.by_severity.medium,
            "Low".green(),
            stats.by_severity.low
        );

        let unranked = stats.total - stats.by_severity.sum();
        if unranked > 0 {
            println!("  {}: {}", "Unranked".dimmed(), unranked);
        }
    }

    fn print_tool_counts(&self, stats: &IssueStats) {
        println!("{}", "ISSUES BY TOOL".bold().yellow());
        println!(
            "  {}: {}",
            ToolKind::PatternScan.label(),
            stats.by_tool.pattern_scan
        );
        println!(
            "  {}: {}",
            ToolKind::DependencyScan.label(),
            stats.by_tool.dependency_scan
        );
        println!("  {}: {}", ToolKind::Lint.label(), stats.by_tool.lint);
    }

    fn print_issues(&self, issues: &[UnifiedIssue]) {
        println!("{}", "RESULTS".bold().yellow());

        if issues.is_empty() {
            println!("  {}", "No issues found with the current filters.".green());
            return;
        }

        for issue in issues {
            let bucket = issue.bucket();
            let severity = issue.raw_severity().unwrap_or("-");
            let line = issue
                .line()
                .map(|l| l.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "  [{}] {} {}:{} {}: {}",
                severity.color(severity_color(bucket)).bold(),
                issue.tool.label(),
                shorten_path(issue.file()),
                line,
                format_issue_id(issue.identifier()).bold(),
                issue.detail()
            );
        }
    }

    pub fn save<P: AsRef<Path>>(&self, report: &CombinedReport, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        fs::write(path.as_ref(), json)?;
        println!("Report saved to: {}", path.as_ref().display());
        Ok(())
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Console color per canonical bucket
pub fn severity_color(bucket: SeverityBucket) -> &'static str {
    match bucket {
        SeverityBucket::Critical => "red",
        SeverityBucket::High => "yellow",
        SeverityBucket::Medium => "blue",
        SeverityBucket::Low => "green",
        SeverityBucket::Unranked => "white",
    }
}

/// Shorten deep paths to their trailing three components
pub fn shorten_path(path: &str) -> String {
    let parts: Vec<&str> = path.split('/').collect();
    if parts.len() <= 3 {
        return path.to_string();
    }
    format!("...{}", parts[parts.len() - 3..].join("/"))
}

/// Abbreviate hash-like issue ids to their first eight characters;
/// CVE identifiers and ordinary rule names pass through unchanged
pub fn format_issue_id(id: &str) -> String {
    if id.starts_with("CVE-") {
        return id.to_string();
    }
    let hex_like = Regex::new(r"(?i)^[a-f0-9]+$").unwrap();
    if id.len() > 10 && hex_like.is_match(id) {
        return id[..8].to_string();
    }
    id.to_string()
}
