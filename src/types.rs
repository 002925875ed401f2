// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for scan-triage
//!
//! Models the three external analyzers' finding records, the per-run
//! result set that holds them, and the unified record produced at
//! aggregation time.

use crate::severity::SeverityBucket;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The external analyzers whose findings are aggregated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolKind {
    PatternScan,
    DependencyScan,
    Lint,
}

impl ToolKind {
    /// Wire tag, as used in filters and the unified `tool` field
    pub fn tag(&self) -> &'static str {
        match self {
            ToolKind::PatternScan => "pattern-scan",
            ToolKind::DependencyScan => "dependency-scan",
            ToolKind::Lint => "lint",
        }
    }

    /// Display name for report headings
    pub fn label(&self) -> &'static str {
        match self {
            ToolKind::PatternScan => "Pattern Scan",
            ToolKind::DependencyScan => "Dependency Scan",
            ToolKind::Lint => "Lint",
        }
    }

    /// Fixed aggregation order: pattern scan, dependency scan, lint
    pub fn all() -> [Self; 3] {
        [
            ToolKind::PatternScan,
            ToolKind::DependencyScan,
            ToolKind::Lint,
        ]
    }

    /// Lenient parse; `None` for anything that is not a known tool
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pattern-scan" | "pattern" => Some(ToolKind::PatternScan),
            "dependency-scan" | "dependency" => Some(ToolKind::DependencyScan),
            "lint" => Some(ToolKind::Lint),
            _ => None,
        }
    }
}

impl std::fmt::Display for ToolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A finding from the pattern-based source scanner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternScanIssue {
    #[serde(default)]
    pub file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    pub rule: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// A vulnerability reported by the dependency scanner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyScanIssue {
    #[serde(default)]
    pub file: String,
    pub vulnerability: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_in: Option<String>,
}

/// A diagnostic from the C/C++ linter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LintIssue {
    #[serde(default)]
    pub file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    pub check: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
}

/// Any tool's finding. Untagged on the wire: each variant is identified by
/// its id field (`rule`, `vulnerability`, `check`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Issue {
    PatternScan(PatternScanIssue),
    DependencyScan(DependencyScanIssue),
    Lint(LintIssue),
}

impl Issue {
    pub fn file(&self) -> &str {
        match self {
            Issue::PatternScan(i) => &i.file,
            Issue::DependencyScan(i) => &i.file,
            Issue::Lint(i) => &i.file,
        }
    }

    /// Raw tool-native severity token, if present
    pub fn raw_severity(&self) -> Option<&str> {
        match self {
            Issue::PatternScan(i) => i.severity.as_deref(),
            Issue::DependencyScan(i) => i.severity.as_deref(),
            Issue::Lint(i) => i.severity.as_deref(),
        }
    }

    pub fn line(&self) -> Option<u32> {
        match self {
            Issue::PatternScan(i) => i.line,
            Issue::DependencyScan(_) => None,
            Issue::Lint(i) => i.line,
        }
    }

    /// Rule id, CVE id, or check name
    pub fn identifier(&self) -> &str {
        match self {
            Issue::PatternScan(i) => &i.rule,
            Issue::DependencyScan(i) => &i.vulnerability,
            Issue::Lint(i) => &i.check,
        }
    }

    /// Free-text message or vulnerability description
    pub fn detail(&self) -> &str {
        match self {
            Issue::PatternScan(i) => &i.message,
            Issue::DependencyScan(i) => &i.description,
            Issue::Lint(i) => &i.message,
        }
    }

    /// Canonical bucket for the raw severity; missing tokens are `Unranked`
    pub fn bucket(&self) -> SeverityBucket {
        SeverityBucket::classify(self.raw_severity().unwrap_or(""))
    }
}

impl From<PatternScanIssue> for Issue {
    fn from(issue: PatternScanIssue) -> Self {
        Issue::PatternScan(issue)
    }
}

impl From<DependencyScanIssue> for Issue {
    fn from(issue: DependencyScanIssue) -> Self {
        Issue::DependencyScan(issue)
    }
}

impl From<LintIssue> for Issue {
    fn from(issue: LintIssue) -> Self {
        Issue::Lint(issue)
    }
}

/// An issue tagged with its source tool. Built only at aggregation time from
/// a structural copy of the source record; the per-tool arrays stay usable
/// on their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnifiedIssue {
    pub tool: ToolKind,
    #[serde(flatten)]
    pub issue: Issue,
}

impl UnifiedIssue {
    pub fn file(&self) -> &str {
        self.issue.file()
    }

    pub fn raw_severity(&self) -> Option<&str> {
        self.issue.raw_severity()
    }

    pub fn line(&self) -> Option<u32> {
        self.issue.line()
    }

    pub fn identifier(&self) -> &str {
        self.issue.identifier()
    }

    pub fn detail(&self) -> &str {
        self.issue.detail()
    }

    pub fn bucket(&self) -> SeverityBucket {
        self.issue.bucket()
    }

    /// Standardized one-line description, "<id>: <detail>"
    pub fn description(&self) -> String {
        format!("{}: {}", self.issue.identifier(), self.issue.detail())
    }
}

/// One complete run's output across all three tools. Owned by the session
/// and only ever replaced wholesale, never patched in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResultSet {
    #[serde(default)]
    pub pattern_scan: Vec<PatternScanIssue>,
    #[serde(default)]
    pub dependency_scan: Vec<DependencyScanIssue>,
    #[serde(default)]
    pub lint: Vec<LintIssue>,
}

impl AnalysisResultSet {
    /// Total finding count across all three tools
    pub fn len(&self) -> usize {
        self.pattern_scan.len() + self.dependency_scan.len() + self.lint.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Pattern scanner configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatternScanConfig {
    #[serde(default)]
    pub rules_path: String,
    #[serde(default)]
    pub selected_rules: Vec<String>,
}

/// Dependency scanner configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DependencyScanConfig {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub options: HashMap<String, serde_json::Value>,
}

/// Linter configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LintConfig {
    #[serde(default)]
    pub checks: Vec<String>,
    #[serde(default)]
    pub options: HashMap<String, serde_json::Value>,
}

/// Per-tool configuration, shipped with every analyze request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolConfigs {
    #[serde(default)]
    pub pattern_scan: PatternScanConfig,
    #[serde(default)]
    pub dependency_scan: DependencyScanConfig,
    #[serde(default)]
    pub lint: LintConfig,
}
