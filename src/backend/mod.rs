// SPDX-License-Identifier: PMPL-1.0-or-later

//! Analysis backend boundary
//!
//! The scanners themselves are external services; this module defines the
//! contract the aggregator expects from them. `AnalysisBackend` is the seam
//! the session calls through, and the endpoint helpers document the HTTP
//! shape a real transport would target. Nothing here opens a connection.

pub mod fixture;

use crate::types::{AnalysisResultSet, ToolConfigs, ToolKind};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use fixture::FixtureBackend;

/// Request bodies are JSON except analyze uploads, which are multipart
pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_MULTIPART: &str = "multipart/form-data";

/// Everything a run needs: the selected files plus the per-tool
/// configuration, shipped to each tool's analyze endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub files: Vec<PathBuf>,
    pub configs: ToolConfigs,
}

/// One selectable rule or check, as listed by a tool's metadata endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleInfo {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Acknowledgement for a persisted tool configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigAck {
    pub tool: ToolKind,
    pub saved: bool,
}

/// The run-analysis collaborator. Implementations collect tool output and
/// shape it into an `AnalysisResultSet`; the session only sees this trait.
pub trait AnalysisBackend {
    /// Submit the selected files and configuration for analysis and return
    /// the complete result set for the run
    fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisResultSet>;

    /// List the rules or checks a tool can be configured with
    fn available_rules(&self, tool: ToolKind) -> Result<Vec<RuleInfo>>;

    /// Persist a tool's configuration server-side
    fn save_config(&self, tool: ToolKind, configs: &ToolConfigs) -> Result<ConfigAck>;
}

/// `POST /<tool>/analyze`, multipart: files plus JSON config
pub fn analyze_endpoint(tool: ToolKind) -> String {
    format!("/{}/analyze", tool.tag())
}

/// `GET` path for rule/check metadata. The dependency scanner has no
/// selectable rule list, only per-vulnerability lookups, so it has none.
pub fn rules_endpoint(tool: ToolKind) -> Option<String> {
    match tool {
        ToolKind::PatternScan => Some(format!("/{}/rules", tool.tag())),
        ToolKind::Lint => Some(format!("/{}/checks", tool.tag())),
        ToolKind::DependencyScan => None,
    }
}

/// `POST /<tool>/config`, JSON body
pub fn config_endpoint(tool: ToolKind) -> String {
    format!("/{}/config", tool.tag())
}
