// SPDX-License-Identifier: PMPL-1.0-or-later

//! SARIF 2.1.0 output for code-scanning integrations
//!
//! Converts the unified collection into OASIS SARIF format, one run per
//! source tool.
//! See: https://docs.oasis-open.org/sarif/sarif/v2.1.0/sarif-v2.1.0.html

use crate::severity::SeverityBucket;
use crate::types::{ToolKind, UnifiedIssue};
use anyhow::Result;
use serde::Serialize;

const SARIF_SCHEMA: &str = "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/main/sarif-2.1/schema/sarif-schema-2.1.0.json";
const SARIF_VERSION: &str = "2.1.0";

/// Top-level SARIF log
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifLog {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub version: String,
    pub runs: Vec<SarifRun>,
}

/// A single SARIF run (one tool's findings)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifRun {
    pub tool: SarifTool,
    pub results: Vec<SarifResult>,
}

/// Tool descriptor
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifTool {
    pub driver: SarifToolComponent,
}

/// Tool component with rules
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifToolComponent {
    pub name: String,
    pub version: String,
    pub rules: Vec<SarifRule>,
}

/// Rule descriptor
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifRule {
    pub id: String,
    pub short_description: SarifMessage,
    pub default_configuration: SarifConfiguration,
}

/// Configuration with level
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifConfiguration {
    pub level: String,
}

/// A single finding
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifResult {
    pub rule_id: String,
    pub level: String,
    pub message: SarifMessage,
    pub locations: Vec<SarifLocation>,
}

/// Message with text
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifMessage {
    pub text: String,
}

/// Physical location
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifLocation {
    pub physical_location: SarifPhysicalLocation,
}

/// Physical location with artifact
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifPhysicalLocation {
    pub artifact_location: SarifArtifactLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<SarifRegion>,
}

/// Artifact URI
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifArtifactLocation {
    pub uri: String,
}

/// Region (line number)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifRegion {
    pub start_line: u32,
}

/// Map a canonical bucket to a SARIF level
fn sarif_level(bucket: SeverityBucket) -> &'static str {
    match bucket {
        SeverityBucket::Critical => "error",
        SeverityBucket::High => "error",
        SeverityBucket::Medium => "warning",
        SeverityBucket::Low => "note",
        SeverityBucket::Unranked => "none",
    }
}

fn tool_run(tool: ToolKind, issues: &[UnifiedIssue]) -> SarifRun {
    // Collect unique rules for this tool
    let mut seen_rules = std::collections::HashSet::new();
    let mut rules = Vec::new();

    for issue in issues {
        if seen_rules.insert(issue.identifier().to_string()) {
            rules.push(SarifRule {
                id: issue.identifier().to_string(),
                short_description: SarifMessage {
                    text: issue.identifier().to_string(),
                },
                default_configuration: SarifConfiguration {
                    level: sarif_level(issue.bucket()).to_string(),
                },
            });
        }
    }

    let results: Vec<SarifResult> = issues
        .iter()
        .map(|issue| SarifResult {
            rule_id: issue.identifier().to_string(),
            level: sarif_level(issue.bucket()).to_string(),
            message: SarifMessage {
                text: issue.detail().to_string(),
            },
            locations: vec![SarifLocation {
                physical_location: SarifPhysicalLocation {
                    artifact_location: SarifArtifactLocation {
                        uri: issue.file().to_string(),
                    },
                    region: issue.line().map(|l| SarifRegion { start_line: l }),
                },
            }],
        })
        .collect();

    SarifRun {
        tool: SarifTool {
            driver: SarifToolComponent {
                name: tool.tag().to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                rules,
            },
        },
        results,
    }
}

/// Convert a unified collection to SARIF, one run per tool in the fixed
/// aggregation order
pub fn to_sarif(unified: &[UnifiedIssue]) -> Result<SarifLog> {
    let runs = ToolKind::all()
        .iter()
        .map(|tool| {
            let issues: Vec<UnifiedIssue> = unified
                .iter()
                .filter(|issue| issue.tool == *tool)
                .cloned()
                .collect();
            tool_run(*tool, &issues)
        })
        .collect();

    Ok(SarifLog {
        schema: SARIF_SCHEMA.to_string(),
        version: SARIF_VERSION.to_string(),
        runs,
    })
}

/// Serialize a SARIF log to JSON string
pub fn to_sarif_json(unified: &[UnifiedIssue]) -> Result<String> {
    let log = to_sarif(unified)?;
    let json = serde_json::to_string_pretty(&log)?;
    Ok(json)
}
