// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for printed/exported reports

use super::CombinedReport;
use anyhow::Result;
use clap::ValueEnum;
use serde_json;
use serde_yaml;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportOutputFormat {
    Json,
    Yaml,
    Csv,
}

impl ReportOutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Some(ReportOutputFormat::Json),
            "yaml" | "yml" => Some(ReportOutputFormat::Yaml),
            "csv" => Some(ReportOutputFormat::Csv),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ReportOutputFormat::Json => "json",
            ReportOutputFormat::Yaml => "yaml",
            ReportOutputFormat::Csv => "csv",
        }
    }

    pub fn serialize(&self, report: &CombinedReport) -> Result<String> {
        match self {
            ReportOutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            ReportOutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
            // CSV carries only the table rows; stats live in the
            // structured formats.
            ReportOutputFormat::Csv => Ok(format_report_as_csv(report)),
        }
    }
}

fn format_report_as_csv(report: &CombinedReport) -> String {
    let mut lines = Vec::with_capacity(report.issues.len() + 1);
    lines.push("tool,severity,file,line,issue".to_string());

    for issue in &report.issues {
        let line = issue
            .line()
            .map(|l| l.to_string())
            .unwrap_or_default();
        lines.push(format!(
            "{},{},{},{},{}",
            csv_escape(issue.tool.tag()),
            csv_escape(issue.raw_severity().unwrap_or("")),
            csv_escape(issue.file()),
            line,
            csv_escape(&issue.description())
        ));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// RFC 4180 quoting: fields with commas, quotes, or newlines get wrapped,
/// embedded quotes doubled
fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
