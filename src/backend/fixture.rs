// SPDX-License-Identifier: PMPL-1.0-or-later

//! File-backed analysis backend
//!
//! Stands in for the external analysis service: reads a stored
//! `AnalysisResultSet` JSON document instead of invoking the scanners.
//! The session drives it through the same trait as a real transport.

use super::{AnalysisBackend, AnalyzeRequest, ConfigAck, RuleInfo};
use crate::types::{AnalysisResultSet, ToolConfigs, ToolKind};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub struct FixtureBackend {
    results_path: PathBuf,
}

impl FixtureBackend {
    pub fn new<P: AsRef<Path>>(results_path: P) -> Self {
        Self {
            results_path: results_path.as_ref().to_path_buf(),
        }
    }
}

impl AnalysisBackend for FixtureBackend {
    fn analyze(&self, _request: &AnalyzeRequest) -> Result<AnalysisResultSet> {
        let content = fs::read_to_string(&self.results_path)
            .with_context(|| format!("reading result set {}", self.results_path.display()))?;
        let set: AnalysisResultSet = serde_json::from_str(&content)
            .with_context(|| format!("parsing result set {}", self.results_path.display()))?;
        Ok(set)
    }

    fn available_rules(&self, _tool: ToolKind) -> Result<Vec<RuleInfo>> {
        Ok(Vec::new())
    }

    fn save_config(&self, tool: ToolKind, _configs: &ToolConfigs) -> Result<ConfigAck> {
        Ok(ConfigAck { tool, saved: true })
    }
}
