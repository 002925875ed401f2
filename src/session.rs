// SPDX-License-Identifier: PMPL-1.0-or-later

//! Application state container
//!
//! Owns the canonical result set, the per-tool configuration, the selected
//! file list, and the single in-flight run flag. All mutation goes through
//! the action methods here: the result set is only ever replaced wholesale,
//! and overlapping run requests are rejected rather than queued.

use crate::backend::{AnalysisBackend, AnalyzeRequest};
use crate::types::{
    AnalysisResultSet, DependencyScanConfig, LintConfig, PatternScanConfig, ToolConfigs,
};
use anyhow::{bail, Result};
use std::path::PathBuf;

#[derive(Debug, Default)]
pub struct AnalysisSession {
    result_set: AnalysisResultSet,
    tool_configs: ToolConfigs,
    selected_files: Vec<PathBuf>,
    is_analyzing: bool,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current result set; the single source of truth every view
    /// recomputes from
    pub fn result_set(&self) -> &AnalysisResultSet {
        &self.result_set
    }

    pub fn tool_configs(&self) -> &ToolConfigs {
        &self.tool_configs
    }

    pub fn selected_files(&self) -> &[PathBuf] {
        &self.selected_files
    }

    /// True while a run is pending; collaborators use this to refuse
    /// duplicate submissions
    pub fn is_analyzing(&self) -> bool {
        self.is_analyzing
    }

    /// Atomic whole-set replacement
    pub fn set_result_set(&mut self, set: AnalysisResultSet) {
        self.result_set = set;
    }

    pub fn set_selected_files(&mut self, files: Vec<PathBuf>) {
        self.selected_files = files;
    }

    pub fn set_pattern_scan_config(&mut self, config: PatternScanConfig) {
        self.tool_configs.pattern_scan = config;
    }

    pub fn set_dependency_scan_config(&mut self, config: DependencyScanConfig) {
        self.tool_configs.dependency_scan = config;
    }

    pub fn set_lint_config(&mut self, config: LintConfig) {
        self.tool_configs.lint = config;
    }

    /// Mark a run as in flight. Fails if one already is; a second request
    /// must not start a concurrent run or disturb the pending one.
    pub fn begin_run(&mut self) -> Result<()> {
        if self.is_analyzing {
            bail!("analysis already in progress");
        }
        self.is_analyzing = true;
        Ok(())
    }

    /// Commit a completed run: replace the set atomically, clear the flag
    pub fn complete_run(&mut self, set: AnalysisResultSet) {
        self.result_set = set;
        self.is_analyzing = false;
    }

    /// Roll back a failed run: clear the flag, keep the previous set
    pub fn fail_run(&mut self) {
        self.is_analyzing = false;
    }

    /// Run analysis through the injected backend. The backend call is the
    /// one suspension point; on success the new set is committed in a
    /// single replacement, on failure the previous set stays in place and
    /// the error propagates. No retries, no cancellation.
    pub fn run_analysis(&mut self, backend: &dyn AnalysisBackend) -> Result<&AnalysisResultSet> {
        self.begin_run()?;
        let request = AnalyzeRequest {
            files: self.selected_files.clone(),
            configs: self.tool_configs.clone(),
        };
        match backend.analyze(&request) {
            Ok(set) => {
                self.complete_run(set);
                Ok(&self.result_set)
            }
            Err(err) => {
                self.fail_run();
                Err(err)
            }
        }
    }
}
