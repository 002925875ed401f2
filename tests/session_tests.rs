// SPDX-License-Identifier: PMPL-1.0-or-later

//! Unit tests for the session state container and run exclusivity

use anyhow::{anyhow, Result};
use scan_triage::backend::{AnalysisBackend, AnalyzeRequest, ConfigAck, RuleInfo};
use scan_triage::session::AnalysisSession;
use scan_triage::types::*;

/// Backend that returns a fixed result set
struct StaticBackend(AnalysisResultSet);

impl AnalysisBackend for StaticBackend {
    fn analyze(&self, _request: &AnalyzeRequest) -> Result<AnalysisResultSet> {
        Ok(self.0.clone())
    }

    fn available_rules(&self, _tool: ToolKind) -> Result<Vec<RuleInfo>> {
        Ok(Vec::new())
    }

    fn save_config(&self, tool: ToolKind, _configs: &ToolConfigs) -> Result<ConfigAck> {
        Ok(ConfigAck { tool, saved: true })
    }
}

/// Backend whose runs always fail
struct FailingBackend;

impl AnalysisBackend for FailingBackend {
    fn analyze(&self, _request: &AnalyzeRequest) -> Result<AnalysisResultSet> {
        Err(anyhow!("backend unavailable"))
    }

    fn available_rules(&self, _tool: ToolKind) -> Result<Vec<RuleInfo>> {
        Err(anyhow!("backend unavailable"))
    }

    fn save_config(&self, _tool: ToolKind, _configs: &ToolConfigs) -> Result<ConfigAck> {
        Err(anyhow!("backend unavailable"))
    }
}

fn one_issue_set() -> AnalysisResultSet {
    AnalysisResultSet {
        pattern_scan: vec![PatternScanIssue {
            file: "a.c".to_string(),
            line: Some(1),
            rule: "r1".to_string(),
            severity: Some("ERROR".to_string()),
            message: "m1".to_string(),
            column: None,
            code: None,
        }],
        dependency_scan: vec![],
        lint: vec![],
    }
}

#[test]
fn test_new_session_is_idle_and_empty() {
    let session = AnalysisSession::new();
    assert!(!session.is_analyzing());
    assert!(session.result_set().is_empty());
    assert!(session.selected_files().is_empty());
}

#[test]
fn test_successful_run_commits_atomically() {
    let mut session = AnalysisSession::new();
    let backend = StaticBackend(one_issue_set());

    let result = session.run_analysis(&backend);
    assert!(result.is_ok());
    assert!(!session.is_analyzing());
    assert_eq!(session.result_set(), &one_issue_set());
}

#[test]
fn test_failed_run_keeps_previous_set_and_clears_flag() {
    let mut session = AnalysisSession::new();
    session.set_result_set(one_issue_set());

    let result = session.run_analysis(&FailingBackend);

    assert!(result.is_err());
    assert!(!session.is_analyzing());
    // The pre-failure set is untouched
    assert_eq!(session.result_set(), &one_issue_set());
}

#[test]
fn test_second_begin_run_is_rejected() {
    let mut session = AnalysisSession::new();

    session.begin_run().unwrap();
    assert!(session.is_analyzing());

    // While a run is pending a second trigger must not start another
    assert!(session.begin_run().is_err());
    assert!(session.is_analyzing());
}

#[test]
fn test_run_rejected_while_analysis_pending() {
    let mut session = AnalysisSession::new();
    session.set_result_set(one_issue_set());
    session.begin_run().unwrap();

    let result = session.run_analysis(&StaticBackend(AnalysisResultSet::default()));

    // Rejected without replacing the pending run's state
    assert!(result.is_err());
    assert!(session.is_analyzing());
    assert_eq!(session.result_set(), &one_issue_set());
}

#[test]
fn test_complete_run_replaces_wholesale() {
    let mut session = AnalysisSession::new();
    session.set_result_set(one_issue_set());

    session.begin_run().unwrap();
    session.complete_run(AnalysisResultSet::default());

    assert!(!session.is_analyzing());
    assert!(session.result_set().is_empty());
}

#[test]
fn test_fail_run_allows_retrigger() {
    let mut session = AnalysisSession::new();

    session.begin_run().unwrap();
    session.fail_run();

    // A failed run is re-triggered manually; the guard must reopen
    assert!(session.begin_run().is_ok());
}

#[test]
fn test_config_setters() {
    let mut session = AnalysisSession::new();

    session.set_pattern_scan_config(PatternScanConfig {
        rules_path: "/rules/c/security".to_string(),
        selected_rules: vec!["buffer-overflow".to_string()],
    });
    session.set_lint_config(LintConfig {
        checks: vec!["clang-analyzer-*".to_string()],
        options: Default::default(),
    });

    assert_eq!(
        session.tool_configs().pattern_scan.rules_path,
        "/rules/c/security"
    );
    assert_eq!(session.tool_configs().lint.checks.len(), 1);
}

#[test]
fn test_request_carries_files_and_configs() {
    // The backend sees the session's selected files and configuration
    struct CapturingBackend;

    impl AnalysisBackend for CapturingBackend {
        fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisResultSet> {
            assert_eq!(request.files.len(), 2);
            assert_eq!(request.configs.pattern_scan.rules_path, "/rules");
            Ok(AnalysisResultSet::default())
        }

        fn available_rules(&self, _tool: ToolKind) -> Result<Vec<RuleInfo>> {
            Ok(Vec::new())
        }

        fn save_config(&self, tool: ToolKind, _configs: &ToolConfigs) -> Result<ConfigAck> {
            Ok(ConfigAck { tool, saved: true })
        }
    }

    let mut session = AnalysisSession::new();
    session.set_selected_files(vec!["a.c".into(), "b.c".into()]);
    session.set_pattern_scan_config(PatternScanConfig {
        rules_path: "/rules".to_string(),
        selected_rules: vec![],
    });

    session.run_analysis(&CapturingBackend).unwrap();
}
