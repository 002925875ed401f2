// SPDX-License-Identifier: PMPL-1.0-or-later

//! Unit tests for the filter/sort engine

use scan_triage::aggregate::{
    build_unified, filter_and_sort, SeverityFilter, SortKey, SortOrder, ToolFilter, ViewOptions,
};
use scan_triage::severity::SeverityBucket;
use scan_triage::types::*;

fn pattern_issue(file: &str, line: u32, rule: &str, severity: &str) -> PatternScanIssue {
    PatternScanIssue {
        file: file.to_string(),
        line: Some(line),
        rule: rule.to_string(),
        severity: Some(severity.to_string()),
        message: format!("{} at {}", rule, line),
        column: None,
        code: None,
    }
}

fn lint_issue(file: &str, line: u32, check: &str, severity: &str) -> LintIssue {
    LintIssue {
        file: file.to_string(),
        line: Some(line),
        check: check.to_string(),
        severity: Some(severity.to_string()),
        message: format!("{} at {}", check, line),
        column: None,
    }
}

fn mixed_set() -> AnalysisResultSet {
    AnalysisResultSet {
        pattern_scan: vec![
            pattern_issue("z.c", 10, "r-critical", "CRITICAL"),
            pattern_issue("a.c", 5, "r-info", "INFO"),
        ],
        dependency_scan: vec![DependencyScanIssue {
            file: "package.json".to_string(),
            vulnerability: "CVE-2023-1".to_string(),
            severity: Some("HIGH".to_string()),
            description: "vulnerable".to_string(),
            package: None,
            version: None,
            fixed_in: None,
        }],
        lint: vec![
            lint_issue("m.cpp", 2, "c-error", "ERROR"),
            lint_issue("n.cpp", 8, "c-warning", "WARNING"),
        ],
    }
}

fn buckets(issues: &[UnifiedIssue]) -> Vec<SeverityBucket> {
    issues.iter().map(|i| i.bucket()).collect()
}

#[test]
fn test_filter_is_conjunctive() {
    let unified = build_unified(&mixed_set());
    let view = ViewOptions {
        tool: ToolFilter::Only(ToolKind::Lint),
        severity: SeverityFilter::Bucket(SeverityBucket::High),
        sort_key: None,
        sort_order: SortOrder::Descending,
    };

    let filtered = filter_and_sort(&unified, &view);

    // Only the lint ERROR qualifies: lint tool AND High bucket
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].tool, ToolKind::Lint);
    assert_eq!(filtered[0].bucket(), SeverityBucket::High);
    assert_eq!(filtered[0].identifier(), "c-error");
}

#[test]
fn test_all_filters_are_identity() {
    let unified = build_unified(&mixed_set());
    let view = ViewOptions {
        tool: ToolFilter::All,
        severity: SeverityFilter::All,
        sort_key: None,
        sort_order: SortOrder::Descending,
    };

    let filtered = filter_and_sort(&unified, &view);
    assert_eq!(filtered, unified);
}

#[test]
fn test_severity_filter_matches_bucket_not_token() {
    // HIGH selects both the native HIGH and the ERROR-mapped finding
    let unified = build_unified(&mixed_set());
    let view = ViewOptions {
        tool: ToolFilter::All,
        severity: SeverityFilter::Bucket(SeverityBucket::High),
        sort_key: None,
        sort_order: SortOrder::Descending,
    };

    let filtered = filter_and_sort(&unified, &view);
    let ids: Vec<&str> = filtered.iter().map(|i| i.identifier()).collect();
    assert_eq!(ids, vec!["CVE-2023-1", "c-error"]);
}

#[test]
fn test_sort_severity_descending_is_most_severe_first() {
    let unified = build_unified(&mixed_set());
    let view = ViewOptions {
        sort_key: Some(SortKey::Severity),
        sort_order: SortOrder::Descending,
        ..ViewOptions::default()
    };

    let sorted = filter_and_sort(&unified, &view);
    assert_eq!(
        buckets(&sorted),
        vec![
            SeverityBucket::Critical,
            SeverityBucket::High,
            SeverityBucket::High,
            SeverityBucket::Medium,
            SeverityBucket::Low,
        ]
    );
}

#[test]
fn test_sort_severity_toggle_reverses_bucket_order() {
    let unified = build_unified(&mixed_set());
    let mut view = ViewOptions::default();

    let descending = filter_and_sort(&unified, &view);
    view.toggle_sort(SortKey::Severity);
    assert_eq!(view.sort_order, SortOrder::Ascending);
    let ascending = filter_and_sort(&unified, &view);

    let mut reversed = buckets(&descending);
    reversed.reverse();
    assert_eq!(buckets(&ascending), reversed);
}

#[test]
fn test_sort_is_stable_within_equal_buckets() {
    // The dependency HIGH precedes the lint ERROR in baseline order and
    // must keep that position among equals
    let unified = build_unified(&mixed_set());
    let view = ViewOptions::default();

    let sorted = filter_and_sort(&unified, &view);
    let high_ids: Vec<&str> = sorted
        .iter()
        .filter(|i| i.bucket() == SeverityBucket::High)
        .map(|i| i.identifier())
        .collect();
    assert_eq!(high_ids, vec!["CVE-2023-1", "c-error"]);
}

#[test]
fn test_unranked_sorts_after_low() {
    let mut set = mixed_set();
    set.pattern_scan.push(PatternScanIssue {
        file: "u.c".to_string(),
        line: None,
        rule: "r-bogus".to_string(),
        severity: Some("bogus".to_string()),
        message: String::new(),
        column: None,
        code: None,
    });

    let unified = build_unified(&set);
    let sorted = filter_and_sort(&unified, &ViewOptions::default());

    assert_eq!(sorted.last().unwrap().identifier(), "r-bogus");
}

#[test]
fn test_sort_by_file_lexical() {
    let unified = build_unified(&mixed_set());
    let view = ViewOptions {
        sort_key: Some(SortKey::File),
        sort_order: SortOrder::Ascending,
        ..ViewOptions::default()
    };

    let sorted = filter_and_sort(&unified, &view);
    let files: Vec<&str> = sorted.iter().map(|i| i.file()).collect();
    assert_eq!(files, vec!["a.c", "m.cpp", "n.cpp", "package.json", "z.c"]);
}

#[test]
fn test_sort_by_line_numeric_missing_last() {
    let unified = build_unified(&mixed_set());
    let view = ViewOptions {
        sort_key: Some(SortKey::Line),
        sort_order: SortOrder::Ascending,
        ..ViewOptions::default()
    };

    let sorted = filter_and_sort(&unified, &view);
    let lines: Vec<Option<u32>> = sorted.iter().map(|i| i.line()).collect();
    assert_eq!(
        lines,
        vec![Some(2), Some(5), Some(8), Some(10), None]
    );
}

#[test]
fn test_sort_by_tool_lexical_on_tag() {
    let unified = build_unified(&mixed_set());
    let view = ViewOptions {
        sort_key: Some(SortKey::Tool),
        sort_order: SortOrder::Ascending,
        ..ViewOptions::default()
    };

    let sorted = filter_and_sort(&unified, &view);
    let tags: Vec<&str> = sorted.iter().map(|i| i.tool.tag()).collect();
    assert_eq!(
        tags,
        vec!["dependency-scan", "lint", "lint", "pattern-scan", "pattern-scan"]
    );
}

#[test]
fn test_no_sort_key_keeps_baseline_order() {
    let unified = build_unified(&mixed_set());
    let view = ViewOptions {
        sort_key: None,
        ..ViewOptions::default()
    };

    let result = filter_and_sort(&unified, &view);
    assert_eq!(result, unified);
}

#[test]
fn test_input_is_never_mutated() {
    let unified = build_unified(&mixed_set());
    let before = unified.clone();

    let view = ViewOptions {
        tool: ToolFilter::Only(ToolKind::Lint),
        severity: SeverityFilter::Bucket(SeverityBucket::High),
        sort_key: Some(SortKey::File),
        sort_order: SortOrder::Descending,
    };
    let _ = filter_and_sort(&unified, &view);

    assert_eq!(unified, before);
}

#[test]
fn test_toggle_new_key_resets_to_descending() {
    let mut view = ViewOptions {
        sort_key: Some(SortKey::Severity),
        sort_order: SortOrder::Ascending,
        ..ViewOptions::default()
    };

    view.toggle_sort(SortKey::File);
    assert_eq!(view.sort_key, Some(SortKey::File));
    assert_eq!(view.sort_order, SortOrder::Descending);

    view.toggle_sort(SortKey::File);
    assert_eq!(view.sort_order, SortOrder::Ascending);
}

#[test]
fn test_lenient_parsing_falls_back_to_identity() {
    // Unknown values never error; they select everything / no reordering
    assert_eq!(ToolFilter::parse("nonsense"), ToolFilter::All);
    assert_eq!(ToolFilter::parse("all"), ToolFilter::All);
    assert_eq!(
        ToolFilter::parse("lint"),
        ToolFilter::Only(ToolKind::Lint)
    );

    assert_eq!(SeverityFilter::parse("bogus"), SeverityFilter::All);
    assert_eq!(SeverityFilter::parse("all"), SeverityFilter::All);
    assert_eq!(
        SeverityFilter::parse("high"),
        SeverityFilter::Bucket(SeverityBucket::High)
    );
    // Native tokens select their mapped bucket
    assert_eq!(
        SeverityFilter::parse("ERROR"),
        SeverityFilter::Bucket(SeverityBucket::High)
    );

    assert_eq!(SortKey::parse("severity"), Some(SortKey::Severity));
    assert_eq!(SortKey::parse("check"), Some(SortKey::Rule));
    assert_eq!(SortKey::parse("nonsense"), None);

    assert_eq!(SortOrder::parse("asc"), SortOrder::Ascending);
    assert_eq!(SortOrder::parse("upside-down"), SortOrder::Descending);
}

#[test]
fn test_filtering_empty_input_yields_empty() {
    let filtered = filter_and_sort(&[], &ViewOptions::default());
    assert!(filtered.is_empty());
}

#[test]
fn test_fully_excluded_set_yields_empty() {
    let unified = build_unified(&mixed_set());
    let view = ViewOptions {
        tool: ToolFilter::Only(ToolKind::DependencyScan),
        severity: SeverityFilter::Bucket(SeverityBucket::Critical),
        sort_key: Some(SortKey::Severity),
        sort_order: SortOrder::Descending,
    };

    let filtered = filter_and_sort(&unified, &view);
    assert!(filtered.is_empty());
}
