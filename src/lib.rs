// SPDX-License-Identifier: PMPL-1.0-or-later

//! Scan-Triage — Unified Static-Analysis Result Aggregation.
//!
//! This crate merges the heterogeneous findings of three external
//! analyzers (a pattern-based source scanner, a dependency-vulnerability
//! scanner, and a C/C++ linter) into one coherent, filterable, sortable
//! collection.
//!
//! CORE PIECES:
//! 1. **Severity**: every tool-native severity token maps through one
//!    canonical classifier onto four ranked buckets.
//! 2. **Aggregate**: per-tool arrays are tagged and concatenated into a
//!    unified collection, recomputed on demand, with pure filter/sort and
//!    statistics passes over it.
//! 3. **Session**: the state container owning the result set and the
//!    single in-flight run flag; the analysis backend is injected as a
//!    collaborator trait.

pub mod aggregate;
pub mod backend;
pub mod report;
pub mod session;
pub mod severity;
pub mod storage;
pub mod types;
