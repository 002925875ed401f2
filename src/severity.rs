// SPDX-License-Identifier: PMPL-1.0-or-later

//! Canonical severity buckets
//!
//! Every tool-native severity token maps into exactly one of four ranked
//! buckets, or `Unranked` when the token is unknown or missing. This is the
//! single copy of the mapping table; filtering, sorting, statistics, and
//! export levels all go through it.

use serde::{Deserialize, Serialize};

/// Canonical severity bucket, ordered most severe first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SeverityBucket {
    Critical,
    High,
    Medium,
    Low,
    Unranked,
}

impl SeverityBucket {
    /// Map a raw tool-native severity token onto a bucket.
    ///
    /// Tool-agnostic and total: the same token classifies identically no
    /// matter which tool produced it, comparison is case-insensitive, and
    /// anything unrecognized (including the empty string) is `Unranked`.
    pub fn classify(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "CRITICAL" => SeverityBucket::Critical,
            "HIGH" | "ERROR" => SeverityBucket::High,
            "MEDIUM" | "WARNING" => SeverityBucket::Medium,
            "LOW" | "INFO" => SeverityBucket::Low,
            _ => SeverityBucket::Unranked,
        }
    }

    /// Sort rank: 0 is most severe, `Unranked` sorts after `Low`
    pub fn rank(&self) -> u8 {
        match self {
            SeverityBucket::Critical => 0,
            SeverityBucket::High => 1,
            SeverityBucket::Medium => 2,
            SeverityBucket::Low => 3,
            SeverityBucket::Unranked => 4,
        }
    }

    /// The four ranked buckets, most severe first
    pub fn ranked() -> [Self; 4] {
        [
            SeverityBucket::Critical,
            SeverityBucket::High,
            SeverityBucket::Medium,
            SeverityBucket::Low,
        ]
    }
}

impl std::fmt::Display for SeverityBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeverityBucket::Critical => write!(f, "CRITICAL"),
            SeverityBucket::High => write!(f, "HIGH"),
            SeverityBucket::Medium => write!(f, "MEDIUM"),
            SeverityBucket::Low => write!(f, "LOW"),
            SeverityBucket::Unranked => write!(f, "UNRANKED"),
        }
    }
}
