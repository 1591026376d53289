//! Report Data Structures

use chrono::{DateTime, Utc};
use exhibit_core::Outcome;
use serde::{Deserialize, Serialize};

/// Complete report of one run over the registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub meta: ReportMeta,
    pub entries: Vec<ReportEntry>,
    pub summary: ReportSummary,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub host: HostInfo,
}

/// Host information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostInfo {
    pub os: String,
    pub arch: String,
}

/// Outcome of a single demonstration, in registry order.
///
/// `index` is the position in the registry: contiguous from 0, matching
/// the catalog's top-to-bottom evaluation order. The outcome is recorded
/// once and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEntry {
    pub index: usize,
    pub id: String,
    pub chapter: String,
    pub outcome: Outcome,
    /// Wall time of the unit, metadata only
    pub duration_ns: u64,
}

/// Report summary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub total_duration_ms: f64,
}
