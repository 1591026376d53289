//! Report Building
//!
//! Constructs the run report from execution results: sequence indices are
//! assigned here, contiguous from 0 in execution order.

use crate::executor::ExecutionResult;
use chrono::Utc;
use exhibit_report::{HostInfo, Report, ReportEntry, ReportMeta, ReportSummary};

/// Build a complete Report from execution results
pub fn build_report(results: Vec<ExecutionResult>, total_duration_ms: f64) -> Report {
    let mut summary = ReportSummary {
        total: results.len(),
        total_duration_ms,
        ..Default::default()
    };

    let mut entries = Vec::with_capacity(results.len());
    for (index, result) in results.into_iter().enumerate() {
        if result.outcome.is_value() {
            summary.passed += 1;
        } else {
            summary.failed += 1;
        }

        entries.push(ReportEntry {
            index,
            id: result.id,
            chapter: result.chapter,
            outcome: result.outcome,
            duration_ns: result.duration_ns,
        });
    }

    Report {
        meta: build_report_meta(),
        entries,
        summary,
    }
}

/// Build report metadata: tool version, timestamp, host details
fn build_report_meta() -> ReportMeta {
    ReportMeta {
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        host: HostInfo {
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exhibit_core::Outcome;

    fn result(id: &str, outcome: Outcome) -> ExecutionResult {
        ExecutionResult {
            id: id.to_string(),
            chapter: "test".to_string(),
            outcome,
            duration_ns: 100,
        }
    }

    #[test]
    fn indices_are_contiguous_from_zero() {
        let report = build_report(
            vec![
                result("first", Outcome::Value("1".to_string())),
                result("second", Outcome::Failure("nope".to_string())),
                result("third", Outcome::Value("3".to_string())),
            ],
            1.0,
        );

        let indices: Vec<usize> = report.entries.iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn summary_counts_outcomes() {
        let report = build_report(
            vec![
                result("ok", Outcome::Value("fine".to_string())),
                result("bad", Outcome::Failure("broken".to_string())),
            ],
            2.5,
        );

        assert_eq!(report.summary.total, 2);
        assert_eq!(report.summary.passed, 1);
        assert_eq!(report.summary.failed, 1);
        assert_eq!(report.summary.total_duration_ms, 2.5);
    }
}
