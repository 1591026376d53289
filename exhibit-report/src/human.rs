//! Human-readable Output
//!
//! One line per entry, in sequence order. No headers and no summary:
//! stdout carries exactly the report; run progress and counts go through
//! logging, full metadata through the JSON format.

use crate::report::Report;
use exhibit_core::Outcome;

/// Format a report for terminal display
///
/// Renders each entry as a single line:
/// `"<index>. <id>: <description>"` for values,
/// `"<index>. <id>: ERROR: <reason>"` for failures.
///
/// Pure and total: both variants carry ready-made text, so nothing here
/// can fail to render.
pub fn format_report(report: &Report) -> String {
    let mut output = String::new();

    for entry in &report.entries {
        match &entry.outcome {
            Outcome::Value(description) => {
                output.push_str(&format!("{}. {}: {}\n", entry.index, entry.id, description));
            }
            Outcome::Failure(reason) => {
                output.push_str(&format!(
                    "{}. {}: ERROR: {}\n",
                    entry.index, entry.id, reason
                ));
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{HostInfo, ReportEntry, ReportMeta, ReportSummary};
    use chrono::Utc;

    fn entry(index: usize, id: &str, outcome: Outcome) -> ReportEntry {
        ReportEntry {
            index,
            id: id.to_string(),
            chapter: "test".to_string(),
            outcome,
            duration_ns: 0,
        }
    }

    fn report(entries: Vec<ReportEntry>) -> Report {
        let total = entries.len();
        Report {
            meta: ReportMeta {
                version: "0.1.0".to_string(),
                timestamp: Utc::now(),
                host: HostInfo {
                    os: "linux".to_string(),
                    arch: "x86_64".to_string(),
                },
            },
            entries,
            summary: ReportSummary {
                total,
                ..Default::default()
            },
        }
    }

    #[test]
    fn value_and_failure_lines() {
        let report = report(vec![
            entry(0, "basic-math", Outcome::Value("3".to_string())),
            entry(1, "boom", Outcome::Failure("divide by zero".to_string())),
            entry(2, "greeting", Outcome::Value("hello".to_string())),
        ]);

        assert_eq!(
            format_report(&report),
            "0. basic-math: 3\n1. boom: ERROR: divide by zero\n2. greeting: hello\n"
        );
    }

    #[test]
    fn formatting_is_deterministic() {
        let report = report(vec![entry(0, "stable", Outcome::Value("same".to_string()))]);

        assert_eq!(format_report(&report), format_report(&report));
    }

    #[test]
    fn empty_report_renders_empty() {
        assert_eq!(format_report(&report(vec![])), "");
    }
}
