//! JSON Output

use crate::report::Report;

/// Generate a prettified JSON report.
///
/// Serializes the run report into machine-readable JSON format.
pub fn generate_json_report(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{HostInfo, ReportEntry, ReportMeta, ReportSummary};
    use chrono::Utc;
    use exhibit_core::Outcome;

    #[test]
    fn outcome_variants_are_tagged() {
        let report = Report {
            meta: ReportMeta {
                version: "0.1.0".to_string(),
                timestamp: Utc::now(),
                host: HostInfo {
                    os: "linux".to_string(),
                    arch: "x86_64".to_string(),
                },
            },
            entries: vec![ReportEntry {
                index: 0,
                id: "boom".to_string(),
                chapter: "test".to_string(),
                outcome: Outcome::Failure("divide by zero".to_string()),
                duration_ns: 42,
            }],
            summary: ReportSummary {
                total: 1,
                failed: 1,
                ..Default::default()
            },
        };

        let json = generate_json_report(&report).unwrap();
        assert!(json.contains("\"kind\": \"failure\""));
        assert!(json.contains("\"text\": \"divide by zero\""));
    }
}
