#![warn(missing_docs)]
//! Exhibit Report - Reporting
//!
//! Generates the output formats:
//! - Human (one line per demonstration, the default)
//! - JSON (machine-readable)

mod human;
mod json;
mod report;

pub use human::format_report;
pub use json::generate_json_report;
pub use report::{HostInfo, Report, ReportEntry, ReportMeta, ReportSummary};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable terminal output
    Human,
    /// JSON with the full report
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_parsing() {
        assert_eq!("human".parse::<OutputFormat>(), Ok(OutputFormat::Human));
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Human));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
