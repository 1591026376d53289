#![warn(missing_docs)]
//! Exhibit CLI Library
//!
//! This module provides the CLI infrastructure for demonstration binaries.
//! Use `exhibit::run()` (or `exhibit_cli::run()`) in your main function to
//! get the full harness with your registered demonstrations.
//!
//! # Example
//!
//! ```ignore
//! use exhibit::prelude::*;
//!
//! #[demo(chapter = "fundamentals")]
//! fn closure_reduce() -> String {
//!     let sum: i32 = (1..=6).fold(0, |current, next| current + next);
//!     format!("sum is {sum}")
//! }
//!
//! fn main() {
//!     if let Err(e) = exhibit::run() {
//!         eprintln!("Error: {e}");
//!         std::process::exit(1);
//!     }
//! }
//! ```

mod config;
mod executor;
mod report;

pub use config::{ExhibitConfig, LogConfig, OutputConfig};
pub use executor::{ExecutionResult, Executor};
pub use report::build_report;

use clap::{Parser, Subcommand};
use exhibit_core::{DemoDef, Registry};
use exhibit_report::{OutputFormat, format_report, generate_json_report};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

/// Exhibit CLI arguments
#[derive(Parser, Debug)]
#[command(name = "exhibit")]
#[command(author, version, about = "Exhibit - demonstration suite runner")]
pub struct Cli {
    /// Optional subcommand (List, Run); defaults to Run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format: human, json (overrides exhibit.toml)
    #[arg(long)]
    pub format: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the demonstration catalog without running it
    List,
    /// Run all demonstrations (default)
    Run,
}

/// Run the Exhibit CLI with the given arguments.
/// This is the main entry point for demonstration binaries.
///
/// # Returns
/// Returns `Ok(())` after every completed run — failed demonstrations are
/// recorded in the report, not in the exit status. The only error path is
/// startup: a duplicate id in the registry is a configuration mistake and
/// aborts before anything runs.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the Exhibit CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    // Discover exhibit.toml configuration (CLI flags override)
    let config = ExhibitConfig::discover().unwrap_or_default();

    // Initialize logging on stderr: stdout carries exactly the report
    let filter = if cli.verbose {
        "exhibit=debug".to_string()
    } else {
        config.log.filter.clone()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter.as_str())
        .with_writer(std::io::stderr)
        .init();

    // Parse output format: CLI flag wins, then exhibit.toml
    let format: OutputFormat = cli
        .format
        .as_deref()
        .unwrap_or(&config.output.format)
        .parse()
        .unwrap_or(OutputFormat::Human);

    // Build the fixed registry from #[demo] submissions; a duplicate id
    // is fatal here, before any unit runs
    let registry = Registry::collect()?;

    match cli.command {
        Some(Commands::List) => {
            list_demos(&registry);
        }
        _ => {
            run_demos(&cli, &registry, format)?;
        }
    }

    Ok(())
}

/// Print the catalog grouped by chapter, without running anything.
fn list_demos(registry: &Registry) {
    println!("Exhibit Catalog:");

    let mut chapters: std::collections::BTreeMap<&str, Vec<&DemoDef>> =
        std::collections::BTreeMap::new();

    for &demo in registry.all() {
        chapters.entry(demo.chapter).or_default().push(demo);
    }

    let mut total = 0;
    for (chapter, demos) in &chapters {
        println!("├── chapter: {}", chapter);
        for demo in demos {
            let tags = if demo.tags.is_empty() {
                String::new()
            } else {
                format!(" [{}]", demo.tags.join(", "))
            };
            println!("│   ├── {}{} ({}:{})", demo.id, tags, demo.file, demo.line);
            total += 1;
        }
    }

    println!("{} demonstrations found.", total);
}

/// Run the registry and write the formatted report.
fn run_demos(cli: &Cli, registry: &Registry, format: OutputFormat) -> anyhow::Result<()> {
    if registry.is_empty() {
        tracing::warn!("no demonstrations registered");
    }

    tracing::info!(total = registry.len(), "running demonstrations");

    let start_time = Instant::now();

    let mut executor = Executor::new();
    let results = executor.execute(registry);

    let total_duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;
    let report = build_report(results, total_duration_ms);

    // Generate output
    let output = match format {
        OutputFormat::Json => generate_json_report(&report)?,
        OutputFormat::Human => format_report(&report),
    };

    // Write output
    if let Some(ref path) = cli.output {
        let mut file = std::fs::File::create(path)?;
        file.write_all(output.as_bytes())?;
        tracing::info!(path = %path.display(), "report written");
    } else {
        print!("{}", output);
    }

    tracing::info!(
        total = report.summary.total,
        passed = report.summary.passed,
        failed = report.summary.failed,
        duration_ms = report.summary.total_duration_ms,
        "run complete"
    );

    // Failed units do not affect the exit status; the report records them.
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_to_run_with_no_args() {
        let cli = Cli::try_parse_from(["exhibit-tour"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.format.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn cli_parses_format_and_subcommand() {
        let cli = Cli::try_parse_from(["exhibit-tour", "--format", "json"]).unwrap();
        assert_eq!(cli.format.as_deref(), Some("json"));

        let cli = Cli::try_parse_from(["exhibit-tour", "list"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List)));
    }
}
