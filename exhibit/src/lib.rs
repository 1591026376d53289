#![warn(missing_docs)]
//! # Exhibit
//!
//! A batch runner for fixed suites of language-feature demonstrations.
//!
//! Each demonstration is a named, self-contained, pure computation that
//! returns a description of its result. Exhibit collects them into an
//! ordered registry, runs them serially with per-unit panic isolation,
//! and reports one line per unit:
//!
//! - **Ordered registry**: `#[demo]` functions are collected in source
//!   order; ids are unique or startup fails
//! - **Failure isolation**: a panicking demonstration becomes an `ERROR`
//!   line in the report; the rest of the suite still runs
//! - **Deterministic reports**: same registry, same report — the process
//!   exits 0 even when individual demonstrations fail
//!
//! ## Quick Start
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

// Re-export core types
pub use exhibit_core::{DemoDef, Outcome, Registry, RegistryError};

// Re-export macros
pub use exhibit_macros::demo;

// Re-export report types
pub use exhibit_report::{
    HostInfo, OutputFormat, Report, ReportEntry, ReportMeta, ReportSummary, format_report,
    generate_json_report,
};

/// Internal re-exports for macro use
#[doc(hidden)]
pub mod internal {
    pub use inventory;
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Outcome, demo};
}

/// Run the Exhibit CLI harness.
///
/// Call this from your demonstration binary's `main()`:
/// ```ignore
/// fn main() {
///     if let Err(e) = exhibit::run() {
///         eprintln!("Error: {e}");
///         std::process::exit(1);
///     }
/// }
/// ```
pub use exhibit_cli::run;
