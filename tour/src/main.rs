//! The fixed demonstration catalog.
//!
//! Two chapters of language-feature demonstrations, run top to bottom in
//! source order. Each demonstration is self-contained and pure: it takes
//! nothing, computes something small, and returns a description of the
//! result. Run with no arguments to print the report, or `list` to see
//! the catalog.

mod fundamentals;
mod revisited;

fn main() {
    if let Err(e) = exhibit::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
