//! Demonstration Execution
//!
//! Runs the registry in order and collects one outcome per unit.
//!
//! Execution is in-process, single-threaded, and strictly sequential. A
//! panicking unit is caught at this boundary with `catch_unwind`, recorded
//! as a `Failure`, and the run continues with the next unit: one
//! demonstration's failure never aborts the rest of the run.

use exhibit_core::{DemoDef, Outcome, Registry};
use std::time::Instant;

/// Result from executing a single demonstration
#[derive(Debug)]
pub struct ExecutionResult {
    pub id: String,
    pub chapter: String,
    pub outcome: Outcome,
    pub duration_ns: u64,
}

/// Execute demonstrations and produce results
#[derive(Debug, Default)]
pub struct Executor {
    results: Vec<ExecutionResult>,
}

impl Executor {
    /// Create a new executor
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute every registered demonstration, in registry order.
    ///
    /// Produces exactly one result per unit. The default panic hook is
    /// silenced for the duration of the run so captured panics do not
    /// write to stderr; it is restored before returning.
    pub fn execute(&mut self, registry: &Registry) -> Vec<ExecutionResult> {
        let previous_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(|_| {}));

        for demo in registry.all() {
            let result = self.execute_single(demo);
            self.results.push(result);
        }

        std::panic::set_hook(previous_hook);
        std::mem::take(&mut self.results)
    }

    /// Execute a single demonstration
    fn execute_single(&self, demo: &DemoDef) -> ExecutionResult {
        tracing::debug!(
            id = demo.id,
            module = demo.module_path,
            "running demonstration"
        );
        let start = Instant::now();

        // Run with panic catching
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(demo.runner_fn));

        let duration_ns = start.elapsed().as_nanos() as u64;

        match result {
            Ok(description) => ExecutionResult {
                id: demo.id.to_string(),
                chapter: demo.chapter.to_string(),
                outcome: Outcome::Value(description),
                duration_ns,
            },
            Err(panic) => {
                let message = if let Some(s) = panic.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "unknown panic".to_string()
                };

                ExecutionResult {
                    id: demo.id.to_string(),
                    chapter: demo.chapter.to_string(),
                    outcome: Outcome::Failure(message),
                    duration_ns,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greeting() -> String {
        "hello".to_string()
    }

    fn boom() -> String {
        panic!("divide by zero");
    }

    fn after() -> String {
        "still here".to_string()
    }

    static GREETING: DemoDef = DemoDef {
        id: "greeting",
        name: "greeting",
        chapter: "test",
        tags: &[],
        runner_fn: greeting,
        file: "a.rs",
        line: 1,
        module_path: "",
    };
    static BOOM: DemoDef = DemoDef {
        id: "boom",
        name: "boom",
        chapter: "test",
        tags: &[],
        runner_fn: boom,
        file: "a.rs",
        line: 2,
        module_path: "",
    };
    static AFTER: DemoDef = DemoDef {
        id: "after",
        name: "after",
        chapter: "test",
        tags: &[],
        runner_fn: after,
        file: "a.rs",
        line: 3,
        module_path: "",
    };

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry.register(&GREETING).unwrap();
        registry.register(&BOOM).unwrap();
        registry.register(&AFTER).unwrap();
        registry
    }

    #[test]
    fn one_result_per_unit_in_order() {
        let results = Executor::new().execute(&registry());

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].id, "greeting");
        assert_eq!(results[1].id, "boom");
        assert_eq!(results[2].id, "after");
    }

    #[test]
    fn normal_return_is_wrapped_verbatim() {
        let results = Executor::new().execute(&registry());

        assert_eq!(results[0].outcome, Outcome::Value("hello".to_string()));
    }

    #[test]
    fn panic_is_captured_and_run_continues() {
        let results = Executor::new().execute(&registry());

        assert_eq!(results[1].outcome, Outcome::Failure("divide by zero".to_string()));
        // The unit after the panic still ran
        assert_eq!(results[2].outcome, Outcome::Value("still here".to_string()));
    }

    #[test]
    fn empty_registry_yields_empty_results() {
        let results = Executor::new().execute(&Registry::new());
        assert!(results.is_empty());
    }
}
