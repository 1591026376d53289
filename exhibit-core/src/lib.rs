#![warn(missing_docs)]
//! Exhibit Core - Definitions and Registry
//!
//! This crate provides the building blocks of a demonstration suite:
//! - `DemoDef`, the static definition registered via `#[demo]`
//! - `Outcome`, the tagged result of running one demonstration
//! - `Registry`, the ordered, duplicate-checked catalog

use std::collections::HashSet;

use thiserror::Error;

/// Demonstration definition registered via `#[demo]`
#[derive(Debug, Clone)]
pub struct DemoDef {
    /// Unique identifier, stable across runs
    pub id: &'static str,
    /// Function name of the demonstration
    pub name: &'static str,
    /// Chapter this demonstration belongs to
    pub chapter: &'static str,
    /// Tags for catalog listings
    pub tags: &'static [&'static str],
    /// The demonstration itself: a pure computation returning its description
    pub runner_fn: fn() -> String,
    /// Source file path
    pub file: &'static str,
    /// Source line number
    pub line: u32,
    /// Module path
    pub module_path: &'static str,
}

/// Result of one demonstration invocation.
///
/// Produced exactly once per unit per run and never mutated afterwards.
/// Consumers branch on the variant before touching the contained text.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Outcome {
    /// The unit returned normally; carries its description verbatim.
    Value(String),
    /// The unit terminated abnormally; carries the captured diagnostic.
    Failure(String),
}

impl Outcome {
    /// Whether this outcome is a `Value`
    pub fn is_value(&self) -> bool {
        matches!(self, Outcome::Value(_))
    }

    /// The contained text, regardless of variant
    pub fn text(&self) -> &str {
        match self {
            Outcome::Value(s) | Outcome::Failure(s) => s,
        }
    }
}

/// Errors from registry operations
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// Two demonstrations were registered under the same id.
    #[error("duplicate demonstration id: {0}")]
    DuplicateName(String),
}

/// Ordered catalog of demonstrations.
///
/// Registration happens once at startup; afterwards the registry is
/// read-only, so a run over it is deterministic and repeatable.
#[derive(Debug, Default)]
pub struct Registry {
    demos: Vec<&'static DemoDef>,
    ids: HashSet<&'static str>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a demonstration.
    ///
    /// Fails with [`RegistryError::DuplicateName`] if the id is already
    /// taken, leaving the registry unchanged.
    pub fn register(&mut self, def: &'static DemoDef) -> Result<(), RegistryError> {
        if !self.ids.insert(def.id) {
            return Err(RegistryError::DuplicateName(def.id.to_string()));
        }
        self.demos.push(def);
        Ok(())
    }

    /// All registered demonstrations, in registration order
    pub fn all(&self) -> &[&'static DemoDef] {
        &self.demos
    }

    /// Number of registered demonstrations
    pub fn len(&self) -> usize {
        self.demos.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.demos.is_empty()
    }

    /// Build the fixed registry from `#[demo]` submissions.
    ///
    /// Inventory iteration order is link-dependent, so submissions are
    /// ordered by `(file, line)` first: the source top-to-bottom order of
    /// the catalog. Duplicate ids fail registration.
    pub fn collect() -> Result<Self, RegistryError> {
        let mut defs: Vec<&'static DemoDef> = inventory::iter::<DemoDef>.into_iter().collect();
        defs.sort_by_key(|d| (d.file, d.line));

        let mut registry = Self::new();
        for def in defs {
            registry.register(def)?;
        }
        Ok(registry)
    }
}

// Collect all registered demonstrations
inventory::collect!(DemoDef);

/// Anchor to prevent LTO from stripping inventory entries
#[used]
#[doc(hidden)]
pub static REGISTRY_ANCHOR: fn() = || {
    for _ in inventory::iter::<DemoDef> {}
};

#[cfg(test)]
mod tests {
    use super::*;

    fn ok() -> String {
        "ok".to_string()
    }

    #[test]
    fn register_preserves_insertion_order() {
        static B: DemoDef = DemoDef {
            id: "b",
            name: "b",
            chapter: "test",
            tags: &[],
            runner_fn: ok,
            file: "b.rs",
            line: 1,
            module_path: "",
        };
        static A: DemoDef = DemoDef {
            id: "a",
            name: "a",
            chapter: "test",
            tags: &[],
            runner_fn: ok,
            file: "a.rs",
            line: 1,
            module_path: "",
        };

        let mut registry = Registry::new();
        registry.register(&B).unwrap();
        registry.register(&A).unwrap();

        // Insertion order, not alphabetical
        assert_eq!(registry.all()[0].id, "b");
        assert_eq!(registry.all()[1].id, "a");
    }

    #[test]
    fn duplicate_id_rejected_atomically() {
        static FIRST: DemoDef = DemoDef {
            id: "same",
            name: "first",
            chapter: "test",
            tags: &[],
            runner_fn: ok,
            file: "x.rs",
            line: 1,
            module_path: "",
        };
        static SECOND: DemoDef = DemoDef {
            id: "same",
            name: "second",
            chapter: "test",
            tags: &[],
            runner_fn: ok,
            file: "x.rs",
            line: 2,
            module_path: "",
        };

        let mut registry = Registry::new();
        registry.register(&FIRST).unwrap();

        let err = registry.register(&SECOND).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateName(ref id) if id == "same"));

        // Registry unchanged by the failed registration
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.all()[0].name, "first");
    }

    #[test]
    fn outcome_accessors() {
        let value = Outcome::Value("3".to_string());
        let failure = Outcome::Failure("divide by zero".to_string());

        assert!(value.is_value());
        assert!(!failure.is_value());
        assert_eq!(value.text(), "3");
        assert_eq!(failure.text(), "divide by zero");
    }
}
