//! Heuristic rule chain
//!
//! ```text
//! RuleRegistry (first match wins)
//! ├── DivisionByZeroRule       "/ 0", "/0"
//! ├── UnmatchedAllocationRule  "new " without any "delete"
//! ├── UninitializedPointerRule `*name;` without nullptr/NULL
//! └── MissingTerminatorRule    statement line lacking ; { }
//! ```

pub mod base;
pub mod cpp_rules;
pub mod registry;

pub use base::{MatchContext, PatternRule, Remediation, RuleMatch};
pub use registry::RuleRegistry;

use std::sync::Arc;

/// Create a registry with all built-in C++ rules
pub fn create_default_registry() -> RuleRegistry {
    let mut registry = RuleRegistry::new();

    for rule in cpp_rules::all_cpp_rules() {
        registry.register(Arc::from(rule));
    }

    registry.optimize();
    registry
}
