//! Heuristic analyzer service
//!
//! Local, deterministic substitute for the remote critic. Always returns a
//! well-formed Finding; there is no failure path.

use once_cell::sync::Lazy;
use tracing::debug;

use crate::features::heuristics::infrastructure::{
    create_default_registry, MatchContext, RuleRegistry,
};
use crate::shared::models::{Finding, Hint, SampleCase};

static DEFAULT_ANALYZER: Lazy<HeuristicAnalyzer> = Lazy::new(HeuristicAnalyzer::new);

/// Analyze with the built-in C++ rule chain
pub fn analyze(source: &str) -> Finding {
    DEFAULT_ANALYZER.analyze(source)
}

pub struct HeuristicAnalyzer {
    registry: RuleRegistry,
}

impl HeuristicAnalyzer {
    /// Analyzer over the built-in C++ rules
    pub fn new() -> Self {
        Self::with_registry(create_default_registry())
    }

    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    pub fn analyze(&self, source: &str) -> Finding {
        let ctx = MatchContext::new(source);

        match self.registry.first_match(&ctx) {
            Some((rule, m)) => {
                debug!("heuristic rule {} matched at line {}", rule.name(), m.line);
                rule.finding(&m)
            }
            None => clean_finding(),
        }
    }
}

impl Default for HeuristicAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Best-practice advice when no rule fires
fn clean_finding() -> Finding {
    Finding::new(
        None,
        vec![
            Hint::nudge("Consider edge cases and memory management."),
            Hint::clue("Test your function with boundary values."),
            Hint::strategy("Use RAII principles and smart pointers for safer code."),
        ],
        vec![
            SampleCase::new("Valid input", true),
            SampleCase::new("Edge case", true),
        ],
    )
}
