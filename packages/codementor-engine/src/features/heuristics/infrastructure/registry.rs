//! Rule Registry
//!
//! Ordered rule chain. Unlike an accumulating matcher, the registry stops at
//! the first rule that fires: precedence is the contract.

use super::base::{MatchContext, PatternRule, RuleMatch};
use std::sync::Arc;

pub struct RuleRegistry {
    rules: Vec<Arc<dyn PatternRule>>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn register(&mut self, rule: Arc<dyn PatternRule>) {
        self.rules.push(rule);
    }

    /// Stable sort by priority, so equal priorities keep registration order
    pub fn optimize(&mut self) {
        self.rules.sort_by_key(|r| -r.priority());
    }

    /// First rule that fires, in chain order
    pub fn first_match(&self, ctx: &MatchContext) -> Option<(Arc<dyn PatternRule>, RuleMatch)> {
        self.rules
            .iter()
            .find_map(|rule| rule.detect(ctx).map(|m| (Arc::clone(rule), m)))
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::heuristics::infrastructure::cpp_rules::{
        DivisionByZeroRule, MissingTerminatorRule, UnmatchedAllocationRule,
    };

    #[test]
    fn test_optimize_restores_precedence() {
        let mut registry = RuleRegistry::new();
        registry.register(Arc::new(MissingTerminatorRule));
        registry.register(Arc::new(UnmatchedAllocationRule));
        registry.register(Arc::new(DivisionByZeroRule));
        registry.optimize();

        assert_eq!(
            registry.rule_names(),
            vec!["division_by_zero", "unmatched_allocation", "missing_terminator"]
        );
    }

    #[test]
    fn test_first_match_stops_early() {
        let mut registry = RuleRegistry::new();
        registry.register(Arc::new(DivisionByZeroRule));
        registry.register(Arc::new(UnmatchedAllocationRule));

        let ctx = MatchContext::new("int* p = new int;\nint x = 1 / 0;");
        let (rule, m) = registry.first_match(&ctx).unwrap();
        assert_eq!(rule.name(), "division_by_zero");
        assert_eq!(m.line, 2);
    }

    #[test]
    fn test_empty_registry_never_matches() {
        let registry = RuleRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.first_match(&MatchContext::new("x / 0")).is_none());
    }
}
