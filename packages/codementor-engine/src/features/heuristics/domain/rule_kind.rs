use serde::{Deserialize, Serialize};

/// Defect categories the heuristic analyzer recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    DivisionByZero,
    UnmatchedAllocation,
    UninitializedPointer,
    MissingTerminator,
}

impl RuleKind {
    /// Evaluation order, first match wins
    pub const PRECEDENCE: [RuleKind; 4] = [
        RuleKind::DivisionByZero,
        RuleKind::UnmatchedAllocation,
        RuleKind::UninitializedPointer,
        RuleKind::MissingTerminator,
    ];

    /// Fixed trust weight reported with every match of this rule.
    ///
    /// Not derived from evidence strength.
    pub fn confidence(&self) -> f64 {
        match self {
            RuleKind::DivisionByZero => 0.95,
            RuleKind::UnmatchedAllocation => 0.85,
            RuleKind::UninitializedPointer => 0.75,
            RuleKind::MissingTerminator => 0.60,
        }
    }

    /// Higher = checked first
    pub fn priority(&self) -> i32 {
        match self {
            RuleKind::DivisionByZero => 40,
            RuleKind::UnmatchedAllocation => 30,
            RuleKind::UninitializedPointer => 20,
            RuleKind::MissingTerminator => 10,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::DivisionByZero => "division_by_zero",
            RuleKind::UnmatchedAllocation => "unmatched_allocation",
            RuleKind::UninitializedPointer => "uninitialized_pointer",
            RuleKind::MissingTerminator => "missing_terminator",
        }
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_follows_priority() {
        let priorities: Vec<i32> = RuleKind::PRECEDENCE.iter().map(|r| r.priority()).collect();
        let mut sorted = priorities.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(priorities, sorted);
    }

    #[test]
    fn test_confidences_in_unit_interval() {
        for rule in RuleKind::PRECEDENCE {
            let c = rule.confidence();
            assert!((0.0..=1.0).contains(&c), "{rule} confidence {c}");
        }
    }
}
