//! C++ snippet rules
//!
//! Crude existence checks over raw text. They are cheap stand-ins for the
//! remote critic, not a C++ front end: `new`/`delete` is an existence check,
//! not a balance check, and comments or string literals are not skipped.

use once_cell::sync::Lazy;
use regex::Regex;

use super::base::{MatchContext, PatternRule, Remediation, RuleMatch};
use crate::features::heuristics::domain::RuleKind;
use crate::shared::models::{Finding, Hint, LogicError};

/// Dereference-looking bare declaration, e.g. `int *p;`
static BARE_POINTER_DECL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\s*\w+\s*;").expect("bare pointer pattern is a valid regex")
});

const DIVISION_TOKENS: [&str; 2] = ["/ 0", "/0"];
const ALLOCATION_TOKEN: &str = "new ";
const DEALLOCATION_TOKEN: &str = "delete";
const NULL_SENTINELS: [&str; 2] = ["nullptr", "NULL"];
const STATEMENT_KEYWORDS: [&str; 4] = ["int ", "return ", "cout", "cin"];

// ---------------------------------------------------------------------------
// Division by zero
// ---------------------------------------------------------------------------

static DIVISION_REMEDIATION: Remediation = Remediation {
    message: "Critical: Division by zero detected.",
    nudge: "Check your division operations.",
    clue: "Division by zero causes undefined behavior in C++.",
    strategy: "Add a check to ensure the divisor is non-zero before dividing.",
    samples: &[("x = 10, y = 0", false), ("x = 10, y = 2", true)],
};

pub struct DivisionByZeroRule;

impl PatternRule for DivisionByZeroRule {
    fn kind(&self) -> RuleKind {
        RuleKind::DivisionByZero
    }

    fn detect(&self, ctx: &MatchContext) -> Option<RuleMatch> {
        if !DIVISION_TOKENS.iter().any(|t| ctx.contains(t)) {
            return None;
        }
        Some(RuleMatch {
            rule: self.kind(),
            line: ctx.first_line_where(|l| DIVISION_TOKENS.iter().any(|t| l.contains(t))),
        })
    }

    fn remediation(&self) -> &Remediation {
        &DIVISION_REMEDIATION
    }
}

// ---------------------------------------------------------------------------
// Allocation without any deallocation
// ---------------------------------------------------------------------------

static ALLOCATION_REMEDIATION: Remediation = Remediation {
    message: "Warning: Potential memory leak - 'new' without corresponding 'delete'.",
    nudge: "What happens to dynamically allocated memory?",
    clue: "Every 'new' should have a corresponding 'delete'.",
    strategy: "Consider using smart pointers (unique_ptr, shared_ptr) or add 'delete' to free the memory.",
    samples: &[("Allocate 100 objects", false), ("Allocate and deallocate", true)],
};

pub struct UnmatchedAllocationRule;

impl PatternRule for UnmatchedAllocationRule {
    fn kind(&self) -> RuleKind {
        RuleKind::UnmatchedAllocation
    }

    fn detect(&self, ctx: &MatchContext) -> Option<RuleMatch> {
        if !ctx.contains(ALLOCATION_TOKEN) || ctx.contains(DEALLOCATION_TOKEN) {
            return None;
        }
        Some(RuleMatch {
            rule: self.kind(),
            line: ctx.first_line_where(|l| l.contains(ALLOCATION_TOKEN)),
        })
    }

    fn remediation(&self) -> &Remediation {
        &ALLOCATION_REMEDIATION
    }
}

// ---------------------------------------------------------------------------
// Possibly uninitialized pointer
// ---------------------------------------------------------------------------

static POINTER_REMEDIATION: Remediation = Remediation {
    message: "Warning: Pointer may be uninitialized before use.",
    nudge: "What is the initial value of your pointer?",
    clue: "Uninitialized pointers contain garbage values.",
    strategy: "Initialize pointers to nullptr or a valid address.",
    samples: &[
        ("Dereference before assignment", false),
        ("Initialize to nullptr and check before use", true),
    ],
};

pub struct UninitializedPointerRule;

impl PatternRule for UninitializedPointerRule {
    fn kind(&self) -> RuleKind {
        RuleKind::UninitializedPointer
    }

    fn detect(&self, ctx: &MatchContext) -> Option<RuleMatch> {
        if !BARE_POINTER_DECL.is_match(ctx.source)
            || NULL_SENTINELS.iter().any(|s| ctx.contains(s))
        {
            return None;
        }
        // `\s` crosses newlines, so the whole-text match may have no single-line witness
        Some(RuleMatch {
            rule: self.kind(),
            line: ctx.first_line_where(|l| BARE_POINTER_DECL.is_match(l)),
        })
    }

    fn remediation(&self) -> &Remediation {
        &POINTER_REMEDIATION
    }
}

// ---------------------------------------------------------------------------
// Missing statement terminator
// ---------------------------------------------------------------------------

static TERMINATOR_REMEDIATION: Remediation = Remediation {
    message: "Syntax Error: Missing semicolon at the end of the statement.",
    nudge: "C++ statements need proper termination.",
    clue: "Check the end of your statement.",
    strategy: "Add a ';' at the end of the statement.",
    samples: &[("Compile as written", false), ("Compile after adding ';'", true)],
};

pub struct MissingTerminatorRule;

impl MissingTerminatorRule {
    fn is_unterminated_statement(line: &str) -> bool {
        let trimmed = line.trim();
        !trimmed.is_empty()
            && !trimmed.starts_with("//")
            && !trimmed.starts_with('#')
            && !trimmed.ends_with(';')
            && !trimmed.ends_with('{')
            && !trimmed.ends_with('}')
            && STATEMENT_KEYWORDS.iter().any(|k| trimmed.contains(k))
    }
}

impl PatternRule for MissingTerminatorRule {
    fn kind(&self) -> RuleKind {
        RuleKind::MissingTerminator
    }

    fn detect(&self, ctx: &MatchContext) -> Option<RuleMatch> {
        match ctx.first_line_where(Self::is_unterminated_statement) {
            0 => None,
            line => Some(RuleMatch {
                rule: self.kind(),
                line,
            }),
        }
    }

    fn remediation(&self) -> &Remediation {
        &TERMINATOR_REMEDIATION
    }

    fn finding(&self, m: &RuleMatch) -> Finding {
        let remediation = self.remediation();
        Finding::new(
            Some(LogicError::new(
                remediation.message,
                m.line,
                self.kind().confidence(),
            )),
            vec![
                Hint::nudge(remediation.nudge),
                Hint::clue(remediation.clue),
                Hint::strategy(format!("Add a ';' at the end of line {}.", m.line)),
            ],
            remediation.samples(),
        )
    }
}

/// All C++ rules in precedence order
pub fn all_cpp_rules() -> Vec<Box<dyn PatternRule>> {
    vec![
        Box::new(DivisionByZeroRule),
        Box::new(UnmatchedAllocationRule),
        Box::new(UninitializedPointerRule),
        Box::new(MissingTerminatorRule),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(rule: &dyn PatternRule, source: &str) -> Option<RuleMatch> {
        rule.detect(&MatchContext::new(source))
    }

    #[test]
    fn test_division_detects_both_spellings() {
        assert_eq!(detect(&DivisionByZeroRule, "int x = a / 0;").unwrap().line, 1);
        assert_eq!(detect(&DivisionByZeroRule, "int a;\nint x = a/0;").unwrap().line, 2);
        assert!(detect(&DivisionByZeroRule, "int x = a / b;").is_none());
    }

    #[test]
    fn test_allocation_requires_absent_delete() {
        assert_eq!(
            detect(&UnmatchedAllocationRule, "int a;\nint* p = new int[10];").unwrap().line,
            2
        );
        assert!(detect(&UnmatchedAllocationRule, "int* p = new int;\ndelete p;").is_none());
    }

    #[test]
    fn test_allocation_is_existence_not_balance() {
        // two allocations, one delete: still no match
        let src = "int* a = new int;\nint* b = new int;\ndelete a;";
        assert!(detect(&UnmatchedAllocationRule, src).is_none());
        // delete before new: still no match
        assert!(detect(&UnmatchedAllocationRule, "delete q;\nint* p = new int;").is_none());
    }

    #[test]
    fn test_pointer_rule_suppressed_by_null_sentinel() {
        assert_eq!(detect(&UninitializedPointerRule, "int *p;\n*p = 3;").unwrap().line, 1);
        assert!(detect(&UninitializedPointerRule, "int *p;\np = nullptr;").is_none());
        assert!(detect(&UninitializedPointerRule, "int *p;\np = NULL;").is_none());
    }

    #[test]
    fn test_pointer_match_spanning_lines_reports_line_zero() {
        let m = detect(&UninitializedPointerRule, "int *\np\n;").unwrap();
        assert_eq!(m.line, 0);
    }

    #[test]
    fn test_missing_terminator_line_and_exclusions() {
        let src = "#include <iostream>\n// int comment\nint main() {\n    int x = 5\n}";
        let m = detect(&MissingTerminatorRule, src).unwrap();
        assert_eq!(m.line, 4);

        let clean = "int main() {\n    cout << 1;\n    return 0;\n}";
        assert!(detect(&MissingTerminatorRule, clean).is_none());
    }

    #[test]
    fn test_missing_terminator_strategy_names_line() {
        let rule = MissingTerminatorRule;
        let finding = rule.finding(&RuleMatch {
            rule: RuleKind::MissingTerminator,
            line: 7,
        });
        assert_eq!(finding.hints[2].content, "Add a ';' at the end of line 7.");
        assert_eq!(finding.logic_error.unwrap().confidence, 0.60);
    }

    #[test]
    fn test_rules_listed_in_precedence_order() {
        let kinds: Vec<RuleKind> = all_cpp_rules().iter().map(|r| r.kind()).collect();
        assert_eq!(kinds, RuleKind::PRECEDENCE.to_vec());
    }
}
