//! Base Pattern Matching System
//!
//! Text-level rule infrastructure. Rules see raw source text only; nothing
//! here parses C++.

use crate::features::heuristics::domain::RuleKind;
use crate::shared::models::{Finding, Hint, LogicError, SampleCase};

/// Context for pattern matching
#[derive(Debug, Clone)]
pub struct MatchContext<'a> {
    /// Full source text
    pub source: &'a str,

    /// Source split on '\n'
    pub lines: Vec<&'a str>,
}

impl<'a> MatchContext<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            lines: source.split('\n').collect(),
        }
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.source.contains(needle)
    }

    /// 1-based index of the first line satisfying `pred`, 0 if none does
    pub fn first_line_where<F>(&self, pred: F) -> u32
    where
        F: Fn(&str) -> bool,
    {
        self.lines
            .iter()
            .position(|&line| pred(line))
            .map_or(0, |idx| idx as u32 + 1)
    }
}

/// A positive rule match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch {
    pub rule: RuleKind,
    /// 1-based, 0 when the match is not confined to one line
    pub line: u32,
}

/// Fixed remediation content attached to a rule
#[derive(Debug, Clone)]
pub struct Remediation {
    pub message: &'static str,
    pub nudge: &'static str,
    pub clue: &'static str,
    pub strategy: &'static str,
    pub samples: &'static [(&'static str, bool)],
}

impl Remediation {
    pub fn hints(&self) -> Vec<Hint> {
        vec![
            Hint::nudge(self.nudge),
            Hint::clue(self.clue),
            Hint::strategy(self.strategy),
        ]
    }

    pub fn samples(&self) -> Vec<SampleCase> {
        self.samples
            .iter()
            .map(|(input, pass)| SampleCase::new(*input, *pass))
            .collect()
    }
}

/// Pattern rule trait
pub trait PatternRule: Send + Sync {
    fn kind(&self) -> RuleKind;

    /// Detect the condition; `None` when it does not apply
    fn detect(&self, ctx: &MatchContext) -> Option<RuleMatch>;

    fn remediation(&self) -> &Remediation;

    /// Build the finding for a match. Rules may override to personalize hints.
    fn finding(&self, m: &RuleMatch) -> Finding {
        let remediation = self.remediation();
        Finding::new(
            Some(LogicError::new(
                remediation.message,
                m.line,
                self.kind().confidence(),
            )),
            remediation.hints(),
            remediation.samples(),
        )
    }

    /// Priority (higher = checked first)
    fn priority(&self) -> i32 {
        self.kind().priority()
    }

    fn name(&self) -> &'static str {
        self.kind().as_str()
    }
}
