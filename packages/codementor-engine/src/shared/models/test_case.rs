//! User-defined test cases
//!
//! A test case is owned by the caller. Runners receive the sequence by value
//! and hand back a new sequence with the same identities and order.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An input/expected-output pair plus the verdict of its last run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    #[serde(default)]
    pub input: String,

    #[serde(default)]
    pub expected_output: String,

    /// `None` until the case has been run
    #[serde(default)]
    pub actual_output: Option<String>,

    /// `None` until the case has been run
    #[serde(default)]
    pub passed: Option<bool>,
}

impl TestCase {
    /// Empty case with a fresh identity
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            input: String::new(),
            expected_output: String::new(),
            actual_output: None,
            passed: None,
        }
    }

    pub fn with_io(input: impl Into<String>, expected_output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            expected_output: expected_output.into(),
            ..Self::new()
        }
    }

    /// Clear output and verdict (e.g. after the input was edited)
    pub fn reset_verdict(&mut self) {
        self.actual_output = None;
        self.passed = None;
    }

    pub fn is_pending(&self) -> bool {
        self.passed.is_none()
    }
}

impl Default for TestCase {
    fn default() -> Self {
        Self::new()
    }
}

/// Pass/fail tally over a case sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSuiteSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub pending: usize,
}

impl TestSuiteSummary {
    pub fn from_cases(cases: &[TestCase]) -> Self {
        cases.iter().fold(
            Self {
                total: cases.len(),
                ..Default::default()
            },
            |mut summary, case| {
                match case.passed {
                    Some(true) => summary.passed += 1,
                    Some(false) => summary.failed += 1,
                    None => summary.pending += 1,
                }
                summary
            },
        )
    }

    /// True when at least one case ran and mismatched. An empty suite has none.
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

impl std::fmt::Display for TestSuiteSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} passed / {} failed / {} pending ({} total)",
            self.passed, self.failed, self.pending, self.total
        )
    }
}
