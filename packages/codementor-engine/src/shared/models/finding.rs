//! Finding model
//!
//! The structured result of analyzing a snippet. Both the LLM path and the
//! heuristic path produce this exact shape, so the presentation layer never
//! needs to know which one answered.

use serde::{Deserialize, Serialize};

/// Structured critique of a code snippet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    /// Detected defect, or `None` when the snippet looks clean
    pub logic_error: Option<LogicError>,

    /// Escalating hints (Nudge → Clue → Strategy)
    pub hints: Vec<Hint>,

    /// Illustrative sample cases (not executed)
    #[serde(default)]
    pub test_cases: Vec<SampleCase>,

    /// Complexity report (extended LLM analysis only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<ComplexityReport>,
}

impl Finding {
    pub fn new(
        logic_error: Option<LogicError>,
        hints: Vec<Hint>,
        test_cases: Vec<SampleCase>,
    ) -> Self {
        Self {
            logic_error,
            hints,
            test_cases,
            complexity: None,
        }
    }

    /// True when no defect was reported
    pub fn is_clean(&self) -> bool {
        self.logic_error.is_none()
    }
}

/// A single detected defect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogicError {
    pub message: String,

    /// 1-based line, 0 when unknown
    #[serde(default)]
    pub line: u32,

    /// Declared trust weight in [0, 1]
    pub confidence: f64,
}

impl LogicError {
    pub fn new(message: impl Into<String>, line: u32, confidence: f64) -> Self {
        Self {
            message: message.into(),
            line,
            confidence,
        }
    }
}

/// Hint specificity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HintKind {
    Nudge,
    Clue,
    Strategy,
}

impl HintKind {
    /// Ladder order, least specific first
    pub const LADDER: [HintKind; 3] = [HintKind::Nudge, HintKind::Clue, HintKind::Strategy];

    pub fn as_str(&self) -> &'static str {
        match self {
            HintKind::Nudge => "Nudge",
            HintKind::Clue => "Clue",
            HintKind::Strategy => "Strategy",
        }
    }
}

impl std::fmt::Display for HintKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    #[serde(rename = "type")]
    pub kind: HintKind,
    pub content: String,
}

impl Hint {
    pub fn nudge(content: impl Into<String>) -> Self {
        Self {
            kind: HintKind::Nudge,
            content: content.into(),
        }
    }

    pub fn clue(content: impl Into<String>) -> Self {
        Self {
            kind: HintKind::Clue,
            content: content.into(),
        }
    }

    pub fn strategy(content: impl Into<String>) -> Self {
        Self {
            kind: HintKind::Strategy,
            content: content.into(),
        }
    }
}

/// Illustrative input with its expected outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleCase {
    pub input: String,
    pub pass: bool,
}

impl SampleCase {
    pub fn new(input: impl Into<String>, pass: bool) -> Self {
        Self {
            input: input.into(),
            pass,
        }
    }
}

/// Time/space complexity estimate returned by extended analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityReport {
    pub time_complexity: String,
    pub time_explanation: String,
    pub space_complexity: String,
    pub space_explanation: String,
    /// 1..=10
    pub quality_score: u8,
    #[serde(default)]
    pub suggestions: Vec<String>,
}
