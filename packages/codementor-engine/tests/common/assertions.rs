//! Domain assertions for Finding values

use codementor_engine::{Finding, HintKind};

/// Hints are exactly Nudge, Clue, Strategy in that order
pub fn assert_hint_ladder(finding: &Finding) {
    let kinds: Vec<HintKind> = finding.hints.iter().map(|h| h.kind).collect();
    assert_eq!(
        kinds,
        vec![HintKind::Nudge, HintKind::Clue, HintKind::Strategy],
        "unexpected hint ladder: {:?}",
        finding.hints
    );
}

/// Finding reports an error whose message contains `needle`
pub fn assert_error_contains(finding: &Finding, needle: &str) {
    let error = finding
        .logic_error
        .as_ref()
        .unwrap_or_else(|| panic!("expected an error containing {needle:?}, got a clean finding"));
    assert!(
        error.message.contains(needle),
        "expected {needle:?} in {:?}",
        error.message
    );
}

/// Reported line and confidence
pub fn assert_error_at(finding: &Finding, line: u32, confidence: f64) {
    let error = finding.logic_error.as_ref().expect("expected a logic error");
    assert_eq!(error.line, line, "line mismatch for {:?}", error.message);
    assert_eq!(error.confidence, confidence, "confidence mismatch for {:?}", error.message);
}
