//! Integration tests for the heuristic analyzer over realistic snippets

mod common;

use codementor_engine::features::heuristics::infrastructure::{
    create_default_registry, RuleRegistry,
};
use codementor_engine::{analyze, HeuristicAnalyzer};
use common::*;
use pretty_assertions::assert_eq;

#[test]
fn test_clean_program() {
    let finding = analyze(CLEAN_SUM);
    assert!(finding.logic_error.is_none());
    assert_hint_ladder(&finding);
    assert!(finding.hints[2].content.contains("RAII"));
    assert_eq!(finding.test_cases.len(), 2);
    assert!(finding.complexity.is_none());
}

#[test]
fn test_each_rule_on_fixture() {
    let division = analyze(DIVISION_BY_ZERO);
    assert_error_contains(&division, "Division by zero");
    assert_error_at(&division, 3, 0.95);

    let leak = analyze(LEAKY_ALLOCATION);
    assert_error_contains(&leak, "memory leak");
    assert_error_at(&leak, 2, 0.85);

    let pointer = analyze(UNINITIALIZED_POINTER);
    assert_error_contains(&pointer, "uninitialized");
    assert_error_at(&pointer, 2, 0.75);

    let semicolon = analyze(MISSING_SEMICOLON);
    assert_error_contains(&semicolon, "Missing semicolon");
    assert_error_at(&semicolon, 2, 0.60);
    assert_eq!(semicolon.hints[2].content, "Add a ';' at the end of line 2.");

    for finding in [&division, &leak, &pointer, &semicolon] {
        assert_hint_ladder(finding);
        assert_eq!(finding.test_cases.len(), 2);
    }
}

#[test]
fn test_division_precedes_leak() {
    let finding = analyze(DIVISION_AND_LEAK);
    assert_error_contains(&finding, "Division by zero");
    assert_error_at(&finding, 3, 0.95);
}

#[test]
fn test_delete_anywhere_suppresses_leak_warning() {
    let src = fixture_in_main("delete nullptr; int* p = new int; int* q = new int;");
    let finding = analyze(&src);
    assert!(finding.logic_error.is_none());
}

#[test]
fn test_default_registry_matches_free_function() {
    let analyzer = HeuristicAnalyzer::with_registry(create_default_registry());
    for src in [
        CLEAN_SUM,
        DIVISION_BY_ZERO,
        LEAKY_ALLOCATION,
        UNINITIALIZED_POINTER,
        MISSING_SEMICOLON,
    ] {
        assert_eq!(analyzer.analyze(src), analyze(src));
    }
}

#[test]
fn test_custom_empty_registry() {
    let analyzer = HeuristicAnalyzer::with_registry(RuleRegistry::new());
    assert!(analyzer.analyze(DIVISION_BY_ZERO).is_clean());
}

#[test]
fn test_finding_serializes_camel_case() {
    let json = serde_json::to_value(analyze(LEAKY_ALLOCATION)).unwrap();
    assert!(json.get("logicError").is_some());
    assert!(json.get("testCases").is_some());
    assert_eq!(json["hints"][0]["type"], "Nudge");
    assert!(json.get("complexity").is_none());
}
