//! Critique reply decoding
//!
//! The completion text is untrusted: fences are stripped, the JSON is decoded
//! into a Finding, and the numeric fields are range-checked. Any violation is
//! an `LlmError`, which callers treat as a reason to fall back.

use crate::errors::LlmError;
use crate::features::llm::domain::AnalysisMode;
use crate::shared::models::Finding;

const QUALITY_SCORE_RANGE: std::ops::RangeInclusive<u8> = 1..=10;

/// Remove every ```json / ``` marker and trim
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Decode and validate a critique reply
pub fn parse_finding(text: &str, mode: AnalysisMode) -> Result<Finding, LlmError> {
    let cleaned = strip_code_fences(text);
    if cleaned.is_empty() {
        return Err(LlmError::EmptyCompletion);
    }

    let value: serde_json::Value =
        serde_json::from_str(&cleaned).map_err(|e| LlmError::MalformedJson(e.to_string()))?;
    if !value.is_object() {
        return Err(LlmError::SchemaMismatch("top-level value is not an object".to_string()));
    }

    let finding: Finding =
        serde_json::from_value(value).map_err(|e| LlmError::SchemaMismatch(e.to_string()))?;

    validate_finding(&finding, mode)?;
    Ok(finding)
}

fn validate_finding(finding: &Finding, mode: AnalysisMode) -> Result<(), LlmError> {
    if let Some(error) = &finding.logic_error {
        if !(0.0..=1.0).contains(&error.confidence) {
            return Err(LlmError::SchemaMismatch(format!(
                "confidence {} outside [0, 1]",
                error.confidence
            )));
        }
    }

    match (&finding.complexity, mode) {
        (None, AnalysisMode::Extended) => {
            Err(LlmError::SchemaMismatch("complexity report missing".to_string()))
        }
        (Some(report), _) if !QUALITY_SCORE_RANGE.contains(&report.quality_score) => {
            Err(LlmError::SchemaMismatch(format!(
                "qualityScore {} outside 1..=10",
                report.quality_score
            )))
        }
        _ => Ok(()),
    }
}
