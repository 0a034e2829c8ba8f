//! Error types for codementor-engine
//!
//! Provides unified error handling across the crate.

use thiserror::Error;

use crate::config::ConfigError;

/// Failures of the remote completion service
#[derive(Debug, Error)]
pub enum LlmError {
    /// No usable credential configured
    #[error("LLM credential is missing or a placeholder")]
    MissingCredential,

    /// Network/transport failure
    #[error("LLM transport error: {0}")]
    Transport(String),

    /// Non-2xx reply
    #[error("LLM request failed: HTTP {status} {body}")]
    Status { status: u16, body: String },

    /// Reply carried no completion text
    #[error("LLM returned an empty completion")]
    EmptyCompletion,

    /// Completion text was not valid JSON
    #[error("LLM reply is not valid JSON: {0}")]
    MalformedJson(String),

    /// JSON parsed but violates the Finding contract
    #[error("LLM reply does not match the expected schema: {0}")]
    SchemaMismatch(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        LlmError::Transport(err.to_string())
    }
}

/// Failures talking to the execution sandbox
#[derive(Debug, Error)]
pub enum SandboxError {
    /// Network/transport failure
    #[error("Sandbox transport error: {0}")]
    Transport(String),

    /// Non-2xx reply
    #[error("Sandbox request failed: HTTP {status}")]
    Status { status: u16 },

    /// Reply body could not be decoded
    #[error("Sandbox reply could not be decoded: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for SandboxError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SandboxError::Decode(err.to_string())
        } else {
            SandboxError::Transport(err.to_string())
        }
    }
}

/// Main error type for codementor-engine operations
#[derive(Debug, Error)]
pub enum MentorError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error(transparent)]
    Sandbox(#[from] SandboxError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    Client(String),
}

impl MentorError {
    pub fn client<E: std::fmt::Display>(e: E) -> Self {
        MentorError::Client(e.to_string())
    }
}

/// Result type alias for codementor operations
pub type Result<T> = std::result::Result<T, MentorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_status_display() {
        let err = LlmError::Status {
            status: 503,
            body: "unavailable".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("unavailable"));
    }

    #[test]
    fn test_mentor_error_is_transparent() {
        let err: MentorError = SandboxError::Status { status: 429 }.into();
        assert_eq!(err.to_string(), "Sandbox request failed: HTTP 429");
    }
}
