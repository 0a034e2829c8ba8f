use codementor_engine::{LlmError, MentorError, SandboxError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, OrchestratorError>;

#[derive(Error, Debug)]
pub enum OrchestratorError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error(transparent)]
    Sandbox(#[from] SandboxError),

    #[error(transparent)]
    Engine(#[from] MentorError),
}

impl OrchestratorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            OrchestratorError::MissingField(_) => ErrorCategory::ClientInput,
            OrchestratorError::Llm(_) | OrchestratorError::Sandbox(_) => {
                ErrorCategory::Collaborator
            }
            OrchestratorError::Engine(MentorError::Llm(_) | MentorError::Sandbox(_)) => {
                ErrorCategory::Collaborator
            }
            OrchestratorError::Engine(_) => ErrorCategory::Internal,
        }
    }
}

/// Where a failure originated
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ErrorCategory {
    /// Caller input error - report immediately, no fallback (e.g., missing code)
    ClientInput,
    /// Remote collaborator failed (e.g., LLM or sandbox transport, bad reply)
    Collaborator,
    /// Local setup error (e.g., config, HTTP client construction)
    Internal,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::ClientInput => "client_input",
            ErrorCategory::Collaborator => "collaborator",
            ErrorCategory::Internal => "internal",
        }
    }

    /// Process exit status reported by the CLI
    pub fn exit_code(&self) -> u8 {
        match self {
            ErrorCategory::Internal => 1,
            ErrorCategory::ClientInput => 2,
            ErrorCategory::Collaborator => 3,
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
