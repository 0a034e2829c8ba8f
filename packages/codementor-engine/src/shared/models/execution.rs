//! Sandbox execution models

use serde::{Deserialize, Serialize};

/// One program + stdin submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionRequest {
    pub code: String,
    #[serde(default)]
    pub stdin: String,
}

impl ExecutionRequest {
    pub fn new(code: impl Into<String>, stdin: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            stdin: stdin.into(),
        }
    }
}

/// Normalized sandbox reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SandboxResult {
    /// True when no compile stage ran or it exited with code 0
    pub success: bool,
    /// Captured run output, empty when the program never ran
    pub output: String,
    /// Run stderr, else compile stderr, else empty
    pub error: String,
    pub exit_code: i32,
    /// Run stage was terminated by a signal
    pub timed_out: bool,
}

impl SandboxResult {
    pub fn ok(output: impl Into<String>) -> Self {
        Self {
            success: true,
            output: output.into(),
            error: String::new(),
            exit_code: 0,
            timed_out: false,
        }
    }
}
