//! Piston `/execute` wire format and its normalization into SandboxResult

use serde::{Deserialize, Serialize};

use crate::config::SandboxConfig;
use crate::shared::models::{ExecutionRequest, SandboxResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PistonFile {
    pub name: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PistonExecuteRequest {
    pub language: String,
    pub version: String,
    pub files: Vec<PistonFile>,
    pub stdin: String,
    pub args: Vec<String>,
    pub compile_timeout: u64,
    pub run_timeout: u64,
    pub compile_memory_limit: i64,
    pub run_memory_limit: i64,
}

impl PistonExecuteRequest {
    pub fn from_request(request: &ExecutionRequest, config: &SandboxConfig) -> Self {
        Self {
            language: config.language.clone(),
            version: config.version.clone(),
            files: vec![PistonFile {
                name: config.file_name.clone(),
                content: request.code.clone(),
            }],
            stdin: request.stdin.clone(),
            args: Vec::new(),
            compile_timeout: config.compile_timeout_ms,
            run_timeout: config.run_timeout_ms,
            compile_memory_limit: config.compile_memory_limit,
            run_memory_limit: config.run_memory_limit,
        }
    }
}

/// One compile or run stage. Every field may be absent or null.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PistonStage {
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub stderr: Option<String>,
    #[serde(default)]
    pub code: Option<i32>,
    #[serde(default)]
    pub signal: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PistonExecuteResponse {
    #[serde(default)]
    pub compile: Option<PistonStage>,
    #[serde(default)]
    pub run: Option<PistonStage>,
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

impl PistonExecuteResponse {
    pub fn into_result(self) -> SandboxResult {
        // a compile stage that reports no exit code (killed by a signal) failed
        let success = self.compile.as_ref().map_or(true, |c| c.code == Some(0));

        let run = self.run.unwrap_or_default();
        let compile_stderr = self.compile.as_ref().and_then(|c| non_empty(c.stderr.as_ref()));
        let error = non_empty(run.stderr.as_ref())
            .or(compile_stderr)
            .unwrap_or_default()
            .to_string();

        SandboxResult {
            success,
            output: run.output.unwrap_or_default(),
            error,
            exit_code: run.code.unwrap_or(0),
            timed_out: run.signal.is_some(),
        }
    }
}
