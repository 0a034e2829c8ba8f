//! Stub collaborators for orchestration tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use codementor_engine::{
    CompletionPort, CompletionRequest, ExecutionRequest, LlmError, SandboxError, SandboxPort,
    SandboxResult,
};

/// Prints the sum of the whitespace-separated integers on stdin, plus a newline
pub struct SumSandbox;

pub fn sum_output(stdin: &str) -> String {
    let total: i64 = stdin
        .split_whitespace()
        .filter_map(|t| t.parse::<i64>().ok())
        .sum();
    format!("{total}\n")
}

#[async_trait]
impl SandboxPort for SumSandbox {
    async fn execute(&self, request: &ExecutionRequest) -> Result<SandboxResult, SandboxError> {
        Ok(SandboxResult::ok(sum_output(&request.stdin)))
    }
}

/// Sums like `SumSandbox` but fails on the listed (0-based) call indices
pub struct FlakySandbox {
    calls: AtomicUsize,
    fail_on: Vec<usize>,
}

impl FlakySandbox {
    pub fn failing_on(fail_on: Vec<usize>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail_on,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SandboxPort for FlakySandbox {
    async fn execute(&self, request: &ExecutionRequest) -> Result<SandboxResult, SandboxError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_on.contains(&call) {
            return Err(SandboxError::Transport("connection reset".to_string()));
        }
        Ok(SandboxResult::ok(sum_output(&request.stdin)))
    }
}

/// Records every stdin it receives, echoing it back
#[derive(Default)]
pub struct RecordingSandbox {
    pub seen: Mutex<Vec<String>>,
}

#[async_trait]
impl SandboxPort for RecordingSandbox {
    async fn execute(&self, request: &ExecutionRequest) -> Result<SandboxResult, SandboxError> {
        self.seen
            .lock()
            .expect("recording lock poisoned")
            .push(request.stdin.clone());
        Ok(SandboxResult::ok(request.stdin.clone()))
    }
}

/// LLM that always fails with the given error
pub struct FailingLlm(pub fn() -> LlmError);

#[async_trait]
impl CompletionPort for FailingLlm {
    async fn complete(&self, _: &CompletionRequest) -> Result<String, LlmError> {
        Err((self.0)())
    }
}

/// LLM that returns a fixed reply and records requests
pub struct ScriptedLlm {
    reply: String,
    pub requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedLlm {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.requests.lock().expect("request lock poisoned").last().cloned()
    }
}

#[async_trait]
impl CompletionPort for ScriptedLlm {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        self.requests
            .lock()
            .expect("request lock poisoned")
            .push(request.clone());
        if self.reply.is_empty() {
            return Err(LlmError::EmptyCompletion);
        }
        Ok(self.reply.clone())
    }
}
