//! MentorService - the surface exposed to the presentation layer
//!
//! analyze / chat / execute / run_tests, with caller-input validation in
//! front of each operation.

use std::sync::Arc;

use codementor_engine::features::llm::chat_request;
use codementor_engine::{
    AnalysisMode, ChatMessage, ExecutionRequest, Finding, LlmError, MentorConfig, PistonClient,
    SandboxPort, SandboxResult, TestCase,
};
use tracing::{info, warn};

use crate::analysis::AnalysisOrchestrator;
use crate::error::{OrchestratorError, Result};
use crate::runner::TestCaseRunner;

/// Reply used when the model answers a chat turn with nothing
pub const EMPTY_CHAT_REPLY: &str = "Sorry, I could not generate a response.";

pub struct MentorService {
    analysis: AnalysisOrchestrator,
    sandbox: Arc<dyn SandboxPort>,
    runner: TestCaseRunner,
}

impl MentorService {
    pub fn new(analysis: AnalysisOrchestrator, sandbox: Arc<dyn SandboxPort>) -> Self {
        let runner = TestCaseRunner::new(Arc::clone(&sandbox));
        Self {
            analysis,
            sandbox,
            runner,
        }
    }

    /// Groq + Piston adapters built from config
    pub fn from_config(config: MentorConfig) -> Result<Self> {
        let sandbox: Arc<dyn SandboxPort> = Arc::new(PistonClient::new(config.sandbox)?);
        let analysis = AnalysisOrchestrator::from_config(config.llm)?;
        info!(
            "Mentor service ready (llm: {})",
            if analysis.llm().is_some() { "enabled" } else { "heuristics only" }
        );
        Ok(Self::new(analysis, sandbox))
    }

    pub async fn analyze(&self, code: &str, mode: AnalysisMode) -> Result<Finding> {
        require("code", code)?;
        Ok(self.analysis.request_analysis_with(code, mode).await)
    }

    /// Pass-through conversation about `code`; LLM failures are returned as-is
    pub async fn chat(&self, code: &str, message: &str, history: &[ChatMessage]) -> Result<String> {
        require("message", message)?;
        let llm = self.analysis.llm().ok_or(LlmError::MissingCredential)?;

        let request = chat_request(code, history, message, self.analysis.config());
        match llm.complete(&request).await {
            Ok(reply) => Ok(reply),
            Err(LlmError::EmptyCompletion) => Ok(EMPTY_CHAT_REPLY.to_string()),
            Err(e) => {
                warn!("Chat request failed: {}", e);
                Err(e.into())
            }
        }
    }

    pub async fn execute(&self, code: &str, input: &str) -> Result<SandboxResult> {
        require("code", code)?;
        let result = self.sandbox.execute(&ExecutionRequest::new(code, input)).await?;
        Ok(result)
    }

    pub async fn run_tests(&self, code: &str, cases: Vec<TestCase>) -> Result<Vec<TestCase>> {
        require("code", code)?;
        Ok(self.runner.run_all(code, cases).await)
    }
}

fn require(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(OrchestratorError::MissingField(field));
    }
    Ok(())
}
