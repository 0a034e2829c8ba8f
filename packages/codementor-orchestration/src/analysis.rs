//! LLM-first analysis with heuristic fallback
//!
//! `request_analysis` never fails: every LLM error (missing credential,
//! transport, status, malformed or out-of-schema reply) is absorbed here and
//! answered by the local heuristic analyzer.

use std::sync::Arc;

use codementor_engine::features::llm::{analysis_request, parse_finding};
use codementor_engine::{
    AnalysisMode, CompletionPort, Finding, GroqClient, HeuristicAnalyzer, LlmConfig, LlmError,
};
use tracing::{debug, warn};

use crate::error::Result;

pub struct AnalysisOrchestrator {
    llm: Option<Arc<dyn CompletionPort>>,
    analyzer: HeuristicAnalyzer,
    config: LlmConfig,
}

impl AnalysisOrchestrator {
    pub fn new(llm: Option<Arc<dyn CompletionPort>>, config: LlmConfig) -> Self {
        Self {
            llm,
            analyzer: HeuristicAnalyzer::new(),
            config,
        }
    }

    /// Heuristics only; the LLM is never contacted
    pub fn heuristic_only(config: LlmConfig) -> Self {
        Self::new(None, config)
    }

    /// Groq-backed orchestrator, or heuristics only when no usable key is set
    pub fn from_config(config: LlmConfig) -> Result<Self> {
        let llm = match config.usable_api_key() {
            Some(_) => Some(Arc::new(GroqClient::new(&config)?) as Arc<dyn CompletionPort>),
            None => {
                warn!("No usable LLM credential configured, analysis will use heuristics only");
                None
            }
        };
        Ok(Self::new(llm, config))
    }

    pub fn llm(&self) -> Option<&Arc<dyn CompletionPort>> {
        self.llm.as_ref()
    }

    pub fn config(&self) -> &LlmConfig {
        &self.config
    }

    pub async fn request_analysis(&self, source: &str) -> Finding {
        self.request_analysis_with(source, AnalysisMode::Basic).await
    }

    pub async fn request_analysis_with(&self, source: &str, mode: AnalysisMode) -> Finding {
        match self.analyze_with_llm(source, mode).await {
            Ok(finding) => finding,
            Err(LlmError::MissingCredential) => {
                debug!("LLM bypassed, running heuristics");
                self.analyzer.analyze(source)
            }
            Err(e) => {
                warn!("LLM analysis failed ({}), falling back to heuristics", e);
                self.analyzer.analyze(source)
            }
        }
    }

    async fn analyze_with_llm(
        &self,
        source: &str,
        mode: AnalysisMode,
    ) -> std::result::Result<Finding, LlmError> {
        let llm = self.llm.as_ref().ok_or(LlmError::MissingCredential)?;
        let request = analysis_request(source, mode, &self.config);

        debug!("Requesting {} analysis from {}", mode, llm.provider_name());
        let text = llm.complete(&request).await?;
        parse_finding(&text, mode)
    }
}
