/*
 * Codementor Orchestration
 *
 * Drives the engine's ports on behalf of the presentation layer:
 * - AnalysisOrchestrator: LLM critique with heuristic fallback
 * - TestCaseRunner: sequential sandbox runs + trimmed output comparison
 * - MentorService: analyze / chat / execute / run_tests facade
 */

// Public modules
pub mod analysis;
pub mod error;
pub mod runner;
pub mod service;

// Re-exports
pub use analysis::AnalysisOrchestrator;
pub use error::{ErrorCategory, OrchestratorError, Result};
pub use runner::TestCaseRunner;
pub use service::{MentorService, EMPTY_CHAT_REPLY};
