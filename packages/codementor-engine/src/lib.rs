/*
 * Codementor Engine - C++ snippet critique and verification
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Finding, TestCase, SandboxResult)
 * - features/    : Vertical slices (heuristics, llm, execution)
 * - config/      : Versioned YAML config + environment overrides
 * - errors       : thiserror-based error taxonomy
 *
 * Orchestration (LLM fallback, batch test runs) lives in
 * codementor-orchestration and talks to this crate through the
 * CompletionPort and SandboxPort traits.
 */

#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::module_inception)] // Module naming intentional

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models
pub mod shared;

/// Feature modules (heuristics, llm, execution)
pub mod features;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{LlmConfig, MentorConfig, SandboxConfig};
pub use errors::{LlmError, MentorError, Result, SandboxError};
pub use features::execution::{PistonClient, SandboxPort};
pub use features::heuristics::{analyze, HeuristicAnalyzer};
pub use features::llm::{
    AnalysisMode, ChatMessage, ChatRole, CompletionPort, CompletionRequest, GroqClient,
};
pub use shared::models::{
    ComplexityReport, ExecutionRequest, Finding, Hint, HintKind, LogicError, SampleCase,
    SandboxResult, TestCase, TestSuiteSummary,
};
