//! LLM domain: conversation types and the completion port

pub mod analysis_mode;
pub mod ports;

pub use analysis_mode::AnalysisMode;
pub use ports::{ChatMessage, ChatRole, CompletionPort, CompletionRequest};
