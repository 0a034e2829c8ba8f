//! LLM critic
//!
//! - `domain`: conversation types, `AnalysisMode`, the `CompletionPort` trait
//! - `application`: prompt construction and reply decoding/validation
//! - `infrastructure`: Groq (OpenAI-compatible) HTTP adapter

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{analysis_request, chat_request, parse_finding, strip_code_fences};
pub use domain::*;
pub use infrastructure::GroqClient;
