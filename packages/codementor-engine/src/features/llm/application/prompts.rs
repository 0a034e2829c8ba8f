//! Prompt construction for critique and chat requests

use crate::config::LlmConfig;
use crate::features::llm::domain::{AnalysisMode, ChatMessage, CompletionRequest};

pub const ANALYSIS_SYSTEM_PROMPT: &str =
    "You are a helpful coding mentor. Always respond with valid JSON only, no markdown formatting.";

const FINDING_SCHEMA: &str = r#"{
  "logicError": {
    "message": "Brief description of the logic error or null if correct.",
    "line": <line number of error or 0>,
    "confidence": <number between 0 and 1>
  },
  "hints": [
    { "type": "Nudge", "content": "A subtle hint pointing in the right direction." },
    { "type": "Clue", "content": "A more specific clue about what's wrong." },
    { "type": "Strategy", "content": "A clear strategy or fix for the issue." }
  ],
  "testCases": [
    { "input": "Example input 1", "pass": <boolean> },
    { "input": "Example input 2", "pass": <boolean> }
  ]"#;

const COMPLEXITY_SCHEMA: &str = r#",
  "complexity": {
    "timeComplexity": "Big-O time complexity, e.g. O(n)",
    "timeExplanation": "One sentence on where the time goes.",
    "spaceComplexity": "Big-O space complexity, e.g. O(1)",
    "spaceExplanation": "One sentence on where the memory goes.",
    "qualityScore": <integer between 1 and 10>,
    "suggestions": ["Concrete improvement 1", "Concrete improvement 2"]
  }"#;

/// User-turn critique prompt embedding the raw code
pub fn critique_prompt(code: &str, mode: AnalysisMode) -> String {
    let complexity = if mode.wants_complexity() { COMPLEXITY_SCHEMA } else { "" };

    format!(
        "You are an expert C++ coding mentor. Analyze the following C++ code snippet for logic errors, \
bugs, memory issues, and potential improvements.

Code Snippet:
```cpp
{code}
```

Return the response strictly in the following JSON format (no markdown, no extra text):
{FINDING_SCHEMA}{complexity}
}}

Pay special attention to: memory leaks, pointer errors, buffer overflows, uninitialized variables, \
undefined behavior, and RAII violations.
If the code is correct, set logicError to null and provide a \"Nudge\" hint suggesting a best practice or optimization."
    )
}

/// Two-message critique request
pub fn analysis_request(code: &str, mode: AnalysisMode, config: &LlmConfig) -> CompletionRequest {
    let max_tokens = match mode {
        AnalysisMode::Basic => config.max_tokens_basic,
        AnalysisMode::Extended => config.max_tokens_extended,
    };

    CompletionRequest {
        model: config.model.clone(),
        messages: vec![
            ChatMessage::system(ANALYSIS_SYSTEM_PROMPT),
            ChatMessage::user(critique_prompt(code, mode)),
        ],
        temperature: config.temperature,
        max_tokens,
    }
}

fn chat_system_prompt(code: &str) -> String {
    format!(
        "You are an expert C++ programming assistant. The user is working on the following code:

```cpp
{code}
```

Answer their questions about this code. Be concise, helpful, and provide code examples when relevant. \
Format code blocks with proper markdown."
    )
}

/// System prompt, prior turns in order, then the new user message
pub fn chat_request(
    code: &str,
    history: &[ChatMessage],
    message: &str,
    config: &LlmConfig,
) -> CompletionRequest {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(ChatMessage::system(chat_system_prompt(code)));
    messages.extend(history.iter().cloned());
    messages.push(ChatMessage::user(message));

    CompletionRequest {
        model: config.model.clone(),
        messages,
        temperature: config.temperature,
        max_tokens: config.max_tokens_basic,
    }
}
