pub mod prompts;
pub mod reply;

pub use prompts::{analysis_request, chat_request, critique_prompt, ANALYSIS_SYSTEM_PROMPT};
pub use reply::{parse_finding, strip_code_fences};
