//! Configuration System
//!
//! - Defaults reproduce the reference policy (Groq completion API, Piston
//!   sandbox, 10 s compile / 3 s run).
//! - YAML files (versioned schema) override defaults.
//! - Environment variables override both.
//!
//! # Examples
//!
//! ```rust,ignore
//! use codementor_engine::config::MentorConfig;
//!
//! let config = MentorConfig::from_yaml("codementor.yaml")?.with_env_overrides()?;
//! if config.llm.usable_api_key().is_none() {
//!     // analysis will run on heuristics only
//! }
//! ```

pub mod error;
pub mod io;
pub mod mentor_config;
pub mod validation;

pub use error::{ConfigError, ConfigResult};
pub use io::ConfigFileV1;
pub use mentor_config::{LlmConfig, MentorConfig, SandboxConfig, PLACEHOLDER_API_KEY};
pub use validation::Validatable;
