//! Mentor configuration
//!
//! Three sources, applied in order: built-in defaults, an optional YAML file
//! (schema v1, see [`super::io`]), then environment overrides.

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::io::ConfigFileV1;
use super::validation::Validatable;

/// Credential value shipped in sample `.env` files; never a real key
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY_HERE";

pub const ENV_API_KEY: &str = "GROQ_API_KEY";
pub const ENV_LLM_MODEL: &str = "CODEMENTOR_LLM_MODEL";
pub const ENV_SANDBOX_URL: &str = "CODEMENTOR_SANDBOX_URL";

/// Completion service settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LlmConfig {
    /// Bearer credential; absent or placeholder disables the LLM path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: f64,
    /// Token cap for the basic critique
    pub max_tokens_basic: u32,
    /// Token cap for the critique with complexity report
    pub max_tokens_extended: u32,
    /// Client-side request timeout; `None` waits indefinitely
    pub request_timeout_secs: Option<u64>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.groq.com/openai/v1".to_string(),
            model: "llama-3.3-70b-versatile".to_string(),
            temperature: 0.7,
            max_tokens_basic: 1024,
            max_tokens_extended: 1536,
            request_timeout_secs: Some(30),
        }
    }
}

impl LlmConfig {
    /// The credential, unless it is missing, blank, or the placeholder
    pub fn usable_api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != PLACEHOLDER_API_KEY)
    }
}

impl Validatable for LlmConfig {
    fn validate(&self) -> ConfigResult<()> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::range_with_hint(
                "llm.temperature",
                self.temperature,
                0.0,
                2.0,
                "Sampling temperature must be between 0 and 2",
            ));
        }

        for (field, value) in [
            ("llm.max_tokens_basic", self.max_tokens_basic),
            ("llm.max_tokens_extended", self.max_tokens_extended),
        ] {
            if value == 0 || value > 32_768 {
                return Err(ConfigError::range_with_hint(
                    field,
                    value,
                    1,
                    32_768,
                    "Completion token limit must be positive",
                ));
            }
        }

        validate_timeout("llm.request_timeout_secs", self.request_timeout_secs)
    }
}

/// Execution sandbox settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SandboxConfig {
    pub base_url: String,
    pub language: String,
    pub version: String,
    /// Name of the single source file submitted
    pub file_name: String,
    pub compile_timeout_ms: u64,
    pub run_timeout_ms: u64,
    /// -1 means no limit
    pub compile_memory_limit: i64,
    /// -1 means no limit
    pub run_memory_limit: i64,
    /// Client-side request timeout; `None` waits indefinitely
    pub request_timeout_secs: Option<u64>,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            base_url: "https://emkc.org/api/v2/piston".to_string(),
            language: "c++".to_string(),
            version: "10.2.0".to_string(),
            file_name: "main.cpp".to_string(),
            compile_timeout_ms: 10_000,
            run_timeout_ms: 3_000,
            compile_memory_limit: -1,
            run_memory_limit: -1,
            request_timeout_secs: Some(30),
        }
    }
}

impl Validatable for SandboxConfig {
    fn validate(&self) -> ConfigResult<()> {
        for (field, value) in [
            ("sandbox.compile_timeout_ms", self.compile_timeout_ms),
            ("sandbox.run_timeout_ms", self.run_timeout_ms),
        ] {
            if value == 0 || value > 60_000 {
                return Err(ConfigError::range_with_hint(
                    field,
                    value,
                    1,
                    60_000,
                    "Sandbox stage timeouts are given in milliseconds",
                ));
            }
        }

        for (field, value) in [
            ("sandbox.compile_memory_limit", self.compile_memory_limit),
            ("sandbox.run_memory_limit", self.run_memory_limit),
        ] {
            if value < -1 {
                return Err(ConfigError::range_with_hint(
                    field,
                    value,
                    -1,
                    i64::MAX,
                    "Use -1 for no limit",
                ));
            }
        }

        validate_timeout("sandbox.request_timeout_secs", self.request_timeout_secs)
    }
}

fn validate_timeout(field: &str, value: Option<u64>) -> ConfigResult<()> {
    match value {
        Some(secs) if secs == 0 || secs > 600 => Err(ConfigError::range_with_hint(
            field,
            secs,
            1,
            600,
            "Omit the field to disable the client-side timeout",
        )),
        _ => Ok(()),
    }
}

/// Complete configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MentorConfig {
    pub llm: LlmConfig,
    pub sandbox: SandboxConfig,
}

impl MentorConfig {
    /// Load a YAML file (schema v1) on top of the defaults
    pub fn from_yaml(path: &str) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(content)?;

        match file.version {
            None => return Err(ConfigError::MissingVersion),
            Some(1) => {}
            Some(found) => {
                return Err(ConfigError::UnsupportedVersion {
                    found,
                    supported: vec![1],
                })
            }
        }

        let config = Self {
            llm: file.llm.unwrap_or_default(),
            sandbox: file.sandbox.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Apply `GROQ_API_KEY`, `CODEMENTOR_LLM_MODEL`, `CODEMENTOR_SANDBOX_URL`
    pub fn with_env_overrides(self) -> ConfigResult<Self> {
        self.with_overrides_from(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    ///
    /// The API key is taken as-is (a blank or placeholder key only disables
    /// the LLM). A blank model or a non-HTTP sandbox URL is rejected.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(ENV_API_KEY) {
            self.llm.api_key = Some(key);
        }

        if let Some(model) = lookup(ENV_LLM_MODEL) {
            let model = model.trim();
            if model.is_empty() {
                return Err(env_error(ENV_LLM_MODEL, "model name is blank"));
            }
            self.llm.model = model.to_string();
        }

        if let Some(url) = lookup(ENV_SANDBOX_URL) {
            let url = url.trim();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(env_error(
                    ENV_SANDBOX_URL,
                    format!("expected an http(s) URL, got {:?}", url),
                ));
            }
            self.sandbox.base_url = url.to_string();
        }

        Ok(self)
    }
}

fn env_error(var: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Env {
        var: var.to_string(),
        reason: reason.into(),
    }
}

impl Validatable for MentorConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.llm.validate()?;
        self.sandbox.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_match_reference_policy() {
        let config = MentorConfig::default();
        assert_eq!(config.llm.temperature, 0.7);
        assert_eq!(config.llm.max_tokens_basic, 1024);
        assert_eq!(config.llm.max_tokens_extended, 1536);
        assert_eq!(config.sandbox.language, "c++");
        assert_eq!(config.sandbox.version, "10.2.0");
        assert_eq!(config.sandbox.compile_timeout_ms, 10_000);
        assert_eq!(config.sandbox.run_timeout_ms, 3_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_placeholder_key_is_not_usable() {
        let mut llm = LlmConfig::default();
        assert!(llm.usable_api_key().is_none());

        llm.api_key = Some(PLACEHOLDER_API_KEY.to_string());
        assert!(llm.usable_api_key().is_none());

        llm.api_key = Some("   ".to_string());
        assert!(llm.usable_api_key().is_none());

        llm.api_key = Some("gsk_live".to_string());
        assert_eq!(llm.usable_api_key(), Some("gsk_live"));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_API_KEY, "gsk_test"),
            (ENV_LLM_MODEL, "llama-3.1-8b-instant"),
            (ENV_SANDBOX_URL, "http://localhost:2000/api/v2"),
        ]
        .into_iter()
        .collect();

        let config = MentorConfig::default()
            .with_overrides_from(|name| vars.get(name).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.llm.usable_api_key(), Some("gsk_test"));
        assert_eq!(config.llm.model, "llama-3.1-8b-instant");
        assert_eq!(config.sandbox.base_url, "http://localhost:2000/api/v2");
    }

    #[test]
    fn test_blank_model_override_rejected() {
        let result = MentorConfig::default()
            .with_overrides_from(|name| (name == ENV_LLM_MODEL).then(|| "  ".to_string()));
        assert!(matches!(
            result,
            Err(ConfigError::Env { ref var, .. }) if var == ENV_LLM_MODEL
        ));
    }

    #[test]
    fn test_non_http_sandbox_url_rejected() {
        let lookup = |name: &str| (name == ENV_SANDBOX_URL).then(|| "emkc.org".to_string());
        let err = MentorConfig::default().with_overrides_from(lookup).unwrap_err();
        assert!(matches!(err, ConfigError::Env { ref var, .. } if var == ENV_SANDBOX_URL));
        assert!(err.to_string().contains("CODEMENTOR_SANDBOX_URL"));
    }

    #[test]
    fn test_blank_api_key_override_disables_llm() {
        let mut config = MentorConfig::default();
        config.llm.api_key = Some("gsk_file".to_string());

        let config = config
            .with_overrides_from(|name| (name == ENV_API_KEY).then(String::new))
            .unwrap();
        assert!(config.llm.usable_api_key().is_none());
    }

    #[test]
    fn test_temperature_out_of_range() {
        let mut config = MentorConfig::default();
        config.llm.temperature = 2.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Range { ref field, .. }) if field == "llm.temperature"
        ));
    }

    #[test]
    fn test_zero_run_timeout_rejected() {
        let mut config = MentorConfig::default();
        config.sandbox.run_timeout_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_disabled_request_timeout_is_valid() {
        let mut config = MentorConfig::default();
        config.llm.request_timeout_secs = None;
        config.sandbox.request_timeout_secs = None;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_partial_override() {
        let config = MentorConfig::from_yaml_str(
            r#"
version: 1
llm:
  model: mixtral-8x7b
sandbox:
  run_timeout_ms: 5000
"#,
        )
        .unwrap();

        assert_eq!(config.llm.model, "mixtral-8x7b");
        assert_eq!(config.llm.max_tokens_basic, 1024);
        assert_eq!(config.sandbox.run_timeout_ms, 5000);
        assert_eq!(config.sandbox.version, "10.2.0");
    }

    #[test]
    fn test_yaml_missing_version() {
        let result = MentorConfig::from_yaml_str("llm:\n  model: x\n");
        assert!(matches!(result, Err(ConfigError::MissingVersion)));
    }

    #[test]
    fn test_yaml_unsupported_version() {
        let result = MentorConfig::from_yaml_str("version: 2\n");
        assert!(matches!(
            result,
            Err(ConfigError::UnsupportedVersion { found: 2, .. })
        ));
    }

    #[test]
    fn test_yaml_unknown_field_rejected() {
        let result = MentorConfig::from_yaml_str("version: 1\nllm:\n  modle: x\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }
}
