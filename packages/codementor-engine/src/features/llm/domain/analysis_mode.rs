use serde::{Deserialize, Serialize};

/// How much the critic is asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    /// Error, hints and sample cases
    #[default]
    Basic,
    /// Basic plus a complexity report
    Extended,
}

impl AnalysisMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMode::Basic => "basic",
            AnalysisMode::Extended => "extended",
        }
    }

    pub fn wants_complexity(&self) -> bool {
        matches!(self, AnalysisMode::Extended)
    }
}

impl std::fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
