use serde::{Deserialize, Serialize};

/// Where to look for aggregator output when no CLI flag overrides it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    #[serde(default)]
    pub root: Option<String>,
    #[serde(default)]
    pub job: Option<String>,
    #[serde(default = "SourceConfig::default_max_days_back")]
    pub max_days_back: u32,
}

impl SourceConfig {
    pub fn default_max_days_back() -> u32 {
        7
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            root: None,
            job: None,
            max_days_back: Self::default_max_days_back(),
        }
    }
}
