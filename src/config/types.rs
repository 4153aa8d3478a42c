use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub generation: GenerationConfig,
    /// Image repository overrides, keyed by canonical dialect name
    pub images: BTreeMap<String, String>,
}

/// Service generation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Image tag used when `--tag` is not given
    pub default_tag: String,
    /// Hostnames that never become service names
    pub local_hosts: Vec<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            default_tag: "latest".to_string(),
            local_hosts: vec!["localhost".to_string(), "127.0.0.1".to_string()],
        }
    }
}
