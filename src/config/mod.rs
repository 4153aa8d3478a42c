pub mod types;

use crate::common::file_utils::read_file_safe;
use crate::dialect::Dialect;
use crate::error::{ConfigError, Result};
use std::path::Path;

pub use types::{Config, GenerationConfig};

/// Configuration files larger than this are rejected
const MAX_CONFIG_SIZE: u64 = 64 * 1024;

/// Load configuration from file or use defaults
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    log::debug!("Loading configuration from {}", path.display());
    let content = read_file_safe(path, MAX_CONFIG_SIZE)?;
    let config: Config = toml::from_str(&content).map_err(ConfigError::from)?;

    if let Some(unknown) = config.images.keys().find(|name| Dialect::from_name(name).is_none()) {
        return Err(ConfigError::InvalidFile {
            path: path.to_path_buf(),
            reason: format!("unknown dialect '{}' in [images]", unknown),
        }
        .into());
    }

    Ok(config)
}

impl Config {
    /// Image repository for a dialect, honouring overrides
    pub fn image_for(&self, dialect: Dialect) -> &str {
        self.images
            .get(dialect.name())
            .map(String::as_str)
            .unwrap_or_else(|| dialect.default_image())
    }
}
