use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposeGenError {
    #[error("URL resolution failed: {0}")]
    Resolve(#[from] ResolveError),

    #[error("Service generation failed: {0}")]
    Generation(#[from] GeneratorError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid URL {url:?}: {part} is not valid UTF-8 once percent-decoded")]
    InvalidEncoding { url: String, part: &'static str },

    #[error("unsupported dialect: {0}")]
    UnsupportedDialect(String),

    #[error("invalid port in URL {url:?}")]
    InvalidPort { url: String },
}

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("YAML serialization failed: {0}")]
    SerializationFailure(#[from] serde_yaml::Error),

    #[error("Writing output failed: {0}")]
    Format(#[from] std::fmt::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration file {path}: {reason}")]
    InvalidFile { path: PathBuf, reason: String },

    #[error("Configuration parsing failed: {0}")]
    ParsingFailed(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ComposeGenError>;
