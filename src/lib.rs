//! # composegen
//!
//! Turns a database connection URL into a docker-compose service definition
//! for local development.
//!
//! ## Features
//!
//! - **Dialect Detection**: Resolves the URL scheme (and its aliases) to postgres, mysql,
//!   redis, mongodb or the GCS emulator
//! - **Sensible Defaults**: Picks the image, port mapping, environment and startup command
//! - **Advisory Comments**: Suggests init-script and data volume mounts
//!
//! ## Example
//!
//! ```rust,no_run
//! use composegen::{generate_compose, Config, DbRequest};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let request = DbRequest {
//!     url: "postgres://user:pw@localhost/mydb".to_string(),
//!     ..Default::default()
//! };
//! let yaml = generate_compose(&request, &Config::default())?;
//! print!("{}", yaml);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod common;
pub mod config;
pub mod connection;
pub mod dialect;
pub mod error;
pub mod generator;

// Re-export commonly used types and functions
pub use config::Config;
pub use connection::ConnectionUrl;
pub use dialect::Dialect;
pub use error::{ComposeGenError, Result};
pub use generator::{generate_compose, generate_service, DbRequest, ServiceSpec};

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
