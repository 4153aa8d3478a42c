//! # Dialect Module
//!
//! The fixed set of database families composegen knows how to run locally,
//! together with the URL schemes that map onto each of them and the port the
//! upstream container listens on.

use crate::error::ResolveError;
use std::fmt;

/// A supported database or service family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Postgres,
    Mysql,
    Redis,
    Mongodb,
    /// Google Cloud Storage emulator
    Gcs,
}

/// Scheme aliases, keyed by lowercase scheme
const SCHEME_ALIASES: &[(&str, Dialect)] = &[
    ("postgres", Dialect::Postgres),
    ("postgresql", Dialect::Postgres),
    ("pgsql", Dialect::Postgres),
    ("pg", Dialect::Postgres),
    ("pq", Dialect::Postgres),
    ("mysql", Dialect::Mysql),
    ("my", Dialect::Mysql),
    ("mariadb", Dialect::Mysql),
    ("maria", Dialect::Mysql),
    ("percona", Dialect::Mysql),
    ("aurora", Dialect::Mysql),
    ("redis", Dialect::Redis),
    ("rediss", Dialect::Redis),
    ("mongodb", Dialect::Mongodb),
    ("mongo", Dialect::Mongodb),
    ("mongodb+srv", Dialect::Mongodb),
    ("gcs", Dialect::Gcs),
    ("gs", Dialect::Gcs),
];

impl Dialect {
    pub const ALL: [Dialect; 5] = [
        Dialect::Postgres,
        Dialect::Mysql,
        Dialect::Redis,
        Dialect::Mongodb,
        Dialect::Gcs,
    ];

    /// Look up a dialect by its canonical name only
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == name)
    }

    /// Resolve a URL scheme (including aliases) to its canonical dialect
    pub fn from_scheme(scheme: &str) -> Result<Self, ResolveError> {
        let lower = scheme.to_ascii_lowercase();
        SCHEME_ALIASES
            .iter()
            .find(|(alias, _)| *alias == lower)
            .map(|(_, dialect)| *dialect)
            .ok_or_else(|| ResolveError::UnsupportedDialect(scheme.to_string()))
    }

    /// Canonical name, also used as the fallback service name
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Postgres => "postgres",
            Dialect::Mysql => "mysql",
            Dialect::Redis => "redis",
            Dialect::Mongodb => "mongodb",
            Dialect::Gcs => "gcs",
        }
    }

    /// Port the official container listens on
    pub fn default_port(&self) -> u16 {
        match self {
            Dialect::Postgres => 5432,
            Dialect::Mysql => 3306,
            Dialect::Redis => 6379,
            Dialect::Mongodb => 27017,
            Dialect::Gcs => 4443,
        }
    }

    /// Image repository used when the configuration does not override it
    pub fn default_image(&self) -> &'static str {
        match self {
            Dialect::Postgres => "postgres",
            Dialect::Mysql => "mysql",
            Dialect::Redis => "redis",
            Dialect::Mongodb => "mongo",
            Dialect::Gcs => "fsouza/fake-gcs-server",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
