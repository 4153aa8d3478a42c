//! Per-dialect service templates.
//!
//! Each dialect decides which environment variables the upstream image reads,
//! whether it needs a startup command or extra capabilities, and which manual
//! follow-ups are worth suggesting as comments.

use crate::connection::ConnectionUrl;
use crate::dialect::Dialect;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;

/// A docker-compose service definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServiceSpec {
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub environment: BTreeMap<String, String>,
    /// Always exactly one `host:container` mapping
    pub ports: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cap_add: Vec<String>,
    /// Advisory lines printed as YAML comments after the service
    #[serde(skip)]
    pub comments: Vec<String>,
}

/// Service name some dialects insist on regardless of the URL or `-s`
pub fn fixed_service_name(dialect: Dialect) -> Option<&'static str> {
    match dialect {
        Dialect::Gcs => Some("gcs"),
        _ => None,
    }
}

/// Build the service definition for a resolved connection URL
pub fn build_service(conn: &ConnectionUrl, image: &str, tag: &str) -> ServiceSpec {
    let mut spec = ServiceSpec {
        image: format!("{}:{}", image, tag),
        ports: vec![conn.port_mapping()],
        ..Default::default()
    };

    match conn.dialect {
        Dialect::Postgres => apply_postgres(&mut spec, conn),
        Dialect::Mysql => apply_mysql(&mut spec, conn, tag),
        Dialect::Redis => apply_redis(&mut spec, conn),
        Dialect::Mongodb => apply_mongodb(&mut spec, conn),
        Dialect::Gcs => apply_gcs(&mut spec, conn),
    }

    spec
}

fn apply_postgres(spec: &mut ServiceSpec, conn: &ConnectionUrl) {
    spec.environment = environment([
        ("POSTGRES_DB", conn.database.as_str()),
        ("POSTGRES_USER", conn.username.as_str()),
        ("POSTGRES_PASSWORD", conn.password_or_empty()),
    ]);
    spec.comments = init_scripts_mount("./sql");
}

fn apply_mysql(spec: &mut ServiceSpec, conn: &ConnectionUrl, tag: &str) {
    spec.environment = environment([
        ("MYSQL_DATABASE", conn.database.as_str()),
        ("MYSQL_USER", conn.username.as_str()),
        ("MYSQL_PASSWORD", conn.password_or_empty()),
        ("MYSQL_ALLOW_EMPTY_PASSWORD", "1"),
    ]);
    spec.command =
        Some("--character-set-server=utf8mb4 --collation-server=utf8mb4_unicode_ci".to_string());
    // mbind() in 8.x images requires SYS_NICE
    if !tag.starts_with('5') {
        spec.cap_add.push("SYS_NICE".to_string());
    }
    spec.comments = init_scripts_mount("./sql");
}

fn apply_redis(spec: &mut ServiceSpec, conn: &ConnectionUrl) {
    if let Some(password) = conn.password.as_deref().filter(|p| !p.is_empty()) {
        spec.command = Some(format!("--requirepass {}", quote(password)));
    }
}

/// Double-quote a string; ASCII control characters become `\xHH`, other
/// control characters `\uHHHH`
fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            // writing into a String cannot fail
            c if c.is_control() && (c as u32) < 0x80 => {
                let _ = write!(quoted, "\\x{:02x}", c as u32);
            }
            c if c.is_control() => {
                let _ = write!(quoted, "\\u{:04x}", c as u32);
            }
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

fn apply_mongodb(spec: &mut ServiceSpec, conn: &ConnectionUrl) {
    spec.environment = environment([
        ("MONGO_INITDB_ROOT_USERNAME", conn.username.as_str()),
        ("MONGO_INITDB_ROOT_PASSWORD", conn.password_or_empty()),
    ]);
    spec.comments = init_scripts_mount("./js");
}

fn apply_gcs(spec: &mut ServiceSpec, conn: &ConnectionUrl) {
    let public_host = format!("localhost:{}", conn.host_port());
    spec.command = Some(format!("-scheme http -public-host {}", public_host));
    spec.comments = vec![
        "  volumes:".to_string(),
        "  - ./data:/data:ro".to_string(),
        "  environment:".to_string(),
        format!("    STORAGE_EMULATOR_HOST=http://{}", public_host),
    ];
}

fn environment<const N: usize>(pairs: [(&str, &str); N]) -> BTreeMap<String, String> {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

fn init_scripts_mount(host_dir: &str) -> Vec<String> {
    vec![
        "  volumes:".to_string(),
        format!("  - {}:/docker-entrypoint-initdb.d:ro", host_dir),
    ]
}
