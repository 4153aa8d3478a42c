use super::templates::ServiceSpec;
use crate::error::GeneratorError;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Top-level key the service is nested under
const SERVICES_KEY: &str = "services:";

/// Indent applied to the serialized service so it nests under `services:`
const INDENT: usize = 2;

/// Render a single service as a docker-compose fragment.
///
/// The advisory comments of the service follow the YAML body, each prefixed
/// with `# `.
pub fn render(service_name: &str, spec: &ServiceSpec) -> Result<String, GeneratorError> {
    let mut services = BTreeMap::new();
    services.insert(service_name, spec);
    let body = serde_yaml::to_string(&services)?;

    let mut output = String::with_capacity(body.len() + 64);
    writeln!(output, "{}", SERVICES_KEY)?;

    for line in body.lines() {
        writeln!(output, "{:indent$}{}", "", line, indent = INDENT)?;
    }

    for comment in &spec.comments {
        writeln!(output, "# {}", comment)?;
    }

    Ok(output)
}
