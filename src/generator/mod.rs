use crate::config::Config;
use crate::connection::ConnectionUrl;
use crate::error::Result;

pub mod compose_gen;
pub mod templates;

pub use templates::ServiceSpec;

/// Inputs of a single `db` invocation
#[derive(Debug, Clone, Default)]
pub struct DbRequest {
    pub url: String,
    pub tag: Option<String>,
    pub service: Option<String>,
}

/// A service definition together with the name it is published under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedService {
    pub name: String,
    pub spec: ServiceSpec,
}

/// Resolve the URL and build the service definition without rendering it
pub fn generate_service(request: &DbRequest, config: &Config) -> Result<GeneratedService> {
    let conn = ConnectionUrl::parse(&request.url)?;
    let dialect = conn.dialect;

    let tag = request
        .tag
        .as_deref()
        .filter(|tag| !tag.is_empty())
        .unwrap_or(config.generation.default_tag.as_str());

    let name = match templates::fixed_service_name(dialect) {
        Some(fixed) => fixed.to_string(),
        None => conn.service_name(request.service.as_deref(), &config.generation.local_hosts),
    };

    log::debug!(
        "Generating '{}' service '{}' on host port {}",
        dialect,
        name,
        conn.host_port()
    );

    let spec = templates::build_service(&conn, config.image_for(dialect), tag);
    Ok(GeneratedService { name, spec })
}

/// Generate the docker-compose fragment for a connection URL
pub fn generate_compose(request: &DbRequest, config: &Config) -> Result<String> {
    let service = generate_service(request, config)?;
    Ok(compose_gen::render(&service.name, &service.spec)?)
}
