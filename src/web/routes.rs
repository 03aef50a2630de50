//! Route table: HTTP path → command keyword plus path parameter bindings

use serde::Serialize;

use crate::registry::CommandRegistry;

/// Routes beyond `/<keyword>`: path parameter variants and legacy aliases
const PATH_ROUTES: &[(&str, &str, &[(&str, &str)])] = &[
    ("ACKNOWLEDGE_SVC_PROBLEM", "/acknowledge_service_problem", &[]),
    (
        "ACKNOWLEDGE_HOST_PROBLEM",
        "/acknowledge_host_problem/{hostname}",
        &[("hostname", "Hostname")],
    ),
    (
        "ADD_HOST_COMMENT",
        "/add_host_comment/{hostname}",
        &[("hostname", "Hostname")],
    ),
    (
        "ADD_SVC_COMMENT",
        "/add_svc_comment/{hostname}/{service}",
        &[("hostname", "Hostname"), ("service", "Service")],
    ),
];

/// One HTTP route bound to one command keyword
#[derive(Debug, Clone, Serialize)]
pub struct RouteBinding {
    pub method: &'static str,
    pub path: String,
    pub command: &'static str,
    /// (path parameter, request field) pairs; path values override the body
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub path_params: Vec<(&'static str, &'static str)>,
}

/// `POST /<keyword in lower case>` for every schema, plus the path parameter variants
pub fn route_table(registry: &CommandRegistry) -> Vec<RouteBinding> {
    let mut routes: Vec<RouteBinding> = registry
        .schemas()
        .iter()
        .map(|schema| RouteBinding {
            method: "POST",
            path: format!("/{}", schema.route_segment()),
            command: schema.name,
            path_params: Vec::new(),
        })
        .collect();

    routes.extend(
        PATH_ROUTES
            .iter()
            .filter_map(|(name, path, params)| {
                registry.lookup(name).map(|schema| RouteBinding {
                    method: "POST",
                    path: path.to_string(),
                    command: schema.name,
                    path_params: params.to_vec(),
                })
            }),
    );

    routes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_route_per_command_plus_path_variants() {
        let registry = CommandRegistry::global();
        let routes = route_table(registry);
        assert_eq!(routes.len(), registry.len() + PATH_ROUTES.len());

        let ack = routes
            .iter()
            .find(|r| r.path == "/acknowledge_host_problem")
            .unwrap();
        assert_eq!(ack.command, "ACKNOWLEDGE_HOST_PROBLEM");
        assert!(ack.path_params.is_empty());
    }

    #[test]
    fn test_acknowledge_service_problem_alias() {
        let routes = route_table(CommandRegistry::global());
        let alias = routes
            .iter()
            .find(|r| r.path == "/acknowledge_service_problem")
            .unwrap();
        assert_eq!(alias.command, "ACKNOWLEDGE_SVC_PROBLEM");
        assert!(alias.path_params.is_empty());

        let mut paths: Vec<_> = routes.iter().map(|r| r.path.as_str()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), routes.len());
    }

    #[test]
    fn test_path_params_name_schema_fields() {
        let registry = CommandRegistry::global();
        for route in route_table(registry) {
            let schema = registry.lookup(route.command).unwrap();
            for (_, field) in &route.path_params {
                assert!(schema.field(field).is_some(), "{} has no {}", route.command, field);
            }
        }
    }
}
