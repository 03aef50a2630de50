//! Command schema registry
//!
//! Process-wide, read-only table of external command kinds. Built once on
//! first use and never mutated, so lookups need no synchronization.

pub mod table;
pub mod types;

pub use types::{CommandSchema, FieldKind, FieldSpec, Validator};

use once_cell::sync::Lazy;
use std::collections::HashMap;

static REGISTRY: Lazy<CommandRegistry> = Lazy::new(|| CommandRegistry::new(table::COMMANDS));

/// Keyword-indexed view over a fixed schema table
#[derive(Debug)]
pub struct CommandRegistry {
    schemas: &'static [CommandSchema],
    by_name: HashMap<&'static str, usize>,
}

impl CommandRegistry {
    fn new(schemas: &'static [CommandSchema]) -> Self {
        let by_name = schemas
            .iter()
            .enumerate()
            .map(|(index, schema)| (schema.name, index))
            .collect();
        Self { schemas, by_name }
    }

    /// The built-in registry
    pub fn global() -> &'static CommandRegistry {
        &REGISTRY
    }

    /// Find a schema by keyword; keywords are matched exactly
    pub fn lookup(&self, name: &str) -> Option<&'static CommandSchema> {
        let schemas = self.schemas;
        self.by_name.get(name).map(|&index| &schemas[index])
    }

    /// All schemas in table order
    pub fn schemas(&self) -> &'static [CommandSchema] {
        self.schemas
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

/// Find a schema in the built-in registry
pub fn lookup(name: &str) -> Option<&'static CommandSchema> {
    CommandRegistry::global().lookup(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn field_names(name: &str) -> Vec<&'static str> {
        lookup(name)
            .unwrap()
            .fields
            .iter()
            .map(|field| field.name)
            .collect()
    }

    #[test]
    fn test_keywords_are_unique() {
        let registry = CommandRegistry::global();
        let names: HashSet<_> = registry.schemas().iter().map(|s| s.name).collect();
        assert_eq!(names.len(), registry.len());
        assert_eq!(registry.len(), 31);
    }

    #[test]
    fn test_lookup_is_exact() {
        assert!(lookup("ACKNOWLEDGE_HOST_PROBLEM").is_some());
        assert!(lookup("acknowledge_host_problem").is_none());
        assert!(lookup("NOT_A_COMMAND").is_none());
    }

    #[test]
    fn test_acknowledge_field_order_and_defaults() {
        assert_eq!(
            field_names("ACKNOWLEDGE_HOST_PROBLEM"),
            vec!["Hostname", "Sticky", "Notify", "Persistent", "Author", "Comment"]
        );
        let schema = lookup("ACKNOWLEDGE_HOST_PROBLEM").unwrap();
        let defaults: Vec<_> = schema.fields.iter().map(|f| f.default).collect();
        assert_eq!(defaults, vec![None, Some(2), Some(1), Some(1), None, None]);
        assert!(schema.field("Author").unwrap().required);
        assert!(!schema.field("Comment").unwrap().required);
    }

    #[test]
    fn test_service_acknowledge_author_is_optional() {
        let schema = lookup("ACKNOWLEDGE_SVC_PROBLEM").unwrap();
        assert_eq!(schema.fields.len(), 7);
        assert!(!schema.field("Author").unwrap().required);
        assert!(schema.field("ServiceDescription").unwrap().required);
    }

    #[test]
    fn test_downtime_layout() {
        assert_eq!(
            field_names("SCHEDULE_HOST_DOWNTIME"),
            vec![
                "Hostname",
                "start_time",
                "EndTime",
                "Fixed",
                "TriggerID",
                "Duration",
                "Author",
                "Comment"
            ]
        );
        assert!(lookup("SCHEDULE_HOST_DOWNTIME").unwrap().is_time_stamped());
    }

    #[test]
    fn test_every_command_with_fields_requires_its_target() {
        for schema in CommandRegistry::global().schemas() {
            if let Some(first) = schema.fields.first() {
                assert!(first.required, "{} first field must be required", schema.name);
            }
        }
        assert!(lookup("DISABLE_NOTIFICATIONS").unwrap().fields.is_empty());
    }

    #[test]
    fn test_route_segment() {
        let schema = lookup("DISABLE_HOSTGROUP_HOST_CHECKS").unwrap();
        assert_eq!(schema.route_segment(), "disable_hostgroup_host_checks");
    }
}
