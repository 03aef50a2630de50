//! Schema types describing one external command kind

use serde::Serialize;

/// Semantic type of a positional field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free text taken from a JSON string
    Text,
    /// Integer taken from a JSON number (flags, enums, counts)
    Integer,
    /// Caller supplied Unix timestamp
    Timestamp,
    /// Object identifier; accepts a JSON string or a non-negative integer
    Id,
    /// Unix time computed when the line is serialized, never read from the request
    CurrentTime,
}

/// Extra check applied to a text value after defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Validator {
    /// Value names an object and must not contain the field separator
    Identifier,
}

/// One positional field within a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Request key, matched case-insensitively
    pub name: &'static str,
    /// Alternative request keys accepted for the same field
    pub aliases: &'static [&'static str],
    pub kind: FieldKind,
    pub required: bool,
    /// Value substituted when the field is absent or zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validator: Option<Validator>,
}

impl FieldSpec {
    const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            aliases: &[],
            kind,
            required: false,
            default: None,
            validator: None,
        }
    }

    /// Optional free text field
    pub const fn text(name: &'static str) -> Self {
        Self::new(name, FieldKind::Text)
    }

    /// Integer field; zero is passed through unless a default is set
    pub const fn integer(name: &'static str) -> Self {
        Self::new(name, FieldKind::Integer)
    }

    /// Caller supplied Unix timestamp
    pub const fn timestamp(name: &'static str) -> Self {
        Self::new(name, FieldKind::Timestamp)
    }

    /// Identifier accepting string or integer input
    pub const fn id(name: &'static str) -> Self {
        Self::new(name, FieldKind::Id)
    }

    /// Timestamp filled in at serialization time
    pub const fn current_time(name: &'static str) -> Self {
        Self::new(name, FieldKind::CurrentTime)
    }

    /// Integer flag where absent or zero means `value`
    pub const fn flag(name: &'static str, value: i64) -> Self {
        Self::integer(name).default_to(value)
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn default_to(mut self, value: i64) -> Self {
        self.default = Some(value);
        self
    }

    pub const fn validate(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    pub const fn aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    /// True if the field is filled from the request rather than computed
    pub fn is_caller_supplied(&self) -> bool {
        self.kind != FieldKind::CurrentTime
    }

    /// Does `key` address this field (name or alias, ignoring ASCII case)?
    pub fn matches_key(&self, key: &str) -> bool {
        self.name.eq_ignore_ascii_case(key)
            || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(key))
    }
}

/// The ordered field contract for one command keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommandSchema {
    /// Canonical keyword, e.g. `ACKNOWLEDGE_HOST_PROBLEM`
    pub name: &'static str,
    pub description: &'static str,
    /// Fields in wire order
    pub fields: &'static [FieldSpec],
}

impl CommandSchema {
    /// HTTP path segment for this keyword, e.g. `acknowledge_host_problem`
    pub fn route_segment(&self) -> String {
        self.name.to_ascii_lowercase()
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.matches_key(name))
    }

    /// True if the serialized line depends on the current time
    pub fn is_time_stamped(&self) -> bool {
        self.fields
            .iter()
            .any(|field| field.kind == FieldKind::CurrentTime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_builders() {
        let sticky = FieldSpec::flag("Sticky", 2);
        assert_eq!(sticky.kind, FieldKind::Integer);
        assert_eq!(sticky.default, Some(2));
        assert!(!sticky.required);

        let host = FieldSpec::text("Hostname")
            .required()
            .validate(Validator::Identifier);
        assert!(host.required);
        assert_eq!(host.validator, Some(Validator::Identifier));
        assert!(host.is_caller_supplied());
        assert!(!FieldSpec::current_time("check_time").is_caller_supplied());
    }

    #[test]
    fn test_matches_key_ignores_case_and_uses_aliases() {
        let service = FieldSpec::text("ServiceDescription").aliases(&["Service"]);
        assert!(service.matches_key("servicedescription"));
        assert!(service.matches_key("SERVICE"));
        assert!(!service.matches_key("Services"));
    }
}
