//! Decoded but unvalidated request payload

use serde_json::{Map, Value};

use crate::error::{CommandError, Result};
use crate::registry::FieldSpec;

/// Field name to raw JSON value, owned by a single request
#[derive(Debug, Clone, Default)]
pub struct RawRequest {
    values: Map<String, Value>,
}

impl RawRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a request body. An empty body is an empty object; anything
    /// other than a JSON object is rejected.
    pub fn from_body(body: &[u8]) -> Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::new());
        }

        let value: Value = serde_json::from_slice(body)
            .map_err(|e| CommandError::decode(e.to_string()))?;

        match value {
            Value::Object(values) => Ok(Self { values }),
            other => Err(CommandError::decode(format!(
                "expected a JSON object, found {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Set a value, replacing any existing entry that addresses the same key
    pub fn insert<K: Into<String>>(&mut self, key: K, value: Value) {
        let key = key.into();
        self.values.retain(|existing, _| !existing.eq_ignore_ascii_case(&key));
        self.values.insert(key, value);
    }

    /// Value for a field. Exact key matches win over case-insensitive and
    /// alias matches; unknown keys are never consulted.
    pub fn get(&self, field: &FieldSpec) -> Option<&Value> {
        if let Some(value) = self.values.get(field.name) {
            return Some(value);
        }
        if let Some(value) = field.aliases.iter().find_map(|alias| self.values.get(*alias)) {
            return Some(value);
        }
        self.values
            .iter()
            .find(|(key, _)| field.matches_key(key))
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
