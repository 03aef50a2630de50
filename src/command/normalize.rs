//! Default substitution and validation of raw requests

use serde_json::Value;
use std::fmt;

use super::request::{json_type_name, RawRequest};
use crate::error::{CommandError, Result};
use crate::registry::{CommandSchema, FieldKind, FieldSpec, Validator};

/// Separator between fields on the wire
pub const FIELD_SEPARATOR: char = ';';

/// One normalized positional value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    /// Filled with the current Unix time when serialized
    CurrentTime,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Integer(value) => write!(f, "{}", value),
            FieldValue::CurrentTime => f.write_str("<now>"),
        }
    }
}

/// A complete field set, one value per schema field in schema order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedCommand {
    schema: &'static CommandSchema,
    values: Vec<FieldValue>,
}

impl NormalizedCommand {
    pub fn schema(&self) -> &'static CommandSchema {
        self.schema
    }

    pub fn keyword(&self) -> &'static str {
        self.schema.name
    }

    pub fn values(&self) -> &[FieldValue] {
        &self.values
    }

    /// Value of a named field
    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.schema
            .fields
            .iter()
            .position(|field| field.matches_key(name))
            .map(|index| &self.values[index])
    }
}

/// Apply defaults and validators to `raw`, failing on the first bad field
/// in schema order. Keys the schema does not name are ignored.
pub fn normalize(schema: &'static CommandSchema, raw: &RawRequest) -> Result<NormalizedCommand> {
    let last = schema.fields.len().saturating_sub(1);
    let values = schema
        .fields
        .iter()
        .enumerate()
        .map(|(index, field)| normalize_field(field, raw.get(field), index == last))
        .collect::<Result<Vec<_>>>()?;

    Ok(NormalizedCommand { schema, values })
}

/// `trailing` is set for the final field, the only one the core reads up
/// to the end of the line.
fn normalize_field(field: &FieldSpec, raw: Option<&Value>, trailing: bool) -> Result<FieldValue> {
    // null is treated the same as an absent key
    let raw = raw.filter(|value| !value.is_null());

    match field.kind {
        FieldKind::CurrentTime => Ok(FieldValue::CurrentTime),
        FieldKind::Text => {
            let text = match raw {
                None => String::new(),
                Some(Value::String(text)) => text.clone(),
                Some(other) => return Err(type_mismatch(field, "a string", other)),
            };
            check_text(field, text, trailing)
        }
        FieldKind::Id => {
            let text = match raw {
                None => String::new(),
                Some(Value::String(text)) => text.clone(),
                Some(Value::Number(number)) if number.is_u64() => number.to_string(),
                Some(other) => {
                    return Err(type_mismatch(field, "a string or non-negative integer", other))
                }
            };
            check_text(field, text, trailing)
        }
        FieldKind::Integer | FieldKind::Timestamp => {
            let mut value = match raw {
                None => 0,
                Some(Value::Number(number)) => number
                    .as_i64()
                    .ok_or_else(|| CommandError::validation(field.name, "expected an integer"))?,
                Some(other) => return Err(type_mismatch(field, "an integer", other)),
            };

            // Zero doubles as "unset"; callers cannot send a literal 0 here
            if value == 0 {
                if let Some(default) = field.default {
                    value = default;
                }
            }
            if field.required && value == 0 {
                return Err(CommandError::validation(field.name, "is required"));
            }
            Ok(FieldValue::Integer(value))
        }
    }
}

fn check_text(field: &FieldSpec, text: String, trailing: bool) -> Result<FieldValue> {
    if field.required && text.is_empty() {
        return Err(CommandError::validation(field.name, "is required"));
    }
    if text.contains(['\n', '\r']) {
        return Err(CommandError::validation(
            field.name,
            "must not contain line breaks",
        ));
    }
    let separator_allowed = trailing && field.validator != Some(Validator::Identifier);
    if !separator_allowed && text.contains(FIELD_SEPARATOR) {
        return Err(CommandError::validation(
            field.name,
            format!("must not contain '{}'", FIELD_SEPARATOR),
        ));
    }
    Ok(FieldValue::Text(text))
}

fn type_mismatch(field: &FieldSpec, expected: &str, found: &Value) -> CommandError {
    CommandError::validation(
        field.name,
        format!("expected {}, found {}", expected, json_type_name(found)),
    )
}
