//! Structural validation of request documents against a data-described object schema.

use crate::error::AppError;
use serde_json::Value;

/// JSON type a field must carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
}

impl FieldKind {
    fn name(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Integer => "integer",
        }
    }

    fn accepts(self, v: &Value) -> bool {
        match self {
            FieldKind::String => v.is_string(),
            FieldKind::Integer => v.as_i64().is_some(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Minimum length in characters; strings only.
    pub min_length: Option<usize>,
}

#[derive(Clone, Copy, Debug)]
pub struct ObjectSchema {
    pub fields: &'static [FieldRule],
    pub additional_properties: bool,
}

/// Schema for POST /people and PUT /people/{id} bodies.
pub const PERSON_SCHEMA: ObjectSchema = ObjectSchema {
    fields: &[
        FieldRule {
            name: "firstName",
            kind: FieldKind::String,
            required: true,
            min_length: Some(1),
        },
        FieldRule {
            name: "lastName",
            kind: FieldKind::String,
            required: true,
            min_length: Some(1),
        },
        FieldRule {
            name: "age",
            kind: FieldKind::Integer,
            required: true,
            min_length: None,
        },
    ],
    additional_properties: false,
};

pub struct SchemaValidator;

impl SchemaValidator {
    /// Check `doc` against `schema`, collecting every violation.
    /// Order: root type, missing fields, field type/length (schema order), extra properties.
    pub fn validate(doc: &Value, schema: &ObjectSchema) -> Result<(), AppError> {
        let errors = Self::violations(doc, schema);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(errors))
        }
    }

    pub fn violations(doc: &Value, schema: &ObjectSchema) -> Vec<String> {
        let obj = match doc.as_object() {
            Some(obj) => obj,
            None => {
                return vec![format!(
                    "(root): Invalid type. Expected: object, given: {}",
                    type_name(doc)
                )]
            }
        };

        let mut errors = Vec::new();
        for rule in schema.fields {
            if rule.required && !obj.contains_key(rule.name) {
                errors.push(format!("(root): {} is required", rule.name));
            }
        }
        for rule in schema.fields {
            if let Some(v) = obj.get(rule.name) {
                check_field(rule, v, &mut errors);
            }
        }
        if !schema.additional_properties {
            for key in obj.keys() {
                if !schema.fields.iter().any(|r| r.name == key.as_str()) {
                    errors.push(format!("(root): Additional property {} is not allowed", key));
                }
            }
        }
        errors
    }
}

fn check_field(rule: &FieldRule, v: &Value, errors: &mut Vec<String>) {
    if rule.kind == FieldKind::Integer && is_integer(v) && !rule.kind.accepts(v) {
        errors.push(format!(
            "{}: Integer out of range. Must be between {} and {}",
            rule.name,
            i64::MIN,
            i64::MAX
        ));
        return;
    }
    if !rule.kind.accepts(v) {
        errors.push(format!(
            "{}: Invalid type. Expected: {}, given: {}",
            rule.name,
            rule.kind.name(),
            type_name(v)
        ));
        return;
    }
    if let (Some(min), Some(s)) = (rule.min_length, v.as_str()) {
        if s.chars().count() < min {
            errors.push(format!(
                "{}: String length must be greater than or equal to {}",
                rule.name, min
            ));
        }
    }
}

fn is_integer(v: &Value) -> bool {
    matches!(v, Value::Number(n) if n.is_i64() || n.is_u64())
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) if is_integer(v) => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
