//! Per-category schema builder.
//!
//! [`CategorySchema::build`] turns a [`CategoryDefinition`] into a validator
//! for a product record: the `id` / `name` / `categoryId` envelope plus the
//! `properties` bag. Misconfigured definitions fail at build time with a
//! [`SchemaError`]; records that do not fit fail at validation time with a
//! list of [`SchemaViolation`]s. No value is ever coerced, so the string
//! `"true"` never passes a boolean check.

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::catalog::{CategoryDefinition, Product, PropertyKind};
use crate::error::SchemaError;

/// Envelope fields every product record must carry as non-empty strings.
pub const ENVELOPE_FIELDS: &[&str] = &["id", "name", "categoryId"];

/// Type check and bounds for one property, resolved from its kind.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldRule {
    Number { min: Option<f64>, max: Option<f64> },
    Boolean,
    Enum { values: Vec<String> },
}

impl FieldRule {
    /// Return a violation message if `value` does not satisfy the rule.
    pub fn check(&self, value: &Value) -> Option<String> {
        match self {
            Self::Number { min, max } => {
                let n = match value {
                    Value::Number(n) => n.as_f64()?,
                    _ => return Some(format!("expected a number, got {}", type_name(value))),
                };
                if let Some(min) = min.filter(|min| n < *min) {
                    return Some(format!("must be at least {min}, got {n}"));
                }
                if let Some(max) = max.filter(|max| n > *max) {
                    return Some(format!("must be at most {max}, got {n}"));
                }
                None
            }
            Self::Boolean => match value {
                Value::Bool(_) => None,
                _ => Some(format!("expected a boolean, got {}", type_name(value))),
            },
            Self::Enum { values } => match value {
                Value::String(s) if values.iter().any(|v| v == s) => None,
                Value::String(s) => Some(format!(
                    "'{s}' is not one of: {}",
                    values.join(", ")
                )),
                _ => Some(format!("expected a string, got {}", type_name(value))),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct PropertyRule {
    key: String,
    required: bool,
    rule: FieldRule,
}

/// A single failed check, addressed by a dotted path such as
/// `properties.sizeCm`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaViolation {
    pub path: String,
    pub message: String,
}

/// Outcome of validating one record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SchemaValidation {
    pub violations: Vec<SchemaViolation>,
}

impl SchemaValidation {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.violations.push(SchemaViolation {
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Validator for product records of one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySchema {
    properties: Vec<PropertyRule>,
}

/// Build the validator for a category.
pub fn build_schema(category: &CategoryDefinition) -> Result<CategorySchema, SchemaError> {
    CategorySchema::build(category)
}

impl CategorySchema {
    pub fn build(category: &CategoryDefinition) -> Result<Self, SchemaError> {
        let properties = category
            .properties
            .iter()
            .map(|prop| {
                let rule = match prop.kind {
                    PropertyKind::Number => FieldRule::Number {
                        min: prop.min,
                        max: prop.max,
                    },
                    PropertyKind::Boolean => FieldRule::Boolean,
                    PropertyKind::Enum => match &prop.enum_values {
                        Some(values) if !values.is_empty() => FieldRule::Enum {
                            values: values.clone(),
                        },
                        _ => {
                            return Err(SchemaError::EnumWithoutValues {
                                key: prop.key.clone(),
                            })
                        }
                    },
                };
                Ok(PropertyRule {
                    key: prop.key.clone(),
                    required: prop.required,
                    rule,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { properties })
    }

    /// Validate a loosely typed record. Keys in `properties` that the
    /// category does not declare are ignored.
    pub fn validate(&self, record: &Value) -> SchemaValidation {
        let mut result = SchemaValidation::default();

        let Some(record) = record.as_object() else {
            result.push("", format!("expected an object, got {}", type_name(record)));
            return result;
        };

        for field in ENVELOPE_FIELDS {
            match record.get(*field) {
                None => result.push(*field, "is required"),
                Some(Value::String(s)) if s.is_empty() => result.push(*field, "must not be empty"),
                Some(Value::String(_)) => {}
                Some(other) => {
                    result.push(*field, format!("expected a string, got {}", type_name(other)))
                }
            }
        }

        match record.get("properties") {
            None => result.push("properties", "is required"),
            Some(Value::Object(bag)) => self.validate_bag(bag, &mut result),
            Some(other) => result.push(
                "properties",
                format!("expected an object, got {}", type_name(other)),
            ),
        }

        result
    }

    /// Validate an already-typed product against this schema.
    pub fn validate_product(&self, product: &Product) -> SchemaValidation {
        let properties: Map<String, Value> = product
            .properties
            .iter()
            .map(|(key, value)| (key.clone(), Value::from(value)))
            .collect();

        self.validate(&json!({
            "id": product.id,
            "name": product.name,
            "categoryId": product.category_id,
            "properties": properties,
        }))
    }

    fn validate_bag(&self, bag: &Map<String, Value>, result: &mut SchemaValidation) {
        for prop in &self.properties {
            let path = format!("properties.{}", prop.key);
            match bag.get(&prop.key) {
                None if prop.required => result.push(path, "is required"),
                None => {}
                Some(value) => {
                    if let Some(message) = prop.rule.check(value) {
                        result.push(path, message);
                    }
                }
            }
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
