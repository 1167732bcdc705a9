//! Property kinds, values and per-category property definitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

pub const KIND_NUMBER: &str = "number";
pub const KIND_BOOLEAN: &str = "boolean";
pub const KIND_ENUM: &str = "enum";

/// All valid property kind strings.
pub const VALID_KINDS: &[&str] = &[KIND_NUMBER, KIND_BOOLEAN, KIND_ENUM];

/// The type of a property. Decides which bound fields of a definition or
/// constraint are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum PropertyKind {
    Number,
    Boolean,
    Enum,
}

impl PropertyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Number => KIND_NUMBER,
            Self::Boolean => KIND_BOOLEAN,
            Self::Enum => KIND_ENUM,
        }
    }
}

impl FromStr for PropertyKind {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            KIND_NUMBER => Ok(Self::Number),
            KIND_BOOLEAN => Ok(Self::Boolean),
            KIND_ENUM => Ok(Self::Enum),
            other => Err(SchemaError::UnknownKind {
                kind: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for PropertyKind {
    type Error = SchemaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single property value on a product.
///
/// Serialized as the bare JSON scalar, so a property bag reads as
/// `{ "sizeCm": 10, "isAutomatic": true, "color": "red" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Number(f64),
    Bool(bool),
    Text(String),
}

impl From<&PropertyValue> for serde_json::Value {
    fn from(value: &PropertyValue) -> Self {
        match value {
            PropertyValue::Number(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            PropertyValue::Bool(b) => serde_json::Value::Bool(*b),
            PropertyValue::Text(s) => serde_json::Value::String(s.clone()),
        }
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// A typed attribute declared by a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDefinition {
    /// Unique within the owning category, e.g. `sizeCm`.
    pub key: String,
    /// Display label.
    pub label: String,
    pub kind: PropertyKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
}

impl PropertyDefinition {
    /// A definition of the given kind with no bounds, not required.
    pub fn new(key: impl Into<String>, label: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
            required: false,
            min: None,
            max: None,
            enum_values: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn with_enum_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }
}

/// A grouping of products sharing one property schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub properties: Vec<PropertyDefinition>,
}

impl CategoryDefinition {
    pub fn property(&self, key: &str) -> Option<&PropertyDefinition> {
        self.properties.iter().find(|p| p.key == key)
    }
}
