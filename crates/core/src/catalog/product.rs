//! Products and the dependency rules they declare.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::property::{PropertyKind, PropertyValue};

/// A predicate over one property, used to filter which products of a
/// category count toward a dependency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyConstraint {
    pub key: String,
    pub kind: PropertyKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Exact match for boolean properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<bool>,
    /// Allowed set for enum properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
}

impl PropertyConstraint {
    fn unbounded(key: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            key: key.into(),
            kind,
            min: None,
            max: None,
            value: None,
            enum_values: None,
        }
    }

    pub fn number(key: impl Into<String>, min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            min,
            max,
            ..Self::unbounded(key, PropertyKind::Number)
        }
    }

    pub fn boolean(key: impl Into<String>, value: Option<bool>) -> Self {
        Self {
            value,
            ..Self::unbounded(key, PropertyKind::Boolean)
        }
    }

    pub fn one_of<I, S>(key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enum_values: Some(values.into_iter().map(Into::into).collect()),
            ..Self::unbounded(key, PropertyKind::Enum)
        }
    }
}

impl fmt::Display for PropertyConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = &self.key;
        match self.kind {
            PropertyKind::Number => match (self.min, self.max) {
                (Some(min), Some(max)) => write!(f, "{min} <= {key} <= {max}"),
                (Some(min), None) => write!(f, "{key} >= {min}"),
                (None, Some(max)) => write!(f, "{key} <= {max}"),
                (None, None) => write!(f, "{key} is a number"),
            },
            PropertyKind::Boolean => match self.value {
                Some(v) => write!(f, "{key} = {v}"),
                None => write!(f, "{key} is a boolean"),
            },
            PropertyKind::Enum => match &self.enum_values {
                Some(values) if !values.is_empty() => {
                    write!(f, "{key} in [{}]", values.join(", "))
                }
                _ => write!(f, "{key} is text"),
            },
        }
    }
}

/// A requirement that the order holds at least `min_count` items of a
/// category, optionally restricted to items passing every constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDependency {
    pub category_id: String,
    pub min_count: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub property_constraints: Vec<PropertyConstraint>,
}

impl ProductDependency {
    pub fn new(category_id: impl Into<String>, min_count: u32) -> Self {
        Self {
            category_id: category_id.into(),
            min_count,
            property_constraints: Vec::new(),
        }
    }

    pub fn with_constraint(mut self, constraint: PropertyConstraint) -> Self {
        self.property_constraints.push(constraint);
        self
    }

    pub fn is_constrained(&self) -> bool {
        !self.property_constraints.is_empty()
    }
}

impl fmt::Display for ProductDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+ from \"{}\"", self.min_count, self.category_id)?;
        for (i, constraint) in self.property_constraints.iter().enumerate() {
            let joiner = if i == 0 { " where " } else { " and " };
            write!(f, "{joiner}{constraint}")?;
        }
        Ok(())
    }
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category_id: String,
    #[serde(default)]
    pub properties: IndexMap<String, PropertyValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<ProductDependency>,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category_id: category_id.into(),
            properties: IndexMap::new(),
            dependencies: Vec::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn with_dependency(mut self, dependency: ProductDependency) -> Self {
        self.dependencies.push(dependency);
        self
    }

    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dependency_display_lists_constraints() {
        let dep = ProductDependency::new("clamp", 4)
            .with_constraint(PropertyConstraint::number("sizeCm", Some(8.0), None))
            .with_constraint(PropertyConstraint::boolean("isAutomatic", Some(true)));
        assert_eq!(
            dep.to_string(),
            r#"4+ from "clamp" where sizeCm >= 8 and isAutomatic = true"#
        );
    }

    #[test]
    fn unconstrained_dependency_display() {
        assert_eq!(
            ProductDependency::new("controller", 1).to_string(),
            r#"1+ from "controller""#
        );
    }

    #[test]
    fn constraint_display_by_kind() {
        assert_eq!(
            PropertyConstraint::number("n", Some(1.0), Some(2.5)).to_string(),
            "1 <= n <= 2.5"
        );
        assert_eq!(PropertyConstraint::boolean("b", None).to_string(), "b is a boolean");
        assert_eq!(
            PropertyConstraint::one_of("c", ["red", "blue"]).to_string(),
            "c in [red, blue]"
        );
    }

    #[test]
    fn product_deserializes_camel_case_wire_form() {
        let product: Product = serde_json::from_str(
            r#"{
                "id": "clamp-auto-10",
                "name": "AutoClamp 10",
                "categoryId": "clamp",
                "properties": { "sizeCm": 10, "isAutomatic": true },
                "dependencies": [{
                    "categoryId": "controller",
                    "minCount": 1,
                    "propertyConstraints": [
                        { "key": "supportsAutomaticClamps", "kind": "boolean", "value": true }
                    ]
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(product.category_id, "clamp");
        assert_eq!(product.property("sizeCm"), Some(&PropertyValue::Number(10.0)));
        assert_eq!(product.dependencies.len(), 1);
        let dep = &product.dependencies[0];
        assert_eq!(dep.min_count, 1);
        assert_eq!(dep.property_constraints[0].value, Some(true));
    }

    #[test]
    fn product_without_dependencies_omits_them() {
        let json = serde_json::to_value(Product::new("p", "P", "c")).unwrap();
        assert!(json.get("dependencies").is_none());
        assert_eq!(json["categoryId"], "c");
    }
}
