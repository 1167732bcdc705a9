//! Catalog data model and the snapshot container handed to the checker.
//!
//! A [`Catalog`] is a read-only value. Nothing in this crate keeps one in
//! process-wide state; callers load or build it and pass it in.

pub mod product;
pub mod property;
pub mod sample;
pub mod verify;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::order::{self, OrderItem, ValidationResult};

pub use product::{Product, ProductDependency, PropertyConstraint};
pub use property::{CategoryDefinition, PropertyDefinition, PropertyKind, PropertyValue};

/// Categories and products as one immutable snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub categories: Vec<CategoryDefinition>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Catalog {
    pub fn new(categories: Vec<CategoryDefinition>, products: Vec<Product>) -> Self {
        Self {
            categories,
            products,
        }
    }

    /// Parse a catalog from its JSON form:
    /// `{ "categories": [...], "products": [...] }`.
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        serde_json::from_str(json)
            .map_err(|e| CoreError::Catalog(format!("invalid catalog JSON: {e}")))
    }

    /// Read and parse a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| CoreError::Catalog(format!("failed to read {}: {e}", path.display())))?;
        serde_json::from_str(&raw)
            .map_err(|e| CoreError::Catalog(format!("invalid catalog JSON in {}: {e}", path.display())))
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn category(&self, id: &str) -> Option<&CategoryDefinition> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Validate an order against this catalog.
    pub fn check_order(&self, order: &[OrderItem]) -> ValidationResult {
        order::check_order(order, &self.products, &self.categories)
    }
}
