//! Dependency satisfaction against the resolved order.

use indexmap::IndexMap;

use super::matcher::satisfies_constraint;
use crate::catalog::{Product, ProductDependency};

/// A resolved order line.
#[derive(Debug, Clone, Copy)]
pub struct OrderedProduct<'a> {
    pub product: &'a Product,
    pub quantity: i64,
}

/// Resolved order lines keyed by product id, in order of first appearance.
pub type OrderedProducts<'a> = IndexMap<&'a str, OrderedProduct<'a>>;

/// Pooled count found for one dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyCheck {
    pub category_id: String,
    pub required: u32,
    pub found: i64,
    pub constrained: bool,
}

impl DependencyCheck {
    pub fn is_satisfied(&self) -> bool {
        self.found >= i64::from(self.required)
    }

    /// Human-readable explanation of a shortfall.
    pub fn reason(&self) -> String {
        let constraints = if self.constrained {
            " with specific constraints"
        } else {
            ""
        };
        format!(
            "Requires at least {} product(s) from category \"{}\"{constraints}, but only {} found",
            self.required, self.category_id, self.found
        )
    }
}

/// Whether `product` counts toward `dependency`: same category and every
/// constraint holds.
pub fn is_candidate(product: &Product, dependency: &ProductDependency) -> bool {
    product.category_id == dependency.category_id
        && dependency
            .property_constraints
            .iter()
            .all(|c| satisfies_constraint(product.property(&c.key), c))
}

/// Sum the quantities of every ordered product that counts toward the
/// dependency. The dependent product itself is not excluded. The sum
/// saturates at `i64::MAX`.
pub fn check_dependency(
    dependency: &ProductDependency,
    ordered: &OrderedProducts<'_>,
) -> DependencyCheck {
    let found = ordered
        .values()
        .filter(|entry| is_candidate(entry.product, dependency))
        .map(|entry| entry.quantity)
        .fold(0i64, |acc, quantity| acc.saturating_add(quantity));

    DependencyCheck {
        category_id: dependency.category_id.clone(),
        required: dependency.min_count,
        found,
        constrained: dependency.is_constrained(),
    }
}
