//! Order checker: resolution and quantity checks, then dependency checks.
//!
//! The two phases are strictly ordered. If any line fails to resolve or has
//! a non-positive quantity, only those errors are returned and no
//! dependency is evaluated. Otherwise every unmet dependency of every
//! ordered product is reported.

use std::collections::HashMap;

use indexmap::IndexMap;

use super::dependency::{check_dependency, OrderedProduct, OrderedProducts};
use super::types::{OrderItem, ValidationError, ValidationResult};
use crate::catalog::{CategoryDefinition, Product};

pub const MSG_QUANTITY_NOT_POSITIVE: &str = "Quantity must be greater than 0";

/// Validate an order against the catalog's dependency rules.
///
/// `categories` is accepted so callers pass the full catalog snapshot; the
/// dependency rules only reference category ids, so it is not consulted.
pub fn check_order(
    order: &[OrderItem],
    products: &[Product],
    _categories: &[CategoryDefinition],
) -> ValidationResult {
    match resolve_order(order, products) {
        Ok(ordered) => ValidationResult::from_errors(unmet_dependencies(&ordered)),
        Err(errors) => ValidationResult::from_errors(errors),
    }
}

/// Resolve every order line against the catalog.
///
/// A line yields at most one error: unknown products are reported before
/// their quantity is looked at. When the same product appears on several
/// lines, the last quantity wins and the product keeps its first position.
pub fn resolve_order<'a>(
    order: &[OrderItem],
    products: &'a [Product],
) -> Result<OrderedProducts<'a>, Vec<ValidationError>> {
    let by_id: HashMap<&str, &Product> = products.iter().map(|p| (p.id.as_str(), p)).collect();

    let mut errors = Vec::new();
    let mut ordered: OrderedProducts<'a> = IndexMap::with_capacity(order.len());

    for item in order {
        let Some(&product) = by_id.get(item.product_id.as_str()) else {
            errors.push(ValidationError::new(
                &item.product_id,
                format!("Product \"{}\" not found", item.product_id),
            ));
            continue;
        };

        if item.quantity <= 0 {
            errors.push(ValidationError::new(&item.product_id, MSG_QUANTITY_NOT_POSITIVE));
            continue;
        }

        ordered.insert(
            product.id.as_str(),
            OrderedProduct {
                product,
                quantity: item.quantity,
            },
        );
    }

    if errors.is_empty() {
        Ok(ordered)
    } else {
        Err(errors)
    }
}

/// Check every dependency of every resolved product against the whole
/// resolved order. Errors are attributed to the dependent product.
pub fn unmet_dependencies(ordered: &OrderedProducts<'_>) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (product_id, entry) in ordered {
        for dependency in &entry.product.dependencies {
            let check = check_dependency(dependency, ordered);
            if !check.is_satisfied() {
                errors.push(ValidationError::new(
                    *product_id,
                    format!(
                        "Product \"{}\" (quantity: {}) has unmet dependency: {}",
                        entry.product.name,
                        entry.quantity,
                        check.reason()
                    ),
                ));
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample::{sample_categories, sample_products};
    use crate::catalog::ProductDependency;

    fn check(lines: &[(&str, i64)]) -> ValidationResult {
        let order: Vec<OrderItem> = lines
            .iter()
            .map(|(id, qty)| OrderItem::new(*id, *qty))
            .collect();
        check_order(&order, &sample_products(), &sample_categories())
    }

    // -- Valid configurations -------------------------------------------------

    #[test]
    fn accepts_platform_with_clamps_and_controller() {
        let result = check(&[
            ("platform-modern-200", 1),
            ("clamp-auto-10", 4),
            ("controller-pro-8", 1),
        ]);
        assert!(result.valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn accepts_compact_platform_at_minimum() {
        let result = check(&[
            ("platform-compact-120", 1),
            ("clamp-manual-5", 2),
            ("controller-basic-4", 1),
        ]);
        assert!(result.valid, "errors: {:?}", result.errors);
    }

    #[test]
    fn accepts_more_than_minimum() {
        let result = check(&[
            ("platform-modern-200", 1),
            ("clamp-auto-10", 6),
            ("controller-pro-8", 1),
        ]);
        assert!(result.valid);
    }

    #[test]
    fn accepts_products_without_dependencies() {
        let result = check(&[("clamp-manual-5", 10), ("controller-basic-4", 2)]);
        assert!(result.valid);
    }

    #[test]
    fn accepts_automatic_clamps_with_supporting_controller() {
        let result = check(&[("clamp-auto-10", 2), ("controller-pro-8", 1)]);
        assert!(result.valid);
    }

    #[test]
    fn empty_order_is_valid() {
        let result = check(&[]);
        assert!(result.valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn multiple_dependents_share_the_pool() {
        let result = check(&[
            ("platform-modern-200", 2),
            ("platform-compact-120", 1),
            ("clamp-auto-10", 10),
            ("controller-pro-8", 2),
        ]);
        assert!(result.valid, "errors: {:?}", result.errors);
    }

    // -- Missing dependencies -------------------------------------------------

    #[test]
    fn rejects_platform_without_clamps() {
        let result = check(&[("platform-modern-200", 1), ("controller-pro-8", 1)]);
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].product_id, "platform-modern-200");
        assert!(result.errors[0].message.contains("clamp"));
    }

    #[test]
    fn rejects_platform_without_controller() {
        let result = check(&[("platform-modern-200", 1), ("clamp-auto-10", 4)]);
        assert!(!result.valid);
        // The platform and the automatic clamps both miss a controller.
        assert_eq!(result.errors.len(), 2);
        let platform: Vec<_> = result.errors_for("platform-modern-200").collect();
        assert_eq!(platform.len(), 1);
        assert!(platform[0].message.contains("controller"));
        assert_eq!(result.errors_for("clamp-auto-10").count(), 1);
    }

    #[test]
    fn rejects_insufficient_clamp_quantity() {
        let result = check(&[
            ("platform-modern-200", 1),
            ("clamp-auto-10", 2),
            ("controller-pro-8", 1),
        ]);
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].product_id, "platform-modern-200");
        assert!(result.errors[0].message.contains("at least 4"));
        assert_eq!(
            result.errors[0].message,
            "Product \"Modern Platform 200\" (quantity: 1) has unmet dependency: \
             Requires at least 4 product(s) from category \"clamp\" with specific constraints, \
             but only 2 found"
        );
    }

    #[test]
    fn rejects_automatic_clamps_with_basic_controller() {
        let result = check(&[("clamp-auto-10", 2), ("controller-basic-4", 1)]);
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].product_id, "clamp-auto-10");
        assert!(result.errors[0].message.contains("specific constraints"));
    }

    #[test]
    fn rejects_automatic_clamps_without_controller() {
        let result = check(&[("clamp-auto-10", 2)]);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].product_id, "clamp-auto-10");
        assert!(result.errors[0].message.contains("but only 0 found"));
    }

    #[test]
    fn accumulates_every_unmet_dependency() {
        let result = check(&[("platform-modern-200", 1), ("clamp-auto-10", 2)]);
        assert!(!result.valid);
        // Platform: clamps short and no controller. Clamp: no controller.
        assert_eq!(result.errors_for("platform-modern-200").count(), 2);
        assert_eq!(result.errors_for("clamp-auto-10").count(), 1);
        assert_eq!(result.errors.len(), 3);
    }

    // -- Property constraints -------------------------------------------------

    #[test]
    fn rejects_clamps_that_are_too_small() {
        let result = check(&[
            ("platform-modern-200", 1),
            ("clamp-manual-5", 4),
            ("controller-pro-8", 1),
        ]);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].product_id, "platform-modern-200");
        assert!(result.errors[0].message.contains("specific constraints"));
    }

    #[test]
    fn compact_platform_ok_but_auto_clamps_need_support() {
        let result = check(&[
            ("platform-compact-120", 1),
            ("clamp-auto-10", 2),
            ("controller-basic-4", 1),
        ]);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].product_id, "clamp-auto-10");
    }

    // -- Resolution phase -----------------------------------------------------

    #[test]
    fn unknown_product_is_reported() {
        let result = check(&[("non-existent-product", 1)]);
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].product_id, "non-existent-product");
        assert_eq!(
            result.errors[0].message,
            "Product \"non-existent-product\" not found"
        );
    }

    #[test]
    fn every_unknown_product_gets_one_error() {
        let result = check(&[("ghost-1", 1), ("ghost-2", 0), ("ghost-3", -1)]);
        assert_eq!(result.errors.len(), 3);
        assert!(result.errors.iter().all(|e| e.message.contains("not found")));
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let result = check(&[("clamp-manual-5", 0)]);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].product_id, "clamp-manual-5");
        assert!(result.errors[0].message.contains("greater than 0"));
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let result = check(&[("controller-basic-4", -5)]);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].product_id, "controller-basic-4");
        assert_eq!(result.errors[0].message, MSG_QUANTITY_NOT_POSITIVE);
    }

    #[test]
    fn resolution_errors_skip_dependency_checks() {
        // The platform alone would fail both of its dependencies.
        let result = check(&[("platform-modern-200", 1), ("clamp-manual-5", 0)]);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].product_id, "clamp-manual-5");
        assert_eq!(result.errors_for("platform-modern-200").count(), 0);
    }

    #[test]
    fn repeated_product_keeps_last_quantity() {
        let result = check(&[
            ("platform-modern-200", 1),
            ("clamp-auto-10", 1),
            ("controller-pro-8", 1),
            ("clamp-auto-10", 4),
        ]);
        assert!(result.valid, "errors: {:?}", result.errors);
    }

    #[test]
    fn huge_quantities_saturate_instead_of_overflowing() {
        let result = check(&[
            ("platform-compact-120", 1),
            ("clamp-auto-10", i64::MAX),
            ("clamp-manual-5", i64::MAX),
            ("controller-pro-8", 1),
        ]);
        assert!(result.valid, "errors: {:?}", result.errors);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn checking_is_idempotent() {
        let lines = [("platform-modern-200", 1), ("clamp-auto-10", 2)];
        assert_eq!(check(&lines), check(&lines));
    }

    #[test]
    fn errors_follow_order_of_first_appearance() {
        let result = check(&[("clamp-auto-10", 2), ("platform-modern-200", 1)]);
        let ids: Vec<_> = result.errors.iter().map(|e| e.product_id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["clamp-auto-10", "platform-modern-200", "platform-modern-200"]
        );
    }

    #[test]
    fn self_matching_dependency_counts_itself() {
        let products = vec![Product::new("kit", "Kit", "bundle")
            .with_dependency(ProductDependency::new("bundle", 3))];
        let ok = check_order(&[OrderItem::new("kit", 3)], &products, &[]);
        let short = check_order(&[OrderItem::new("kit", 2)], &products, &[]);
        assert!(ok.valid);
        assert!(!short.valid);
    }
}
