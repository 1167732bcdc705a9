//! Catalog consistency checks.
//!
//! Run after loading or importing a catalog, before it is used to check
//! orders. Verification never fails; it collects every issue it finds.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use super::{CategoryDefinition, Catalog, PropertyKind};
use crate::schema::CategorySchema;

/// One problem found in the catalog. `subject` names the offending category
/// or product, e.g. `category clamp` or `product clamp-auto-10`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogIssue {
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogReport {
    pub categories: usize,
    pub products: usize,
    pub issues: Vec<CatalogIssue>,
}

impl CatalogReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    fn push(&mut self, subject: String, message: impl Into<String>) {
        self.issues.push(CatalogIssue {
            subject,
            message: message.into(),
        });
    }
}

pub fn verify_catalog(catalog: &Catalog) -> CatalogReport {
    let mut report = CatalogReport {
        categories: catalog.categories.len(),
        products: catalog.products.len(),
        issues: Vec::new(),
    };

    let (categories, schemas) = verify_categories(&catalog.categories, &mut report);

    let mut seen_products = HashSet::new();
    for product in &catalog.products {
        let subject = format!("product {}", product.id);

        if !seen_products.insert(product.id.as_str()) {
            report.push(subject.clone(), "duplicate product id");
        }

        match (
            categories.contains_key(product.category_id.as_str()),
            schemas.get(product.category_id.as_str()),
        ) {
            (false, _) => report.push(
                subject.clone(),
                format!("unknown category \"{}\"", product.category_id),
            ),
            (true, Some(schema)) => {
                for violation in schema.validate_product(product).violations {
                    report.push(
                        subject.clone(),
                        format!("{}: {}", violation.path, violation.message),
                    );
                }
            }
            // Schema failed to build; already reported on the category.
            (true, None) => {}
        }

        for (index, dependency) in product.dependencies.iter().enumerate() {
            let dep_subject = format!("{subject} dependency #{}", index + 1);

            if dependency.min_count == 0 {
                report.push(dep_subject.clone(), "minCount must be at least 1");
            }

            let Some(target) = categories.get(dependency.category_id.as_str()) else {
                report.push(
                    dep_subject,
                    format!("unknown category \"{}\"", dependency.category_id),
                );
                continue;
            };

            for constraint in &dependency.property_constraints {
                match target.property(&constraint.key) {
                    None => report.push(
                        dep_subject.clone(),
                        format!(
                            "category \"{}\" declares no property \"{}\"",
                            target.id, constraint.key
                        ),
                    ),
                    Some(def) if def.kind != constraint.kind => report.push(
                        dep_subject.clone(),
                        format!(
                            "constraint on \"{}\" is {} but the property is {}",
                            constraint.key, constraint.kind, def.kind
                        ),
                    ),
                    Some(_) => {}
                }

                if constraint.kind == PropertyKind::Number {
                    if let (Some(min), Some(max)) = (constraint.min, constraint.max) {
                        if min > max {
                            report.push(
                                dep_subject.clone(),
                                format!("constraint on \"{}\" has min {min} > max {max}", constraint.key),
                            );
                        }
                    }
                }
            }
        }
    }

    report
}

/// Index categories by id and build their schemas, reporting duplicate ids,
/// duplicate property keys and schema configuration errors. The first
/// category with a given id wins.
fn verify_categories<'a>(
    categories: &'a [CategoryDefinition],
    report: &mut CatalogReport,
) -> (
    HashMap<&'a str, &'a CategoryDefinition>,
    HashMap<&'a str, CategorySchema>,
) {
    let mut by_id = HashMap::new();
    let mut schemas = HashMap::new();

    for category in categories {
        let subject = format!("category {}", category.id);

        if by_id.contains_key(category.id.as_str()) {
            report.push(subject, "duplicate category id");
            continue;
        }

        let mut keys = HashSet::new();
        for prop in &category.properties {
            if !keys.insert(prop.key.as_str()) {
                report.push(subject.clone(), format!("duplicate property key \"{}\"", prop.key));
            }
        }

        match CategorySchema::build(category) {
            Ok(schema) => {
                schemas.insert(category.id.as_str(), schema);
            }
            Err(e) => report.push(subject, e.to_string()),
        }

        by_id.insert(category.id.as_str(), category);
    }

    (by_id, schemas)
}
