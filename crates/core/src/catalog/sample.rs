//! Built-in sample catalog: platforms, clamps and controllers.
//!
//! Served when no catalog file is configured, and used as the shared test
//! fixture for the order checker.

use super::product::{Product, ProductDependency, PropertyConstraint};
use super::property::{CategoryDefinition, PropertyDefinition, PropertyKind};
use super::Catalog;

pub const CATEGORY_PLATFORM: &str = "platform";
pub const CATEGORY_CLAMP: &str = "clamp";
pub const CATEGORY_CONTROLLER: &str = "controller";

pub fn sample_categories() -> Vec<CategoryDefinition> {
    vec![
        CategoryDefinition {
            id: CATEGORY_PLATFORM.to_string(),
            name: "Platform".to_string(),
            properties: vec![
                PropertyDefinition::new("lengthCm", "Platform Length (cm)", PropertyKind::Number)
                    .with_range(Some(50.0), Some(500.0))
                    .required(),
                PropertyDefinition::new("maxLoadKg", "Max Load (kg)", PropertyKind::Number)
                    .with_range(Some(100.0), Some(2000.0))
                    .required(),
                PropertyDefinition::new("isOutdoorRated", "Outdoor Rated", PropertyKind::Boolean)
                    .required(),
            ],
        },
        CategoryDefinition {
            id: CATEGORY_CLAMP.to_string(),
            name: "Clamp".to_string(),
            properties: vec![
                PropertyDefinition::new("sizeCm", "Clamp Size (cm)", PropertyKind::Number)
                    .with_range(Some(1.0), Some(20.0))
                    .required(),
                PropertyDefinition::new("maxTorqueNm", "Max Torque (Nm)", PropertyKind::Number)
                    .with_range(Some(10.0), Some(200.0))
                    .required(),
                PropertyDefinition::new("isAutomatic", "Automatic Mode", PropertyKind::Boolean)
                    .required(),
            ],
        },
        CategoryDefinition {
            id: CATEGORY_CONTROLLER.to_string(),
            name: "Controller".to_string(),
            properties: vec![
                PropertyDefinition::new("maxChannels", "Max Channels", PropertyKind::Number)
                    .with_range(Some(1.0), Some(16.0))
                    .required(),
                PropertyDefinition::new(
                    "supportsAutomaticClamps",
                    "Supports Automatic Clamps",
                    PropertyKind::Boolean,
                )
                .required(),
                PropertyDefinition::new("hasBatteryBackup", "Battery Backup", PropertyKind::Boolean)
                    .required(),
            ],
        },
    ]
}

pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new("platform-modern-200", "Modern Platform 200", CATEGORY_PLATFORM)
            .with_property("lengthCm", 200.0)
            .with_property("maxLoadKg", 500.0)
            .with_property("isOutdoorRated", true)
            .with_dependency(
                ProductDependency::new(CATEGORY_CLAMP, 4)
                    .with_constraint(PropertyConstraint::number("sizeCm", Some(8.0), None)),
            )
            .with_dependency(
                ProductDependency::new(CATEGORY_CONTROLLER, 1)
                    .with_constraint(PropertyConstraint::number("maxChannels", Some(4.0), None)),
            ),
        Product::new("platform-compact-120", "Compact Platform 120", CATEGORY_PLATFORM)
            .with_property("lengthCm", 120.0)
            .with_property("maxLoadKg", 300.0)
            .with_property("isOutdoorRated", false)
            .with_dependency(
                ProductDependency::new(CATEGORY_CLAMP, 2)
                    .with_constraint(PropertyConstraint::number("sizeCm", Some(5.0), None)),
            )
            .with_dependency(ProductDependency::new(CATEGORY_CONTROLLER, 1)),
        // Automatic clamps need a controller that can drive them.
        Product::new("clamp-auto-10", "AutoClamp 10", CATEGORY_CLAMP)
            .with_property("sizeCm", 10.0)
            .with_property("maxTorqueNm", 50.0)
            .with_property("isAutomatic", true)
            .with_dependency(
                ProductDependency::new(CATEGORY_CONTROLLER, 1).with_constraint(
                    PropertyConstraint::boolean("supportsAutomaticClamps", Some(true)),
                ),
            ),
        Product::new("clamp-manual-5", "ManualClamp 5", CATEGORY_CLAMP)
            .with_property("sizeCm", 5.0)
            .with_property("maxTorqueNm", 30.0)
            .with_property("isAutomatic", false),
        Product::new("controller-basic-4", "Basic Controller 4", CATEGORY_CONTROLLER)
            .with_property("maxChannels", 4.0)
            .with_property("supportsAutomaticClamps", false)
            .with_property("hasBatteryBackup", false),
        Product::new("controller-pro-8", "Pro Controller 8", CATEGORY_CONTROLLER)
            .with_property("maxChannels", 8.0)
            .with_property("supportsAutomaticClamps", true)
            .with_property("hasBatteryBackup", true),
    ]
}

pub fn sample_catalog() -> Catalog {
    Catalog::new(sample_categories(), sample_products())
}
