//! Product configurator domain logic.
//!
//! Holds the catalog data model, the per-category schema builder and the
//! order dependency checker. Everything here is pure: callers pass the
//! catalog snapshot in explicitly and receive plain data back.

pub mod catalog;
pub mod error;
pub mod order;
pub mod schema;

pub use catalog::Catalog;
pub use order::{check_order, OrderItem, ValidationError, ValidationResult};
pub use schema::CategorySchema;
