//! Order dependency checking.
//!
//! Pure logic: the caller supplies the order and the catalog snapshot and
//! gets back a [`ValidationResult`] listing every problem found.

pub mod checker;
pub mod dependency;
pub mod matcher;
pub mod types;

pub use checker::check_order;
pub use types::{OrderItem, ValidationError, ValidationResult};
