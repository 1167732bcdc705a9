//! Property constraint matching.

use crate::catalog::{PropertyConstraint, PropertyKind, PropertyValue};

/// Whether a candidate's property value satisfies one constraint.
///
/// Total: a missing value or a value of the wrong type never matches.
pub fn satisfies_constraint(value: Option<&PropertyValue>, constraint: &PropertyConstraint) -> bool {
    let Some(value) = value else {
        return false;
    };

    match (constraint.kind, value) {
        (PropertyKind::Number, PropertyValue::Number(n)) => {
            constraint.min.map_or(true, |min| *n >= min)
                && constraint.max.map_or(true, |max| *n <= max)
        }
        (PropertyKind::Boolean, PropertyValue::Bool(b)) => {
            constraint.value.map_or(true, |expected| *b == expected)
        }
        (PropertyKind::Enum, PropertyValue::Text(s)) => match &constraint.enum_values {
            Some(allowed) if !allowed.is_empty() => allowed.iter().any(|a| a == s),
            _ => true,
        },
        _ => false,
    }
}
