#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Catalog error: {0}")]
    Catalog(String),
}

/// Configuration errors raised while turning a category definition into a
/// schema. These belong to catalog authoring, never to order processing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("Property {key} is of kind 'enum' but has no enumValues")]
    EnumWithoutValues { key: String },

    #[error("Unknown property kind: {kind}")]
    UnknownKind { kind: String },
}
