/// Domain-level failures shared by the store and HTTP layers.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No record of `entity` matches `id`. The id is kept as the raw string the
    /// caller supplied, which may not even be a well-formed identifier.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl CoreError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}
