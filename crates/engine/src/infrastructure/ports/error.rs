//! Error types for port operations.

/// Entity directory lookup errors with context for debugging.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The directory has no entry for this id.
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: &'static str, id: i64 },

    /// The directory could not answer (transport, decoding, ...).
    #[error("{entity_type} lookup failed: {message}")]
    Failed {
        entity_type: &'static str,
        message: String,
    },
}

impl LookupError {
    /// Create a NotFound error with entity type and ID context.
    pub fn not_found(entity_type: &'static str, id: impl Into<i64>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Create a Failed error with the underlying cause.
    pub fn failed(entity_type: &'static str, message: impl ToString) -> Self {
        Self::Failed {
            entity_type,
            message: message.to_string(),
        }
    }

    /// Check if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn entity_type(&self) -> &'static str {
        match self {
            Self::NotFound { entity_type, .. } | Self::Failed { entity_type, .. } => entity_type,
        }
    }
}
