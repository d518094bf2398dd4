use std::io;

/// The archive's error taxonomy. Each variant corresponds to a failure
/// mode named in the component specs; adapters at the HTTP/CLI boundary
/// translate these into their own response shapes.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    /// A vector's length disagrees with the dimension the store
    /// established on its first insert.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// An entity string failed to parse as `Type:Value`.
    #[error("invalid entity format: {0:?}")]
    InvalidEntityFormat(String),

    /// A USER-scoped write whose `scope_id` differs from the caller's
    /// own `user_id`.
    #[error("sovereignty violation: user {user_id:?} may not write to USER scope {scope_id:?}")]
    SovereigntyViolation { user_id: String, scope_id: String },

    /// The configured `Embedder` failed. Fatal to the call that invoked it.
    #[error("embedding failed: {0}")]
    Embedding(String),

    /// Snapshot I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Snapshot deserialization failure.
    #[error("snapshot parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration failed to parse.
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type ArchiveResult<T> = Result<T, ArchiveError>;
