//! Error types for EduScope

/// Result type alias using EduScope's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for EduScope operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A classifier artifact is missing, corrupt, or structurally invalid.
    /// Fatal to the calling prediction; never retried.
    #[error("failed to load artifact '{name}': {reason}")]
    ArtifactLoad { name: String, reason: String },

    /// Metadata or transcript provider failure
    #[error("upstream fetch error: {0}")]
    Upstream(String),

    /// Configuration errors (taxonomy, analyzer config)
    #[error("configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new artifact load error
    pub fn artifact_load(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ArtifactLoad {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a new upstream fetch error
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether this error came from an upstream provider rather than the
    /// classification pipeline itself.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream(_))
    }
}
