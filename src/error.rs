use thiserror::Error;

/// Errors produced while building cache configurations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The requested replacement policy is not present in the policy table.
    ///
    /// Never substituted with a default: a typo'd policy name must fail the
    /// build, not silently configure a different eviction algorithm.
    #[error("unknown replacement policy {name:?} (known policies: {})", .known.join(", "))]
    UnknownPolicy { name: String, known: Vec<String> },

    #[error("failed to read override file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed override file: {0}")]
    Json(#[from] serde_json::Error),
}
