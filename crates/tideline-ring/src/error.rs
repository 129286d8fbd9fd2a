//! Error types for ring and configuration operations.

/// Errors returned by ring membership and lookup operations.
///
/// None of these are retried by the ring. A failed call leaves the ring
/// unchanged, except for a partially applied batch add.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RingError {
    /// The target is already registered.
    #[error("target {target:?} is already on the ring")]
    DuplicateTarget {
        /// The rejected target.
        target: String,
    },

    /// The target is not registered.
    #[error("target {target:?} is not on the ring")]
    UnknownTarget {
        /// The missing target.
        target: String,
    },

    /// A ranked lookup asked for fewer than one target.
    #[error("lookup count must be at least 1, got {count}")]
    InvalidCount {
        /// The requested count.
        count: usize,
    },

    /// The weight is not positive, or yields zero replica positions.
    #[error("invalid weight {weight} for target {target:?}")]
    InvalidWeight {
        /// The target being added.
        target: String,
        /// The rejected weight.
        weight: f64,
    },

    /// A single-target lookup ran against a ring with no positions.
    #[error("ring has no targets")]
    EmptyRing,
}

/// Errors that can occur while loading ring configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The TOML was malformed or had unexpected field types.
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// `replicas` must be a positive integer.
    #[error("replicas must be at least 1, got {0}")]
    InvalidReplicas(u32),
}
