//! Registry error types

use thiserror::Error;

/// Errors surfaced by the algorithm registry.
///
/// Both kinds are raised while a pool loads its coin configuration, never on
/// the share-validation path: lookup failures reject the coin definition,
/// and configuration problems are caught when the hash function is built.
#[derive(Debug, Error)]
pub enum AlgoError {
    /// Lookup by a name that is not a registered key (case-sensitive)
    #[error("unknown algorithm \"{0}\"")]
    UnknownAlgorithm(String),

    /// A configuration value is out of range or missing where the underlying
    /// primitive requires it
    #[error("invalid {algo} configuration: {reason}")]
    InvalidAlgorithmConfig {
        algo: &'static str,
        reason: String,
    },
}
