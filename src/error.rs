//! Configuration error types shared across the SDK.

use thiserror::Error;

/// Errors for invalid catalog lookups.
///
/// These indicate a programming or configuration mistake (an interval label
/// or network id that is not in the fixed catalog), not a runtime condition
/// a user recovers from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The interval label is not one of the charting presets.
    #[error("unknown interval label: {0}")]
    UnknownInterval(String),

    /// The network id is not in the registry loaded at startup.
    #[error("unknown network id: {0}")]
    UnknownNetwork(String),
}
