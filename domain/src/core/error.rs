//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Rendering itself never fails; these only surface when parsing
/// user-supplied names (e.g. style tokens from a config file).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown style token: {0}")]
    UnknownStyleToken(String),

    #[error("Unknown notification level: {0}")]
    UnknownNotifyLevel(String),
}
