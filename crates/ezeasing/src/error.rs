//! Easing error types

use thiserror::Error;

/// Errors returned by catalog lookups
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EasingError {
    /// No curve has this display name
    #[error("unknown easing function: {0:?}")]
    NotFound(String),
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, EasingError>;
