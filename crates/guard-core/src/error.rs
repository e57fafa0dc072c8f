//! Error types for the CyberGuard engine.
//!
//! Analysis itself is total: every prompt produces a [`crate::DecisionResult`].
//! The only failure surface is engine construction, where an invalid
//! configuration or a broken static pattern table is a programmer error
//! that must be caught before any prompt is analyzed.

use thiserror::Error;

/// Construction-time error for the guard engine.
#[derive(Debug, Error)]
pub enum GuardError {
    /// Configuration rejected during validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A static pattern table failed to compile.
    #[error("Pattern compilation failed: {0}")]
    Pattern(#[from] regex::Error),
}
