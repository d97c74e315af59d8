//! Error types for cableway operations.
//!
//! This module defines [`CablewayError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `CablewayError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `CablewayError::Other`) for unexpected errors
//! - All errors should provide actionable messages for operators

use thiserror::Error;

/// Core error type for cableway operations.
#[derive(Debug, Error)]
pub enum CablewayError {
    /// A required environment variable is absent.
    #[error("{var} env is missing")]
    MissingEnv { var: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CablewayError {
    /// Shorthand for a missing-environment-variable error.
    pub fn missing_env(var: impl Into<String>) -> Self {
        Self::MissingEnv { var: var.into() }
    }
}

/// Result type alias for cableway operations.
pub type Result<T> = std::result::Result<T, CablewayError>;
