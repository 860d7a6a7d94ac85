//! # Error Types
//!
//! Structured error types for inox_core. Every sizer returns either a result
//! record or one of these variants, so a form or the CLI can tell "bad input"
//! apart from "no standard profile carries this load".
//!
//! ## Example
//!
//! ```rust
//! use inox_core::errors::{CalcError, CalcResult};
//!
//! fn validate_span(span_m: f64) -> CalcResult<()> {
//!     if span_m <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "span_m",
//!             span_m.to_string(),
//!             "Span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for inox_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for sizing operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A numeric input is non-positive or out of range
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Derived clear span is not physically possible
    #[error("Invalid geometry on axis {axis}: clear span {clear_span_m} m - {reason}")]
    InvalidGeometry {
        axis: String,
        clear_span_m: f64,
        reason: String,
    },

    /// Catalog exhausted without satisfying the requirement
    #[error("No profile in '{catalog}' satisfies {requirement}")]
    NoProfileFits { catalog: String, requirement: String },

    /// Profile name not present in the catalog
    #[error("Profile not found: {name}")]
    ProfileNotFound { name: String },

    /// Narrative or persistence collaborator failed
    #[error("External service '{service}' failed: {reason}")]
    ExternalServiceError { service: String, reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidGeometry error
    pub fn invalid_geometry(axis: impl Into<String>, clear_span_m: f64, reason: impl Into<String>) -> Self {
        CalcError::InvalidGeometry {
            axis: axis.into(),
            clear_span_m,
            reason: reason.into(),
        }
    }

    /// Create a NoProfileFits error
    pub fn no_profile_fits(catalog: impl Into<String>, requirement: impl Into<String>) -> Self {
        CalcError::NoProfileFits {
            catalog: catalog.into(),
            requirement: requirement.into(),
        }
    }

    /// Create a ProfileNotFound error
    pub fn profile_not_found(name: impl Into<String>) -> Self {
        CalcError::ProfileNotFound { name: name.into() }
    }

    /// Create an ExternalServiceError
    pub fn external_service(service: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::ExternalServiceError {
            service: service.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Collaborator failures are downgraded to warnings by the caller and
    /// never invalidate a computed sizing result.
    pub fn is_advisory(&self) -> bool {
        matches!(self, CalcError::ExternalServiceError { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            CalcError::NoProfileFits { .. } => "NO_PROFILE_FITS",
            CalcError::ProfileNotFound { .. } => "PROFILE_NOT_FOUND",
            CalcError::ExternalServiceError { .. } => "EXTERNAL_SERVICE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

/// Reject zero, negative, NaN and infinite values for a named field.
pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Value must be a positive number",
        ));
    }
    Ok(())
}

/// Reject negative, NaN and infinite values for a named field.
pub(crate) fn require_non_negative(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Value cannot be negative",
        ));
    }
    Ok(())
}
