//! # Error Types
//!
//! Structured error types for aero_core. Each calculator surfaces every
//! failure synchronously to its caller; nothing is retried and no silent
//! default is substituted. In particular, no public function ever returns
//! a NaN or infinite value - conditions that would produce one are raised
//! as [`CalcError::DomainError`] or [`CalcError::NonConvergence`] instead.
//!
//! ## Example
//!
//! ```rust
//! use aero_core::errors::{CalcError, CalcResult};
//!
//! fn validate_thickness(total_thickness: f64) -> CalcResult<()> {
//!     if total_thickness <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "total_thickness",
//!             total_thickness.to_string(),
//!             "Total thickness must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for aero_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculator operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by the host application.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A precondition on an input value is violated (out of range, wrong sign, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A mathematically undefined intermediate value was reached
    /// (atanh argument of magnitude >= 1, log of a non-positive Reynolds
    /// number, unmatched camber-family lookup index, ...)
    #[error("Domain error in {operation}: {reason}")]
    DomainError { operation: String, reason: String },

    /// An iterative solver exhausted its iteration budget without converging
    #[error("Solver '{solver}' failed to converge within {iterations} iterations")]
    NonConvergence { solver: String, iterations: usize },

    /// A designation string contained non-numeric characters where a digit
    /// was expected
    #[error("Parse error for '{input}': {reason}")]
    ParseError { input: String, reason: String },
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

    /// Create a DomainError
    pub fn domain_error(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::DomainError {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Create a NonConvergence error
    pub fn non_convergence(solver: impl Into<String>, iterations: usize) -> Self {
        CalcError::NonConvergence {
            solver: solver.into(),
            iterations,
        }
    }

    /// Create a ParseError
    pub fn parse_error(input: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::ParseError {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::DomainError { .. } => "DOMAIN_ERROR",
            CalcError::NonConvergence { .. } => "NON_CONVERGENCE",
            CalcError::ParseError { .. } => "PARSE_ERROR",
        }
    }
}
