//! # Error Types
//!
//! Domain-specific error types for heshima-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  heshima-core errors (this file)                                       │
//! │  ├── ValidationError  - Draft field failures (caught before network)   │
//! │  └── InquiryError     - Why a submission attempt did not start         │
//! │                                                                         │
//! │  heshima-client errors (separate crate)                                │
//! │  ├── ApiError         - Network / status / body failures               │
//! │  └── ConfigError      - Bad environment configuration                  │
//! │                                                                         │
//! │  Flow: ValidationError → InquiryError → inline message in the form     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending field in the message
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for an inquiry draft.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field value does not have the expected shape.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },

    /// The selected product is not in the catalog the form was rendered from.
    #[error("product {0} is not in the catalog")]
    UnknownProduct(ProductId),
}

// =============================================================================
// Inquiry Error
// =============================================================================

/// Reasons an inquiry submission was not started.
///
/// Neither variant ever reaches the network layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InquiryError {
    /// The draft failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Another submission is still in flight.
    #[error("an inquiry is already being sent")]
    AlreadySubmitting,
}

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required { field: "email" };
        assert_eq!(err.to_string(), "email is required");

        let err = ValidationError::UnknownProduct(ProductId(42));
        assert_eq!(err.to_string(), "product 42 is not in the catalog");
    }

    #[test]
    fn test_validation_converts_to_inquiry_error() {
        let err: InquiryError = ValidationError::Required { field: "name" }.into();
        assert!(matches!(err, InquiryError::Validation(_)));
        assert_eq!(err.to_string(), "name is required");
    }
}
