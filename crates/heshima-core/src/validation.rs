//! # Validation Module
//!
//! Draft validation run before an inquiry is posted.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: UI                                                           │
//! │  ├── required attributes, email input type                             │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── product resolves against the rendered catalog                     │
//! │  └── name / email present (email loosely shaped)                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Studio API                                                   │
//! │  └── Product existence, persistence rules                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Checks run in form order (product, name, email) and stop at the first
//! failure, so the inline message always points at the topmost bad field.

use crate::error::{ValidationError, ValidationResult};
use crate::types::{Product, ProductId};

/// Resolves the selected product against the catalog the form was built from.
///
/// ## Rules
/// - A product must be selected
/// - The id must appear in `catalog`
pub fn validate_product_selection(
    product_id: Option<ProductId>,
    catalog: &[Product],
) -> ValidationResult<&Product> {
    let id = product_id.ok_or(ValidationError::Required { field: "product" })?;

    catalog
        .iter()
        .find(|product| product.id == id)
        .ok_or(ValidationError::UnknownProduct(id))
}

/// Validates the contact name.
///
/// ```rust
/// use heshima_core::validation::validate_name;
///
/// assert!(validate_name("Jaha Knight").is_ok());
/// assert!(validate_name("   ").is_err());
/// ```
pub fn validate_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required { field: "name" });
    }
    Ok(())
}

/// Validates the contact email.
///
/// ## Rules
/// - Must not be blank
/// - Must contain one `@` with text on both sides
///
/// Anything stricter is left to the studio API.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required { field: "email" });
    }

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(())
        }
        _ => Err(ValidationError::InvalidFormat {
            field: "email",
            reason: "must look like name@example.com",
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
