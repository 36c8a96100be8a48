//! # Error Types
//!
//! Domain-specific error types for lensoptic-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  lensoptic-core errors (this file)                                     │
//! │  ├── CoreError        - Catalog/receipt domain errors                  │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  lensoptic-store errors (separate crate)                               │
//! │  └── StoreError       - Backing-file read/decode/write failures        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → UI dialog            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, index, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations detected before any
/// stored collection is mutated.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No product with the given name exists in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A product with the given name already exists.
    ///
    /// ## When This Occurs
    /// - Adding a product whose name is already in the catalog
    /// - Renaming a product onto another product's name
    #[error("Duplicate product name: '{0}' already exists")]
    DuplicateName(String),

    /// A positional lookup points past the end of the stored sequence.
    ///
    /// ## When This Occurs
    /// - Receipt read/update/delete with a stale index
    /// - Catalog reorder with an index past the last entry
    #[error("Index {index} out of range for {len} records")]
    IndexOutOfRange { index: usize, len: usize },

    /// A receipt cannot be finalized without at least one line item.
    #[error("Receipt has no line items")]
    EmptyReceipt,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates an IndexOutOfRange error for a lookup into `len` records.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        CoreError::IndexOutOfRange { index, len }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Value must be at least one (quantities).
    #[error("{field} must be at least 1")]
    MustBePositive { field: &'static str },

    /// Value must not be negative (prices, amounts).
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: &'static str },

    /// Invalid format (e.g., non-numeric quantity).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat {
        field: &'static str,
        reason: String,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
