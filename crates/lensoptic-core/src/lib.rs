//! # lensoptic-core: Pure Business Logic for Lens Optic
//!
//! This crate is the **heart** of the Lens Optic receipt engine. It contains
//! all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Lens Optic Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation Layer (external)                   │   │
//! │  │   Catalog UI ──► Receipt Form ──► History UI ──► PDF Export    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ lensoptic-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  builder  │  │ document  │  │   │
//! │  │   │  Product  │  │   Money   │  │  Receipt  │  │  print    │  │   │
//! │  │   │  Receipt  │  │  pricing  │  │  Builder  │  │  model    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILE SYSTEM • NO WIDGETS • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               lensoptic-store (persistence layer)               │   │
//! │  │          products.json / receipts.json, atomic replace          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, LineItem, Receipt, prescriptions)
//! - [`money`] - Money type and receipt pricing arithmetic
//! - [`builder`] - Receipt construction state machine
//! - [`document`] - Printable document model for the rendering backend
//! - [`validation`] - Boundary validation and form-input parsing
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every function is deterministic - same input, same
//!    output (the one exception is the date stamp at finalize)
//! 2. **No I/O**: file system and network access are FORBIDDEN here
//! 3. **Decimal Money**: full precision internally, two-digit rounding at
//!    display time only
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use lensoptic_core::builder::ReceiptBuilder;
//! use lensoptic_core::money::Money;
//! use rust_decimal::Decimal;
//!
//! let mut builder = ReceiptBuilder::new();
//! builder.set_client("A. Client", "555-0100");
//! builder.add_item("Frame A", Money::from_major(50), 1)?;
//! builder.add_item("Lens B", Money::from_major(30), 2)?;
//! builder.set_discount_percent(Decimal::from(10));
//!
//! let receipt = builder.finalize()?;
//! assert_eq!(receipt.subtotal, Money::from_major(110));
//! assert_eq!(receipt.total, Money::from_major(99));
//! # Ok::<(), lensoptic_core::error::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod builder;
pub mod document;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use lensoptic_core::Money` instead of
// `use lensoptic_core::money::Money`

pub use builder::ReceiptBuilder;
pub use document::ReceiptDocument;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Timestamp format for receipt dates, local wall-clock time.
///
/// Stored records have always carried this shape, so it is part of the
/// persisted data contract, not a display preference.
pub const RECEIPT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
