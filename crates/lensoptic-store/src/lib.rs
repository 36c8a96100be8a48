//! # lensoptic-store: Persistence Layer for Lens Optic
//!
//! This crate persists the product catalog and the receipt history as JSON
//! documents on disk.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Lens Optic Data Flow                               │
//! │                                                                         │
//! │  Presentation layer (external)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  lensoptic-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    DataDir    │    │    Stores     │    │  Collections │  │   │
//! │  │   │ (collection)  │    │ (catalog.rs,  │    │ (collection) │  │   │
//! │  │   │               │    │  receipts.rs) │    │              │  │   │
//! │  │   │ data/         │◄───│ CatalogStore  │◄───│ load()       │  │   │
//! │  │   │ directory     │    │ ReceiptStore  │    │ replace()    │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │        data/products.json          data/receipts.json           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collection`] - JSON collection files and the data directory handle
//! - [`catalog`] - Product catalog store (ordered, name-identified)
//! - [`receipts`] - Receipt history store (index-identified) and the
//!   display-order mapping
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lensoptic_core::{Money, Product, ReceiptBuilder};
//! use lensoptic_store::DataDir;
//!
//! let data = DataDir::open("data")?;
//!
//! let catalog = data.catalog()?;
//! catalog.add(Product::new("Frame A", Money::from_major(50)))?;
//!
//! let mut builder = ReceiptBuilder::new();
//! builder.add_item("Frame A", Money::from_major(50), 1)?;
//! data.receipts()?.append(builder.finalize()?)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod collection;
pub mod error;
pub mod receipts;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};

pub use catalog::CatalogStore;
pub use collection::{DataDir, JsonCollection, PRODUCTS_FILE, RECEIPTS_FILE};
pub use receipts::{display_to_storage_index, ReceiptStore};

// =============================================================================
// End-to-End Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use lensoptic_core::{Money, Product, ReceiptBuilder, ReceiptDocument};
    use rust_decimal::Decimal;

    /// The full sale flow: stock the catalog, compose a receipt from
    /// catalog prices, persist it, and build the printable document.
    #[test]
    fn test_full_sale_flow() {
        let dir = tempfile::tempdir().unwrap();
        let data = DataDir::open(dir.path().join("data")).unwrap();

        let catalog = data.catalog().unwrap();
        catalog.add(Product::new("Frame A", Money::from_major(50))).unwrap();
        catalog.add(Product::new("Lens B", Money::from_major(30))).unwrap();

        // the form looks unit prices up from the catalog by exact name
        let products = catalog.list().unwrap();
        let price_of = |name: &str| {
            products
                .iter()
                .find(|p| p.name == name)
                .map(|p| p.price)
                .unwrap()
        };

        let mut builder = ReceiptBuilder::new();
        builder.set_client("A. Client", "555-0100");
        builder.add_item("Frame A", price_of("Frame A"), 1).unwrap();
        builder.add_item("Lens B", price_of("Lens B"), 2).unwrap();
        builder.set_discount_percent(Decimal::from(10));
        builder.set_flat_discount(Money::from_major(5)).unwrap();
        builder.set_advance_payment(Money::from_major(20)).unwrap();

        let totals = builder.totals();
        assert_eq!(totals.subtotal, Money::from_major(110));
        assert_eq!(totals.total, Money::from_major(94));
        assert_eq!(totals.balance_due, Money::from_major(74));

        let receipts = data.receipts().unwrap();
        receipts.append(builder.finalize().unwrap()).unwrap();

        let stored = receipts.get_by_index(0).unwrap();
        assert_eq!(stored.subtotal, Money::from_major(110));
        assert_eq!(stored.balance_due, Money::from_major(74));

        let document = ReceiptDocument::from_receipt(&stored);
        assert_eq!(document.items.len(), 2);
        assert!(document.closing_note.contains("Balance payment is due"));
    }

    /// The edit flow: reopen a stored receipt through the builder, change
    /// payment fields, and write it back to the same index.
    #[test]
    fn test_edit_stored_receipt_flow() {
        let dir = tempfile::tempdir().unwrap();
        let data = DataDir::open(dir.path().join("data")).unwrap();
        let receipts = data.receipts().unwrap();

        let mut builder = ReceiptBuilder::new();
        builder.set_client("A. Client", "555-0100");
        builder.add_item("Frame A", Money::from_major(50), 1).unwrap();
        receipts.append(builder.finalize().unwrap()).unwrap();

        // the history shows one row; map it back to its storage index
        let count = receipts.count().unwrap();
        let index = display_to_storage_index(0, count).unwrap();

        let stored = receipts.get_by_index(index).unwrap();
        let mut edit = ReceiptBuilder::from_receipt(&stored);
        edit.set_advance_payment(Money::from_major(50)).unwrap();
        receipts.update_by_index(index, edit.finalize().unwrap()).unwrap();

        let updated = receipts.get_by_index(index).unwrap();
        assert_eq!(updated.date, stored.date);
        assert_eq!(updated.balance_due, Money::zero());
        assert!(
            ReceiptDocument::from_receipt(&updated)
                .closing_note
                .contains("Full payment has been received")
        );
    }
}
