//! # Receipt Builder
//!
//! Assembles one receipt from prescription data, client data, and a list of
//! line items, keeping the computed figures consistent throughout.
//!
//! ## Receipt Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Lifecycle                                  │
//! │                                                                         │
//! │  1. DRAFT                                                              │
//! │     └── add_item() / update_item() / remove_item()                     │
//! │     └── add_assurance_line()                                           │
//! │     └── client, prescription, and payment-field setters                │
//! │                                                                         │
//! │  2. RECOMPUTE (after every change)                                     │
//! │     └── totals() → subtotal, total, balance_due                        │
//! │                                                                         │
//! │  3. FINALIZE                                                           │
//! │     └── finalize() → Receipt { every computed field populated }        │
//! │     └── rejects an empty item list                                     │
//! │     └── stamps date = now (new receipts only; edits keep the           │
//! │         original date)                                                 │
//! │                                                                         │
//! │  Editing a saved receipt re-enters DRAFT via from_receipt().           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Local;
use rust_decimal::Decimal;

use crate::error::{CoreError, CoreResult};
use crate::money::{self, Money};
use crate::types::{EyePrescription, LineItem, Receipt, ReceiptTotals};
use crate::validation::{validate_price, validate_product_name};
use crate::RECEIPT_DATE_FORMAT;

// =============================================================================
// Constants
// =============================================================================

/// Name of the synthetic surcharge line added by [`ReceiptBuilder::add_assurance_line`].
pub const ASSURANCE_LINE_NAME: &str = "Assurance Tax";

// =============================================================================
// Receipt Builder
// =============================================================================

/// Builder for a single receipt.
///
/// One builder per receipt: construct with [`ReceiptBuilder::new`] for a new
/// sale or [`ReceiptBuilder::from_receipt`] to edit a stored one, mutate,
/// then consume it with [`ReceiptBuilder::finalize`].
///
/// ## Example
/// ```rust
/// use lensoptic_core::builder::ReceiptBuilder;
/// use lensoptic_core::money::Money;
///
/// let mut builder = ReceiptBuilder::new();
/// builder.set_client("A. Client", "555-0100");
/// builder.add_item("Frame A", Money::from_major(50), 1)?;
///
/// let totals = builder.totals();
/// assert_eq!(totals.subtotal, Money::from_major(50));
///
/// let receipt = builder.finalize()?;
/// assert!(!receipt.date.is_empty());
/// # Ok::<(), lensoptic_core::error::CoreError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReceiptBuilder {
    /// Original save date when editing; `None` means a fresh receipt that
    /// gets stamped at finalize.
    date: Option<String>,
    client_name: String,
    client_phone: String,
    right_eye: EyePrescription,
    left_eye: EyePrescription,
    items: Vec<LineItem>,
    discount_percent: Decimal,
    flat_discount: Money,
    advance_payment: Money,
}

impl ReceiptBuilder {
    /// Creates an empty draft for a new receipt.
    pub fn new() -> Self {
        ReceiptBuilder::default()
    }

    /// Re-enters a draft state seeded from a stored receipt.
    ///
    /// Every entered field is carried over; the computed fields are derived
    /// again at finalize, so a stored record whose figures predate a formula
    /// fix comes out corrected.
    pub fn from_receipt(receipt: &Receipt) -> Self {
        ReceiptBuilder {
            date: Some(receipt.date.clone()),
            client_name: receipt.client_name.clone(),
            client_phone: receipt.client_phone.clone(),
            right_eye: receipt.right_eye.clone(),
            left_eye: receipt.left_eye.clone(),
            items: receipt.items.clone(),
            discount_percent: receipt.discount,
            flat_discount: receipt.numerical_discount,
            advance_payment: receipt.advance_payment,
        }
    }

    // -------------------------------------------------------------------------
    // Client and prescription fields
    // -------------------------------------------------------------------------

    /// Sets the client name and phone.
    pub fn set_client(&mut self, name: impl Into<String>, phone: impl Into<String>) {
        self.client_name = name.into();
        self.client_phone = phone.into();
    }

    /// Sets both eye prescriptions.
    pub fn set_prescriptions(&mut self, right: EyePrescription, left: EyePrescription) {
        self.right_eye = right;
        self.left_eye = left;
    }

    // -------------------------------------------------------------------------
    // Line items
    // -------------------------------------------------------------------------

    /// Appends a line item.
    ///
    /// The product name is free text (catalog products and one-off custom
    /// items go through the same path); the line total is derived here.
    ///
    /// ## Errors
    /// - Empty product name
    /// - `quantity < 1`
    /// - Negative unit price
    pub fn add_item(
        &mut self,
        product: impl Into<String>,
        unit_price: Money,
        quantity: u32,
    ) -> CoreResult<()> {
        let product = product.into();
        validate_product_name(&product)?;
        let total = money::line_total(unit_price, quantity)?;
        self.items.push(LineItem {
            product,
            quantity,
            price: unit_price,
            total,
        });
        Ok(())
    }

    /// Replaces the line at `index` with edited values, re-deriving its
    /// total.
    pub fn update_item(
        &mut self,
        index: usize,
        product: impl Into<String>,
        unit_price: Money,
        quantity: u32,
    ) -> CoreResult<()> {
        if index >= self.items.len() {
            return Err(CoreError::index_out_of_range(index, self.items.len()));
        }
        let product = product.into();
        validate_product_name(&product)?;
        let total = money::line_total(unit_price, quantity)?;
        self.items[index] = LineItem {
            product,
            quantity,
            price: unit_price,
            total,
        };
        Ok(())
    }

    /// Removes the line at `index`.
    pub fn remove_item(&mut self, index: usize) -> CoreResult<()> {
        if index >= self.items.len() {
            return Err(CoreError::index_out_of_range(index, self.items.len()));
        }
        self.items.remove(index);
        Ok(())
    }

    /// Appends the assurance surcharge line: a fixed 10% of `base_amount`
    /// as a quantity-one item named "Assurance Tax".
    ///
    /// This is a flat surcharge convention, not a tax-table lookup.
    ///
    /// ## Example
    /// ```rust
    /// use lensoptic_core::builder::{ReceiptBuilder, ASSURANCE_LINE_NAME};
    /// use lensoptic_core::money::Money;
    ///
    /// let mut builder = ReceiptBuilder::new();
    /// builder.add_assurance_line(Money::from_major(100))?;
    ///
    /// let line = &builder.items()[0];
    /// assert_eq!(line.product, ASSURANCE_LINE_NAME);
    /// assert_eq!(line.price, Money::from_major(10));
    /// assert_eq!(line.quantity, 1);
    /// # Ok::<(), lensoptic_core::error::CoreError>(())
    /// ```
    pub fn add_assurance_line(&mut self, base_amount: Money) -> CoreResult<()> {
        validate_price(base_amount)?;
        let rate = Decimal::new(10, 2); // 0.10
        let price = Money::new(base_amount.amount() * rate);
        self.items.push(LineItem::new(ASSURANCE_LINE_NAME, price, 1));
        Ok(())
    }

    /// Current line items, in entry order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    // -------------------------------------------------------------------------
    // Payment fields
    // -------------------------------------------------------------------------

    /// Sets the percentage discount (10 = 10%).
    pub fn set_discount_percent(&mut self, percent: Decimal) {
        self.discount_percent = percent;
    }

    /// Sets the flat currency discount. Rejects negative amounts.
    pub fn set_flat_discount(&mut self, amount: Money) -> CoreResult<()> {
        validate_price(amount)?;
        self.flat_discount = amount;
        Ok(())
    }

    /// Sets the advance payment. Rejects negative amounts.
    pub fn set_advance_payment(&mut self, amount: Money) -> CoreResult<()> {
        validate_price(amount)?;
        self.advance_payment = amount;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Recompute and finalize
    // -------------------------------------------------------------------------

    /// Recomputes the three figures from the current draft state.
    ///
    /// Call after every item or payment-field change; the form shows these
    /// live.
    pub fn totals(&self) -> ReceiptTotals {
        let subtotal = money::subtotal(&self.items);
        let total =
            money::discounted_total(subtotal, self.discount_percent, self.flat_discount);
        let balance_due = money::balance_due(total, self.advance_payment);
        ReceiptTotals {
            subtotal,
            total,
            balance_due,
        }
    }

    /// Finalizes the draft into a fully computed [`Receipt`].
    ///
    /// Fails with [`CoreError::EmptyReceipt`] when no line items were added.
    /// New receipts are stamped with the current local time; drafts seeded
    /// via [`ReceiptBuilder::from_receipt`] keep their original date.
    pub fn finalize(self) -> CoreResult<Receipt> {
        if self.items.is_empty() {
            return Err(CoreError::EmptyReceipt);
        }

        let totals = self.totals();
        let date = self
            .date
            .unwrap_or_else(|| Local::now().format(RECEIPT_DATE_FORMAT).to_string());

        Ok(Receipt {
            date,
            client_name: self.client_name,
            client_phone: self.client_phone,
            right_eye: self.right_eye,
            left_eye: self.left_eye,
            items: self.items,
            subtotal: totals.subtotal,
            discount: self.discount_percent,
            numerical_discount: self.flat_discount,
            advance_payment: self.advance_payment,
            total: totals.total,
            balance_due: totals.balance_due,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn draft_with_items() -> ReceiptBuilder {
        let mut builder = ReceiptBuilder::new();
        builder
            .add_item("Frame A", Money::from_major(50), 1)
            .unwrap();
        builder
            .add_item("Lens B", Money::from_major(30), 2)
            .unwrap();
        builder
    }

    #[test]
    fn test_add_item_rejects_bad_input() {
        let mut builder = ReceiptBuilder::new();
        assert!(builder.add_item("", Money::from_major(10), 1).is_err());
        assert!(builder.add_item("Frame A", Money::from_major(10), 0).is_err());
        assert!(builder.add_item("Frame A", Money::from_major(-10), 1).is_err());
        assert!(builder.items().is_empty());
    }

    #[test]
    fn test_totals_recompute_after_every_change() {
        let mut builder = draft_with_items();
        assert_eq!(builder.totals().subtotal, Money::from_major(110));

        builder.set_discount_percent(Decimal::from(10));
        builder.set_flat_discount(Money::from_major(5)).unwrap();
        let totals = builder.totals();
        assert_eq!(totals.subtotal, Money::from_major(110));
        assert_eq!(totals.total, Money::from_major(94));

        builder.set_advance_payment(Money::from_major(20)).unwrap();
        assert_eq!(builder.totals().balance_due, Money::from_major(74));

        builder.remove_item(1).unwrap();
        let totals = builder.totals();
        assert_eq!(totals.subtotal, Money::from_major(50));
        assert_eq!(totals.total, Money::from_major(40));
    }

    #[test]
    fn test_full_pricing_scenario() {
        // Frame A ×1 + Lens B ×2 → 110; ×0.9 = 99; −5 = 94; −20 advance = 74
        let mut builder = draft_with_items();
        builder.set_discount_percent(Decimal::from(10));
        builder.set_flat_discount(Money::from_major(5)).unwrap();
        builder.set_advance_payment(Money::from_major(20)).unwrap();

        let receipt = builder.finalize().unwrap();
        assert_eq!(receipt.subtotal, Money::from_major(110));
        assert_eq!(receipt.total, Money::from_major(94));
        assert_eq!(receipt.balance_due, Money::from_major(74));
        assert_eq!(receipt.discount, Decimal::from(10));
        assert_eq!(receipt.numerical_discount, Money::from_major(5));
        assert_eq!(receipt.advance_payment, Money::from_major(20));
    }

    #[test]
    fn test_update_item_recomputes_line_total() {
        let mut builder = draft_with_items();
        builder
            .update_item(1, "Lens B", Money::from_major(25), 3)
            .unwrap();
        let item = &builder.items()[1];
        assert_eq!(item.total, Money::from_major(75));
        assert_eq!(builder.totals().subtotal, Money::from_major(125));

        assert!(builder
            .update_item(9, "Lens B", Money::from_major(25), 3)
            .is_err());
    }

    #[test]
    fn test_remove_item_out_of_range() {
        let mut builder = draft_with_items();
        assert!(matches!(
            builder.remove_item(5),
            Err(CoreError::IndexOutOfRange { index: 5, len: 2 })
        ));
    }

    #[test]
    fn test_assurance_line() {
        let mut builder = ReceiptBuilder::new();
        builder.add_assurance_line(Money::from_major(100)).unwrap();

        let line = &builder.items()[0];
        assert_eq!(line.product, ASSURANCE_LINE_NAME);
        assert_eq!(line.price, Money::from_major(10));
        assert_eq!(line.quantity, 1);
        assert_eq!(line.total, Money::from_major(10));

        assert!(builder
            .add_assurance_line(Money::from_major(-1))
            .is_err());
    }

    #[test]
    fn test_finalize_rejects_empty_receipt() {
        let builder = ReceiptBuilder::new();
        assert!(matches!(builder.finalize(), Err(CoreError::EmptyReceipt)));
    }

    #[test]
    fn test_finalize_stamps_parseable_date() {
        let receipt = draft_with_items().finalize().unwrap();
        assert!(NaiveDateTime::parse_from_str(&receipt.date, RECEIPT_DATE_FORMAT).is_ok());
    }

    #[test]
    fn test_edit_flow_keeps_date_and_recomputes() {
        let mut builder = draft_with_items();
        builder.set_discount_percent(Decimal::from(10));
        let original = builder.finalize().unwrap();
        let original_date = original.date.clone();

        let mut edit = ReceiptBuilder::from_receipt(&original);
        edit.set_flat_discount(Money::from_major(5)).unwrap();
        edit.set_advance_payment(Money::from_major(20)).unwrap();
        let updated = edit.finalize().unwrap();

        assert_eq!(updated.date, original_date);
        assert_eq!(updated.subtotal, Money::from_major(110));
        assert_eq!(updated.total, Money::from_major(94));
        assert_eq!(updated.balance_due, Money::from_major(74));
    }

    #[test]
    fn test_negative_payment_fields_rejected() {
        let mut builder = ReceiptBuilder::new();
        assert!(builder.set_flat_discount(Money::from_major(-5)).is_err());
        assert!(builder.set_advance_payment(Money::from_major(-5)).is_err());
    }
}
