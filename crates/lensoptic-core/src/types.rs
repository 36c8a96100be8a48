//! # Domain Types
//!
//! Core domain types for the Lens Optic receipt engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    LineItem     │   │    Receipt      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name (unique)  │   │  product        │   │  date           │       │
//! │  │  price          │   │  quantity       │   │  client fields  │       │
//! │  └─────────────────┘   │  price          │   │  prescriptions  │       │
//! │                        │  total (derived)│   │  items          │       │
//! │  ┌─────────────────┐   └─────────────────┘   │  discounts      │       │
//! │  │ EyePrescription │                         │  totals         │       │
//! │  │  sph, cyl, axe  │                         └─────────────────┘       │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! - Products are identified by exact name match (unique within the catalog);
//!   catalog order is user-controlled and significant
//! - Receipts are identified positionally by their index in the stored
//!   sequence (append order)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A catalog product.
///
/// Identity is the exact name; the price is the default unit price offered
/// when the product is added to a receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Display name, unique within the catalog.
    pub name: String,

    /// Unit price.
    #[ts(type = "number")]
    pub price: Money,
}

impl Product {
    /// Creates a product.
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Product {
            name: name.into(),
            price,
        }
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// A line on a receipt.
///
/// `total` is always derived from `price × quantity`, never set
/// independently; any edit to quantity or price must recompute it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Product name as it appears on the receipt. Not required to exist in
    /// the catalog: one-off custom items carry arbitrary names.
    pub product: String,

    /// Units sold, at least 1.
    pub quantity: u32,

    /// Unit price at the time the line was added.
    #[ts(type = "number")]
    pub price: Money,

    /// Derived line total: `price × quantity`.
    #[ts(type = "number")]
    pub total: Money,
}

impl LineItem {
    /// Creates a line item with the total derived from price and quantity.
    ///
    /// Input validation (quantity ≥ 1, price ≥ 0) happens at the builder
    /// boundary; this constructor only derives.
    pub fn new(product: impl Into<String>, price: Money, quantity: u32) -> Self {
        LineItem {
            product: product.into(),
            quantity,
            price,
            total: price * quantity,
        }
    }

    /// Re-derives `total` after a quantity or price edit.
    pub fn recompute_total(&mut self) {
        self.total = self.price * self.quantity;
    }
}

// =============================================================================
// Eye Prescription
// =============================================================================

/// Optical prescription values for one eye.
///
/// Free text, stored exactly as entered. Opticians write these in several
/// notations ("+1.75", "-0.50", "180°"), so the engine does not attempt
/// numeric validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EyePrescription {
    /// Sphere.
    pub sph: String,
    /// Cylinder.
    pub cyl: String,
    /// Axis.
    pub axe: String,
}

impl EyePrescription {
    /// Creates a prescription from the three form fields.
    pub fn new(
        sph: impl Into<String>,
        cyl: impl Into<String>,
        axe: impl Into<String>,
    ) -> Self {
        EyePrescription {
            sph: sph.into(),
            cyl: cyl.into(),
            axe: axe.into(),
        }
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A finalized sales receipt.
///
/// Produced by the receipt builder with every computed field populated;
/// stores and renderers treat it as an opaque record. Field order matches
/// the persisted JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Receipt {
    /// Save timestamp, formatted `%Y-%m-%d %H:%M:%S` in local time.
    /// Kept unchanged when an existing receipt is edited.
    pub date: String,

    /// Client name, as entered.
    pub client_name: String,

    /// Client phone, as entered.
    pub client_phone: String,

    /// Right-eye prescription.
    pub right_eye: EyePrescription,

    /// Left-eye prescription.
    pub left_eye: EyePrescription,

    /// Ordered line items.
    pub items: Vec<LineItem>,

    /// Sum of all line totals.
    #[ts(type = "number")]
    pub subtotal: Money,

    /// Percentage discount (10 = 10%), applied before the flat discount.
    #[ts(type = "number")]
    pub discount: Decimal,

    /// Flat currency discount, applied after the percentage discount.
    /// Records written before this field existed default it to zero.
    #[serde(default)]
    #[ts(type = "number")]
    pub numerical_discount: Money,

    /// Amount the client paid up front.
    #[ts(type = "number")]
    pub advance_payment: Money,

    /// `max(subtotal × (1 − discount/100) − numerical_discount, 0)`.
    #[ts(type = "number")]
    pub total: Money,

    /// `total − advance_payment`; negative when the client holds a credit.
    #[ts(type = "number")]
    pub balance_due: Money,
}

// =============================================================================
// Receipt Totals
// =============================================================================

/// The three computed figures for a draft receipt.
///
/// Recomputed after every item or payment-field change so the form can show
/// live totals before the receipt is finalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct ReceiptTotals {
    /// Sum of all line totals.
    #[ts(type = "number")]
    pub subtotal: Money,

    /// Subtotal after both discounts, floored at zero.
    #[ts(type = "number")]
    pub total: Money,

    /// Total minus advance payment, unclamped.
    #[ts(type = "number")]
    pub balance_due: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_derives_total() {
        let item = LineItem::new("Lens B", Money::from_major(30), 2);
        assert_eq!(item.total, Money::from_major(60));
    }

    #[test]
    fn test_line_item_recompute_after_edit() {
        let mut item = LineItem::new("Lens B", Money::from_major(30), 2);
        item.quantity = 3;
        item.recompute_total();
        assert_eq!(item.total, Money::from_major(90));

        item.price = Money::from_major(25);
        item.recompute_total();
        assert_eq!(item.total, Money::from_major(75));
    }

    #[test]
    fn test_prescription_stores_free_text() {
        let rx = EyePrescription::new("+1.75", "-0.50", "180°");
        assert_eq!(rx.sph, "+1.75");
        assert_eq!(rx.cyl, "-0.50");
        assert_eq!(rx.axe, "180°");
    }

    #[test]
    fn test_receipt_json_shape() {
        let receipt = Receipt {
            date: "2024-03-01 14:30:00".to_string(),
            client_name: "A. Client".to_string(),
            client_phone: "555-0100".to_string(),
            right_eye: EyePrescription::default(),
            left_eye: EyePrescription::default(),
            items: vec![LineItem::new("Frame A", Money::from_major(50), 1)],
            subtotal: Money::from_major(50),
            discount: Decimal::ZERO,
            numerical_discount: Money::zero(),
            advance_payment: Money::zero(),
            total: Money::from_major(50),
            balance_due: Money::from_major(50),
        };

        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["client_name"], "A. Client");
        assert_eq!(json["items"][0]["product"], "Frame A");
        // monetary fields persist as plain numbers
        assert!(json["subtotal"].is_number());
        assert!(json["items"][0]["total"].is_number());
    }

    #[test]
    fn test_receipt_missing_flat_discount_defaults_to_zero() {
        // records written before the flat discount existed omit the field
        let json = r#"{
            "date": "2023-01-05 09:00:00",
            "client_name": "Old Record",
            "client_phone": "",
            "right_eye": {"sph": "", "cyl": "", "axe": ""},
            "left_eye": {"sph": "", "cyl": "", "axe": ""},
            "items": [{"product": "Frame A", "quantity": 1, "price": 50.0, "total": 50.0}],
            "subtotal": 50.0,
            "discount": 0,
            "advance_payment": 0,
            "total": 50.0,
            "balance_due": 50.0
        }"#;

        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.numerical_discount, Money::zero());
    }
}
