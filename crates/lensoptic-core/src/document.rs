//! # Receipt Document Model
//!
//! Assembles the printable content of a finalized receipt.
//!
//! The page-painting backend (PDF) lives outside this workspace; it receives
//! a [`ReceiptDocument`] and an output path and only has to lay the fields
//! out. Everything content-related happens here: which lines appear, how
//! monetary values are formatted (two fraction digits, at this boundary
//! only), and which closing note the balance calls for.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::Receipt;

// =============================================================================
// Constants
// =============================================================================

/// Document heading.
pub const RECEIPT_TITLE: &str = "Lens Optic Receipt";

/// Closing note when a balance remains.
pub const NOTE_BALANCE_DUE: &str =
    "Note: Balance payment is due upon delivery of the product.";

/// Closing note when the receipt is fully paid (or overpaid).
pub const NOTE_PAID_IN_FULL: &str =
    "Note: Full payment has been received. Thank you for your business!";

// =============================================================================
// Document Lines
// =============================================================================

/// One eye's prescription values, labeled for print.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrescriptionLine {
    /// "Right Eye" or "Left Eye".
    pub eye: String,
    pub sph: String,
    pub cyl: String,
    pub axe: String,
}

/// One printed line item: `name ×quantity @ unit price = line total`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemLine {
    pub name: String,
    pub quantity: u32,
    /// Unit price, pre-formatted (`$30.00`).
    pub unit_price: String,
    /// Line total, pre-formatted (`$60.00`).
    pub line_total: String,
}

/// One line of the payment summary block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryLine {
    pub label: String,
    /// Pre-formatted value (`$110.00`, `10%`).
    pub value: String,
    /// The renderer prints emphasized lines in a heavier face.
    #[serde(default)]
    pub emphasize: bool,
}

impl SummaryLine {
    fn new(label: &str, value: String) -> Self {
        SummaryLine {
            label: label.to_string(),
            value,
            emphasize: false,
        }
    }

    fn emphasized(label: &str, value: String) -> Self {
        SummaryLine {
            label: label.to_string(),
            value,
            emphasize: true,
        }
    }
}

// =============================================================================
// Receipt Document
// =============================================================================

/// The complete printable content of one receipt.
///
/// ## Example
/// ```rust,ignore
/// let document = ReceiptDocument::from_receipt(&receipt);
/// pdf_backend.paint(&document, output_path)?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptDocument {
    pub title: String,
    pub date: String,
    pub client_name: String,
    pub client_phone: String,
    /// Right eye first, then left, matching the printed layout.
    pub prescriptions: Vec<PrescriptionLine>,
    pub items: Vec<ItemLine>,
    /// Subtotal, both discounts, total (emphasized), advance, balance due.
    pub summary: Vec<SummaryLine>,
    pub closing_note: String,
}

impl ReceiptDocument {
    /// Builds the printable content from a finalized receipt.
    pub fn from_receipt(receipt: &Receipt) -> Self {
        let prescriptions = vec![
            PrescriptionLine {
                eye: "Right Eye".to_string(),
                sph: receipt.right_eye.sph.clone(),
                cyl: receipt.right_eye.cyl.clone(),
                axe: receipt.right_eye.axe.clone(),
            },
            PrescriptionLine {
                eye: "Left Eye".to_string(),
                sph: receipt.left_eye.sph.clone(),
                cyl: receipt.left_eye.cyl.clone(),
                axe: receipt.left_eye.axe.clone(),
            },
        ];

        let items = receipt
            .items
            .iter()
            .map(|item| ItemLine {
                name: item.product.clone(),
                quantity: item.quantity,
                unit_price: item.price.to_string(),
                line_total: item.total.to_string(),
            })
            .collect();

        let summary = vec![
            SummaryLine::new("Subtotal", receipt.subtotal.to_string()),
            SummaryLine::new(
                "Percentage Discount",
                format!("{}%", receipt.discount.normalize()),
            ),
            SummaryLine::new("Fixed Discount", receipt.numerical_discount.to_string()),
            SummaryLine::emphasized("Total", receipt.total.to_string()),
            SummaryLine::new("Advance Payment", receipt.advance_payment.to_string()),
            SummaryLine::new("Balance Due", receipt.balance_due.to_string()),
        ];

        let closing_note = if receipt.balance_due.is_positive() {
            NOTE_BALANCE_DUE
        } else {
            NOTE_PAID_IN_FULL
        };

        ReceiptDocument {
            title: RECEIPT_TITLE.to_string(),
            date: receipt.date.clone(),
            client_name: receipt.client_name.clone(),
            client_phone: receipt.client_phone.clone(),
            prescriptions,
            items,
            summary,
            closing_note: closing_note.to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
