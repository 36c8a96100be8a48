//! # Receipt Store
//!
//! Persistence operations for the receipt history.
//!
//! ## Index-Based Identity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Storage Order vs Display Order                          │
//! │                                                                         │
//! │  receipts.json (canonical, append order):                              │
//! │    [0] oldest ... [count-1] newest                                     │
//! │                                                                         │
//! │  History listing (reverse-chronological):                              │
//! │    row 0 = newest ... row count-1 = oldest                             │
//! │                                                                         │
//! │  display_to_storage_index(row, count) = count - row - 1                │
//! │                                                                         │
//! │  The mapping is computed at the UI boundary for EVERY read, update,    │
//! │  and delete; a reversed index is never stored. Deleting at index k    │
//! │  shifts every later receipt down by one, so indices held across a     │
//! │  delete are stale.                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use lensoptic_core::{CoreError, Receipt};

use crate::collection::JsonCollection;
use crate::error::StoreResult;

/// Store for receipt history operations.
///
/// Receipts have no generated identifier; a receipt IS its position in the
/// stored sequence. All operations load the full collection and rewrite it
/// whole.
#[derive(Debug, Clone)]
pub struct ReceiptStore {
    records: JsonCollection<Receipt>,
}

impl ReceiptStore {
    /// Opens the receipt history backed by the given file, initializing it
    /// to an empty collection on first use.
    pub fn open(path: impl Into<std::path::PathBuf>) -> StoreResult<Self> {
        Ok(ReceiptStore {
            records: JsonCollection::open(path)?,
        })
    }

    /// Returns all receipts in storage (append) order.
    pub fn list(&self) -> StoreResult<Vec<Receipt>> {
        self.records.load()
    }

    /// Number of stored receipts.
    pub fn count(&self) -> StoreResult<usize> {
        Ok(self.records.load()?.len())
    }

    /// Appends a finalized receipt to the end of the history.
    pub fn append(&self, receipt: Receipt) -> StoreResult<()> {
        let mut receipts = self.records.load()?;
        info!(
            date = %receipt.date,
            client = %receipt.client_name,
            index = receipts.len(),
            "Appending receipt"
        );
        receipts.push(receipt);
        self.records.replace(&receipts)
    }

    /// Returns the receipt at storage index `index`.
    ///
    /// ## Errors
    /// - `IndexOutOfRange` when `index` is not in `[0, count)`
    pub fn get_by_index(&self, index: usize) -> StoreResult<Receipt> {
        let mut receipts = self.records.load()?;
        if index >= receipts.len() {
            return Err(CoreError::index_out_of_range(index, receipts.len()).into());
        }
        Ok(receipts.swap_remove(index))
    }

    /// Replaces the receipt at storage index `index` in place.
    ///
    /// The record is stored as given; recomputing its figures is the
    /// receipt builder's job.
    ///
    /// ## Errors
    /// - `IndexOutOfRange` when `index` is not in `[0, count)`
    pub fn update_by_index(&self, index: usize, receipt: Receipt) -> StoreResult<()> {
        let mut receipts = self.records.load()?;
        if index >= receipts.len() {
            return Err(CoreError::index_out_of_range(index, receipts.len()).into());
        }

        debug!(index = index, "Updating receipt");
        receipts[index] = receipt;
        self.records.replace(&receipts)
    }

    /// Deletes the receipt at storage index `index`.
    ///
    /// Every receipt after `index` shifts down by one; callers must re-map
    /// any display indices they hold.
    ///
    /// ## Errors
    /// - `IndexOutOfRange` when `index` is not in `[0, count)`
    pub fn delete_by_index(&self, index: usize) -> StoreResult<()> {
        let mut receipts = self.records.load()?;
        if index >= receipts.len() {
            return Err(CoreError::index_out_of_range(index, receipts.len()).into());
        }

        debug!(index = index, "Deleting receipt");
        receipts.remove(index);
        self.records.replace(&receipts)
    }
}

// =============================================================================
// Display Index Mapping
// =============================================================================

/// Maps a row in the reverse-chronological history listing to its storage
/// index.
///
/// Returns `None` when the row is out of range (including any row against
/// an empty history).
///
/// ## Example
/// ```rust
/// use lensoptic_store::receipts::display_to_storage_index;
///
/// // three receipts: row 0 shows the newest, stored last
/// assert_eq!(display_to_storage_index(0, 3), Some(2));
/// assert_eq!(display_to_storage_index(2, 3), Some(0));
/// assert_eq!(display_to_storage_index(3, 3), None);
/// ```
pub fn display_to_storage_index(display_index: usize, count: usize) -> Option<usize> {
    if display_index < count {
        Some(count - display_index - 1)
    } else {
        None
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
