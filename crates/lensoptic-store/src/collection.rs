//! # JSON Record Collections
//!
//! The persistence port: every stored collection is one JSON document, an
//! ordered array of records, read and written whole.
//!
//! ## Write Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Replace-on-Write                                    │
//! │                                                                         │
//! │  replace(records)                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  serialize full collection                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  write to temp file in the same directory                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  rename over the backing file  ← readers see old or new, never a mix   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is deliberately no incremental or streaming variant: collections
//! are small (one shop's catalog and receipts) and whole-file replace keeps
//! the prior content intact when a write fails mid-way. Concurrent external
//! modification is unsupported; last writer wins.

use std::fs;
use std::io::Write;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::catalog::CatalogStore;
use crate::error::{StoreError, StoreResult};
use crate::receipts::ReceiptStore;

// =============================================================================
// Collection File Names
// =============================================================================

/// Backing file for the product catalog.
pub const PRODUCTS_FILE: &str = "products.json";

/// Backing file for the receipt history.
pub const RECEIPTS_FILE: &str = "receipts.json";

// =============================================================================
// Json Collection
// =============================================================================

/// An ordered collection of records persisted as one JSON array.
///
/// On open, a missing backing file is initialized to an empty collection,
/// so `load` never has a "file not found" case in normal operation.
#[derive(Debug, Clone)]
pub struct JsonCollection<T> {
    path: PathBuf,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonCollection<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Opens the collection at `path`, creating the parent directory and an
    /// empty collection file if they do not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
            }
        }

        let collection = JsonCollection {
            path,
            _records: PhantomData,
        };

        if !collection.path.exists() {
            debug!(path = %collection.path.display(), "Initializing empty collection");
            collection.replace(&[])?;
        }

        Ok(collection)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and decodes the full record sequence.
    pub fn load(&self) -> StoreResult<Vec<T>> {
        let raw =
            fs::read_to_string(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        serde_json::from_str(&raw).map_err(|e| StoreError::decode(&self.path, e))
    }

    /// Replaces the full record sequence atomically.
    ///
    /// The new content is written to a temp file in the same directory and
    /// renamed over the backing file, so a failure at any point leaves the
    /// previous records readable.
    pub fn replace(&self, records: &[T]) -> StoreResult<()> {
        let json = serde_json::to_vec_pretty(records).map_err(StoreError::Encode)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;
        tmp.write_all(&json)
            .map_err(|e| StoreError::io(tmp.path(), e))?;
        tmp.persist(&self.path)
            .map_err(|e| StoreError::io(&self.path, e.error))?;

        Ok(())
    }
}

// =============================================================================
// Data Directory
// =============================================================================

/// Handle to the application's data directory.
///
/// Constructed once per process and passed by reference to whichever
/// component needs catalog or receipt access; there is no ambient
/// module-level state.
///
/// ## Usage
/// ```rust,no_run
/// use lensoptic_store::DataDir;
///
/// let data = DataDir::open("data")?;
/// let catalog = data.catalog()?;
/// let receipts = data.receipts()?;
/// # Ok::<(), lensoptic_store::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    /// Opens (creating if needed) the data directory.
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| StoreError::io(&root, e))?;
        info!(path = %root.display(), "Data directory ready");
        Ok(DataDir { root })
    }

    /// Root path of the data directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Opens the product catalog store (`products.json`).
    pub fn catalog(&self) -> StoreResult<CatalogStore> {
        CatalogStore::open(self.root.join(PRODUCTS_FILE))
    }

    /// Opens the receipt store (`receipts.json`).
    pub fn receipts(&self) -> StoreResult<ReceiptStore> {
        ReceiptStore::open(self.root.join(RECEIPTS_FILE))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
