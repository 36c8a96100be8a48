//! # Catalog Store
//!
//! Persistence operations for the product catalog.
//!
//! The catalog is an ordered collection: its order is what the shop sees in
//! every product list and picker, and the reorder operations exist so
//! frequently sold items can be moved to the top. Products are identified
//! by exact name, which is unique within the catalog.
//!
//! Every mutating operation validates first, then loads the full
//! collection, applies the change in memory, and atomically replaces the
//! backing file. A failed validation therefore never leaves a partial
//! write.

use tracing::debug;

use lensoptic_core::validation::{validate_price, validate_product_name};
use lensoptic_core::{CoreError, Product};

use crate::collection::JsonCollection;
use crate::error::StoreResult;

/// Store for product catalog operations.
///
/// ## Usage
/// ```rust,no_run
/// use lensoptic_core::{Money, Product};
/// use lensoptic_store::DataDir;
///
/// let catalog = DataDir::open("data")?.catalog()?;
/// catalog.add(Product::new("Frame A", Money::from_major(50)))?;
/// let products = catalog.list()?;
/// # Ok::<(), lensoptic_store::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CatalogStore {
    records: JsonCollection<Product>,
}

impl CatalogStore {
    /// Opens the catalog backed by the given file, initializing it to an
    /// empty collection on first use.
    pub fn open(path: impl Into<std::path::PathBuf>) -> StoreResult<Self> {
        Ok(CatalogStore {
            records: JsonCollection::open(path)?,
        })
    }

    /// Returns all products in catalog order.
    pub fn list(&self) -> StoreResult<Vec<Product>> {
        self.records.load()
    }

    /// Appends a product to the end of the catalog.
    ///
    /// ## Errors
    /// - Empty name or negative price
    /// - `DuplicateName` when a product with that name already exists
    pub fn add(&self, product: Product) -> StoreResult<()> {
        validate_product_name(&product.name).map_err(CoreError::from)?;
        validate_price(product.price).map_err(CoreError::from)?;

        let mut products = self.records.load()?;
        if products.iter().any(|p| p.name == product.name) {
            return Err(CoreError::DuplicateName(product.name).into());
        }

        debug!(name = %product.name, "Adding product");
        products.push(product);
        self.records.replace(&products)
    }

    /// Replaces the product currently named `old_name`, keeping its
    /// position.
    ///
    /// ## Errors
    /// - `ProductNotFound` when `old_name` is absent
    /// - `DuplicateName` when renaming onto another existing product
    pub fn update(&self, old_name: &str, product: Product) -> StoreResult<()> {
        validate_product_name(&product.name).map_err(CoreError::from)?;
        validate_price(product.price).map_err(CoreError::from)?;

        let mut products = self.records.load()?;
        let index = products
            .iter()
            .position(|p| p.name == old_name)
            .ok_or_else(|| CoreError::ProductNotFound(old_name.to_string()))?;

        if product.name != old_name && products.iter().any(|p| p.name == product.name) {
            return Err(CoreError::DuplicateName(product.name).into());
        }

        debug!(old_name = %old_name, new_name = %product.name, "Updating product");
        products[index] = product;
        self.records.replace(&products)
    }

    /// Removes every product matching `name` (at most one, since names are
    /// unique).
    ///
    /// ## Errors
    /// - `ProductNotFound` when no product carries that name
    pub fn remove(&self, name: &str) -> StoreResult<()> {
        let mut products = self.records.load()?;
        if !products.iter().any(|p| p.name == name) {
            return Err(CoreError::ProductNotFound(name.to_string()).into());
        }

        debug!(name = %name, "Removing product");
        products.retain(|p| p.name != name);
        self.records.replace(&products)
    }

    /// Swaps the product at `index` with its predecessor. No-op at the top.
    ///
    /// ## Errors
    /// - `IndexOutOfRange` when `index` points past the last product
    pub fn move_up(&self, index: usize) -> StoreResult<()> {
        let mut products = self.records.load()?;
        if index >= products.len() {
            return Err(CoreError::index_out_of_range(index, products.len()).into());
        }
        if index == 0 {
            return Ok(());
        }

        products.swap(index, index - 1);
        self.records.replace(&products)
    }

    /// Swaps the product at `index` with its successor. No-op at the
    /// bottom.
    ///
    /// ## Errors
    /// - `IndexOutOfRange` when `index` points past the last product
    pub fn move_down(&self, index: usize) -> StoreResult<()> {
        let mut products = self.records.load()?;
        if index >= products.len() {
            return Err(CoreError::index_out_of_range(index, products.len()).into());
        }
        if index + 1 == products.len() {
            return Ok(());
        }

        products.swap(index, index + 1);
        self.records.replace(&products)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use lensoptic_core::Money;

    fn catalog() -> (tempfile::TempDir, CatalogStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = CatalogStore::open(dir.path().join("products.json")).unwrap();
        (dir, store)
    }

    fn names(store: &CatalogStore) -> Vec<String> {
        store.list().unwrap().into_iter().map(|p| p.name).collect()
    }

    #[test]
    fn test_add_and_list_preserve_order() {
        let (_dir, store) = catalog();
        store.add(Product::new("Frame A", Money::from_major(50))).unwrap();
        store.add(Product::new("Lens B", Money::from_major(30))).unwrap();
        store.add(Product::new("Case C", Money::from_major(5))).unwrap();

        assert_eq!(names(&store), vec!["Frame A", "Lens B", "Case C"]);
    }

    #[test]
    fn test_add_rejects_duplicate_name() {
        let (_dir, store) = catalog();
        store.add(Product::new("Frame A", Money::from_major(50))).unwrap();

        let err = store
            .add(Product::new("Frame A", Money::from_major(60)))
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Core(CoreError::DuplicateName(_))
        ));

        // the failed add left the stored collection untouched
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_add_rejects_invalid_product() {
        let (_dir, store) = catalog();
        assert!(store.add(Product::new("", Money::from_major(10))).is_err());
        assert!(store
            .add(Product::new("Frame A", Money::from_major(-10)))
            .is_err());
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_update_replaces_in_place() {
        let (_dir, store) = catalog();
        store.add(Product::new("Frame A", Money::from_major(50))).unwrap();
        store.add(Product::new("Lens B", Money::from_major(30))).unwrap();

        store
            .update("Frame A", Product::new("Frame A+", Money::from_major(55)))
            .unwrap();

        let products = store.list().unwrap();
        assert_eq!(products[0].name, "Frame A+");
        assert_eq!(products[0].price, Money::from_major(55));
        assert_eq!(products[1].name, "Lens B");
    }

    #[test]
    fn test_update_missing_product() {
        let (_dir, store) = catalog();
        let err = store
            .update("Ghost", Product::new("Ghost", Money::from_major(1)))
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Core(CoreError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_update_rejects_rename_onto_existing_name() {
        let (_dir, store) = catalog();
        store.add(Product::new("Frame A", Money::from_major(50))).unwrap();
        store.add(Product::new("Lens B", Money::from_major(30))).unwrap();

        let err = store
            .update("Lens B", Product::new("Frame A", Money::from_major(30)))
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Core(CoreError::DuplicateName(_))
        ));
    }

    #[test]
    fn test_remove() {
        let (_dir, store) = catalog();
        store.add(Product::new("Frame A", Money::from_major(50))).unwrap();
        store.add(Product::new("Lens B", Money::from_major(30))).unwrap();

        store.remove("Frame A").unwrap();
        assert_eq!(names(&store), vec!["Lens B"]);

        let err = store.remove("Frame A").unwrap_err();
        assert!(matches!(
            err,
            StoreError::Core(CoreError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_move_up_and_down() {
        let (_dir, store) = catalog();
        store.add(Product::new("Frame A", Money::from_major(50))).unwrap();
        store.add(Product::new("Lens B", Money::from_major(30))).unwrap();
        store.add(Product::new("Case C", Money::from_major(5))).unwrap();

        store.move_up(2).unwrap();
        assert_eq!(names(&store), vec!["Frame A", "Case C", "Lens B"]);

        store.move_down(0).unwrap();
        assert_eq!(names(&store), vec!["Case C", "Frame A", "Lens B"]);
    }

    #[test]
    fn test_move_no_op_at_boundaries() {
        let (_dir, store) = catalog();
        store.add(Product::new("Frame A", Money::from_major(50))).unwrap();
        store.add(Product::new("Lens B", Money::from_major(30))).unwrap();

        store.move_up(0).unwrap();
        store.move_down(1).unwrap();
        assert_eq!(names(&store), vec!["Frame A", "Lens B"]);
    }

    #[test]
    fn test_move_out_of_range() {
        let (_dir, store) = catalog();
        store.add(Product::new("Frame A", Money::from_major(50))).unwrap();

        assert!(matches!(
            store.move_up(3).unwrap_err(),
            StoreError::Core(CoreError::IndexOutOfRange { index: 3, len: 1 })
        ));
        assert!(store.move_down(3).is_err());
    }

    #[test]
    fn test_mutations_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");

        {
            let store = CatalogStore::open(&path).unwrap();
            store.add(Product::new("Frame A", Money::from_major(50))).unwrap();
            store.add(Product::new("Lens B", Money::from_major(30))).unwrap();
            store.move_up(1).unwrap();
        }

        let reopened = CatalogStore::open(&path).unwrap();
        assert_eq!(names(&reopened), vec!["Lens B", "Frame A"]);
    }
}
