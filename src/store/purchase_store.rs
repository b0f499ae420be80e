//! PurchaseStore - CRUD contract over purchases keyed by id.

use super::StoreError;
use crate::purchase::Purchase;

/// Identifier-keyed CRUD storage for purchases.
pub trait PurchaseStore: Send + Sync {
    /// Assign an id to `purchase` and store it. Any entry already at that id
    /// is overwritten.
    fn create(&self, purchase: Purchase) -> Result<Purchase, StoreError>;

    /// Get a purchase by id. Returns None if not found.
    fn get(&self, id: i64) -> Result<Option<Purchase>, StoreError>;

    /// All stored purchases. Callers must not rely on the order.
    fn list(&self) -> Result<Vec<Purchase>, StoreError>;

    /// Replace every field of the purchase at `id`, keeping `id`.
    ///
    /// Fails with `StoreError::NotFound` and stores nothing when `id` is absent.
    fn update(&self, id: i64, purchase: Purchase) -> Result<Purchase, StoreError>;

    /// Delete a purchase by id. Returns true if it existed.
    fn delete(&self, id: i64) -> Result<bool, StoreError>;

    /// Number of live purchases.
    fn len(&self) -> Result<usize, StoreError>;

    fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}
