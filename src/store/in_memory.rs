//! InMemoryPurchaseStore - HashMap-backed purchase store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{IdPolicy, PurchaseStore, StoreError};
use crate::purchase::Purchase;

#[derive(Default)]
struct Storage {
    purchases: HashMap<i64, Purchase>,
    /// Highest id handed out so far. Only consulted by `IdPolicy::Sequential`.
    last_issued: i64,
}

/// In-memory purchase store backed by a HashMap.
///
/// Id assignment and insertion happen under one write lock, so concurrent
/// creates never observe the same entry count. Clone-friendly via Arc.
#[derive(Clone)]
pub struct InMemoryPurchaseStore {
    storage: Arc<RwLock<Storage>>,
    id_policy: IdPolicy,
}

impl Default for InMemoryPurchaseStore {
    fn default() -> Self {
        Self::new(IdPolicy::default())
    }
}

impl InMemoryPurchaseStore {
    /// Create a new empty store.
    pub fn new(id_policy: IdPolicy) -> Self {
        Self {
            storage: Arc::new(RwLock::new(Storage::default())),
            id_policy,
        }
    }

    pub fn id_policy(&self) -> IdPolicy {
        self.id_policy
    }

    fn next_id(&self, storage: &mut Storage) -> i64 {
        let id = match self.id_policy {
            IdPolicy::EntryCount => storage.purchases.len() as i64 + 1,
            IdPolicy::Sequential => storage.last_issued + 1,
        };
        storage.last_issued = storage.last_issued.max(id);
        id
    }
}

impl PurchaseStore for InMemoryPurchaseStore {
    fn create(&self, purchase: Purchase) -> Result<Purchase, StoreError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::LockPoisoned("create"))?;

        let id = self.next_id(&mut storage);
        let purchase = purchase.with_id(id);
        storage.purchases.insert(id, purchase.clone());

        Ok(purchase)
    }

    fn get(&self, id: i64) -> Result<Option<Purchase>, StoreError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::LockPoisoned("get"))?;

        Ok(storage.purchases.get(&id).cloned())
    }

    fn list(&self) -> Result<Vec<Purchase>, StoreError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::LockPoisoned("list"))?;

        let mut purchases: Vec<Purchase> = storage.purchases.values().cloned().collect();
        purchases.sort_by_key(|p| p.id);
        Ok(purchases)
    }

    fn update(&self, id: i64, purchase: Purchase) -> Result<Purchase, StoreError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::LockPoisoned("update"))?;

        let slot = storage
            .purchases
            .get_mut(&id)
            .ok_or(StoreError::NotFound(id))?;
        *slot = purchase.with_id(id);

        Ok(slot.clone())
    }

    fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::LockPoisoned("delete"))?;

        Ok(storage.purchases.remove(&id).is_some())
    }

    fn len(&self) -> Result<usize, StoreError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::LockPoisoned("len"))?;

        Ok(storage.purchases.len())
    }
}
