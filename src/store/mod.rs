//! Store — identifier-keyed storage for purchases.
//!
//! `PurchaseStore` is the CRUD contract the HTTP layer talks to.
//! `InMemoryPurchaseStore` is the only backend: a lock-guarded `HashMap`
//! that lives as long as the process.
//!
//! ## Example
//!
//! ```ignore
//! use purchase_report::{IdPolicy, InMemoryPurchaseStore, Purchase, PurchaseStore};
//!
//! let store = InMemoryPurchaseStore::new(IdPolicy::EntryCount);
//! let created = store.create(Purchase::default())?;
//! assert_eq!(created.id, 1);
//! ```

mod in_memory;
mod purchase_store;

use std::fmt;

/// How the store picks the id of a newly created purchase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdPolicy {
    /// Live entry count + 1.
    ///
    /// Ids are reused after a deletion, and the new record overwrites any
    /// live record already holding that id.
    #[default]
    EntryCount,
    /// Strictly increasing counter, never reused.
    Sequential,
}

/// Error type for store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The storage lock was poisoned by a panicking writer.
    LockPoisoned(&'static str),
    /// No purchase with this id.
    NotFound(i64),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
            StoreError::NotFound(id) => write!(f, "purchase not found: {}", id),
        }
    }
}

impl std::error::Error for StoreError {}

pub use in_memory::InMemoryPurchaseStore;
pub use purchase_store::PurchaseStore;
