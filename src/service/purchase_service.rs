use tracing::debug;

use super::error::ApiError;
use crate::config::ServiceConfig;
use crate::purchase::Purchase;
use crate::store::PurchaseStore;

/// Result of a read on `/report`: one record when an id was given, all of
/// them otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    One(Purchase),
    All(Vec<Purchase>),
}

/// CRUD operations over a purchase store, expressed in request terms.
///
/// `id` arguments are what the query string yielded: `None` when the
/// parameter was absent or empty. Bodies are raw request bytes so decode
/// failures surface as `ApiError::Decode` with the decoder's message.
pub struct PurchaseService<S> {
    store: S,
    config: ServiceConfig,
}

impl<S: PurchaseStore> PurchaseService<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, ServiceConfig::default())
    }

    pub fn with_config(store: S, config: ServiceConfig) -> Self {
        Self { store, config }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Decode a purchase from `body` and store it under a fresh id.
    pub fn create(&self, body: &[u8]) -> Result<Purchase, ApiError> {
        let purchase = Purchase::from_json(body)?;
        let created = self.store.create(purchase)?;
        debug!(id = created.id, "purchase created");
        Ok(created)
    }

    /// Fetch one purchase, or list all of them when no id was given.
    pub fn read(&self, id: Option<i64>) -> Result<Listing, ApiError> {
        match id {
            Some(id) => self
                .store
                .get(id)?
                .map(Listing::One)
                .ok_or(ApiError::NotFound),
            None => Ok(Listing::All(self.store.list()?)),
        }
    }

    /// Replace the purchase at `id` with the one decoded from `body`.
    ///
    /// A missing id is rejected before the body is looked at; the body is
    /// decoded before the store is consulted.
    pub fn update(&self, id: Option<i64>, body: &[u8]) -> Result<Purchase, ApiError> {
        let id = id.ok_or(ApiError::NotFound)?;
        let purchase = Purchase::from_json(body)?;
        let updated = self.store.update(id, purchase)?;
        debug!(id, "purchase updated");
        Ok(updated)
    }

    /// Remove the purchase at `id`.
    pub fn delete(&self, id: Option<i64>) -> Result<(), ApiError> {
        let id = id.ok_or(ApiError::NotFound)?;
        if !self.store.delete(id)? {
            return Err(ApiError::NotFound);
        }
        debug!(id, "purchase deleted");
        Ok(())
    }
}
