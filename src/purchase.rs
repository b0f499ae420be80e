//! Purchase — the supplier/product stock record served on `/report`.

use serde::{Deserialize, Serialize};

/// Stock record for one supplier/product pair.
///
/// Every field but `id` is carried as text, numeric quantities included.
/// `stockcurrent` is whatever the client sent; it is never derived from
/// `periodentrance` and `periodsale`.
///
/// Missing fields decode to their zero value and unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Purchase {
    /// Assigned by the store. A client-supplied value is overwritten.
    pub id: i64,
    /// Supplier name.
    pub name: String,
    /// Product description.
    pub describe: String,
    /// Product reference code.
    pub reference: String,
    /// Quantity received in the period.
    pub periodentrance: String,
    /// Quantity sold in the period.
    pub periodsale: String,
    /// Quantity currently available.
    pub stockcurrent: String,
    /// `Available`, `Critical` or `Empty` by convention.
    pub status: String,
    /// Quantity per purchase.
    pub quantity: String,
}

impl Purchase {
    /// Decode a purchase from a raw JSON request body.
    ///
    /// Only the first JSON value is read; anything after it is ignored.
    /// `null` decodes to an all-default record. An empty body is an EOF error.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        let first = serde_json::Deserializer::from_slice(body)
            .into_iter::<Option<Purchase>>()
            .next();
        match first {
            Some(value) => Ok(value?.unwrap_or_default()),
            // whitespace-only body
            None => serde_json::from_slice(body),
        }
    }

    /// Return this record carrying `id`.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}
