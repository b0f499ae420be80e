mod config;
mod purchase;
pub mod service;
mod store;
pub mod telemetry;

pub use config::{Config, IdPolicyArg, ServiceConfig, DEFAULT_ADDR};
pub use purchase::Purchase;
pub use service::{ApiError, Listing, PurchaseService};
pub use store::{IdPolicy, InMemoryPurchaseStore, PurchaseStore, StoreError};
