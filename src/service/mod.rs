//! Purchase service — the CRUD operations behind `/report`.
//!
//! `PurchaseService<S>` turns request inputs (an optional id from the query
//! string, a raw JSON body) into store calls and `ApiError`s. The `http`
//! module mounts it on an axum router.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use purchase_report::{service, InMemoryPurchaseStore, PurchaseService};
//!
//! let service = Arc::new(PurchaseService::new(InMemoryPurchaseStore::default()));
//!
//! // Direct calls
//! let created = service.create(br#"{"name":"Acme"}"#)?;
//!
//! // Or over HTTP
//! service::serve(service, "localhost:8080").await?;
//! ```

mod error;
mod http;
mod purchase_service;

pub use error::{ApiError, METHOD_NOT_ALLOWED_MESSAGE, NOT_FOUND_MESSAGE};
pub use http::{id_param, router, serve, REPORT_PATH};
pub use purchase_service::{Listing, PurchaseService};
