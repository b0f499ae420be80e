//! HTTP transport — mounts the purchase service on `/report`.
//!
//! ## Routes
//!
//! - `GET /report[?id=N]` — one purchase, or every purchase without `id`.
//! - `POST /report` — create from the JSON body.
//! - `PUT /report?id=N` — replace the purchase at `N` with the JSON body.
//! - `DELETE /report?id=N` — remove the purchase at `N`.
//! - any other verb, HEAD included — `405 Method not allowed`.
//!
//! Success bodies are JSON; errors are the plain-text `ApiError` message.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tracing::info;

use super::error::ApiError;
use super::purchase_service::{Listing, PurchaseService};
use crate::store::PurchaseStore;

/// The single resource path.
pub const REPORT_PATH: &str = "/report";

type SharedService<S> = State<Arc<PurchaseService<S>>>;
type QueryPairs = Query<Vec<(String, String)>>;

/// Build an axum `Router` serving `/report` from the given service.
pub fn router<S: PurchaseStore + 'static>(service: Arc<PurchaseService<S>>) -> Router {
    Router::new()
        .route(
            REPORT_PATH,
            get(read_handler::<S>)
                .post(create_handler::<S>)
                .put(update_handler::<S>)
                .delete(delete_handler::<S>)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .with_state(service)
}

/// Serve the service over HTTP at the given address (e.g. `"localhost:8080"`).
pub async fn serve<S: PurchaseStore + 'static>(
    service: Arc<PurchaseService<S>>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let app = router(service);
    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

/// The `id` query parameter.
///
/// Only the first `id` counts. Absent or empty means no id; anything that
/// is not an integer reads as `0`, which the store never assigns.
pub fn id_param(pairs: &[(String, String)]) -> Option<i64> {
    pairs
        .iter()
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value.as_str())
        .filter(|value| !value.is_empty())
        .map(|value| value.parse().unwrap_or(0))
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, self.to_string()).into_response()
    }
}

/// `GET /report`
async fn read_handler<S: PurchaseStore + 'static>(
    State(service): SharedService<S>,
    Query(pairs): QueryPairs,
) -> Result<Response, ApiError> {
    let response = match service.read(id_param(&pairs))? {
        Listing::One(purchase) => Json(purchase).into_response(),
        Listing::All(purchases) => Json(purchases).into_response(),
    };
    Ok(response)
}

/// `POST /report`
///
/// Answers 200 unless `created_status` is set, matching what clients of the
/// legacy service observed.
async fn create_handler<S: PurchaseStore + 'static>(
    State(service): SharedService<S>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let created = service.create(&body)?;
    let status = if service.config().created_status {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(created)).into_response())
}

/// `PUT /report?id=N`
async fn update_handler<S: PurchaseStore + 'static>(
    State(service): SharedService<S>,
    Query(pairs): QueryPairs,
    body: Bytes,
) -> Result<Response, ApiError> {
    service.update(id_param(&pairs), &body)?;
    Ok(empty_json())
}

/// `DELETE /report?id=N`
async fn delete_handler<S: PurchaseStore + 'static>(
    State(service): SharedService<S>,
    Query(pairs): QueryPairs,
) -> Result<Response, ApiError> {
    service.delete(id_param(&pairs))?;
    Ok(empty_json())
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// 200 with a JSON content type and no body.
fn empty_json() -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, "application/json")]).into_response()
}
