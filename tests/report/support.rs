//! Shared server bootstrapping and request helpers.

use std::sync::Arc;

use purchase_report::{
    service, IdPolicy, InMemoryPurchaseStore, PurchaseService, ServiceConfig,
};
use serde_json::{json, Value};

pub type TestService = Arc<PurchaseService<InMemoryPurchaseStore>>;

/// Service configured like the legacy deployment.
pub fn legacy_service() -> TestService {
    Arc::new(PurchaseService::new(InMemoryPurchaseStore::new(
        IdPolicy::EntryCount,
    )))
}

pub fn service_with(id_policy: IdPolicy, config: ServiceConfig) -> TestService {
    Arc::new(PurchaseService::with_config(
        InMemoryPurchaseStore::new(id_policy),
        config,
    ))
}

/// Bind to port 0 and return the `/report` URL.
pub async fn start_server(service: TestService) -> String {
    let app = service::router(service);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}{}", service::REPORT_PATH)
}

pub fn purchase(name: &str) -> Value {
    json!({
        "name": name,
        "describe": "Hex bolt M8",
        "reference": "HB-M8",
        "periodentrance": "100",
        "periodsale": "30",
        "stockcurrent": "70",
        "status": "Available",
        "quantity": "10",
    })
}

/// POST a purchase and return the created record.
pub async fn create(client: &reqwest::Client, url: &str, body: &Value) -> Value {
    let resp = client.post(url).json(body).send().await.unwrap();
    assert!(resp.status().is_success(), "create failed: {}", resp.status());
    resp.json().await.unwrap()
}

/// GET every purchase.
pub async fn list(client: &reqwest::Client, url: &str) -> Vec<Value> {
    let resp = client.get(url).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    resp.json().await.unwrap()
}
