//! Behaviour kept from the service this one replaces, plus the switches
//! that turn it off.

use purchase_report::{IdPolicy, ServiceConfig};
use serde_json::Value;

use crate::support::{create, legacy_service, list, purchase, service_with, start_server};

#[tokio::test]
async fn create_observes_200_by_default() {
    let url = start_server(legacy_service()).await;
    let client = reqwest::Client::new();

    let resp = client.post(&url).json(&purchase("Acme")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let created: Value = resp.json().await.unwrap();
    assert_eq!(created["id"], 1);
}

#[tokio::test]
async fn created_status_switch_answers_201() {
    let service = service_with(
        IdPolicy::EntryCount,
        ServiceConfig {
            created_status: true,
        },
    );
    let url = start_server(service).await;
    let client = reqwest::Client::new();

    let resp = client.post(&url).json(&purchase("Acme")).send().await.unwrap();
    assert_eq!(resp.status(), 201);
}

#[tokio::test]
async fn entry_count_ids_collide_after_delete() {
    let url = start_server(legacy_service()).await;
    let client = reqwest::Client::new();

    create(&client, &url, &purchase("first")).await;
    create(&client, &url, &purchase("second")).await;

    let resp = client.delete(format!("{url}?id=1")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    // one live entry left, so the new record takes id 2 and replaces "second"
    let third = create(&client, &url, &purchase("third")).await;
    assert_eq!(third["id"], 2);

    let all = list(&client, &url).await;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0]["id"], 2);
    assert_eq!(all[0]["name"], "third");
}

#[tokio::test]
async fn sequential_ids_survive_delete() {
    let service = service_with(IdPolicy::Sequential, ServiceConfig::default());
    let url = start_server(service).await;
    let client = reqwest::Client::new();

    create(&client, &url, &purchase("first")).await;
    create(&client, &url, &purchase("second")).await;
    client.delete(format!("{url}?id=1")).send().await.unwrap();

    let third = create(&client, &url, &purchase("third")).await;
    assert_eq!(third["id"], 3);

    let names: Vec<Value> = list(&client, &url)
        .await
        .into_iter()
        .map(|p| p["name"].clone())
        .collect();
    assert_eq!(names, vec!["second", "third"]);
}

#[tokio::test]
async fn non_numeric_id_reads_as_zero() {
    let url = start_server(legacy_service()).await;
    let client = reqwest::Client::new();
    create(&client, &url, &purchase("Acme")).await;

    for method in ["GET", "DELETE"] {
        let method = reqwest::Method::from_bytes(method.as_bytes()).unwrap();
        let resp = client
            .request(method, format!("{url}?id=one"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 404);
        assert_eq!(resp.text().await.unwrap(), "Purchase not found");
    }

    let resp = client
        .put(format!("{url}?id=one"))
        .json(&purchase("Other"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    assert_eq!(list(&client, &url).await[0]["name"], "Acme");
}

#[tokio::test]
async fn empty_id_on_get_lists() {
    let url = start_server(legacy_service()).await;
    let client = reqwest::Client::new();
    create(&client, &url, &purchase("Acme")).await;

    let resp = client.get(format!("{url}?id=")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let all: Vec<Value> = resp.json().await.unwrap();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn stock_current_is_not_derived() {
    let url = start_server(legacy_service()).await;
    let client = reqwest::Client::new();

    let mut body = purchase("Acme");
    body["periodentrance"] = "10".into();
    body["periodsale"] = "4".into();
    body["stockcurrent"] = "999".into();
    let created = create(&client, &url, &body).await;
    assert_eq!(created["stockcurrent"], "999");
}
