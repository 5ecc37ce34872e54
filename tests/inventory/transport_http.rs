//! HTTP gateway integration tests.
//!
//! Starts a store and a gateway on ephemeral ports and drives the gateway
//! with reqwest.

use inventory::gateway::INTERNAL_MESSAGE;
use inventory::ProductStore;
use serde_json::{json, Value};

use crate::support::{dead_endpoint, start_gateway, start_stack};

/// `status` in the envelope must agree with the HTTP code.
async fn envelope(resp: reqwest::Response) -> (u16, Value) {
    let code = resp.status().as_u16();
    let body: Value = resp.json().await.unwrap();
    let expected = if code < 400 { "success" } else { "error" };
    assert_eq!(body["status"], expected, "envelope status for {code}: {body}");
    assert!(body["message"].is_string(), "message missing: {body}");
    assert!(body.get("data").is_some(), "data missing: {body}");
    (code, body)
}

async fn create(client: &reqwest::Client, base: &str, body: Value) -> (u16, Value) {
    let resp = client
        .post(format!("{base}/product"))
        .json(&body)
        .send()
        .await
        .unwrap();
    envelope(resp).await
}

#[tokio::test]
async fn health_check() {
    let (_store, base) = start_stack().await;

    let resp = reqwest::get(format!("{base}/health")).await.unwrap();
    let (code, body) = envelope(resp).await;
    assert_eq!(code, 200);
    assert_eq!(body["data"]["status"], "healthy");
}

#[tokio::test]
async fn health_check_with_store_down() {
    let base = start_gateway(&dead_endpoint().await).await;

    let resp = reqwest::get(format!("{base}/health")).await.unwrap();
    let (code, body) = envelope(resp).await;
    assert_eq!(code, 503);
    assert_eq!(body["message"], "unhealthy");
}

#[tokio::test]
async fn store_down_hides_transport_detail() {
    let base = start_gateway(&dead_endpoint().await).await;

    let resp = reqwest::get(format!("{base}/products")).await.unwrap();
    let (code, body) = envelope(resp).await;
    assert_eq!(code, 500);
    assert_eq!(body["message"], INTERNAL_MESSAGE);
    assert_eq!(body["data"], Value::Null);
}

#[tokio::test]
async fn create_returns_201_with_id() {
    let (store, base) = start_stack().await;
    let client = reqwest::Client::new();

    let (code, body) = create(
        &client,
        &base,
        json!({ "name": "Book A", "quantity": 3, "price": 10.0 }),
    )
    .await;
    assert_eq!(code, 201);
    assert_eq!(body["data"], json!({ "id": 1 }));
    assert_eq!(body["message"], "product created");
    assert_eq!(store.count().unwrap(), 1);
}

#[tokio::test]
async fn create_with_missing_fields_never_reaches_store() {
    let (store, base) = start_stack().await;
    let client = reqwest::Client::new();

    let (code, body) = create(&client, &base, json!({ "name": "Book A" })).await;
    assert_eq!(code, 400);
    assert!(body["message"].as_str().unwrap().contains("quantity"));
    assert!(body["message"].as_str().unwrap().contains("price"));

    // no body at all
    let resp = client.post(format!("{base}/product")).send().await.unwrap();
    let (code, _) = envelope(resp).await;
    assert_eq!(code, 400);

    // wrong type
    let (code, _) = create(
        &client,
        &base,
        json!({ "name": "Book A", "quantity": "three", "price": 1.0 }),
    )
    .await;
    assert_eq!(code, 400);

    assert_eq!(store.count().unwrap(), 0);
}

#[tokio::test]
async fn create_out_of_range_is_400() {
    let (store, base) = start_stack().await;
    let client = reqwest::Client::new();

    for body in [
        json!({ "name": "", "quantity": 1, "price": 1.0 }),
        json!({ "name": "X", "quantity": -1, "price": 1.0 }),
        json!({ "name": "X", "quantity": 1, "price": 0 }),
    ] {
        let (code, resp) = create(&client, &base, body).await;
        assert_eq!(code, 400);
        assert!(resp["message"].as_str().unwrap().starts_with("invalid product data"));
    }
    assert_eq!(store.count().unwrap(), 0);
}

#[tokio::test]
async fn get_round_trips_created_product() {
    let (_store, base) = start_stack().await;
    let client = reqwest::Client::new();

    let (_, created) = create(
        &client,
        &base,
        json!({
            "name": "Refactoring",
            "quantity": 12,
            "price": 45.5,
            "photo": "refactoring.jpg",
            "author": "Martin Fowler"
        }),
    )
    .await;
    let id = created["data"]["id"].as_u64().unwrap();

    let resp = client.get(format!("{base}/product/{id}")).send().await.unwrap();
    let (code, body) = envelope(resp).await;
    assert_eq!(code, 200);
    assert_eq!(
        body["data"],
        json!({
            "id": id,
            "name": "Refactoring",
            "quantity": 12,
            "price": 45.5,
            "photo": "refactoring.jpg",
            "author": "Martin Fowler"
        })
    );
}

#[tokio::test]
async fn get_missing_or_malformed_id_is_404() {
    let (_store, base) = start_stack().await;
    let client = reqwest::Client::new();

    for path in ["product/1", "product/abc", "product/-3"] {
        let resp = client.get(format!("{base}/{path}")).send().await.unwrap();
        let (code, _) = envelope(resp).await;
        assert_eq!(code, 404, "GET /{path}");
    }
}

#[tokio::test]
async fn update_applies_fields_and_defaults() {
    let (_store, base) = start_stack().await;
    let client = reqwest::Client::new();

    create(
        &client,
        &base,
        json!({ "name": "Book A", "quantity": 3, "price": 10.0, "photo": "a.jpg" }),
    )
    .await;

    let resp = client
        .put(format!("{base}/product/1"))
        .json(&json!({ "name": "Book A+", "quantity": 4, "price": 11.0 }))
        .send()
        .await
        .unwrap();
    let (code, body) = envelope(resp).await;
    assert_eq!(code, 200);
    assert_eq!(body["message"], "product updated");
    assert_eq!(body["data"]["name"], "Book A+");
    assert_eq!(body["data"]["photo"], "a.jpg");

    // absent price defaults to 0.0, which the store rejects
    let resp = client
        .put(format!("{base}/product/1"))
        .json(&json!({ "name": "Book A" }))
        .send()
        .await
        .unwrap();
    let (code, _) = envelope(resp).await;
    assert_eq!(code, 400);
}

#[tokio::test]
async fn update_checks_payload_before_existence() {
    let (_store, base) = start_stack().await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{base}/product/999"))
        .json(&json!({ "name": "X", "quantity": -1, "price": 1.0 }))
        .send()
        .await
        .unwrap();
    let (code, body) = envelope(resp).await;
    assert_eq!(code, 400);
    assert!(body["message"].as_str().unwrap().starts_with("invalid product data"));
}

#[tokio::test]
async fn update_missing_is_404() {
    let (_store, base) = start_stack().await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{base}/product/999"))
        .json(&json!({ "name": "X", "quantity": 1, "price": 1.0 }))
        .send()
        .await
        .unwrap();
    let (code, _) = envelope(resp).await;
    assert_eq!(code, 404);
}

#[tokio::test]
async fn delete_twice() {
    let (store, base) = start_stack().await;
    let client = reqwest::Client::new();

    create(&client, &base, json!({ "name": "A", "quantity": 1, "price": 1.0 })).await;

    let resp = client.delete(format!("{base}/product/1")).send().await.unwrap();
    let (code, body) = envelope(resp).await;
    assert_eq!(code, 200);
    assert_eq!(body["message"], "product deleted");
    assert_eq!(body["data"], Value::Null);

    let resp = client.delete(format!("{base}/product/1")).send().await.unwrap();
    let (code, _) = envelope(resp).await;
    assert_eq!(code, 404);

    assert_eq!(store.count().unwrap(), 0);
}

#[tokio::test]
async fn book_scenario() {
    let (_store, base) = start_stack().await;
    let client = reqwest::Client::new();

    let (_, a) = create(&client, &base, json!({ "name": "Book A", "quantity": 3, "price": 10.0 })).await;
    assert_eq!(a["data"]["id"], 1);
    let (_, b) = create(&client, &base, json!({ "name": "Book B", "quantity": 1, "price": 5.0 })).await;
    assert_eq!(b["data"]["id"], 2);

    let resp = client.delete(format!("{base}/product/1")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let resp = client.get(format!("{base}/product/1")).send().await.unwrap();
    assert_eq!(resp.status(), 404);

    let resp = client.get(format!("{base}/products")).send().await.unwrap();
    let (code, body) = envelope(resp).await;
    assert_eq!(code, 200);
    let products = body["data"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], "Book B");
}

#[tokio::test]
async fn empty_list_is_an_empty_array() {
    let (_store, base) = start_stack().await;

    let resp = reqwest::get(format!("{base}/products")).await.unwrap();
    let (code, body) = envelope(resp).await;
    assert_eq!(code, 200);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn unknown_route_uses_envelope() {
    let (_store, base) = start_stack().await;

    let resp = reqwest::get(format!("{base}/nonexistent")).await.unwrap();
    let (code, _) = envelope(resp).await;
    assert_eq!(code, 404);
}

#[tokio::test]
async fn wrong_method_uses_envelope() {
    let (store, base) = start_stack().await;
    let client = reqwest::Client::new();

    let resp = client.post(format!("{base}/products")).send().await.unwrap();
    let (code, body) = envelope(resp).await;
    assert_eq!(code, 405);
    assert_eq!(body["message"], "method not allowed");
    assert_eq!(body["data"], Value::Null);

    let resp = client
        .patch(format!("{base}/product/1"))
        .json(&json!({ "name": "X", "quantity": 1, "price": 1.0 }))
        .send()
        .await
        .unwrap();
    let (code, _) = envelope(resp).await;
    assert_eq!(code, 405);

    let resp = client.delete(format!("{base}/health")).send().await.unwrap();
    let (code, _) = envelope(resp).await;
    assert_eq!(code, 405);

    assert_eq!(store.count().unwrap(), 0);
}
