//! HTTP surface tests for the registry API.
//!
//! Each test binds an in-process server to an ephemeral port and drives it
//! over real sockets.

use std::sync::Arc;

use orchard_common::{CreateFruitRequest, Fruit, FruitResponse, ListFruitsResponse};
use orchard_daemon::http::ApiServer;
use orchard_daemon::registry::FruitRegistry;

async fn spawn_api() -> String {
    let registry = Arc::new(FruitRegistry::new());
    let router = ApiServer::new(registry).router();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn create(client: &reqwest::Client, base: &str, name: &str) -> Fruit {
    let resp = client
        .post(format!("{base}/api/fruits"))
        .json(&CreateFruitRequest {
            fruit: Fruit::named(name),
        })
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::CREATED);
    resp.json::<FruitResponse>().await.unwrap().fruit.unwrap()
}

#[tokio::test]
async fn health_reports_ok_and_record_count() {
    let base = spawn_api().await;
    let client = reqwest::Client::new();

    let body: serde_json::Value = client
        .get(format!("{base}/api/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["fruits"], 0);

    create(&client, &base, "apple").await;
    let body: serde_json::Value = client
        .get(format!("{base}/api/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["fruits"], 1);
}

#[tokio::test]
async fn create_assigns_id_and_lists_the_record() {
    let base = spawn_api().await;
    let client = reqwest::Client::new();

    let apple = create(&client, &base, "apple").await;
    assert!(!apple.id.is_empty());
    assert_eq!(apple.name, "apple");

    let list: ListFruitsResponse = client
        .get(format!("{base}/api/fruits"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list.fruits, vec![apple]);
}

#[tokio::test]
async fn create_with_supplied_id_is_rejected() {
    let base = spawn_api().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/fruits"))
        .json(&CreateFruitRequest {
            fruit: Fruit {
                id: "id".to_string(),
                name: "apple".to_string(),
            },
        })
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("id"));

    // Nothing was stored
    let list: ListFruitsResponse = client
        .get(format!("{base}/api/fruits"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(list.fruits.is_empty());
}

#[tokio::test]
async fn absent_lookups_return_null_fruit_not_an_error() {
    let base = spawn_api().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/api/fruits/id"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(resp.json::<FruitResponse>().await.unwrap().fruit, None);

    let resp = client
        .put(format!("{base}/api/fruits/id"))
        .json(&serde_json::json!({"name": "pear"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(resp.json::<FruitResponse>().await.unwrap().fruit, None);

    let resp = client
        .delete(format!("{base}/api/fruits/id"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(resp.json::<FruitResponse>().await.unwrap().fruit, None);
}

#[tokio::test]
async fn update_renames_in_place() {
    let base = spawn_api().await;
    let client = reqwest::Client::new();

    let apple = create(&client, &base, "apple").await;

    let updated: FruitResponse = client
        .put(format!("{base}/api/fruits/{}", apple.id))
        .json(&serde_json::json!({"name": "pear"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let updated = updated.fruit.unwrap();
    assert_eq!(updated.id, apple.id);
    assert_eq!(updated.name, "pear");

    let fetched: FruitResponse = client
        .get(format!("{base}/api/fruits/{}", apple.id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched.fruit.unwrap().name, "pear");

    let list: ListFruitsResponse = client
        .get(format!("{base}/api/fruits"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list.fruits.len(), 1);
}

#[tokio::test]
async fn remove_returns_snapshot_then_null() {
    let base = spawn_api().await;
    let client = reqwest::Client::new();

    let apple = create(&client, &base, "apple").await;

    let first: FruitResponse = client
        .delete(format!("{base}/api/fruits/{}", apple.id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(first.fruit, Some(apple.clone()));

    let second: FruitResponse = client
        .delete(format!("{base}/api/fruits/{}", apple.id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(second.fruit, None);
}

#[tokio::test]
async fn remove_all_returns_no_content_and_empties_the_store() {
    let base = spawn_api().await;
    let client = reqwest::Client::new();

    create(&client, &base, "apple").await;
    create(&client, &base, "pear").await;

    let resp = client
        .delete(format!("{base}/api/fruits"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NO_CONTENT);

    let list: ListFruitsResponse = client
        .get(format!("{base}/api/fruits"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(list.fruits.is_empty());
}

#[tokio::test]
async fn unknown_routes_fall_back_to_not_found() {
    let base = spawn_api().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/api/vegetables"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["error"].is_string());
}
