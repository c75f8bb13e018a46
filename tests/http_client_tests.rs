//! End-to-end Tests over a real socket
//!
//! Starts the server on an ephemeral port and drives it with reqwest the way
//! a browser client would: non-2xx responses are errors carrying a message.

use std::net::SocketAddr;

use reqwest::{Client, StatusCode};
use resource_api::{
    create_router,
    models::{DeleteResponse, ErrorResponse, ListResponse},
    AppState, Config, Resource,
};
use serde_json::json;

// == Helper Functions ==

async fn spawn_server(config: Config) -> String {
    let app = create_router(AppState::from_config(&config));
    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

async fn expect_error(response: reqwest::Response, status: StatusCode) -> ErrorResponse {
    assert_eq!(response.status(), status);
    response.json::<ErrorResponse>().await.unwrap()
}

// == Full Lifecycle ==

#[tokio::test]
async fn test_resource_lifecycle_over_http() {
    let base = spawn_server(Config::default()).await;
    let client = Client::new();
    let collection = format!("{}/api/resources", base);

    // Create
    let response = client
        .post(&collection)
        .json(&json!({"name": "Widget", "description": "blue"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Resource = response.json().await.unwrap();
    assert_eq!(created.name, "Widget");
    assert!(created.updated_at.is_none());

    let item = format!("{}/{}", collection, created.id);

    // Update
    let updated: Resource = client
        .put(&item)
        .json(&json!({"name": "Gizmo"}))
        .send()
        .await
        .unwrap()
        .error_for_status()
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated.name, "Gizmo");
    assert_eq!(updated.description, "blue");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at.is_some());

    // List
    let list: ListResponse = client
        .get(&collection)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list.metadata.total, 1);
    assert_eq!(list.data, vec![updated.clone()]);

    // Delete
    let deleted: DeleteResponse = client
        .delete(&item)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(deleted.deleted, updated);

    // Gone
    let response = client.get(&item).send().await.unwrap();
    let error = expect_error(response, StatusCode::NOT_FOUND).await;
    assert_eq!(
        error.message,
        format!("Resource with ID {} not found", created.id)
    );
}

#[tokio::test]
async fn test_seeded_server_lists_samples() {
    let config = Config {
        seed_sample_data: true,
        ..Config::default()
    };
    let base = spawn_server(config).await;

    let list: ListResponse = reqwest::get(format!("{}/api/resources?sortBy=name&order=desc", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let names: Vec<&str> = list.data.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Resource 2", "Resource 1"]);
    assert_eq!(list.metadata.count, list.metadata.total);

    // Ids continue after the samples
    let created: Resource = Client::new()
        .post(format!("{}/api/resources", base))
        .json(&json!({"name": "Third"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(created.id, 3);
}

#[tokio::test]
async fn test_errors_carry_message_for_display() {
    let base = spawn_server(Config::default()).await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/resources", base))
        .json(&json!({"name": 12}))
        .send()
        .await
        .unwrap();
    let error = expect_error(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(error.error, "Validation failed");
    assert_eq!(
        error.message,
        "Name is required and must be a non-empty string"
    );

    let response = client
        .delete(format!("{}/api/resources/abc", base))
        .send()
        .await
        .unwrap();
    let error = expect_error(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(error.error, "Invalid ID");
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let base = spawn_server(Config::default()).await;

    let response = Client::new()
        .get(format!("{}/api/resources", base))
        .header("origin", "http://example.com")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
}
