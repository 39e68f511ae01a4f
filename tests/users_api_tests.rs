use serde_json::{json, Value};
use user_service::{build_router, User, UserStore};

/// Spin up the HTTP server on an OS-assigned port, returning the base URL.
async fn spawn_test_server() -> String {
    let app = build_router(UserStore::new());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://127.0.0.1:{}", port)
}

#[tokio::test]
async fn list_users_returns_seed_data() {
    let base = spawn_test_server().await;
    let resp = reqwest::get(format!("{}/users", base)).await.unwrap();

    assert_eq!(resp.status(), 200);
    let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.contains("application/json"));

    let users: Vec<User> = resp.json().await.unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name, "Alice Smith");
    assert_eq!(users[1].name, "Bob Johnson");
}

#[tokio::test]
async fn get_user_by_id_returns_user() {
    let base = spawn_test_server().await;
    let resp = reqwest::get(format!("{}/users/1", base)).await.unwrap();

    assert_eq!(resp.status(), 200);
    let user: User = resp.json().await.unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.email, "alice@example.com");
}

#[tokio::test]
async fn get_absent_user_returns_404_with_message() {
    let base = spawn_test_server().await;
    let resp = reqwest::get(format!("{}/users/999", base)).await.unwrap();

    assert_eq!(resp.status(), 404);
    let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.contains("application/json"));

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "User not found");
}

#[tokio::test]
async fn get_non_numeric_id_returns_404() {
    let base = spawn_test_server().await;
    let resp = reqwest::get(format!("{}/users/abc", base)).await.unwrap();

    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "User not found");
}

#[tokio::test]
async fn create_user_returns_201_and_persists() {
    let base = spawn_test_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/users", base))
        .json(&json!({ "name": "Charlie Brown", "email": "charlie@peanuts.com" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 201);
    let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.contains("application/json"));

    let created: User = resp.json().await.unwrap();
    assert_eq!(created.id, 3);
    assert_eq!(created.name, "Charlie Brown");
    assert_eq!(created.email, "charlie@peanuts.com");

    let users: Vec<User> = reqwest::get(format!("{}/users", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(users.len(), 3);
    assert_eq!(users[2], created);
}

#[tokio::test]
async fn create_missing_name_returns_400_without_mutation() {
    let base = spawn_test_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/users", base))
        .json(&json!({ "email": "missingname@test.com" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Name and email are required.");

    let users: Vec<User> = reqwest::get(format!("{}/users", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(users.len(), 2);
}

#[tokio::test]
async fn create_missing_email_returns_400() {
    let base = spawn_test_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/users", base))
        .json(&json!({ "name": "No Email" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Name and email are required.");
}

#[tokio::test]
async fn sequential_creates_assign_increasing_ids() {
    let base = spawn_test_server().await;
    let client = reqwest::Client::new();

    for expected_id in 3..=6u64 {
        let resp = client
            .post(format!("{}/users", base))
            .json(&json!({
                "name": format!("User {expected_id}"),
                "email": format!("user{expected_id}@example.com"),
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 201);
        let created: User = resp.json().await.unwrap();
        assert_eq!(created.id, expected_id);
    }
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let base = spawn_test_server().await;
    let resp = reqwest::get(format!("{}/nonexistent", base)).await.unwrap();

    assert_eq!(resp.status(), 404);
}
