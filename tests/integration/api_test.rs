//! Integration tests for the JSON catalog routes.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_list_hooks() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/api/hooks").await;

    assert_eq!(response.status, StatusCode::OK);
    let data = response.body["data"].as_array().expect("data array");
    assert_eq!(data.len(), 3);
    assert_eq!(data[0]["id"], "1");
    assert_eq!(data[0]["githubUrl"], "https://github.com/x/y");
}

#[tokio::test]
async fn test_list_hooks_by_category() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/api/hooks?category=git").await;

    assert_eq!(response.status, StatusCode::OK);
    let data = response.body["data"].as_array().expect("data array");
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], "Commit Guard");
}

#[tokio::test]
async fn test_list_hooks_unknown_category() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/api/hooks?category=bogus").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_category_filter_is_case_sensitive() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/api/hooks?category=GIT").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_get_hook() {
    let app = helpers::TestApp::new().await;

    let found = app.get("/api/hooks/3").await;
    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(found.body["data"]["category"], "notification");

    let missing = app.get("/api/hooks/999").await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_categories_cover_enum() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/api/categories").await;

    assert_eq!(response.status, StatusCode::OK);
    let data = response.body["data"].as_array().expect("data array");
    assert_eq!(data.len(), 9);

    let formatting = data
        .iter()
        .find(|c| c["category"] == "formatting")
        .expect("formatting entry");
    assert_eq!(formatting["count"], 1);
    assert_eq!(formatting["background"], "bg-blue-100 dark:bg-blue-900");
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/api/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["hooks"], 3);
}
