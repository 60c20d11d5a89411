//! Integration tests for the rendered catalog page.

mod helpers;

use http::StatusCode;

use hookhub_core::config::RenderConfig;
use hookhub_core::error::ErrorKind;
use hookhub_entity::HookCategory;
use hookhub_views::{category_style, render_catalog_page};

#[tokio::test]
async fn test_page_served_as_html() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.content_type.starts_with("text/html"));
    assert!(response.text.starts_with("<!DOCTYPE html>"));
    assert!(response.text.contains(">HookHub</h1>"));
}

#[tokio::test]
async fn test_page_renders_every_hook_in_order() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/").await;

    let positions: Vec<usize> = app
        .catalog
        .hooks()
        .iter()
        .map(|hook| {
            response
                .text
                .find(&format!(r#"data-hook-id="{}""#, hook.id))
                .expect("card missing")
        })
        .collect();

    assert_eq!(positions.len(), 3);
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(response.text.matches("<article").count(), 3);
}

#[tokio::test]
async fn test_auto_format_card() {
    let catalog = helpers::load_fixture(helpers::FIXTURE).await.unwrap();
    let html = render_catalog_page(&catalog, &RenderConfig::default());
    let style = category_style(HookCategory::Formatting);

    assert!(html.contains(">Auto-Format</h2>"));
    assert!(html.contains(">Formats code on save.</p>"));
    assert!(html.contains(&format!("{} {}\">formatting</span>", style.background, style.text)));
    assert!(html.contains(r#"href="https://github.com/x/y""#));
}

#[tokio::test]
async fn test_empty_dataset_renders_empty_grid() {
    let app = helpers::TestApp::with_dataset("tests/fixtures/empty.json").await;

    let response = app.get("/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text.matches("<article").count(), 0);
    assert!(response.text.contains(r#"data-hook-count="0""#));
}

#[tokio::test]
async fn test_unknown_category_is_fatal() {
    let err = helpers::load_fixture("tests/fixtures/unknown_category.json")
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Catalog);
}

#[tokio::test]
async fn test_page_is_idempotent() {
    let app = helpers::TestApp::new().await;

    let first = app.get("/").await;
    let second = app.get("/").await;

    assert_eq!(first.text, second.text);
}
