use async_trait::async_trait;
use recipe_browser::{BrowserConfig, Recipe, RecipeBrowser, RecipeError, RecipeSource};
use std::sync::Arc;
use std::time::Duration;

struct StaticSource;

#[async_trait]
impl RecipeSource for StaticSource {
    async fn fetch_catalog(&self) -> Result<Vec<Recipe>, RecipeError> {
        Recipe::parse_catalog(
            r#"{"recipes":[{"id":1,"name":"Pad Thai","cuisine":"Thai"},{"id":2,"name":"Green Curry","cuisine":"Thai"},{"id":3,"name":"Focaccia","cuisine":"Italian"}]}"#,
        )
    }
}

#[tokio::test]
async fn test_builder_with_custom_source() {
    let browser = RecipeBrowser::builder()
        .source(Arc::new(StaticSource))
        .build()
        .unwrap();

    browser.recipes().fetch_recipes().await.unwrap();

    let thai: Vec<String> = browser
        .recipes()
        .search("thai")
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert_eq!(thai, vec!["Pad Thai", "Green Curry"]);
}

#[tokio::test]
async fn test_builder_with_config_and_timeout() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/recipes")
        .with_status(200)
        .with_body(r#"{"recipes":[{"id":1,"name":"Soup"}]}"#)
        .create();

    let config = BrowserConfig {
        endpoint: format!("{}/api/recipes", server.url()),
        ..Default::default()
    };

    let browser = RecipeBrowser::builder()
        .config(config)
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    browser.recipes().fetch_recipes().await.unwrap();
    assert_eq!(browser.recipes().recipes().len(), 1);
    mock.assert();
}

#[tokio::test]
async fn test_endpoint_overrides_config() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/override")
        .with_status(200)
        .with_body(r#"{"recipes":[]}"#)
        .create();

    let browser = RecipeBrowser::builder()
        .config(BrowserConfig {
            endpoint: "http://127.0.0.1:9/never".to_string(),
            ..Default::default()
        })
        .endpoint(format!("{}/override", server.url()))
        .build()
        .unwrap();

    browser.recipes().fetch_recipes().await.unwrap();
    mock.assert();
}

#[test]
fn test_builder_rejects_source_with_timeout() {
    let result = RecipeBrowser::builder()
        .source(Arc::new(StaticSource))
        .timeout(Duration::from_secs(1))
        .build();

    match result {
        Err(RecipeError::BuilderError(msg)) => assert!(msg.contains("custom source")),
        _ => panic!("Expected builder error"),
    }
}

#[test]
fn test_browsers_are_independent() {
    let first = RecipeBrowser::builder().source(Arc::new(StaticSource)).build().unwrap();
    let second = RecipeBrowser::builder().source(Arc::new(StaticSource)).build().unwrap();

    first.theme().toggle_theme(true);
    assert!(first.theme().is_dark());
    assert!(!second.theme().is_dark());
}
