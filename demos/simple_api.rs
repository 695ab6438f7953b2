//! Simple API usage
//!
//! Fetches the catalog once with the convenience function, then drives a
//! `RecipeBrowser` the way a UI would: subscribe, fetch, favorite, theme.

use recipe_browser::{fetch_recipes, RecipeBrowser};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // One-shot fetch without a store
    println!("=== One-shot fetch ===");
    let recipes = fetch_recipes("https://dummyjson.com/recipes").await?;
    println!("Fetched {} recipes", recipes.len());

    // Observable stores
    println!("\n=== Browser ===");
    let browser = RecipeBrowser::builder().build()?;
    let mut updates = browser.recipes().subscribe();

    browser.recipes().fetch_recipes().await?;
    if updates.has_changed()? {
        let state = updates.borrow_and_update();
        println!("loading={} error={} recipes={}", state.loading, state.error, state.recipes.len());
    }

    if let Some(first) = browser.recipes().search("pasta").into_iter().next() {
        browser.recipes().toggle_favorite(&first);
        println!("Favorited {} ({})", first.title, first.id);
    }
    println!("Favorites: {}", browser.recipes().favorites().len());

    browser.theme().toggle_theme(true);
    println!("Theme: {}", browser.theme().theme().as_str());

    Ok(())
}
