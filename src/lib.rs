pub mod builder;
pub mod config;
pub mod error;
pub mod model;
pub mod search;
pub mod source;
pub mod store;
pub mod theme;
pub mod uniffi_bindings;

pub use builder::{RecipeBrowser, RecipeBrowserBuilder};
pub use config::BrowserConfig;
pub use error::RecipeError;
pub use model::Recipe;
pub use source::{HttpRecipeSource, RecipeSource};
pub use store::{RecipeState, RecipeStore};
pub use theme::{Theme, ThemePreference};

// Re-export UniFFI types and functions when the feature is enabled
#[cfg(feature = "uniffi")]
pub use uniffi_bindings::*;

/// Fetch the catalog from `url` once, without a store.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), recipe_browser::RecipeError> {
/// let recipes = recipe_browser::fetch_recipes("https://dummyjson.com/recipes").await?;
/// println!("{} recipes", recipes.len());
/// # Ok(())
/// # }
/// ```
pub async fn fetch_recipes(url: &str) -> Result<Vec<Recipe>, RecipeError> {
    HttpRecipeSource::with_endpoint(url)?.fetch_catalog().await
}
