//! UniFFI bindings for recipe-browser
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! The browser object owns its own tokio runtime and exposes blocking calls, so hosts
//! invoke `fetch_recipes` off their UI thread and re-read `snapshot` afterwards.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::{BrowserConfig, Recipe, RecipeBrowser, RecipeError, RecipeState, Theme};

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible recipe structure
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipe {
    pub id: String,
    pub title: String,
    /// Empty string if the record had no image
    pub image_url: String,
    pub category: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: String,
    pub rating: f64,
}

impl From<Recipe> for FfiRecipe {
    fn from(recipe: Recipe) -> Self {
        FfiRecipe {
            id: recipe.id,
            title: recipe.title,
            image_url: recipe.image_url,
            category: recipe.category,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
            prep_time: recipe.prep_time,
            cook_time: recipe.cook_time,
            servings: recipe.servings,
            rating: recipe.rating,
        }
    }
}

impl From<FfiRecipe> for Recipe {
    fn from(ffi: FfiRecipe) -> Self {
        Recipe {
            id: ffi.id,
            title: ffi.title,
            image_url: ffi.image_url,
            category: ffi.category,
            ingredients: ffi.ingredients,
            instructions: ffi.instructions,
            prep_time: ffi.prep_time,
            cook_time: ffi.cook_time,
            servings: ffi.servings,
            rating: ffi.rating,
        }
    }
}

/// FFI-compatible store snapshot
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipeState {
    pub recipes: Vec<FfiRecipe>,
    pub favorites: Vec<FfiRecipe>,
    pub loading: bool,
    pub error: bool,
}

impl From<RecipeState> for FfiRecipeState {
    fn from(state: RecipeState) -> Self {
        FfiRecipeState {
            recipes: state.recipes.into_iter().map(Into::into).collect(),
            favorites: state.favorites.into_iter().map(Into::into).collect(),
            loading: state.loading,
            error: state.error,
        }
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiBrowserError {
    /// Fetching or parsing the catalog failed
    FetchError { message: String },
    /// Builder configuration error
    BuilderError { message: String },
    /// Configuration error
    ConfigError { message: String },
    /// Runtime error (tokio)
    RuntimeError { message: String },
}

impl fmt::Display for FfiBrowserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiBrowserError::FetchError { message } => write!(f, "Fetch error: {}", message),
            FfiBrowserError::BuilderError { message } => write!(f, "Builder error: {}", message),
            FfiBrowserError::ConfigError { message } => write!(f, "Config error: {}", message),
            FfiBrowserError::RuntimeError { message } => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for FfiBrowserError {}

impl From<RecipeError> for FfiBrowserError {
    fn from(err: RecipeError) -> Self {
        match err {
            RecipeError::BuilderError(msg) => FfiBrowserError::BuilderError { message: msg },
            RecipeError::ConfigError(e) => FfiBrowserError::ConfigError {
                message: e.to_string(),
            },
            // Transport, status and parse failures all surface as "fetch failed"
            other => FfiBrowserError::FetchError {
                message: other.to_string(),
            },
        }
    }
}

/// Configuration for the browser
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiBrowserConfig {
    /// Optional endpoint (uses config file / environment / default if not specified)
    pub endpoint: Option<String>,
    /// Optional timeout in seconds (no timeout if not specified)
    pub timeout_seconds: Option<u64>,
}

/// Recipe catalog, favorites and theme for a mobile host
#[cfg_attr(feature = "uniffi", derive(uniffi::Object))]
pub struct FfiRecipeBrowser {
    runtime: tokio::runtime::Runtime,
    browser: RecipeBrowser,
}

/// Create a new tokio runtime for FFI calls
fn create_runtime() -> Result<tokio::runtime::Runtime, FfiBrowserError> {
    tokio::runtime::Runtime::new().map_err(|e| FfiBrowserError::RuntimeError {
        message: format!("Failed to create async runtime: {}", e),
    })
}

/// Create a browser, reading `config.toml` and `RECIPES__*` variables for anything
/// `config` leaves unset
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn create_recipe_browser(
    config: Option<FfiBrowserConfig>,
) -> Result<Arc<FfiRecipeBrowser>, FfiBrowserError> {
    let config = config.unwrap_or_default();
    let base = BrowserConfig::load().map_err(RecipeError::from)?;

    let mut builder = RecipeBrowser::builder().config(base);

    if let Some(endpoint) = config.endpoint {
        builder = builder.endpoint(endpoint);
    }

    if let Some(timeout_secs) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(timeout_secs));
    }

    Ok(Arc::new(FfiRecipeBrowser {
        runtime: create_runtime()?,
        browser: builder.build()?,
    }))
}

#[cfg_attr(feature = "uniffi", uniffi::export)]
impl FfiRecipeBrowser {
    /// Load the catalog, blocking until the request settles.
    ///
    /// The failure is also recorded in the `error` flag of the next snapshot.
    pub fn fetch_recipes(&self) -> Result<(), FfiBrowserError> {
        self.runtime
            .block_on(self.browser.recipes().fetch_recipes())
            .map_err(Into::into)
    }

    pub fn snapshot(&self) -> FfiRecipeState {
        self.browser.recipes().snapshot().into()
    }

    pub fn toggle_favorite(&self, recipe: FfiRecipe) {
        self.browser.recipes().toggle_favorite(&recipe.into());
    }

    pub fn is_favorite(&self, id: String) -> bool {
        self.browser.recipes().is_favorite(&id)
    }

    pub fn favorites(&self) -> Vec<FfiRecipe> {
        self.browser
            .recipes()
            .favorites()
            .into_iter()
            .map(Into::into)
            .collect()
    }

    pub fn search(&self, query: String) -> Vec<FfiRecipe> {
        self.browser
            .recipes()
            .search(&query)
            .into_iter()
            .map(Into::into)
            .collect()
    }

    pub fn toggle_theme(&self, is_dark: bool) {
        self.browser.theme().toggle_theme(is_dark);
    }

    pub fn is_dark(&self) -> bool {
        self.browser.theme().theme() == Theme::Dark
    }
}

/// Get the library version (settings screen label)
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
