use std::sync::Arc;
use std::time::Duration;

use crate::config::BrowserConfig;
use crate::source::{HttpRecipeSource, RecipeSource};
use crate::store::RecipeStore;
use crate::theme::ThemePreference;
use crate::RecipeError;

/// Application context owning both observable stores.
///
/// Construct one per process (or per test) and pass it by reference to
/// whatever renders the catalog, favorites and settings.
pub struct RecipeBrowser {
    recipes: RecipeStore,
    theme: ThemePreference,
}

impl RecipeBrowser {
    /// Creates a new builder
    ///
    /// # Example
    /// ```
    /// use recipe_browser::RecipeBrowser;
    ///
    /// let browser = RecipeBrowser::builder()
    ///     .endpoint("https://dummyjson.com/recipes")
    ///     .build()
    ///     .unwrap();
    /// assert!(!browser.theme().is_dark());
    /// ```
    pub fn builder() -> RecipeBrowserBuilder {
        RecipeBrowserBuilder::default()
    }

    pub fn recipes(&self) -> &RecipeStore {
        &self.recipes
    }

    pub fn theme(&self) -> &ThemePreference {
        &self.theme
    }
}

/// Builder for a [`RecipeBrowser`]
#[derive(Default)]
pub struct RecipeBrowserBuilder {
    config: Option<BrowserConfig>,
    endpoint: Option<String>,
    timeout: Option<Duration>,
    source: Option<Arc<dyn RecipeSource>>,
}

impl RecipeBrowserBuilder {
    /// Start from a loaded configuration instead of the defaults
    pub fn config(mut self, config: BrowserConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Override the recipe-list endpoint
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = Some(url.into());
        self
    }

    /// Set a timeout for the catalog request
    ///
    /// # Example
    /// ```
    /// use recipe_browser::RecipeBrowser;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeBrowser::builder()
    ///     .timeout(Duration::from_secs(30));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Use a custom catalog source instead of HTTP
    pub fn source(mut self, source: Arc<dyn RecipeSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// # Errors
    /// Returns `RecipeError::BuilderError` if a custom source is combined with
    /// HTTP settings or the endpoint is blank, and `RecipeError::FetchError`
    /// if the HTTP client cannot be created.
    pub fn build(self) -> Result<RecipeBrowser, RecipeError> {
        let source = match self.source {
            Some(source) => {
                if self.config.is_some() || self.endpoint.is_some() || self.timeout.is_some() {
                    return Err(RecipeError::BuilderError(
                        "A custom source cannot be combined with config(), endpoint() or timeout()"
                            .to_string(),
                    ));
                }
                source
            }
            None => {
                let mut config = self.config.unwrap_or_default();
                if let Some(endpoint) = self.endpoint {
                    config.endpoint = endpoint;
                }
                if let Some(timeout) = self.timeout {
                    config.timeout = Some(timeout.as_secs());
                }
                if config.endpoint.trim().is_empty() {
                    return Err(RecipeError::BuilderError(
                        "Recipe endpoint cannot be empty".to_string(),
                    ));
                }
                Arc::new(HttpRecipeSource::new(&config)?)
            }
        };

        Ok(RecipeBrowser {
            recipes: RecipeStore::new(source),
            theme: ThemePreference::new(),
        })
    }
}
