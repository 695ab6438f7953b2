use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::config::BrowserConfig;
use crate::error::RecipeError;
use crate::model::Recipe;

/// Where the recipe catalog comes from
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Fetch the full catalog in response order
    async fn fetch_catalog(&self) -> Result<Vec<Recipe>, RecipeError>;
}

/// Fetches the catalog with one HTTP GET against a fixed endpoint
pub struct HttpRecipeSource {
    client: Client,
    endpoint: String,
}

impl HttpRecipeSource {
    pub fn new(config: &BrowserConfig) -> Result<Self, RecipeError> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout_duration() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Create a source for `endpoint` with otherwise default settings
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, RecipeError> {
        let config = BrowserConfig {
            endpoint: endpoint.into(),
            ..Default::default()
        };
        Self::new(&config)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RecipeSource for HttpRecipeSource {
    async fn fetch_catalog(&self) -> Result<Vec<Recipe>, RecipeError> {
        debug!("GET {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecipeError::StatusError(status.as_u16()));
        }

        let body = response.text().await?;
        let recipes = Recipe::parse_catalog(&body)?;
        debug!("parsed {} recipes from {}", recipes.len(), self.endpoint);
        Ok(recipes)
    }
}
