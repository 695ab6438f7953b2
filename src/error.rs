use thiserror::Error;

/// Errors that can occur while loading or browsing the recipe catalog
#[derive(Error, Debug)]
pub enum RecipeError {
    /// Transport failure while talking to the recipe endpoint
    #[error("Failed to fetch recipes: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("Recipe endpoint returned HTTP {0}")]
    StatusError(u16),

    /// The response body was not a valid recipe list
    #[error("Failed to parse recipes: {0}")]
    ParseError(#[from] serde_json::Error),

    /// The background fetch task panicked or its runtime shut down
    #[error("Fetch task failed: {0}")]
    TaskError(#[from] tokio::task::JoinError),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
