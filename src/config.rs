use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct BrowserConfig {
    /// Recipe-list endpoint returning `{"recipes": [...]}`
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Optional request timeout in seconds (none by default)
    #[serde(default)]
    pub timeout: Option<u64>,
    /// User agent sent with the catalog request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout: None,
            user_agent: default_user_agent(),
        }
    }
}

// Default value functions
fn default_endpoint() -> String {
    "https://dummyjson.com/recipes".to_string()
}

fn default_user_agent() -> String {
    format!("recipe-browser/{}", env!("CARGO_PKG_VERSION"))
}

impl BrowserConfig {
    /// Load configuration from default locations
    ///
    /// Looks for configuration in the following order:
    /// 1. Environment variables with RECIPES__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

/// Load configuration from file and environment variables
///
/// Environment variable format: RECIPES__ENDPOINT, RECIPES__TIMEOUT
pub fn load_config() -> Result<BrowserConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        .add_source(
            Environment::with_prefix("RECIPES")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
