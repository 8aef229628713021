use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Client configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Base URL of the recipe API, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// JSON file holding the user's own recipes
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
    /// How many random recipes to load on startup
    #[serde(default = "default_random_count")]
    pub random_count: usize,
    /// Maximum recipes taken from each category of a mood search
    #[serde(default = "default_mood_category_limit")]
    pub mood_category_limit: usize,
    /// Image shown for user recipes
    #[serde(default = "default_placeholder_thumbnail")]
    pub placeholder_thumbnail: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            store_path: default_store_path(),
            random_count: default_random_count(),
            mood_category_limit: default_mood_category_limit(),
            placeholder_thumbnail: default_placeholder_thumbnail(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://www.themealdb.com/api/json/v1/1".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_store_path() -> PathBuf {
    PathBuf::from("user_recipes.json")
}

fn default_random_count() -> usize {
    10
}

fn default_mood_category_limit() -> usize {
    5
}

fn default_placeholder_thumbnail() -> String {
    "https://via.placeholder.com/300x200?text=Your+Recipe".to_string()
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_IDEAS__ prefix
    /// 2. recipe-ideas.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_IDEAS__STORE_PATH
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Load configuration from file and environment variables
///
/// See [`AppConfig::load`] for the precedence rules.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipe-ideas").required(false))
        // Use double underscore for nested keys: RECIPE_IDEAS__BASE_URL
        .add_source(
            Environment::with_prefix("RECIPE_IDEAS")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
