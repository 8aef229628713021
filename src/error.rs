use thiserror::Error;

/// Errors that can occur while querying recipes or managing user recipes
#[derive(Error, Debug)]
pub enum RecipeError {
    /// Network failure while talking to the recipe API
    #[error("Failed to fetch recipes: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The recipe API answered with a non-success status
    #[error("Recipe API returned an error status: {0}")]
    Status(String),

    /// A response or stored document was not valid JSON for the expected shape
    #[error("Failed to decode recipe data: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request was well formed but nothing matched
    #[error("No recipes found matching your criteria")]
    NoResults,

    /// A name or ingredient search was issued without query text
    #[error("Search query cannot be empty")]
    EmptyQuery,

    /// A user recipe failed validation
    #[error("{0}")]
    Validation(String),

    /// Reading or writing the user recipe store failed
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    Builder(String),
}

impl RecipeError {
    /// True for failures of the external call itself, as opposed to an empty answer
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            RecipeError::Fetch(_) | RecipeError::Status(_) | RecipeError::Decode(_)
        )
    }
}
