//! Recipe discovery over TheMealDB.
//!
//! Search by name, ingredient, mood or cooking time, narrow results down by
//! dietary preference, and keep a personal list of recipes on disk.
//!
//! ```no_run
//! use recipe_ideas::{search_recipes, RecipeSearch};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let request = RecipeSearch::builder().mood("comforting").vegetarian().build()?;
//! for recipe in search_recipes(&request).await? {
//!     println!("{}", recipe.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod favorites;
pub mod filters;
pub mod ingredients;
pub mod model;
pub mod request;
pub mod source;
pub mod state;
pub mod store;

pub use builder::{RecipeSearch, SearchRequestBuilder};
pub use config::AppConfig;
pub use engine::QueryEngine;
pub use error::RecipeError;
pub use favorites::Favorites;
pub use filters::{CookingTime, DietaryPreference, Mood};
pub use model::{Category, Ingredient, Recipe};
pub use request::{SearchMode, SearchRequest};
pub use source::{MealDbClient, RecipeSource};
pub use state::{Notice, Session};
pub use store::{JsonFileRepository, MemoryRepository, RecipeDraft, RecipeRepository, UserRecipeStore};

/// Open the user's recipe store at the configured path
pub fn open_store(config: &AppConfig) -> Result<UserRecipeStore<JsonFileRepository>, RecipeError> {
    UserRecipeStore::open(
        JsonFileRepository::new(&config.store_path),
        config.placeholder_thumbnail.clone(),
    )
}

/// Run one search with the configuration from `recipe-ideas.toml` and the environment
///
/// # Example
/// ```no_run
/// # use recipe_ideas::{search_recipes, SearchRequest};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let recipes = search_recipes(&SearchRequest::by_name("lasagne")).await?;
/// # Ok(())
/// # }
/// ```
pub async fn search_recipes(request: &SearchRequest) -> Result<Vec<Recipe>, RecipeError> {
    let config = AppConfig::load()?;
    let engine = QueryEngine::from_config(&config)?;
    let store = open_store(&config)?;
    engine.search(request, store.recipes()).await
}

/// Fetch the configured number of random recipes
pub async fn random_recipes() -> Result<Vec<Recipe>, RecipeError> {
    let config = AppConfig::load()?;
    QueryEngine::from_config(&config)?.random_recipes().await
}
