mod mealdb;

pub use mealdb::MealDbClient;

use async_trait::async_trait;

use crate::error::RecipeError;
use crate::model::{Category, Recipe};

/// Read access to a recipe catalogue.
///
/// An empty answer is `Ok` with an empty list; only failures of the call
/// itself are errors.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// All recipe categories
    async fn categories(&self) -> Result<Vec<Category>, RecipeError>;

    /// Recipes whose name matches the free-text query
    async fn search_by_name(&self, name: &str) -> Result<Vec<Recipe>, RecipeError>;

    /// Recipes using the given ingredient
    async fn filter_by_ingredient(&self, ingredient: &str) -> Result<Vec<Recipe>, RecipeError>;

    /// Recipes in the given category
    async fn filter_by_category(&self, category: &str) -> Result<Vec<Recipe>, RecipeError>;

    /// One random recipe, if the API returned any
    async fn random(&self) -> Result<Option<Recipe>, RecipeError>;

    /// Full details of one recipe
    async fn lookup(&self, id: &str) -> Result<Option<Recipe>, RecipeError>;

    /// Every recipe the catalogue lists without a query
    async fn list_all(&self) -> Result<Vec<Recipe>, RecipeError> {
        self.search_by_name("").await
    }
}
