use log::{debug, info};

use crate::config::AppConfig;
use crate::error::RecipeError;
use crate::filters::{filter_by_diet, filter_by_time};
use crate::model::{Category, Recipe};
use crate::request::{SearchMode, SearchRequest};
use crate::source::{MealDbClient, RecipeSource};

const DEFAULT_MOOD_CATEGORY_LIMIT: usize = 5;
const DEFAULT_RANDOM_COUNT: usize = 10;

/// Turns search requests into API calls and merges the answers with the
/// user's own recipes.
///
/// All calls of one operation are awaited one after another, so results keep
/// the order in which they were requested.
pub struct QueryEngine<S> {
    source: S,
    mood_category_limit: usize,
    random_count: usize,
}

impl QueryEngine<MealDbClient> {
    /// Engine over the HTTP API described by the configuration
    pub fn from_config(config: &AppConfig) -> Result<Self, RecipeError> {
        let source = MealDbClient::from_config(config)?;
        Ok(QueryEngine::new(source).with_limits(config.mood_category_limit, config.random_count))
    }
}

impl<S: RecipeSource> QueryEngine<S> {
    pub fn new(source: S) -> Self {
        QueryEngine {
            source,
            mood_category_limit: DEFAULT_MOOD_CATEGORY_LIMIT,
            random_count: DEFAULT_RANDOM_COUNT,
        }
    }

    pub fn with_limits(mut self, mood_category_limit: usize, random_count: usize) -> Self {
        self.mood_category_limit = mood_category_limit;
        self.random_count = random_count;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Run a search and append the matching user recipes.
    ///
    /// # Errors
    /// - `EmptyQuery` for a name or ingredient search without text
    /// - `NoResults` when neither the API nor the user's recipes matched
    /// - a fetch failure when any API call failed
    pub async fn search(
        &self,
        request: &SearchRequest,
        user_recipes: &[Recipe],
    ) -> Result<Vec<Recipe>, RecipeError> {
        if request.requires_query() && request.query.trim().is_empty() {
            return Err(RecipeError::EmptyQuery);
        }

        let found = self.fetch_for_mode(request).await?;
        let mut results = filter_by_diet(found, &request.diet);
        debug!("{} API recipes after dietary filter", results.len());

        let query = request.query.to_lowercase();
        results.extend(
            user_recipes
                .iter()
                .filter(|recipe| user_recipe_matches(recipe, &query))
                .cloned(),
        );

        if results.is_empty() {
            info!("No recipes found for {:?} search", request.mode);
            return Err(RecipeError::NoResults);
        }
        Ok(results)
    }

    async fn fetch_for_mode(&self, request: &SearchRequest) -> Result<Vec<Recipe>, RecipeError> {
        match request.mode {
            SearchMode::Name => self.source.search_by_name(&request.query).await,
            SearchMode::Ingredient => self.source.filter_by_ingredient(&request.query).await,
            SearchMode::Mood => {
                let categories = request.mood.map(|m| m.categories()).unwrap_or(&[]);
                let mut recipes = Vec::new();
                for category in categories {
                    let found = self.source.filter_by_category(category).await?;
                    debug!("Mood category {} returned {} recipes", category, found.len());
                    recipes.extend(found.into_iter().take(self.mood_category_limit));
                }
                Ok(recipes)
            }
            SearchMode::Time => {
                let all = self.source.list_all().await?;
                Ok(filter_by_time(all, request.cooking_time))
            }
        }
    }

    /// All recipe categories
    pub async fn categories(&self) -> Result<Vec<Category>, RecipeError> {
        self.source.categories().await
    }

    /// A batch of random recipes, in the order they arrived.
    ///
    /// Duplicates across calls are kept; calls that returned nothing are skipped.
    pub async fn random_recipes(&self) -> Result<Vec<Recipe>, RecipeError> {
        let mut recipes = Vec::with_capacity(self.random_count);
        for _ in 0..self.random_count {
            if let Some(recipe) = self.source.random().await? {
                recipes.push(recipe);
            }
        }
        Ok(recipes)
    }

    /// Recipes of one category; `NoResults` when the category is empty or unknown
    pub async fn recipes_by_category(&self, category: &str) -> Result<Vec<Recipe>, RecipeError> {
        let recipes = self.source.filter_by_category(category).await?;
        if recipes.is_empty() {
            return Err(RecipeError::NoResults);
        }
        Ok(recipes)
    }

    /// Full details of one recipe
    pub async fn recipe_details(&self, id: &str) -> Result<Option<Recipe>, RecipeError> {
        self.source.lookup(id).await
    }
}

/// Case-insensitive match of a lowercase query against a user recipe's name or ingredient names
fn user_recipe_matches(recipe: &Recipe, query: &str) -> bool {
    recipe.name.to_lowercase().contains(query)
        || recipe
            .ingredients
            .iter()
            .any(|i| i.ingredient.to_lowercase().contains(query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{CookingTime, DietaryPreference, Mood};
    use crate::model::Ingredient;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory source recording every call it receives
    #[derive(Default)]
    struct FakeSource {
        by_name: Vec<Recipe>,
        by_category: HashMap<String, Vec<Recipe>>,
        calls: Mutex<Vec<String>>,
        fail: bool,
    }

    impl FakeSource {
        fn record(&self, call: String) -> Result<(), RecipeError> {
            self.calls.lock().unwrap().push(call);
            if self.fail {
                return Err(RecipeError::Status("503 Service Unavailable".to_string()));
            }
            Ok(())
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RecipeSource for FakeSource {
        async fn categories(&self) -> Result<Vec<Category>, RecipeError> {
            self.record("categories".to_string())?;
            Ok(Vec::new())
        }

        async fn search_by_name(&self, name: &str) -> Result<Vec<Recipe>, RecipeError> {
            self.record(format!("name:{}", name))?;
            Ok(self.by_name.clone())
        }

        async fn filter_by_ingredient(&self, ingredient: &str) -> Result<Vec<Recipe>, RecipeError> {
            self.record(format!("ingredient:{}", ingredient))?;
            Ok(self.by_name.clone())
        }

        async fn filter_by_category(&self, category: &str) -> Result<Vec<Recipe>, RecipeError> {
            self.record(format!("category:{}", category))?;
            Ok(self.by_category.get(category).cloned().unwrap_or_default())
        }

        async fn random(&self) -> Result<Option<Recipe>, RecipeError> {
            self.record("random".to_string())?;
            Ok(self.by_name.first().cloned())
        }

        async fn lookup(&self, id: &str) -> Result<Option<Recipe>, RecipeError> {
            self.record(format!("lookup:{}", id))?;
            Ok(self.by_name.iter().find(|r| r.id == id).cloned())
        }
    }

    fn recipe(id: &str, ingredients: &[&str]) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: id.to_string(),
            ingredients: ingredients.iter().map(|i| Ingredient::new("1", *i)).collect(),
            ..Default::default()
        }
    }

    fn user_recipe(name: &str, ingredients: &[&str]) -> Recipe {
        let mut recipe = recipe(name, ingredients);
        recipe.id = format!("user_{}", name.len());
        recipe.is_user_recipe = true;
        recipe
    }

    fn category_of(prefix: &str, count: usize) -> Vec<Recipe> {
        (0..count).map(|i| recipe(&format!("{}-{}", prefix, i), &[])).collect()
    }

    fn ids(recipes: &[Recipe]) -> Vec<&str> {
        recipes.iter().map(|r| r.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_name_search_without_user_matches() {
        let source = FakeSource {
            by_name: vec![recipe("Chicken Handi", &["Chicken"])],
            ..Default::default()
        };
        let engine = QueryEngine::new(source);
        let user = vec![user_recipe("Tomato Soup", &["Tomato"])];

        let results = engine
            .search(&SearchRequest::by_name("chicken"), &user)
            .await
            .unwrap();

        assert_eq!(ids(&results), vec!["Chicken Handi"]);
        assert_eq!(engine.source().calls(), vec!["name:chicken"]);
    }

    #[tokio::test]
    async fn test_user_recipes_appended_after_api_results() {
        let source = FakeSource {
            by_name: vec![recipe("Chicken Handi", &["Chicken"])],
            ..Default::default()
        };
        let engine = QueryEngine::new(source);
        let user = vec![
            user_recipe("Sunday roast", &["Whole CHICKEN"]),
            user_recipe("Tomato Soup", &["Tomato"]),
        ];

        let results = engine
            .search(&SearchRequest::by_name("Chicken"), &user)
            .await
            .unwrap();

        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Chicken Handi", "Sunday roast"]);
        assert!(results[1].is_user_recipe);
    }

    #[tokio::test]
    async fn test_mood_queries_categories_in_order_and_caps() {
        let mut by_category = HashMap::new();
        by_category.insert("Vegetarian".to_string(), category_of("veg", 8));
        by_category.insert("Salad".to_string(), category_of("salad", 2));
        by_category.insert("Vegan".to_string(), category_of("vegan", 6));
        let engine = QueryEngine::new(FakeSource {
            by_category,
            ..Default::default()
        });

        let results = engine
            .search(&SearchRequest::by_mood(Mood::Healthy), &[])
            .await
            .unwrap();

        assert_eq!(
            engine.source().calls(),
            vec!["category:Vegetarian", "category:Salad", "category:Vegan"]
        );
        assert_eq!(results.len(), 5 + 2 + 5);
        assert_eq!(results[0].id, "veg-0");
        assert_eq!(results[5].id, "salad-0");
        assert_eq!(results[7].id, "vegan-0");
    }

    #[tokio::test]
    async fn test_mood_duplicates_are_kept() {
        let mut by_category = HashMap::new();
        by_category.insert("Chicken".to_string(), vec![recipe("shared", &[])]);
        by_category.insert("Beef".to_string(), vec![recipe("shared", &[])]);
        let engine = QueryEngine::new(FakeSource {
            by_category,
            ..Default::default()
        });

        let results = engine
            .search(&SearchRequest::by_mood(Mood::Spicy), &[])
            .await
            .unwrap();
        assert_eq!(ids(&results), vec!["shared", "shared"]);
    }

    #[tokio::test]
    async fn test_mood_without_selection_issues_no_calls() {
        let engine = QueryEngine::new(FakeSource::default());
        let request = SearchRequest {
            mode: SearchMode::Mood,
            ..Default::default()
        };

        let result = engine.search(&request, &[]).await;
        assert!(matches!(result, Err(RecipeError::NoResults)));
        assert!(engine.source().calls().is_empty());
    }

    #[tokio::test]
    async fn test_time_search_buckets_instruction_length() {
        let mut short = recipe("short", &[]);
        short.instructions = "x".repeat(120);
        let mut medium = recipe("medium", &[]);
        medium.instructions = "x".repeat(700);
        let engine = QueryEngine::new(FakeSource {
            by_name: vec![short, medium],
            ..Default::default()
        });

        let results = engine
            .search(&SearchRequest::by_time(CookingTime::Under30), &[])
            .await
            .unwrap();
        assert_eq!(ids(&results), vec!["medium"]);
        assert_eq!(engine.source().calls(), vec!["name:"]);
    }

    #[tokio::test]
    async fn test_dietary_filter_applies_to_api_results() {
        let engine = QueryEngine::new(FakeSource {
            by_name: vec![
                recipe("frittata", &["Free-range Egg"]),
                recipe("salad", &["Lettuce"]),
            ],
            ..Default::default()
        });
        let request = SearchRequest::by_ingredient("lettuce").with_diet(DietaryPreference::Vegan);

        let results = engine.search(&request, &[]).await.unwrap();
        assert_eq!(ids(&results), vec!["salad"]);
    }

    #[tokio::test]
    async fn test_empty_result_is_no_results() {
        let engine = QueryEngine::new(FakeSource::default());
        let result = engine.search(&SearchRequest::by_name("zzz"), &[]).await;
        assert!(matches!(result, Err(RecipeError::NoResults)));
    }

    #[tokio::test]
    async fn test_blank_name_query_is_rejected_without_calls() {
        let engine = QueryEngine::new(FakeSource::default());
        let result = engine.search(&SearchRequest::by_name("   "), &[]).await;
        assert!(matches!(result, Err(RecipeError::EmptyQuery)));
        assert!(engine.source().calls().is_empty());
    }

    #[tokio::test]
    async fn test_failure_is_distinct_from_no_results() {
        let engine = QueryEngine::new(FakeSource {
            fail: true,
            ..Default::default()
        });
        let err = engine
            .search(&SearchRequest::by_name("pie"), &[])
            .await
            .unwrap_err();
        assert!(err.is_fetch_failure());
    }

    #[tokio::test]
    async fn test_random_recipes_issues_configured_calls() {
        let engine = QueryEngine::new(FakeSource {
            by_name: vec![recipe("same", &[])],
            ..Default::default()
        })
        .with_limits(5, 4);

        let results = engine.random_recipes().await.unwrap();
        assert_eq!(ids(&results), vec!["same"; 4]);
        assert_eq!(engine.source().calls().len(), 4);
    }

    #[tokio::test]
    async fn test_empty_category_is_no_results() {
        let engine = QueryEngine::new(FakeSource::default());
        let result = engine.recipes_by_category("Goat").await;
        assert!(matches!(result, Err(RecipeError::NoResults)));
    }
}
