use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::time::Duration;

use crate::config::AppConfig;
use crate::error::RecipeError;
use crate::model::{Category, Recipe};
use crate::source::RecipeSource;

/// `{"meals": [...]}`; `meals` is `null` or missing when nothing matched
#[derive(Debug, Deserialize)]
struct MealsEnvelope {
    #[serde(default)]
    meals: Option<Vec<Map<String, Value>>>,
}

#[derive(Debug, Deserialize)]
struct CategoriesEnvelope {
    #[serde(default)]
    categories: Option<Vec<Category>>,
}

/// HTTP client for TheMealDB JSON API
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, RecipeError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("recipe-ideas/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, RecipeError> {
        Self::new(config.base_url.clone(), Some(config.request_timeout()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T, RecipeError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {} {:?}", url, query);

        let mut request = self.client.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(RecipeError::Status(format!("{} for {}", response.status(), url)));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn meals(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Vec<Recipe>, RecipeError> {
        let envelope: MealsEnvelope = self.get(endpoint, query).await?;
        let meals = envelope.meals.unwrap_or_default();
        debug!("{} returned {} meals", endpoint, meals.len());
        Ok(meals.iter().filter_map(Recipe::from_meal_fields).collect())
    }
}

#[async_trait]
impl RecipeSource for MealDbClient {
    async fn categories(&self) -> Result<Vec<Category>, RecipeError> {
        let envelope: CategoriesEnvelope = self.get("categories.php", &[]).await?;
        Ok(envelope.categories.unwrap_or_default())
    }

    async fn search_by_name(&self, name: &str) -> Result<Vec<Recipe>, RecipeError> {
        self.meals("search.php", &[("s", name)]).await
    }

    async fn filter_by_ingredient(&self, ingredient: &str) -> Result<Vec<Recipe>, RecipeError> {
        self.meals("filter.php", &[("i", ingredient)]).await
    }

    async fn filter_by_category(&self, category: &str) -> Result<Vec<Recipe>, RecipeError> {
        self.meals("filter.php", &[("c", category)]).await
    }

    async fn random(&self) -> Result<Option<Recipe>, RecipeError> {
        Ok(self.meals("random.php", &[]).await?.into_iter().next())
    }

    async fn lookup(&self, id: &str) -> Result<Option<Recipe>, RecipeError> {
        Ok(self.meals("lookup.php", &[("i", id)]).await?.into_iter().next())
    }
}
