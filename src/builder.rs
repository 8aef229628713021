use crate::filters::{CookingTime, DietaryPreference, Mood};
use crate::request::{SearchMode, SearchRequest};
use crate::RecipeError;

/// What the search looks for
#[derive(Debug, Clone)]
enum Criterion {
    Name(String),
    Ingredient(String),
    Mood(String),
    Time(String),
}

/// Builder for search requests
#[derive(Debug, Default)]
pub struct SearchRequestBuilder {
    criteria: Vec<Criterion>,
    query: Option<String>,
    diet: Vec<DietaryPreference>,
}

impl SearchRequestBuilder {
    /// Search recipes by name
    ///
    /// # Example
    /// ```
    /// use recipe_ideas::RecipeSearch;
    ///
    /// let request = RecipeSearch::builder().name("arrabiata").build().unwrap();
    /// assert_eq!(request.query, "arrabiata");
    /// ```
    pub fn name(mut self, query: impl Into<String>) -> Self {
        self.criteria.push(Criterion::Name(query.into()));
        self
    }

    /// Search recipes using an ingredient
    ///
    /// # Example
    /// ```
    /// use recipe_ideas::{RecipeSearch, SearchMode};
    ///
    /// let request = RecipeSearch::builder().ingredient("chicken_breast").build().unwrap();
    /// assert_eq!(request.mode, SearchMode::Ingredient);
    /// ```
    pub fn ingredient(mut self, ingredient: impl Into<String>) -> Self {
        self.criteria.push(Criterion::Ingredient(ingredient.into()));
        self
    }

    /// Search by mood: comforting, light, spicy, healthy, quick or indulgent
    ///
    /// The label is parsed into a [`Mood`] by [`build`](Self::build), which
    /// returns a `Builder` error for any other label. A request can therefore
    /// never carry an unknown mood; the untyped [`mood_categories`] lookup
    /// is where an unknown label maps to no categories.
    ///
    /// [`mood_categories`]: crate::filters::mood_categories
    ///
    /// # Example
    /// ```
    /// use recipe_ideas::{Mood, RecipeSearch};
    ///
    /// let request = RecipeSearch::builder().mood("healthy").build().unwrap();
    /// assert_eq!(request.mood, Some(Mood::Healthy));
    /// ```
    pub fn mood(mut self, mood: impl Into<String>) -> Self {
        self.criteria.push(Criterion::Mood(mood.into()));
        self
    }

    /// Search by cooking time bucket: `15`, `30` or `60` minutes.
    /// Any other label lists everything.
    pub fn time(mut self, bucket: impl Into<String>) -> Self {
        self.criteria.push(Criterion::Time(bucket.into()));
        self
    }

    /// Text matched against the user's own recipes in mood and time searches
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Leave out recipes with meat or fish
    pub fn vegetarian(self) -> Self {
        self.diet(DietaryPreference::Vegetarian)
    }

    /// Leave out recipes with meat, fish, milk, cheese or eggs
    pub fn vegan(self) -> Self {
        self.diet(DietaryPreference::Vegan)
    }

    pub fn diet(mut self, preference: DietaryPreference) -> Self {
        if !self.diet.contains(&preference) {
            self.diet.push(preference);
        }
        self
    }

    /// Build the request
    ///
    /// # Errors
    /// Returns `RecipeError::Builder` if:
    /// - no search criterion was given, or more than one
    /// - the mood is not one of the known moods
    pub fn build(self) -> Result<SearchRequest, RecipeError> {
        let criterion = match self.criteria.as_slice() {
            [] => {
                return Err(RecipeError::Builder(
                    "No search criterion specified. Use .name(), .ingredient(), .mood() or .time()"
                        .to_string(),
                ))
            }
            [criterion] => criterion.clone(),
            _ => {
                return Err(RecipeError::Builder(
                    "Only one of .name(), .ingredient(), .mood() or .time() can be used".to_string(),
                ))
            }
        };

        let mut request = match criterion {
            Criterion::Name(query) => SearchRequest::by_name(query),
            Criterion::Ingredient(ingredient) => SearchRequest::by_ingredient(ingredient),
            Criterion::Mood(label) => {
                let mood: Mood = label
                    .parse()
                    .map_err(|e: RecipeError| RecipeError::Builder(e.to_string()))?;
                SearchRequest::by_mood(mood)
            }
            Criterion::Time(label) => SearchRequest::by_time(CookingTime::from_label(&label)),
        };

        if let Some(query) = self.query {
            if matches!(request.mode, SearchMode::Name | SearchMode::Ingredient) {
                return Err(RecipeError::Builder(
                    ".query() only applies to mood and time searches".to_string(),
                ));
            }
            request.query = query;
        }
        request.diet = self.diet;
        Ok(request)
    }
}

/// Main entry point for the builder API
pub struct RecipeSearch;

impl RecipeSearch {
    /// Creates a new builder for a search request
    ///
    /// # Example
    /// ```
    /// use recipe_ideas::RecipeSearch;
    ///
    /// let builder = RecipeSearch::builder();
    /// ```
    pub fn builder() -> SearchRequestBuilder {
        SearchRequestBuilder::default()
    }
}
