use std::fmt;
use std::str::FromStr;

use crate::error::RecipeError;
use crate::filters::{CookingTime, DietaryPreference, Mood};

/// How the query of a search is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Free-text lookup by recipe name
    #[default]
    Name,
    /// Recipes using one ingredient
    Ingredient,
    /// Recipes from the categories mapped to a mood
    Mood,
    /// Recipes in a cooking-time bucket
    Time,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Name => "name",
            SearchMode::Ingredient => "ingredient",
            SearchMode::Mood => "mood",
            SearchMode::Time => "time",
        }
    }
}

impl FromStr for SearchMode {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SearchMode::Name),
            "ingredient" => Ok(SearchMode::Ingredient),
            "mood" => Ok(SearchMode::Mood),
            "time" => Ok(SearchMode::Time),
            other => Err(RecipeError::Validation(format!("Unknown search mode: {}", other))),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything one search needs. Built fresh for each search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchRequest {
    pub mode: SearchMode,
    /// Free text; also used to pick matching user recipes in every mode
    pub query: String,
    pub mood: Option<Mood>,
    pub cooking_time: CookingTime,
    /// Active dietary preferences, without duplicates
    pub diet: Vec<DietaryPreference>,
}

impl SearchRequest {
    pub fn by_name(query: impl Into<String>) -> Self {
        SearchRequest {
            mode: SearchMode::Name,
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn by_ingredient(ingredient: impl Into<String>) -> Self {
        SearchRequest {
            mode: SearchMode::Ingredient,
            query: ingredient.into(),
            ..Default::default()
        }
    }

    pub fn by_mood(mood: Mood) -> Self {
        SearchRequest {
            mode: SearchMode::Mood,
            mood: Some(mood),
            ..Default::default()
        }
    }

    pub fn by_time(bucket: CookingTime) -> Self {
        SearchRequest {
            mode: SearchMode::Time,
            cooking_time: bucket,
            ..Default::default()
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_diet(mut self, preference: DietaryPreference) -> Self {
        if !self.diet.contains(&preference) {
            self.diet.push(preference);
        }
        self
    }

    /// Flip a dietary preference; returns whether it is now active
    pub fn toggle_diet(&mut self, preference: DietaryPreference) -> bool {
        if let Some(pos) = self.diet.iter().position(|p| *p == preference) {
            self.diet.remove(pos);
            false
        } else {
            self.diet.push(preference);
            true
        }
    }

    /// Name and ingredient searches have nothing to look up without query text
    pub fn requires_query(&self) -> bool {
        matches!(self.mode, SearchMode::Name | SearchMode::Ingredient)
    }
}
