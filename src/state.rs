//! Session state of the client.
//!
//! The displayed result list, the category catalogue and the open recipe are
//! held in separate structures and only change through the operations on
//! [`Session`].

use log::{info, warn};

use crate::engine::QueryEngine;
use crate::error::RecipeError;
use crate::favorites::Favorites;
use crate::filters::{CookingTime, DietaryPreference, Mood};
use crate::model::{Category, Recipe};
use crate::request::{SearchMode, SearchRequest};
use crate::source::RecipeSource;
use crate::store::{RecipeDraft, RecipeRepository, UserRecipeStore};

pub const NO_RESULTS_MESSAGE: &str =
    "No recipes found matching your criteria. Try adjusting your preferences or add your own recipe!";
pub const SEARCH_FAILED_MESSAGE: &str = "Failed to fetch recipes. Please try again.";
pub const RANDOM_FAILED_MESSAGE: &str = "Failed to fetch random recipes. Please try again.";

/// Message shown in place of, or next to, the result list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Nothing matched; the user may add a recipe of their own
    NoResults(String),
    /// An API call failed
    FetchFailed(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::NoResults(m) | Notice::FetchFailed(m) => m,
        }
    }

    pub fn offers_manual_add(&self) -> bool {
        matches!(self, Notice::NoResults(_))
    }
}

/// Current search inputs and what is displayed
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub request: SearchRequest,
    pub results: Vec<Recipe>,
    pub notice: Option<Notice>,
}

impl SearchState {
    fn show(&mut self, results: Vec<Recipe>) {
        self.results = results;
        self.notice = None;
    }

    /// An empty result clears the list; a failed fetch leaves the last results on display
    fn show_notice(&mut self, notice: Notice) {
        if notice.offers_manual_add() {
            self.results.clear();
        }
        self.notice = Some(notice);
    }
}

/// Reference data loaded once per session
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    pub categories: Vec<Category>,
}

/// The recipe opened for a closer look
#[derive(Debug, Clone, Default)]
pub struct DetailState {
    pub selected: Option<Recipe>,
    /// Full record from the API; stays `None` when the lookup failed
    pub details: Option<Recipe>,
}

impl DetailState {
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// The most complete version of the open recipe
    pub fn recipe(&self) -> Option<&Recipe> {
        self.details.as_ref().or(self.selected.as_ref())
    }
}

pub struct Session<S, R> {
    engine: QueryEngine<S>,
    store: UserRecipeStore<R>,
    favorites: Favorites,
    search: SearchState,
    catalog: CatalogState,
    detail: DetailState,
}

impl<S: RecipeSource, R: RecipeRepository> Session<S, R> {
    pub fn new(engine: QueryEngine<S>, store: UserRecipeStore<R>) -> Self {
        Self {
            engine,
            store,
            favorites: Favorites::new(),
            search: SearchState::default(),
            catalog: CatalogState::default(),
            detail: DetailState::default(),
        }
    }

    /// Load categories and a first batch of random recipes
    pub async fn start(&mut self) {
        self.load_categories().await;
        self.load_random().await;
    }

    pub fn search_state(&self) -> &SearchState {
        &self.search
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn detail(&self) -> &DetailState {
        &self.detail
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn user_recipes(&self) -> &[Recipe] {
        self.store.recipes()
    }

    pub fn engine(&self) -> &QueryEngine<S> {
        &self.engine
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.search.request.query = query.into();
    }

    pub fn set_mode(&mut self, mode: SearchMode) {
        self.search.request.mode = mode;
    }

    /// Returns whether the preference is active afterwards
    pub fn toggle_diet(&mut self, preference: DietaryPreference) -> bool {
        self.search.request.toggle_diet(preference)
    }

    /// Switch to mood search for this mood and run it
    pub async fn select_mood(&mut self, mood: Mood) {
        self.search.request.mood = Some(mood);
        self.search.request.mode = SearchMode::Mood;
        self.search().await;
    }

    /// Switch to cooking-time search for this bucket and run it
    pub async fn select_time(&mut self, bucket: CookingTime) {
        self.search.request.cooking_time = bucket;
        self.search.request.mode = SearchMode::Time;
        self.search().await;
    }

    /// Run the current search request.
    ///
    /// A name or ingredient search without query text does nothing.
    pub async fn search(&mut self) {
        let request = self.search.request.clone();
        match self.engine.search(&request, self.store.recipes()).await {
            Ok(results) => {
                info!("Search returned {} recipes", results.len());
                self.search.show(results);
            }
            Err(RecipeError::EmptyQuery) => {}
            Err(RecipeError::NoResults) => {
                self.search
                    .show_notice(Notice::NoResults(NO_RESULTS_MESSAGE.to_string()));
            }
            Err(e) => {
                warn!("Search failed: {}", e);
                self.search
                    .show_notice(Notice::FetchFailed(SEARCH_FAILED_MESSAGE.to_string()));
            }
        }
    }

    /// Show the recipes of one category
    pub async fn browse_category(&mut self, category: &str) {
        match self.engine.recipes_by_category(category).await {
            Ok(results) => self.search.show(results),
            Err(RecipeError::NoResults) => self.search.show_notice(Notice::NoResults(format!(
                "No recipes found for {} category.",
                category
            ))),
            Err(e) => {
                warn!("Loading category {} failed: {}", category, e);
                self.search
                    .show_notice(Notice::FetchFailed(SEARCH_FAILED_MESSAGE.to_string()));
            }
        }
    }

    /// Show a fresh batch of random recipes
    pub async fn load_random(&mut self) {
        match self.engine.random_recipes().await {
            Ok(results) => self.search.show(results),
            Err(e) => {
                warn!("Loading random recipes failed: {}", e);
                self.search
                    .show_notice(Notice::FetchFailed(RANDOM_FAILED_MESSAGE.to_string()));
            }
        }
    }

    /// Categories are optional decoration: a failure is logged and leaves the list empty
    pub async fn load_categories(&mut self) {
        match self.engine.categories().await {
            Ok(categories) => self.catalog.categories = categories,
            Err(e) => warn!("Failed to fetch categories: {}", e),
        }
    }

    /// Replace the displayed results with the favorites
    pub fn show_favorites(&mut self) {
        let favorites = self.favorites.list().to_vec();
        self.search.show(favorites);
    }

    /// Star or unstar a displayed (or already starred) recipe.
    ///
    /// Returns `None` when no such recipe is on screen.
    pub fn toggle_favorite(&mut self, id: &str) -> Option<bool> {
        let recipe = self.find_recipe(id)?.clone();
        Some(self.favorites.toggle(&recipe))
    }

    /// Open a recipe and fetch its full details.
    ///
    /// User recipes are complete already and are not looked up. A failed
    /// lookup is logged and the summary stays on display.
    pub async fn open(&mut self, id: &str) -> bool {
        let Some(recipe) = self.find_recipe(id).cloned() else {
            return false;
        };

        self.detail.details = None;
        if recipe.is_user_recipe {
            self.detail.selected = Some(recipe);
            return true;
        }

        let details = match self.engine.recipe_details(&recipe.id).await {
            Ok(details) => details,
            Err(e) => {
                warn!("Failed to fetch recipe details for {}: {}", recipe.id, e);
                None
            }
        };
        self.detail.selected = Some(recipe);
        self.detail.details = details;
        true
    }

    pub fn close(&mut self) {
        self.detail = DetailState::default();
    }

    pub fn add_recipe(&mut self, draft: RecipeDraft) -> Result<Recipe, RecipeError> {
        self.store.create(draft)
    }

    /// Delete a user recipe; callers confirm with the user first
    pub fn delete_recipe(&mut self, id: &str) -> Result<bool, RecipeError> {
        let deleted = self.store.delete(id)?;
        if deleted {
            self.search.results.retain(|r| r.id != id);
            if self.detail.selected.as_ref().is_some_and(|r| r.id == id) {
                self.close();
            }
        }
        Ok(deleted)
    }

    fn find_recipe(&self, id: &str) -> Option<&Recipe> {
        self.search
            .results
            .iter()
            .chain(self.favorites.list())
            .chain(self.store.recipes())
            .find(|r| r.id == id)
    }
}
