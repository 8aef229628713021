use log::{debug, info};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::RecipeError;
use crate::ingredients::MAX_INGREDIENT_SLOTS;
use crate::model::{Ingredient, Recipe, USER_RECIPE_ID_PREFIX};

const VALIDATION_MESSAGE: &str = "Please fill in at least the recipe name and instructions.";

/// Where the user's recipes are kept between runs.
///
/// The whole list is read and written at once.
pub trait RecipeRepository {
    /// Stored recipes, empty when nothing has been saved yet
    fn load(&self) -> Result<Vec<Recipe>, RecipeError>;

    /// Replace the stored list
    fn save(&self, recipes: &[Recipe]) -> Result<(), RecipeError>;
}

/// Recipes stored as one JSON array in a file
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl RecipeRepository for JsonFileRepository {
    fn load(&self) -> Result<Vec<Recipe>, RecipeError> {
        if !self.path.exists() {
            debug!("No recipe store at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, recipes: &[Recipe]) -> Result<(), RecipeError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(recipes)?;
        // Staged beside the store, then renamed over it; the store is never half written
        let staging = self.staging_path();
        std::fs::write(&staging, content)?;
        std::fs::rename(&staging, &self.path)?;
        debug!("Saved {} recipes to {}", recipes.len(), self.path.display());
        Ok(())
    }
}

/// Recipes kept in memory only
#[derive(Debug, Default)]
pub struct MemoryRepository {
    recipes: Mutex<Vec<Recipe>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: Mutex::new(recipes),
        }
    }

    /// What the last save wrote
    pub fn stored(&self) -> Vec<Recipe> {
        self.recipes.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl RecipeRepository for MemoryRepository {
    fn load(&self) -> Result<Vec<Recipe>, RecipeError> {
        Ok(self.stored())
    }

    fn save(&self, recipes: &[Recipe]) -> Result<(), RecipeError> {
        let mut stored = self
            .recipes
            .lock()
            .map_err(|_| RecipeError::Storage(std::io::Error::other("recipe store poisoned")))?;
        *stored = recipes.to_vec();
        Ok(())
    }
}

/// A recipe as entered by the user, before it is saved
#[derive(Debug, Clone, Default)]
pub struct RecipeDraft {
    pub name: String,
    pub category: Option<String>,
    pub instructions: String,
    pub ingredients: Vec<Ingredient>,
}

/// The user's own recipes, mirrored to a repository after every change
pub struct UserRecipeStore<R> {
    repository: R,
    recipes: Vec<Recipe>,
    placeholder_thumbnail: String,
}

impl<R: RecipeRepository> UserRecipeStore<R> {
    /// Load the stored recipes
    pub fn open(repository: R, placeholder_thumbnail: impl Into<String>) -> Result<Self, RecipeError> {
        let recipes = repository.load()?;
        info!("Loaded {} user recipes", recipes.len());
        Ok(Self {
            repository,
            recipes,
            placeholder_thumbnail: placeholder_thumbnail.into(),
        })
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Validate and save a new recipe, returning the stored copy.
    ///
    /// Blank ingredient rows are dropped and at most
    /// [`MAX_INGREDIENT_SLOTS`] ingredients are kept.
    ///
    /// # Errors
    /// `Validation` when the name or the instructions are blank; the store is
    /// left untouched. Storage errors leave the in-memory list unchanged too.
    pub fn create(&mut self, draft: RecipeDraft) -> Result<Recipe, RecipeError> {
        if draft.name.trim().is_empty() || draft.instructions.trim().is_empty() {
            return Err(RecipeError::Validation(VALIDATION_MESSAGE.to_string()));
        }

        let recipe = Recipe {
            id: self.next_id(),
            name: draft.name.trim().to_string(),
            category: draft.category.filter(|c| !c.trim().is_empty()),
            thumbnail: Some(self.placeholder_thumbnail.clone()),
            instructions: draft.instructions,
            ingredients: draft
                .ingredients
                .into_iter()
                .filter(|i| !i.ingredient.trim().is_empty())
                .take(MAX_INGREDIENT_SLOTS)
                .collect(),
            is_user_recipe: true,
            ..Default::default()
        };

        let mut updated = self.recipes.clone();
        updated.push(recipe.clone());
        self.repository.save(&updated)?;
        self.recipes = updated;

        info!("Added user recipe {} ({})", recipe.name, recipe.id);
        Ok(recipe)
    }

    /// Remove the recipe with this id; `false` when there is none
    pub fn delete(&mut self, id: &str) -> Result<bool, RecipeError> {
        let Some(pos) = self.recipes.iter().position(|r| r.id == id) else {
            debug!("No user recipe with id {}", id);
            return Ok(false);
        };

        let mut updated = self.recipes.clone();
        let removed = updated.remove(pos);
        self.repository.save(&updated)?;
        self.recipes = updated;

        info!("Deleted user recipe {} ({})", removed.name, removed.id);
        Ok(true)
    }

    /// `user_<unix millis>`, moved forward when that id is already taken
    fn next_id(&self) -> String {
        let mut millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        loop {
            let id = format!("{}{}", USER_RECIPE_ID_PREFIX, millis);
            if self.get(&id).is_none() {
                return id;
            }
            millis += 1;
        }
    }
}
