use crate::model::Recipe;

/// Recipes starred during this session, in the order they were starred
#[derive(Debug, Clone, Default)]
pub struct Favorites {
    recipes: Vec<Recipe>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Star the recipe, or unstar it when its id is already starred.
    /// Returns whether it is a favorite afterwards.
    pub fn toggle(&mut self, recipe: &Recipe) -> bool {
        if let Some(pos) = self.recipes.iter().position(|r| r.id == recipe.id) {
            self.recipes.remove(pos);
            false
        } else {
            self.recipes.push(recipe.clone());
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.recipes.iter().any(|r| r.id == id)
    }

    pub fn list(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
