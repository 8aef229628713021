use std::fmt;
use std::str::FromStr;

use crate::error::RecipeError;
use crate::model::Recipe;

const MEAT_TERMS: [&str; 4] = ["chicken", "beef", "pork", "fish"];
const ANIMAL_PRODUCT_TERMS: [&str; 3] = ["milk", "cheese", "egg"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DietaryPreference {
    Vegetarian,
    Vegan,
}

impl DietaryPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryPreference::Vegetarian => "vegetarian",
            DietaryPreference::Vegan => "vegan",
        }
    }

    /// Lowercase terms that disqualify a recipe when found in any ingredient line
    pub fn forbidden_terms(&self) -> Vec<&'static str> {
        match self {
            DietaryPreference::Vegetarian => MEAT_TERMS.to_vec(),
            DietaryPreference::Vegan => MEAT_TERMS
                .iter()
                .chain(ANIMAL_PRODUCT_TERMS.iter())
                .copied()
                .collect(),
        }
    }

    pub fn allows(&self, recipe: &Recipe) -> bool {
        let terms = self.forbidden_terms();
        !recipe.ingredient_lines().iter().any(|line| {
            let line = line.to_lowercase();
            terms.iter().any(|term| line.contains(term))
        })
    }
}

/// Keep the recipes every active preference allows; no preferences keeps everything
pub fn filter_by_diet(recipes: Vec<Recipe>, preferences: &[DietaryPreference]) -> Vec<Recipe> {
    if preferences.is_empty() {
        return recipes;
    }
    recipes
        .into_iter()
        .filter(|recipe| preferences.iter().all(|pref| pref.allows(recipe)))
        .collect()
}

impl FromStr for DietaryPreference {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vegetarian" => Ok(DietaryPreference::Vegetarian),
            "vegan" => Ok(DietaryPreference::Vegan),
            other => Err(RecipeError::Validation(format!(
                "Unknown dietary preference: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for DietaryPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
