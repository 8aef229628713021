use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ingredients::extract_ingredients;

/// Prefix of identifiers assigned to user-authored recipes
pub const USER_RECIPE_ID_PREFIX: &str = "user_";

/// A single (measure, ingredient) row of a recipe
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default)]
    pub measure: String,
    #[serde(default)]
    pub ingredient: String,
}

impl Ingredient {
    pub fn new(measure: impl Into<String>, ingredient: impl Into<String>) -> Self {
        Ingredient {
            measure: measure.into(),
            ingredient: ingredient.into(),
        }
    }

    /// Display line, `"{measure} {ingredient}"` or just the ingredient when unmeasured
    pub fn line(&self) -> String {
        let measure = self.measure.trim();
        if measure.is_empty() {
            self.ingredient.trim().to_string()
        } else {
            format!("{} {}", measure, self.ingredient.trim())
        }
    }
}

/// A recipe, either returned by the recipe API or authored by the user.
///
/// The JSON field names follow the API's meal objects so a stored list of
/// user recipes and an API payload share one shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strCategory", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "strArea", default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(rename = "strMealThumb", default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(rename = "strTags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(rename = "strYoutube", default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(rename = "strSource", default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(rename = "isUserRecipe", default)]
    pub is_user_recipe: bool,
}

impl Recipe {
    /// Build a recipe from one raw meal object of the API.
    ///
    /// Returns `None` when the object lacks an identifier or a name. Filter
    /// endpoints only carry id, name and thumbnail, so everything else is
    /// optional here.
    pub fn from_meal_fields(fields: &Map<String, Value>) -> Option<Self> {
        let id = match text_field(fields, "idMeal") {
            Some(id) => id,
            None => {
                warn!("Skipping meal without idMeal");
                return None;
            }
        };
        let name = match text_field(fields, "strMeal") {
            Some(name) => name,
            None => {
                warn!("Skipping meal {} without strMeal", id);
                return None;
            }
        };

        Some(Recipe {
            id,
            name,
            category: text_field(fields, "strCategory"),
            area: text_field(fields, "strArea"),
            thumbnail: text_field(fields, "strMealThumb"),
            instructions: text_field(fields, "strInstructions").unwrap_or_default(),
            ingredients: extract_ingredients(fields),
            tags: text_field(fields, "strTags"),
            youtube: text_field(fields, "strYoutube"),
            source: text_field(fields, "strSource"),
            is_user_recipe: false,
        })
    }

    /// Ingredient lines as shown on a recipe card and matched by dietary filters
    pub fn ingredient_lines(&self) -> Vec<String> {
        self.ingredients.iter().map(Ingredient::line).collect()
    }

    /// Length of the instructions in Unicode scalar values (`char`s).
    ///
    /// Characters outside the Basic Multilingual Plane, such as emoji, count
    /// once here where a UTF-16 length would count them twice.
    pub fn instruction_length(&self) -> usize {
        self.instructions.chars().count()
    }
}

/// A recipe category as listed by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "idCategory")]
    pub id: String,
    #[serde(rename = "strCategory")]
    pub name: String,
    #[serde(rename = "strCategoryThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strCategoryDescription", default)]
    pub description: Option<String>,
}

/// Non-blank string value of a field, numbers rendered as text
fn text_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_full_meal_fields() {
        let meal = json!({
            "idMeal": "52772",
            "strMeal": "Teriyaki Chicken Casserole",
            "strCategory": "Chicken",
            "strArea": "Japanese",
            "strInstructions": "Preheat oven to 350.",
            "strMealThumb": "https://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg",
            "strTags": "Meat,Casserole",
            "strYoutube": "",
            "strIngredient1": "soy sauce",
            "strMeasure1": "3/4 cup",
            "strIngredient2": "",
            "strMeasure2": ""
        });

        let recipe = Recipe::from_meal_fields(meal.as_object().unwrap()).unwrap();
        assert_eq!(recipe.id, "52772");
        assert_eq!(recipe.category.as_deref(), Some("Chicken"));
        assert_eq!(recipe.youtube, None);
        assert_eq!(recipe.ingredient_lines(), vec!["3/4 cup soy sauce"]);
        assert!(!recipe.is_user_recipe);
    }

    #[test]
    fn test_from_filter_meal_fields() {
        // filter.php only returns these three fields
        let meal = json!({
            "strMeal": "Baked salmon with fennel & tomatoes",
            "strMealThumb": "https://www.themealdb.com/images/media/meals/1548772327.jpg",
            "idMeal": "52959"
        });

        let recipe = Recipe::from_meal_fields(meal.as_object().unwrap()).unwrap();
        assert_eq!(recipe.instructions, "");
        assert!(recipe.ingredients.is_empty());
    }

    #[test]
    fn test_meal_without_id_is_skipped() {
        let meal = json!({ "strMeal": "Nameless" });
        assert!(Recipe::from_meal_fields(meal.as_object().unwrap()).is_none());
    }

    #[test]
    fn test_stored_user_recipe_shape() {
        let stored = r#"{
            "strMeal": "Grandma's Soup",
            "strCategory": "",
            "strInstructions": "Simmer everything.",
            "ingredients": [{"measure": "2", "ingredient": "Carrots"}],
            "idMeal": "user_1700000000000",
            "strMealThumb": "https://via.placeholder.com/300x200?text=Your+Recipe",
            "isUserRecipe": true
        }"#;

        let recipe: Recipe = serde_json::from_str(stored).unwrap();
        assert!(recipe.is_user_recipe);
        assert_eq!(recipe.ingredient_lines(), vec!["2 Carrots"]);
    }

    #[test]
    fn test_ingredient_line_without_measure() {
        assert_eq!(Ingredient::new("", "Salt").line(), "Salt");
        assert_eq!(Ingredient::new(" 1 tsp ", "Salt").line(), "1 tsp Salt");
    }

    #[test]
    fn test_instruction_length_counts_chars() {
        let recipe = Recipe {
            instructions: "crème brûlée".to_string(),
            ..Default::default()
        };
        assert_eq!(recipe.instruction_length(), 12);

        let emoji = Recipe {
            instructions: "Serve 🍰".to_string(),
            ..Default::default()
        };
        assert_eq!(emoji.instruction_length(), 7);
    }
}
