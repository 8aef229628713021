use serde_json::{Map, Value};

use crate::model::Ingredient;

/// Number of numbered ingredient slots on an API meal object
pub const MAX_INGREDIENT_SLOTS: usize = 20;

/// Extract the ingredient rows of a raw meal object.
///
/// Walks `strIngredient1..=strIngredient20` in order and keeps every slot whose
/// ingredient name is present and non-blank, pairing it with the matching
/// `strMeasureN` (empty when absent).
pub fn extract_ingredients(fields: &Map<String, Value>) -> Vec<Ingredient> {
    (1..=MAX_INGREDIENT_SLOTS)
        .filter_map(|slot| {
            let ingredient = slot_value(fields, &format!("strIngredient{}", slot))?;
            let measure = slot_value(fields, &format!("strMeasure{}", slot)).unwrap_or_default();
            Some(Ingredient::new(measure, ingredient))
        })
        .collect()
}

/// Extract formatted ingredient lines (`"{measure} {ingredient}"`) of a raw meal object
pub fn ingredient_lines(fields: &Map<String, Value>) -> Vec<String> {
    extract_ingredients(fields)
        .iter()
        .map(Ingredient::line)
        .collect()
}

fn slot_value(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}
