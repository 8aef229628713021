use std::fmt;

use crate::model::Recipe;

/// Cooking-time bucket, estimated from how long the instructions are
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CookingTime {
    /// Label `15`: instructions shorter than 500 characters
    Under15,
    /// Label `30`: 500 to 999 characters
    Under30,
    /// Label `60`: 1000 characters or more
    Under60,
    /// Any other label, nothing is filtered
    #[default]
    Any,
}

impl CookingTime {
    /// Bucket for a label; unrecognised labels yield `Any`
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "15" => CookingTime::Under15,
            "30" => CookingTime::Under30,
            "60" => CookingTime::Under60,
            _ => CookingTime::Any,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CookingTime::Under15 => "15",
            CookingTime::Under30 => "30",
            CookingTime::Under60 => "60",
            CookingTime::Any => "",
        }
    }

    pub fn matches_length(&self, instruction_length: usize) -> bool {
        match self {
            CookingTime::Under15 => instruction_length < 500,
            CookingTime::Under30 => (500..1000).contains(&instruction_length),
            CookingTime::Under60 => instruction_length >= 1000,
            CookingTime::Any => true,
        }
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.matches_length(recipe.instruction_length())
    }
}

impl fmt::Display for CookingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CookingTime::Under15 => f.write_str("under 15 minutes"),
            CookingTime::Under30 => f.write_str("under 30 minutes"),
            CookingTime::Under60 => f.write_str("under 1 hour"),
            CookingTime::Any => f.write_str("any time"),
        }
    }
}

/// Keep the recipes whose instruction length falls in the bucket
pub fn filter_by_time(recipes: Vec<Recipe>, bucket: CookingTime) -> Vec<Recipe> {
    recipes.into_iter().filter(|r| bucket.matches(r)).collect()
}
