use std::fmt;
use std::str::FromStr;

use crate::error::RecipeError;

/// Moods a user can pick instead of typing a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Comforting,
    Light,
    Spicy,
    Healthy,
    Quick,
    Indulgent,
}

impl Mood {
    pub const ALL: [Mood; 6] = [
        Mood::Comforting,
        Mood::Light,
        Mood::Spicy,
        Mood::Healthy,
        Mood::Quick,
        Mood::Indulgent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Comforting => "comforting",
            Mood::Light => "light",
            Mood::Spicy => "spicy",
            Mood::Healthy => "healthy",
            Mood::Quick => "quick",
            Mood::Indulgent => "indulgent",
        }
    }

    /// Categories searched for this mood, in lookup order
    pub fn categories(&self) -> &'static [&'static str] {
        match self {
            Mood::Comforting => &["Beef", "Chicken", "Pork"],
            Mood::Light => &["Vegetarian", "Seafood", "Salad"],
            Mood::Spicy => &["Chicken", "Beef", "Pork"],
            Mood::Healthy => &["Vegetarian", "Salad", "Vegan"],
            Mood::Quick => &["Chicken", "Beef", "Pasta"],
            Mood::Indulgent => &["Dessert", "Pasta", "Beef"],
        }
    }
}

/// Categories for a mood label; unknown labels map to nothing
pub fn mood_categories(label: &str) -> &'static [&'static str] {
    label.parse::<Mood>().map(|m| m.categories()).unwrap_or(&[])
}

impl FromStr for Mood {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RecipeError::Validation(format!("Unknown mood: {}", s)))
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
