mod diet;
mod mood;
mod time;

pub use diet::{filter_by_diet, DietaryPreference};
pub use mood::{mood_categories, Mood};
pub use time::{filter_by_time, CookingTime};
