//! Searching with the builder API
//!
//! Runs a mood search restricted to vegetarian dishes, then a cooking-time
//! search, against the live TheMealDB API.

use recipe_ideas::{AppConfig, QueryEngine, RecipeError, RecipeSearch};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    let engine = QueryEngine::from_config(&config)?;

    println!("=== Comforting, vegetarian ===");
    let request = RecipeSearch::builder()
        .mood("comforting")
        .vegetarian()
        .build()?;
    match engine.search(&request, &[]).await {
        Ok(recipes) => {
            for recipe in recipes {
                println!("{} ({})", recipe.name, recipe.id);
            }
        }
        Err(RecipeError::NoResults) => println!("Nothing comforting and vegetarian today."),
        Err(e) => return Err(e.into()),
    }

    println!("\n=== Under 15 minutes ===");
    let request = RecipeSearch::builder().time("15").build()?;
    let recipes = engine.search(&request, &[]).await?;
    println!("{} quick recipes", recipes.len());

    Ok(())
}
