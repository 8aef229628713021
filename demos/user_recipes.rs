//! Managing your own recipes
//!
//! Adds a recipe to a store in a temporary directory, finds it through a
//! name search and deletes it again.

use recipe_ideas::{
    Ingredient, JsonFileRepository, QueryEngine, RecipeDraft, SearchRequest, UserRecipeStore,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::temp_dir().join("recipe-ideas-demo.json");
    let mut store = UserRecipeStore::open(
        JsonFileRepository::new(&path),
        "https://via.placeholder.com/300x200?text=Your+Recipe",
    )?;

    let recipe = store.create(RecipeDraft {
        name: "Midnight noodles".to_string(),
        category: Some("Pasta".to_string()),
        instructions: "Boil the noodles, toss with chilli oil and spring onion.".to_string(),
        ingredients: vec![
            Ingredient::new("200g", "Egg noodles"),
            Ingredient::new("2 tbsp", "Chilli oil"),
        ],
    })?;
    println!("Saved {} as {}", recipe.name, recipe.id);

    let engine = QueryEngine::new(recipe_ideas::MealDbClient::new(
        "https://www.themealdb.com/api/json/v1/1",
        None,
    )?);
    let results = engine
        .search(&SearchRequest::by_name("noodles"), store.recipes())
        .await?;
    for found in results.iter().filter(|r| r.is_user_recipe) {
        println!("Found your recipe: {}", found.name);
    }

    store.delete(&recipe.id)?;
    println!("Deleted, {} recipes left in {}", store.len(), path.display());
    Ok(())
}
