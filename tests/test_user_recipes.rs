use recipe_ideas::{
    Ingredient, JsonFileRepository, RecipeDraft, RecipeError, RecipeRepository, UserRecipeStore,
};
use std::fs;

const PLACEHOLDER: &str = "https://via.placeholder.com/300x200?text=Your+Recipe";

fn draft(name: &str, instructions: &str) -> RecipeDraft {
    RecipeDraft {
        name: name.to_string(),
        category: None,
        instructions: instructions.to_string(),
        ingredients: vec![Ingredient::new("1 cup", "Rice"), Ingredient::new("", "")],
    }
}

#[test]
fn test_missing_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let repository = JsonFileRepository::new(dir.path().join("user_recipes.json"));

    let store = UserRecipeStore::open(repository, PLACEHOLDER).unwrap();
    assert!(store.is_empty());
}

#[test]
fn test_create_persists_whole_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("user_recipes.json");

    let mut store = UserRecipeStore::open(JsonFileRepository::new(&path), PLACEHOLDER).unwrap();
    store.create(draft("Fried rice", "Fry the rice.")).unwrap();
    let second = store.create(draft("Rice pudding", "Simmer with milk.")).unwrap();

    let stored = JsonFileRepository::new(&path).load().unwrap();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[1], second);
    assert_eq!(stored[1].ingredients, vec![Ingredient::new("1 cup", "Rice")]);

    let reopened = UserRecipeStore::open(JsonFileRepository::new(&path), PLACEHOLDER).unwrap();
    assert_eq!(reopened.recipes(), store.recipes());
}

#[test]
fn test_rejected_recipe_does_not_touch_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("user_recipes.json");

    let mut store = UserRecipeStore::open(JsonFileRepository::new(&path), PLACEHOLDER).unwrap();
    store.create(draft("Fried rice", "Fry the rice.")).unwrap();
    let before = fs::read_to_string(&path).unwrap();

    let err = store.create(draft("Untitled", "  \n ")).unwrap_err();
    assert!(matches!(err, RecipeError::Validation(_)));
    assert_eq!(
        err.to_string(),
        "Please fill in at least the recipe name and instructions."
    );
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_delete_persists_reduced_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("user_recipes.json");

    let mut store = UserRecipeStore::open(JsonFileRepository::new(&path), PLACEHOLDER).unwrap();
    let first = store.create(draft("Fried rice", "Fry the rice.")).unwrap();
    let second = store.create(draft("Rice pudding", "Simmer with milk.")).unwrap();

    assert!(store.delete(&first.id).unwrap());
    let stored = JsonFileRepository::new(&path).load().unwrap();
    assert_eq!(stored, vec![second]);

    assert!(!store.delete("user_does_not_exist").unwrap());
    assert_eq!(JsonFileRepository::new(&path).load().unwrap().len(), 1);
}

#[test]
fn test_loads_browser_store_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("user_recipes.json");
    fs::write(
        &path,
        r#"[{
            "strMeal": "Granny's Stew",
            "strCategory": "Beef",
            "strInstructions": "Cook slowly for three hours.",
            "ingredients": [
                {"measure": "500g", "ingredient": "Beef"},
                {"measure": "", "ingredient": "Carrots"}
            ],
            "idMeal": "user_1718000000000",
            "strMealThumb": "https://via.placeholder.com/300x200?text=Your+Recipe",
            "isUserRecipe": true
        }]"#,
    )
    .unwrap();

    let store = UserRecipeStore::open(JsonFileRepository::new(&path), PLACEHOLDER).unwrap();
    let recipe = store.get("user_1718000000000").unwrap();
    assert_eq!(recipe.ingredient_lines(), vec!["500g Beef", "Carrots"]);
    assert!(recipe.is_user_recipe);
}

#[test]
fn test_corrupt_store_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("user_recipes.json");
    fs::write(&path, "{not json").unwrap();

    let result = UserRecipeStore::open(JsonFileRepository::new(&path), PLACEHOLDER);
    assert!(matches!(result, Err(RecipeError::Decode(_))));
}

#[test]
fn test_interrupted_save_leaves_store_readable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("user_recipes.json");

    let mut store = UserRecipeStore::open(JsonFileRepository::new(&path), PLACEHOLDER).unwrap();
    let kept = store.create(draft("Fried rice", "Fry the rice.")).unwrap();

    // A save cut off half way only ever touches the staging file
    fs::write(dir.path().join("user_recipes.json.tmp"), "[{\"strMeal\": \"Ha").unwrap();
    let reopened = UserRecipeStore::open(JsonFileRepository::new(&path), PLACEHOLDER).unwrap();
    assert_eq!(reopened.recipes(), &[kept]);

    let mut reopened = reopened;
    reopened.create(draft("Rice pudding", "Simmer with milk.")).unwrap();
    let files: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(files, vec!["user_recipes.json"]);
    assert_eq!(JsonFileRepository::new(&path).load().unwrap().len(), 2);
}

#[test]
fn test_long_ingredient_list_is_capped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("user_recipes.json");

    let mut store = UserRecipeStore::open(JsonFileRepository::new(&path), PLACEHOLDER).unwrap();
    let mut long = draft("Everything bagel", "Bake.");
    long.ingredients = (1..=25).map(|n| Ingredient::new("1", format!("Seed {}", n))).collect();
    store.create(long).unwrap();

    let stored = JsonFileRepository::new(&path).load().unwrap();
    assert_eq!(stored[0].ingredients.len(), 20);
    assert_eq!(stored[0].ingredients.last().unwrap().ingredient, "Seed 20");
}
