use recipe_ideas::{Category, Favorites, Recipe};

const SUMMARY_LENGTH: usize = 100;

/// One recipe card: name, category, id, star and a short preview
pub fn card(recipe: &Recipe, favorite: bool) -> String {
    let star = if favorite { "★" } else { "☆" };
    let mut out = format!("{} {}", star, recipe.name);
    if let Some(category) = recipe.category.as_deref().filter(|c| !c.is_empty()) {
        out.push_str(&format!(" [{}]", category));
    }
    if recipe.is_user_recipe {
        out.push_str(" (your recipe)");
    }
    out.push_str(&format!("\n    id: {}", recipe.id));

    let preview: String = recipe.instructions.chars().take(SUMMARY_LENGTH).collect();
    if !preview.is_empty() {
        let ellipsis = if recipe.instruction_length() > SUMMARY_LENGTH { "..." } else { "" };
        out.push_str(&format!("\n    {}{}", preview.replace(['\r', '\n'], " "), ellipsis));
    }
    out
}

pub fn print_cards(recipes: &[Recipe], favorites: Option<&Favorites>) {
    for recipe in recipes {
        let favorite = favorites.is_some_and(|f| f.contains(&recipe.id));
        println!("{}\n", card(recipe, favorite));
    }
}

/// Full recipe: header, ingredient list, instructions and links
pub fn details(recipe: &Recipe) -> String {
    let mut out = format!("{}\n{}\n", recipe.name, "=".repeat(recipe.name.chars().count()));

    let mut facts = Vec::new();
    if let Some(category) = recipe.category.as_deref().filter(|c| !c.is_empty()) {
        facts.push(format!("Category: {}", category));
    }
    if let Some(area) = &recipe.area {
        facts.push(format!("Cuisine: {}", area));
    }
    if let Some(tags) = &recipe.tags {
        facts.push(format!("Tags: {}", tags));
    }
    for fact in facts {
        out.push_str(&fact);
        out.push('\n');
    }

    let ingredients = recipe.ingredient_lines();
    if !ingredients.is_empty() {
        out.push_str("\nIngredients\n");
        for line in ingredients {
            out.push_str(&format!("  - {}\n", line));
        }
    }

    if !recipe.instructions.trim().is_empty() {
        out.push_str("\nInstructions\n");
        out.push_str(recipe.instructions.trim());
        out.push('\n');
    }

    if let Some(youtube) = &recipe.youtube {
        out.push_str(&format!("\nVideo: {}\n", youtube));
    }
    if let Some(source) = &recipe.source {
        out.push_str(&format!("Source: {}\n", source));
    }
    out
}

pub fn categories(categories: &[Category]) -> String {
    categories
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
