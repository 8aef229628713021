use clap::{ArgGroup, Args, Parser, Subcommand};
use log::debug;
use std::io::{self, BufRead, Write};

use recipe_ideas::state::NO_RESULTS_MESSAGE;
use recipe_ideas::{
    open_store, AppConfig, Ingredient, QueryEngine, RecipeDraft, RecipeError, RecipeSearch,
    Session,
};

mod render;
mod shell;

#[derive(Parser, Debug)]
#[command(name = "recipe-ideas", version, about = "Find recipe ideas on TheMealDB")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search recipes by name, ingredient, mood or cooking time
    Search(SearchArgs),
    /// List recipe categories
    Categories,
    /// List the recipes of one category
    Category { name: String },
    /// Show a batch of random recipes
    Random,
    /// Show the full recipe
    Show { id: String },
    /// Save a recipe of your own
    Add(AddArgs),
    /// Delete one of your recipes
    Delete {
        id: String,
        /// Do not ask for confirmation
        #[arg(long, short)]
        yes: bool,
    },
    /// List your own recipes
    Mine,
    /// Interactive session
    Shell,
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("criterion").required(true)))]
struct SearchArgs {
    #[arg(long, group = "criterion")]
    name: Option<String>,
    #[arg(long, group = "criterion")]
    ingredient: Option<String>,
    /// comforting, light, spicy, healthy, quick or indulgent
    #[arg(long, group = "criterion")]
    mood: Option<String>,
    /// Cooking time in minutes: 15, 30 or 60
    #[arg(long, group = "criterion")]
    time: Option<String>,
    /// Text matched against your own recipes in mood and time searches
    #[arg(long, conflicts_with_all = ["name", "ingredient"])]
    query: Option<String>,
    #[arg(long)]
    vegetarian: bool,
    #[arg(long)]
    vegan: bool,
    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct AddArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    instructions: String,
    #[arg(long)]
    category: Option<String>,
    /// Ingredient as "measure|ingredient" or just "ingredient"; repeatable
    #[arg(long = "ingredient")]
    ingredients: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load()?;
    debug!("{:?}", config);

    match cli.command {
        Command::Search(args) => search(&config, args).await?,
        Command::Categories => {
            let engine = QueryEngine::from_config(&config)?;
            for category in engine.categories().await? {
                println!("{}", category.name);
            }
        }
        Command::Category { name } => {
            let engine = QueryEngine::from_config(&config)?;
            match engine.recipes_by_category(&name).await {
                Ok(recipes) => render::print_cards(&recipes, None),
                Err(RecipeError::NoResults) => {
                    println!("No recipes found for {} category.", name)
                }
                Err(e) => return Err(e.into()),
            }
        }
        Command::Random => {
            let engine = QueryEngine::from_config(&config)?;
            render::print_cards(&engine.random_recipes().await?, None);
        }
        Command::Show { id } => {
            let store = open_store(&config)?;
            let recipe = match store.get(&id) {
                Some(recipe) => Some(recipe.clone()),
                None => QueryEngine::from_config(&config)?.recipe_details(&id).await?,
            };
            match recipe {
                Some(recipe) => print!("{}", render::details(&recipe)),
                None => println!("No recipe with id {}", id),
            }
        }
        Command::Add(args) => {
            let mut store = open_store(&config)?;
            let draft = RecipeDraft {
                name: args.name,
                category: args.category,
                instructions: args.instructions,
                ingredients: args.ingredients.iter().map(|s| parse_ingredient(s)).collect(),
            };
            let recipe = store.create(draft)?;
            println!("Recipe added successfully! ({})", recipe.id);
        }
        Command::Delete { id, yes } => {
            let mut store = open_store(&config)?;
            if store.get(&id).is_none() {
                println!("No recipe of yours with id {}", id);
                return Ok(());
            }
            if yes || confirm("Are you sure you want to delete this recipe?")? {
                store.delete(&id)?;
                println!("Recipe deleted successfully!");
            }
        }
        Command::Mine => {
            let store = open_store(&config)?;
            if store.is_empty() {
                println!("You have not added any recipes yet.");
            }
            render::print_cards(store.recipes(), None);
        }
        Command::Shell => {
            let mut session = Session::new(QueryEngine::from_config(&config)?, open_store(&config)?);
            session.start().await;
            shell::run(&mut session).await?;
        }
    }

    Ok(())
}

async fn search(config: &AppConfig, args: SearchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = RecipeSearch::builder();
    if let Some(name) = args.name {
        builder = builder.name(name);
    }
    if let Some(ingredient) = args.ingredient {
        builder = builder.ingredient(ingredient);
    }
    if let Some(mood) = args.mood {
        builder = builder.mood(mood);
    }
    if let Some(time) = args.time {
        builder = builder.time(time);
    }
    if let Some(query) = args.query {
        builder = builder.query(query);
    }
    if args.vegetarian {
        builder = builder.vegetarian();
    }
    if args.vegan {
        builder = builder.vegan();
    }
    let request = builder.build()?;

    let engine = QueryEngine::from_config(config)?;
    let store = open_store(config)?;
    match engine.search(&request, store.recipes()).await {
        Ok(recipes) if args.json => println!("{}", serde_json::to_string_pretty(&recipes)?),
        Ok(recipes) => render::print_cards(&recipes, None),
        Err(RecipeError::NoResults) => {
            println!("{}", NO_RESULTS_MESSAGE);
            println!("Add one with: recipe-ideas add --name <NAME> --instructions <TEXT>");
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

/// `"1 cup|Rice"` → measure and ingredient; without a separator the whole text is the ingredient
fn parse_ingredient(text: &str) -> Ingredient {
    match text.split_once('|') {
        Some((measure, ingredient)) => Ingredient::new(measure.trim(), ingredient.trim()),
        None => Ingredient::new("", text.trim()),
    }
}

fn confirm(question: &str) -> io::Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
