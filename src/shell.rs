use std::str::FromStr;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};

use recipe_ideas::{
    CookingTime, DietaryPreference, Mood, RecipeError, RecipeRepository, RecipeSource, SearchMode,
    Session,
};

use crate::render;

const HELP: &str = "\
Commands:
  search <text>        run a search in the current mode with this text
  mode <name|ingredient|mood|time>
  mood <mood>          comforting, light, spicy, healthy, quick, indulgent
  time <15|30|60>      recipes by estimated cooking time
  diet <vegetarian|vegan>  toggle a dietary preference
  categories           list categories
  category <name>      recipes of one category
  random               ten random recipes
  open <id> / close    show or hide a recipe
  fav <id>             star or unstar a recipe
  favorites            show starred recipes
  mine                 show your own recipes
  delete <id>          delete one of your recipes
  help / quit";

#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Search(String),
    Mode(SearchMode),
    Mood(Mood),
    Time(CookingTime),
    Diet(DietaryPreference),
    Categories,
    Category(String),
    Random,
    Open(String),
    Close,
    Favorite(String),
    Favorites,
    Mine,
    Delete(String),
    Help,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let argument = |what: &str| {
            if rest.is_empty() {
                Err(format!("{} needs {}", word, what))
            } else {
                Ok(rest.to_string())
            }
        };

        match word.to_lowercase().as_str() {
            "search" | "s" => Ok(ShellCommand::Search(rest.to_string())),
            "mode" => rest.parse().map(ShellCommand::Mode).map_err(|e: RecipeError| e.to_string()),
            "mood" => rest.parse().map(ShellCommand::Mood).map_err(|e: RecipeError| e.to_string()),
            "time" => Ok(ShellCommand::Time(CookingTime::from_label(rest))),
            "diet" => rest.parse().map(ShellCommand::Diet).map_err(|e: RecipeError| e.to_string()),
            "categories" => Ok(ShellCommand::Categories),
            "category" => argument("a category name").map(ShellCommand::Category),
            "random" => Ok(ShellCommand::Random),
            "open" => argument("a recipe id").map(ShellCommand::Open),
            "close" => Ok(ShellCommand::Close),
            "fav" => argument("a recipe id").map(ShellCommand::Favorite),
            "favorites" => Ok(ShellCommand::Favorites),
            "mine" => Ok(ShellCommand::Mine),
            "delete" => argument("a recipe id").map(ShellCommand::Delete),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" | "q" => Ok(ShellCommand::Quit),
            other => Err(format!("Unknown command: {} (try help)", other)),
        }
    }
}

/// Read commands from stdin until `quit` or end of input
pub async fn run<S, R>(session: &mut Session<S, R>) -> io::Result<()>
where
    S: RecipeSource,
    R: RecipeRepository,
{
    let mut lines = BufReader::new(io::stdin()).lines();
    let mut stdout = io::stdout();

    print_results(session);
    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<ShellCommand>() {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };

        match command {
            ShellCommand::Search(text) => {
                session.set_query(text);
                session.search().await;
                print_results(session);
            }
            ShellCommand::Mode(mode) => {
                session.set_mode(mode);
                println!("Search mode: {}", mode);
            }
            ShellCommand::Mood(mood) => {
                session.select_mood(mood).await;
                print_results(session);
            }
            ShellCommand::Time(bucket) => {
                session.select_time(bucket).await;
                print_results(session);
            }
            ShellCommand::Diet(preference) => {
                let active = session.toggle_diet(preference);
                println!("{}: {}", preference, if active { "on" } else { "off" });
            }
            ShellCommand::Categories => {
                println!("{}", render::categories(&session.catalog().categories));
            }
            ShellCommand::Category(name) => {
                session.browse_category(&name).await;
                print_results(session);
            }
            ShellCommand::Random => {
                session.load_random().await;
                print_results(session);
            }
            ShellCommand::Open(id) => {
                if session.open(&id).await {
                    if let Some(recipe) = session.detail().recipe() {
                        print!("{}", render::details(recipe));
                    }
                } else {
                    println!("No recipe with id {} on screen", id);
                }
            }
            ShellCommand::Close => session.close(),
            ShellCommand::Favorite(id) => match session.toggle_favorite(&id) {
                Some(true) => println!("Added to favorites"),
                Some(false) => println!("Removed from favorites"),
                None => println!("No recipe with id {} on screen", id),
            },
            ShellCommand::Favorites => {
                session.show_favorites();
                println!("Favorites ({})", session.favorites().len());
                print_results(session);
            }
            ShellCommand::Mine => {
                render::print_cards(session.user_recipes(), Some(session.favorites()));
            }
            ShellCommand::Delete(id) => {
                println!("Are you sure you want to delete this recipe? [y/N]");
                let answer = lines.next_line().await?.unwrap_or_default();
                if matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
                    match session.delete_recipe(&id) {
                        Ok(true) => println!("Recipe deleted successfully!"),
                        Ok(false) => println!("No recipe of yours with id {}", id),
                        Err(e) => println!("{}", e),
                    }
                }
            }
            ShellCommand::Help => println!("{}", HELP),
            ShellCommand::Quit => break,
        }
    }
    Ok(())
}

fn print_results<S, R>(session: &Session<S, R>)
where
    S: RecipeSource,
    R: RecipeRepository,
{
    let state = session.search_state();
    if let Some(notice) = &state.notice {
        println!("{}", notice.message());
        if notice.offers_manual_add() {
            println!("Add one with: recipe-ideas add --name <NAME> --instructions <TEXT>");
        }
    }
    render::print_cards(&state.results, Some(session.favorites()));
}
