use log::{error, info};
use std::env;

use recipe_browser::{BrowserConfig, RecipeBrowser};

const USAGE: &str = "Usage: recipe-browser [QUERY] [--favorite ID]...";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut query = String::new();
    let mut favorite_ids = Vec::new();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--favorite" | "-f" => {
                let id = args.next().ok_or(USAGE)?;
                favorite_ids.push(id);
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                return Ok(());
            }
            _ => query = arg,
        }
    }

    let config = BrowserConfig::load()?;
    info!("using endpoint {}", config.endpoint);

    let browser = RecipeBrowser::builder().config(config).build()?;

    let store = browser.recipes();
    if let Err(e) = store.fetch_recipes().await {
        error!("{}", e);
        eprintln!("Failed to load recipes.");
        std::process::exit(1);
    }

    for id in &favorite_ids {
        match store.recipes().into_iter().find(|r| &r.id == id) {
            Some(recipe) => store.toggle_favorite(&recipe),
            None => eprintln!("No recipe with id {}", id),
        }
    }

    for recipe in store.search(&query) {
        let star = if store.is_favorite(&recipe.id) { "*" } else { " " };
        println!(
            "{} [{}] {} ({}, {:.1}) prep {} / cook {} / {}",
            star,
            recipe.id,
            recipe.title,
            recipe.category,
            recipe.rating,
            recipe.prep_time,
            recipe.cook_time,
            recipe.servings
        );
    }

    Ok(())
}
