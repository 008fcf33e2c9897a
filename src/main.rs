use std::fs;
use std::io;

use clap::{Parser, ValueEnum};
use recipe_card::{
    snapshot, CardConfig, CustomElement, CustomElementRegistry, Error, RecipeCard, Result,
};

/// Render a recipe card headlessly from a JSON data record
#[derive(Parser)]
#[command(name = "recipe-card", version, about)]
struct Cli {
    /// Path to a RecipeData JSON document, or '-' for stdin
    #[arg(short, long, default_value = "-")]
    data: String,

    /// Output format for the rendered card
    #[arg(short, long, value_enum, default_value_t = Format::Outline)]
    format: Format,

    /// Base path under which star icon assets are resolved
    #[arg(long)]
    icon_base: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Indented tree outline of the shadow subtree
    Outline,
    /// Serialized HTML of the shadow subtree
    Html,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("recipe-card: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let raw = if cli.data == "-" {
        io::read_to_string(io::stdin())?
    } else {
        fs::read_to_string(&cli.data)?
    };
    let value: serde_json::Value = serde_json::from_str(&raw)
        .map_err(|e| Error::DataError(format!("invalid JSON in '{}': {}", cli.data, e)))?;

    let config = match &cli.icon_base {
        Some(base) => CardConfig {
            icon_base: base.clone(),
        },
        None => CardConfig::default(),
    };

    let mut registry = CustomElementRegistry::new();
    let factory_config = config.clone();
    registry.define(RecipeCard::TAG, move || {
        Box::new(RecipeCard::with_config(factory_config.clone()))
    })?;

    let mut card = registry.create(RecipeCard::TAG)?;
    card.set_property("data", value)?;

    let snap = snapshot::snapshot(card.shadow_root());
    match cli.format {
        Format::Outline => print!("{}", snap.outline),
        Format::Html => println!("{}", snap.html),
    }
    Ok(())
}
