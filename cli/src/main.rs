mod commands;
mod config;
mod logging;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use uuid::Uuid;

use crate::commands::{
    cmd_add, cmd_dashboard, cmd_delete, cmd_export, cmd_list, cmd_seed, cmd_show,
};
use crate::config::Config;
use soupify_core::models::{
    CookingReminder, FavoriteEntry, Ingredient, MeasurementPreference, NewCookingReminder,
    NewFavoriteEntry, NewIngredient, NewMeasurementPreference, NewRecipe, NewSearchQuery, Recipe,
    SearchQuery,
};
use soupify_core::service::SoupService;

#[derive(Parser)]
#[command(
    name = "soupify",
    version,
    about = "Recipes, ingredients, favorites and cooking reminders, stored locally"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show how many records each collection holds and the next reminder
    Dashboard {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add the sample records if there are no recipes
    Seed {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write every collection as a single JSON document
    Export {
        /// File to write (default: stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Print the --out confirmation as JSON (the export itself is always JSON)
        #[arg(long)]
        json: bool,
    },
    /// Manage recipes
    #[command(subcommand)]
    Recipe(RecordCommands),
    /// Manage pantry ingredients
    #[command(subcommand)]
    Ingredient(RecordCommands),
    /// Manage saved search queries
    #[command(subcommand)]
    Query(RecordCommands),
    /// Manage favorite recipes
    #[command(subcommand)]
    Favorite(RecordCommands),
    /// Manage cooking reminders (listed soonest first)
    #[command(subcommand)]
    Reminder(RecordCommands),
    /// Manage measurement preferences
    #[command(subcommand)]
    Pref(RecordCommands),
}

#[derive(Subcommand)]
enum RecordCommands {
    /// Add a record from a JSON form file ("-" reads stdin)
    Add {
        /// Path to the form file
        form: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List records, optionally filtered by a case-insensitive search term
    List {
        /// Search term
        #[arg(short, long)]
        search: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show every field of one record
    Show {
        /// Record ID
        id: Uuid,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete records by their position in `list` (same --search as the list)
    Delete {
        /// 1-based positions as shown in the # column
        #[arg(required = true)]
        positions: Vec<usize>,
        /// Search term the positions refer to
        #[arg(short, long)]
        search: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let mut service = SoupService::open(&config.db_path, config.store_options())?;
    tracing::debug!(db = %config.db_path.display(), "store opened");

    match cli.command {
        Commands::Dashboard { json } => cmd_dashboard(&service, json),
        Commands::Seed { json } => cmd_seed(&mut service, json),
        Commands::Export { out, json } => cmd_export(&service, out.as_deref(), json),
        Commands::Recipe(cmd) => run_records::<NewRecipe, Recipe>(&mut service, cmd),
        Commands::Ingredient(cmd) => run_records::<NewIngredient, Ingredient>(&mut service, cmd),
        Commands::Query(cmd) => run_records::<NewSearchQuery, SearchQuery>(&mut service, cmd),
        Commands::Favorite(cmd) => {
            run_records::<NewFavoriteEntry, FavoriteEntry>(&mut service, cmd)
        }
        Commands::Reminder(cmd) => {
            run_records::<NewCookingReminder, CookingReminder>(&mut service, cmd)
        }
        Commands::Pref(cmd) => {
            run_records::<NewMeasurementPreference, MeasurementPreference>(&mut service, cmd)
        }
    }
}

fn run_records<F, T>(service: &mut SoupService, command: RecordCommands) -> Result<()>
where
    F: soupify_core::validation::Form<Output = T>,
    T: commands::Listing,
{
    match command {
        RecordCommands::Add { form, json } => cmd_add::<F>(service, &form, json),
        RecordCommands::List { search, json } => cmd_list::<T>(service, search.as_deref(), json),
        RecordCommands::Show { id, json } => cmd_show::<T>(service, id, json),
        RecordCommands::Delete {
            positions,
            search,
            json,
        } => cmd_delete::<T>(service, &positions, search.as_deref(), json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_delete_with_search() {
        let cli = Cli::try_parse_from(["soupify", "recipe", "delete", "2", "3", "--search", "tomato"])
            .unwrap();
        match cli.command {
            Commands::Recipe(RecordCommands::Delete {
                positions, search, ..
            }) => {
                assert_eq!(positions, vec![2, 3]);
                assert_eq!(search.as_deref(), Some("tomato"));
            }
            _ => panic!("expected recipe delete"),
        }
    }

    #[test]
    fn test_delete_requires_a_position() {
        assert!(Cli::try_parse_from(["soupify", "reminder", "delete"]).is_err());
    }

    #[test]
    fn test_show_rejects_bad_id() {
        assert!(Cli::try_parse_from(["soupify", "pref", "show", "not-a-uuid"]).is_err());
    }
}
