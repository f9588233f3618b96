use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

use soupify_core::store::{PersistMode, StoreOptions};

/// Overrides the platform data directory.
pub(crate) const DATA_DIR_ENV: &str = "SOUPIFY_DATA_DIR";
/// Set to `0`/`false` to skip seeding an empty store.
pub(crate) const SEED_ENV: &str = "SOUPIFY_SEED";

pub struct Config {
    pub db_path: PathBuf,
    pub seed_on_empty: bool,
}

impl Config {
    pub fn load() -> Result<Self> {
        let data_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => ProjectDirs::from("", "", "soupify")
                .context("Could not determine home directory")?
                .data_dir()
                .to_path_buf(),
        };
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;

        let db_path = data_dir.join("soupify.db");
        let seed_on_empty = std::env::var(SEED_ENV).map_or(true, |v| parse_flag(&v));

        Ok(Config {
            db_path,
            seed_on_empty,
        })
    }

    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            persist_mode: PersistMode::Immediate,
            seed_on_empty: self.seed_on_empty,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
