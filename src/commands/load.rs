//! Dataset import command

use super::common::open_database;
use crate::{
    storage::{Dataset, TableCounts},
    Result,
};
use std::path::{Path, PathBuf};
use tracing::info;

/// Handle the load command
pub fn handle_load(db: Option<PathBuf>, file: &Path, clear: bool) -> Result<TableCounts> {
    let dataset = Dataset::from_json_file(file)?;
    info!(file = %file.display(), "dataset parsed");

    let (path, mut database) = open_database(db)?;

    if clear {
        println!("Replacing existing data...");
    }

    let inserted = database.load_dataset(&dataset, clear)?;

    println!("✓ Loaded {} into {}", file.display(), path.display());
    println!(
        "  {} seasons, {} teams, {} players, {} team mappings, \
         {} player stat rows, {} team stat rows",
        inserted.seasons,
        inserted.teams,
        inserted.players,
        inserted.player_team_seasons,
        inserted.player_stats,
        inserted.team_stats
    );
    Ok(inserted)
}
