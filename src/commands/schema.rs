//! Schema commands: create the database, print the DDL

use super::common::open_database;
use crate::{storage::StatsDatabase, Result};
use std::path::PathBuf;

/// Handle the init command
pub fn handle_init(db: Option<PathBuf>) -> Result<()> {
    let (path, database) = open_database(db)?;
    let counts = database.table_counts()?;

    println!("✓ Database ready at {}", path.display());
    println!(
        "  {} players, {} teams, {} seasons, {} team-season stat rows",
        counts.players, counts.teams, counts.seasons, counts.team_stats
    );
    Ok(())
}

/// Handle the schema command
pub fn handle_schema() -> Result<()> {
    print!("{}", StatsDatabase::schema_sql());
    Ok(())
}
