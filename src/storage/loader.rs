//! Bulk import of a complete dataset

use super::{
    models::*,
    queries::{RowWriter, TableCounts},
    schema::StatsDatabase,
};
use crate::cli::types::Season;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Every row needed to populate the database, in any order within each table.
///
/// The JSON form uses the same field names as the table columns:
///
/// ```json
/// {
///   "seasons": [2011],
///   "teams": [{ "id": 1, "name": "New Orleans Saints" }],
///   "players": [{ "id": 1, "name": "Drew Brees", "position": "QB" }],
///   "player_team_seasons": [{ "player": 1, "season": 2011, "team": 1 }],
///   "player_stats": [{ "player": 1, "season": 2011, "passing_yards": 5476 }],
///   "team_stats": [{ "team": 1, "season": 2011, "wins": 13, "losses": 3 }]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub seasons: Vec<Season>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub player_team_seasons: Vec<PlayerTeamSeason>,
    #[serde(default)]
    pub player_stats: Vec<PlayerStats>,
    #[serde(default)]
    pub team_stats: Vec<TeamStats>,
}

impl Dataset {
    /// Read a dataset from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

impl StatsDatabase {
    /// Insert a whole dataset in dependency order.
    ///
    /// With `clear`, every existing row is deleted first. Both steps run in
    /// one transaction: the first integrity error rolls back the delete and
    /// everything inserted so far, and is returned to the caller.
    pub fn load_dataset(&mut self, dataset: &Dataset, clear: bool) -> Result<TableCounts> {
        let tx = self.conn.transaction()?;
        {
            let writer = RowWriter::new(&tx);
            if clear {
                writer.clear_all()?;
                debug!("existing rows deleted");
            }
            insert_dataset_rows(&writer, dataset)?;
        }
        tx.commit()?;

        let inserted = TableCounts {
            players: dataset.players.len() as u32,
            teams: dataset.teams.len() as u32,
            seasons: dataset.seasons.len() as u32,
            player_team_seasons: dataset.player_team_seasons.len() as u32,
            player_stats: dataset.player_stats.len() as u32,
            team_stats: dataset.team_stats.len() as u32,
        };
        info!(?inserted, clear, "dataset loaded");
        Ok(inserted)
    }
}

fn insert_dataset_rows(writer: &RowWriter<'_>, dataset: &Dataset) -> Result<()> {
    for season in &dataset.seasons {
        writer.insert_season(*season)?;
    }
    for team in &dataset.teams {
        writer.insert_team(team)?;
    }
    for player in &dataset.players {
        writer.insert_player(player)?;
    }
    for link in &dataset.player_team_seasons {
        writer.insert_player_team_season(link)?;
    }
    for stats in &dataset.player_stats {
        writer.insert_player_stats(stats)?;
    }
    for stats in &dataset.team_stats {
        writer.insert_team_stats(stats)?;
    }
    Ok(())
}
