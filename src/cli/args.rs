//! CLI argument definitions and parsing structures.

use super::types::Season;
use crate::storage::{ReportSelection, TieMode};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "nfl-wins",
    about = "Correlate NFL player and team statistics with win totals"
)]
pub struct NflWins {
    /// SQLite database file (or set `NFL_WINS_DB` env var).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// Print debug diagnostics to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the database file and schema if they do not exist
    Init,

    /// Print the schema DDL
    Schema,

    /// Import a JSON dataset (seasons, teams, players, team mappings, stats)
    Load {
        /// Path to the dataset JSON file.
        file: PathBuf,

        /// Clear all data from the database before importing.
        #[clap(long)]
        clear: bool,
    },

    /// List the available report names
    ListReports,

    /// Run one named report, or `all`.
    Report {
        /// Report name (see `list-reports`) or `all`.
        report: ReportSelection,

        /// How to resolve ties between a team's statistical leaders.
        #[clap(long, value_enum, default_value_t = TieMode::Ranked)]
        ties: TieMode,

        /// Output results as JSON instead of text tables.
        #[clap(long)]
        json: bool,
    },

    /// Show each team-season's leading receiver
    Receivers {
        /// Only this season (e.g. 2011).
        #[clap(long, short)]
        season: Option<Season>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}
