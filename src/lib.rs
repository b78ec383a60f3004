//! NFL Wins Analysis Library
//!
//! Stores NFL player and team season statistics in SQLite and runs a fixed
//! set of reports correlating them with team win totals.
//!
//! ## Features
//!
//! - **Integrity-checked storage**: Foreign keys and unique keys enforced on every insert
//! - **Leading receivers view**: One receiving leader per team-season, deterministic tie-break
//! - **Win-correlation reports**: Fourteen bucketed or ranked reports
//! - **Tie handling**: Ranked leaders by default, or max-equality counting every tied leader
//! - **Parallel execution**: All reports at once over read-only connections
//!
//! ## Quick Start
//!
//! ```rust
//! use nfl_wins::storage::*;
//! use nfl_wins::{PlayerId, Position, Season, TeamId};
//!
//! # fn example() -> nfl_wins::Result<()> {
//! let mut db = StatsDatabase::open_in_memory()?;
//! db.insert_season(Season::new(2011))?;
//! db.insert_team(&Team { id: TeamId::new(1), name: "New Orleans Saints".into() })?;
//! db.insert_player(&Player {
//!     id: PlayerId::new(1),
//!     name: "Drew Brees".into(),
//!     position: Position::QB,
//! })?;
//! db.insert_player_team_season(&PlayerTeamSeason {
//!     player: PlayerId::new(1),
//!     season: Season::new(2011),
//!     team: TeamId::new(1),
//! })?;
//! db.insert_player_stats(&PlayerStats {
//!     passing_yards: Some(5476),
//!     ..PlayerStats::new(PlayerId::new(1), Season::new(2011))
//! })?;
//! db.insert_team_stats(&TeamStats::new(TeamId::new(1), Season::new(2011), 13, 3, 0))?;
//!
//! let report = db.run_report(ReportKind::QbPassingWins, TieMode::Ranked)?;
//! assert_eq!(report.result.len(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! Set the database location to avoid passing `--db` to every command:
//! ```bash
//! export NFL_WINS_DB=$HOME/nfl/stats.db
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{PlayerId, Position, Season, TeamId};
pub use error::{Result, StatsError};
pub use storage::{ReportKind, StatsDatabase, TieMode};

pub use crate::core::DB_PATH_ENV_VAR;
