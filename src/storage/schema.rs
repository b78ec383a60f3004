//! Database schema and connection management

use crate::error::Result;
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use tracing::debug;

/// Literal DDL for the statistics tables and the `LeadingReceivers` view.
///
/// Column names here are the external interface that reports and existing
/// tooling read from, so they must stay stable.
pub const SCHEMA_SQL: &str = "\
CREATE TABLE IF NOT EXISTS Player (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    position TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS Team (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS Season (
    year INTEGER PRIMARY KEY
);

CREATE TABLE IF NOT EXISTS PlayerTeamSeason (
    player INTEGER NOT NULL,
    season INTEGER NOT NULL,
    team INTEGER NOT NULL,
    PRIMARY KEY (player, season),
    FOREIGN KEY (player) REFERENCES Player(id),
    FOREIGN KEY (season) REFERENCES Season(year),
    FOREIGN KEY (team) REFERENCES Team(id)
);

CREATE TABLE IF NOT EXISTS PlayerStats (
    player INTEGER NOT NULL,
    season INTEGER NOT NULL,
    passing_yards INTEGER,
    passing_tds INTEGER,
    passing_interceptions INTEGER,
    rushing_yards INTEGER,
    rushing_tds INTEGER,
    receiving_yards INTEGER,
    receiving_tds INTEGER,
    receptions INTEGER,
    interceptions INTEGER,
    tackles INTEGER,
    sacks REAL,
    field_goals INTEGER,
    PRIMARY KEY (player, season),
    FOREIGN KEY (player) REFERENCES Player(id),
    FOREIGN KEY (season) REFERENCES Season(year),
    FOREIGN KEY (player, season) REFERENCES PlayerTeamSeason(player, season)
);

CREATE TABLE IF NOT EXISTS TeamStats (
    team INTEGER NOT NULL,
    season INTEGER NOT NULL,
    wins INTEGER NOT NULL,
    losses INTEGER NOT NULL,
    ties INTEGER NOT NULL DEFAULT 0,
    win_loss_perc REAL,
    points_for INTEGER,
    points_against INTEGER,
    turnovers INTEGER,
    total_yards INTEGER,
    pass_yards INTEGER,
    rush_yards INTEGER,
    penalties INTEGER,
    penalty_yards INTEGER,
    exp_pts_tot REAL,
    PRIMARY KEY (team, season),
    FOREIGN KEY (team) REFERENCES Team(id),
    FOREIGN KEY (season) REFERENCES Season(year)
);

CREATE INDEX IF NOT EXISTS idx_player_team_season_team
    ON PlayerTeamSeason(team, season);

CREATE VIEW IF NOT EXISTS LeadingReceivers AS
SELECT team, season, player, player_name, position, receiving_yards
FROM (
    SELECT pts.team AS team,
           pts.season AS season,
           p.id AS player,
           p.name AS player_name,
           p.position AS position,
           ps.receiving_yards AS receiving_yards,
           ROW_NUMBER() OVER (
               PARTITION BY pts.team, pts.season
               ORDER BY ps.receiving_yards DESC, p.id ASC
           ) AS rn
    FROM PlayerStats ps
    JOIN PlayerTeamSeason pts ON pts.player = ps.player AND pts.season = ps.season
    JOIN Player p ON p.id = ps.player
    WHERE ps.receiving_yards IS NOT NULL
)
WHERE rn = 1;
";

/// Connection manager for the statistics database
pub struct StatsDatabase {
    pub(crate) conn: Connection,
}

impl StatsDatabase {
    /// Open (or create) a database file and ensure the schema exists
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure the data directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        debug!(path = %path.display(), "opening statistics database");
        let conn = Connection::open(path)?;
        let mut db = Self { conn };
        db.enable_foreign_keys()?;
        db.initialize_schema()?;
        Ok(db)
    }

    /// Create a fresh in-memory database with the schema applied
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.enable_foreign_keys()?;
        db.initialize_schema()?;
        Ok(db)
    }

    /// Open an existing database file for reporting only.
    ///
    /// The schema is not touched; the file must already have been created
    /// with [`StatsDatabase::open`].
    pub fn open_read_only(path: &Path) -> Result<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self { conn })
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute_batch(SCHEMA_SQL)?;
        Ok(())
    }

    fn enable_foreign_keys(&mut self) -> Result<()> {
        self.conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(())
    }

    /// The literal schema definition
    pub fn schema_sql() -> &'static str {
        SCHEMA_SQL
    }
}
