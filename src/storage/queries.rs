//! Row insertion with integrity checks, plus basic lookups

use super::{models::*, schema::StatsDatabase};
use crate::cli::types::{PlayerId, Season, TeamId};
use crate::error::{Result, StatsError};
use rusqlite::{params, Connection, OptionalExtension, Params, Row};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Number of rows currently stored in each table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCounts {
    pub players: u32,
    pub teams: u32,
    pub seasons: u32,
    pub player_team_seasons: u32,
    pub player_stats: u32,
    pub team_stats: u32,
}

/// Integrity-checked writes against a connection or an open transaction.
///
/// A `rusqlite::Transaction` derefs to `Connection`, so the loader runs the
/// same checks inside its transaction that single inserts run in autocommit.
pub(crate) struct RowWriter<'c> {
    conn: &'c Connection,
}

impl<'c> RowWriter<'c> {
    pub(crate) fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    fn exists<P: Params>(&self, sql: &str, params: P) -> Result<bool> {
        let found: Option<i64> = self
            .conn
            .query_row(sql, params, |row| row.get(0))
            .optional()?;
        Ok(found.is_some())
    }

    fn require_player(&self, table: &str, player: PlayerId) -> Result<()> {
        if self.exists("SELECT 1 FROM Player WHERE id = ?", [player.as_u32()])? {
            Ok(())
        } else {
            Err(StatsError::foreign_key(table, format!("player {player} does not exist")))
        }
    }

    fn require_team(&self, table: &str, team: TeamId) -> Result<()> {
        if self.exists("SELECT 1 FROM Team WHERE id = ?", [team.as_u32()])? {
            Ok(())
        } else {
            Err(StatsError::foreign_key(table, format!("team {team} does not exist")))
        }
    }

    fn require_season(&self, table: &str, season: Season) -> Result<()> {
        if self.exists("SELECT 1 FROM Season WHERE year = ?", [season.as_u16()])? {
            Ok(())
        } else {
            Err(StatsError::foreign_key(table, format!("season {season} does not exist")))
        }
    }

    pub(crate) fn insert_player(&self, player: &Player) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO Player (id, name, position) VALUES (?, ?, ?)",
                params![player.id.as_u32(), player.name, player.position],
            )
            .map_err(|e| StatsError::from_constraint(e, "Player", format!("id {}", player.id)))?;
        Ok(())
    }

    pub(crate) fn insert_team(&self, team: &Team) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO Team (id, name) VALUES (?, ?)",
                params![team.id.as_u32(), team.name],
            )
            .map_err(|e| {
                StatsError::from_constraint(e, "Team", format!("{} (id {})", team.name, team.id))
            })?;
        Ok(())
    }

    pub(crate) fn insert_season(&self, season: Season) -> Result<()> {
        self.conn
            .execute("INSERT INTO Season (year) VALUES (?)", [season.as_u16()])
            .map_err(|e| StatsError::from_constraint(e, "Season", season.to_string()))?;
        Ok(())
    }

    pub(crate) fn insert_player_team_season(&self, link: &PlayerTeamSeason) -> Result<()> {
        const TABLE: &str = "PlayerTeamSeason";
        self.require_player(TABLE, link.player)?;
        self.require_season(TABLE, link.season)?;
        self.require_team(TABLE, link.team)?;

        self.conn
            .execute(
                "INSERT INTO PlayerTeamSeason (player, season, team) VALUES (?, ?, ?)",
                params![
                    link.player.as_u32(),
                    link.season.as_u16(),
                    link.team.as_u32()
                ],
            )
            .map_err(|e| {
                StatsError::from_constraint(
                    e,
                    TABLE,
                    format!("player {} season {}", link.player, link.season),
                )
            })?;
        Ok(())
    }

    pub(crate) fn insert_player_stats(&self, stats: &PlayerStats) -> Result<()> {
        const TABLE: &str = "PlayerStats";
        self.require_player(TABLE, stats.player)?;
        self.require_season(TABLE, stats.season)?;
        if !self.exists(
            "SELECT 1 FROM PlayerTeamSeason WHERE player = ? AND season = ?",
            params![stats.player.as_u32(), stats.season.as_u16()],
        )? {
            return Err(StatsError::foreign_key(
                TABLE,
                format!(
                    "player {} has no team for season {}",
                    stats.player, stats.season
                ),
            ));
        }

        self.conn
            .execute(
                "INSERT INTO PlayerStats
                 (player, season, passing_yards, passing_tds, passing_interceptions,
                  rushing_yards, rushing_tds, receiving_yards, receiving_tds, receptions,
                  interceptions, tackles, sacks, field_goals)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
                params![
                    stats.player.as_u32(),
                    stats.season.as_u16(),
                    stats.passing_yards,
                    stats.passing_tds,
                    stats.passing_interceptions,
                    stats.rushing_yards,
                    stats.rushing_tds,
                    stats.receiving_yards,
                    stats.receiving_tds,
                    stats.receptions,
                    stats.interceptions,
                    stats.tackles,
                    stats.sacks,
                    stats.field_goals
                ],
            )
            .map_err(|e| {
                StatsError::from_constraint(
                    e,
                    TABLE,
                    format!("player {} season {}", stats.player, stats.season),
                )
            })?;
        Ok(())
    }

    pub(crate) fn insert_team_stats(&self, stats: &TeamStats) -> Result<()> {
        const TABLE: &str = "TeamStats";
        self.require_team(TABLE, stats.team)?;
        self.require_season(TABLE, stats.season)?;

        if !stats.win_loss_consistent() {
            warn!(
                team = %stats.team,
                season = %stats.season,
                wins = stats.wins,
                losses = stats.losses,
                ties = stats.ties,
                win_loss_perc = ?stats.win_loss_perc,
                "win percentage does not match record"
            );
        }

        self.conn
            .execute(
                "INSERT INTO TeamStats
                 (team, season, wins, losses, ties, win_loss_perc, points_for, points_against,
                  turnovers, total_yards, pass_yards, rush_yards, penalties, penalty_yards,
                  exp_pts_tot)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
                params![
                    stats.team.as_u32(),
                    stats.season.as_u16(),
                    stats.wins,
                    stats.losses,
                    stats.ties,
                    stats.win_loss_perc,
                    stats.points_for,
                    stats.points_against,
                    stats.turnovers,
                    stats.total_yards,
                    stats.pass_yards,
                    stats.rush_yards,
                    stats.penalties,
                    stats.penalty_yards,
                    stats.exp_pts_tot
                ],
            )
            .map_err(|e| {
                StatsError::from_constraint(
                    e,
                    TABLE,
                    format!("team {} season {}", stats.team, stats.season),
                )
            })?;
        Ok(())
    }

    /// Delete every row, children first so foreign keys stay satisfied
    pub(crate) fn clear_all(&self) -> Result<()> {
        self.conn.execute_batch(
            "DELETE FROM PlayerStats;
             DELETE FROM TeamStats;
             DELETE FROM PlayerTeamSeason;
             DELETE FROM Player;
             DELETE FROM Team;
             DELETE FROM Season;",
        )?;
        Ok(())
    }
}

impl StatsDatabase {
    fn writer(&self) -> RowWriter<'_> {
        RowWriter::new(&self.conn)
    }

    /// Insert a player. Duplicate ids are rejected.
    pub fn insert_player(&mut self, player: &Player) -> Result<()> {
        self.writer().insert_player(player)
    }

    /// Insert a team. Duplicate ids and duplicate names are rejected.
    pub fn insert_team(&mut self, team: &Team) -> Result<()> {
        self.writer().insert_team(team)
    }

    pub fn insert_season(&mut self, season: Season) -> Result<()> {
        self.writer().insert_season(season)
    }

    /// Record which team a player was on for a season
    pub fn insert_player_team_season(&mut self, link: &PlayerTeamSeason) -> Result<()> {
        self.writer().insert_player_team_season(link)
    }

    /// Insert a player's season totals.
    ///
    /// The player must already be mapped to a team for that season, otherwise
    /// the row would never show up in team-level reports.
    pub fn insert_player_stats(&mut self, stats: &PlayerStats) -> Result<()> {
        self.writer().insert_player_stats(stats)
    }

    /// Insert a team's season results
    pub fn insert_team_stats(&mut self, stats: &TeamStats) -> Result<()> {
        self.writer().insert_team_stats(stats)
    }

    /// Look up a player by id
    pub fn get_player(&self, id: PlayerId) -> Result<Option<Player>> {
        let player = self
            .conn
            .query_row(
                "SELECT id, name, position FROM Player WHERE id = ?",
                [id.as_u32()],
                |row| {
                    Ok(Player {
                        id: PlayerId::new(row.get(0)?),
                        name: row.get(1)?,
                        position: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(player)
    }

    /// Look up a team by its unique name
    pub fn get_team_by_name(&self, name: &str) -> Result<Option<Team>> {
        let team = self
            .conn
            .query_row("SELECT id, name FROM Team WHERE name = ?", [name], |row| {
                Ok(Team {
                    id: TeamId::new(row.get(0)?),
                    name: row.get(1)?,
                })
            })
            .optional()?;
        Ok(team)
    }

    /// Rows of the `LeadingReceivers` view, optionally for one season
    pub fn leading_receivers(&self, season: Option<Season>) -> Result<Vec<LeadingReceiver>> {
        let mut query = String::from(
            "SELECT team, season, player, player_name, position, receiving_yards
             FROM LeadingReceivers",
        );
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(s) = season {
            query.push_str(" WHERE season = ?");
            params.push(Box::new(s.as_u16()));
        }

        query.push_str(" ORDER BY season, team");

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map(
            rusqlite::params_from_iter(params.iter().map(|p| p.as_ref())),
            |row| self.row_to_leading_receiver(row),
        )?;

        let mut receivers = Vec::new();
        for row in rows {
            receivers.push(row?);
        }
        Ok(receivers)
    }

    /// Count the rows in every table
    pub fn table_counts(&self) -> Result<TableCounts> {
        let count = |table: &str| -> Result<u32> {
            let n: u32 = self
                .conn
                .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;
            Ok(n)
        };

        Ok(TableCounts {
            players: count("Player")?,
            teams: count("Team")?,
            seasons: count("Season")?,
            player_team_seasons: count("PlayerTeamSeason")?,
            player_stats: count("PlayerStats")?,
            team_stats: count("TeamStats")?,
        })
    }

    /// Clear all data from the database (useful for starting fresh)
    pub fn clear_all_data(&mut self) -> Result<()> {
        self.writer().clear_all()
    }

    fn row_to_leading_receiver(&self, row: &Row) -> rusqlite::Result<LeadingReceiver> {
        Ok(LeadingReceiver {
            team: TeamId::new(row.get(0)?),
            season: Season::new(row.get(1)?),
            player: PlayerId::new(row.get(2)?),
            player_name: row.get(3)?,
            position: row.get(4)?,
            receiving_yards: row.get(5)?,
        })
    }
}
