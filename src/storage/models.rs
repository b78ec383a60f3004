//! Data models for the storage layer

use crate::cli::types::{PlayerId, Position, Season, TeamId};
use serde::{Deserialize, Serialize};

/// Player identity and roster position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
}

/// Franchise identity; names are unique
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

/// Which team a player played for in a season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerTeamSeason {
    pub player: PlayerId,
    pub season: Season,
    pub team: TeamId,
}

/// Per-player, per-season totals. `None` means the stat was not recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub player: PlayerId,
    pub season: Season,
    #[serde(default)]
    pub passing_yards: Option<i32>,
    #[serde(default)]
    pub passing_tds: Option<i32>,
    #[serde(default)]
    pub passing_interceptions: Option<i32>,
    #[serde(default)]
    pub rushing_yards: Option<i32>,
    #[serde(default)]
    pub rushing_tds: Option<i32>,
    #[serde(default)]
    pub receiving_yards: Option<i32>,
    #[serde(default)]
    pub receiving_tds: Option<i32>,
    #[serde(default)]
    pub receptions: Option<i32>,
    /// Defensive interceptions made
    #[serde(default)]
    pub interceptions: Option<i32>,
    #[serde(default)]
    pub tackles: Option<i32>,
    #[serde(default)]
    pub sacks: Option<f64>,
    #[serde(default)]
    pub field_goals: Option<i32>,
}

impl PlayerStats {
    /// A stats row with nothing recorded yet
    pub fn new(player: PlayerId, season: Season) -> Self {
        Self {
            player,
            season,
            passing_yards: None,
            passing_tds: None,
            passing_interceptions: None,
            rushing_yards: None,
            rushing_tds: None,
            receiving_yards: None,
            receiving_tds: None,
            receptions: None,
            interceptions: None,
            tackles: None,
            sacks: None,
            field_goals: None,
        }
    }
}

/// Per-team, per-season results and aggregate performance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStats {
    pub team: TeamId,
    pub season: Season,
    pub wins: u32,
    pub losses: u32,
    #[serde(default)]
    pub ties: u32,
    #[serde(default)]
    pub win_loss_perc: Option<f64>,
    #[serde(default)]
    pub points_for: Option<i32>,
    #[serde(default)]
    pub points_against: Option<i32>,
    #[serde(default)]
    pub turnovers: Option<i32>,
    #[serde(default)]
    pub total_yards: Option<i32>,
    #[serde(default)]
    pub pass_yards: Option<i32>,
    #[serde(default)]
    pub rush_yards: Option<i32>,
    #[serde(default)]
    pub penalties: Option<i32>,
    #[serde(default)]
    pub penalty_yards: Option<i32>,
    #[serde(default)]
    pub exp_pts_tot: Option<f64>,
}

impl TeamStats {
    pub fn new(team: TeamId, season: Season, wins: u32, losses: u32, ties: u32) -> Self {
        Self {
            team,
            season,
            wins,
            losses,
            ties,
            win_loss_perc: None,
            points_for: None,
            points_against: None,
            turnovers: None,
            total_yards: None,
            pass_yards: None,
            rush_yards: None,
            penalties: None,
            penalty_yards: None,
            exp_pts_tot: None,
        }
    }

    /// Check the recorded win percentage against the win/loss/tie record.
    ///
    /// Ties count as half a win. Percentages are published to three decimal
    /// places, so anything within rounding distance is accepted. Rows with
    /// no percentage or no games are trivially consistent.
    pub fn win_loss_consistent(&self) -> bool {
        let Some(recorded) = self.win_loss_perc else {
            return true;
        };
        let games = self.wins + self.losses + self.ties;
        if games == 0 {
            return true;
        }
        let expected = (self.wins as f64 + 0.5 * self.ties as f64) / games as f64;
        (expected - recorded).abs() < 0.0015
    }
}

/// One row of the `LeadingReceivers` view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadingReceiver {
    pub team: TeamId,
    pub season: Season,
    pub player: PlayerId,
    pub player_name: String,
    pub position: Position,
    pub receiving_yards: i32,
}

/// One category of a bucketed report.
///
/// `value` is `None` when every row in the bucket had a NULL input for the
/// aggregate (SQL `AVG`/`MAX` over nothing).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketRow {
    pub category: String,
    pub value: Option<f64>,
    pub team_seasons: u32,
}

/// One row of the top passing seasons ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassingSeason {
    pub player_name: String,
    pub season: Season,
    pub team_name: String,
    pub passing_yards: i32,
    pub wins: u32,
}
