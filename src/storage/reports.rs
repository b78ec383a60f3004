//! Report catalogue and SQL builders for the win-correlation reports.
//!
//! Every report except the passing leaderboard splits team-seasons into
//! categories and aggregates one value per category. The building blocks:
//!
//! - a *leader* CTE picking, per team-season, the player with the highest
//!   value of a stat (optionally restricted to a position)
//! - a *source* joining that (or another per-team-season relation) to
//!   `TeamStats`
//! - a category expression, usually an inclusive threshold
//! - an aggregate over the rows of each category
//!
//! All SQL fragments are assembled from closed enums and literal constants,
//! so nothing user-supplied is ever interpolated.

use crate::cli::types::Position;
use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How to pick a single leader when several players share the maximum.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum TieMode {
    /// One leader per team-season, ties broken by lowest player id
    #[default]
    Ranked,
    /// Every player equal to the maximum counts as a leader, so tied
    /// team-seasons are counted more than once
    MaxEquality,
}

impl fmt::Display for TieMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TieMode::Ranked => write!(f, "ranked"),
            TieMode::MaxEquality => write!(f, "max-equality"),
        }
    }
}

/// Player stat columns that leader lookups rank on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatColumn {
    PassingYards,
    RushingYards,
    Tackles,
}

impl StatColumn {
    fn column(&self) -> &'static str {
        match self {
            StatColumn::PassingYards => "passing_yards",
            StatColumn::RushingYards => "rushing_yards",
            StatColumn::Tackles => "tackles",
        }
    }
}

/// The fourteen named reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    QbPassingWins,
    TopPassingSeasons,
    RbRushingWins,
    ReceiverYardsWins,
    ReceiverPositionWins,
    ThousandYardReceiversWins,
    TacklerWins,
    TeamInterceptionsWins,
    QbInterceptionsByWins,
    TurnoversByWins,
    PointsAllowedWins,
    PointsAllowedByWins,
    RbRushingMaxByWins,
    ThousandYardRushersByWins,
}

impl ReportKind {
    pub const ALL: [ReportKind; 14] = [
        ReportKind::QbPassingWins,
        ReportKind::TopPassingSeasons,
        ReportKind::RbRushingWins,
        ReportKind::ReceiverYardsWins,
        ReportKind::ReceiverPositionWins,
        ReportKind::ThousandYardReceiversWins,
        ReportKind::TacklerWins,
        ReportKind::TeamInterceptionsWins,
        ReportKind::QbInterceptionsByWins,
        ReportKind::TurnoversByWins,
        ReportKind::PointsAllowedWins,
        ReportKind::PointsAllowedByWins,
        ReportKind::RbRushingMaxByWins,
        ReportKind::ThousandYardRushersByWins,
    ];

    /// Command-line name
    pub fn name(&self) -> &'static str {
        match self {
            ReportKind::QbPassingWins => "qb-passing-wins",
            ReportKind::TopPassingSeasons => "top-passing-seasons",
            ReportKind::RbRushingWins => "rb-rushing-wins",
            ReportKind::ReceiverYardsWins => "receiver-yards-wins",
            ReportKind::ReceiverPositionWins => "receiver-position-wins",
            ReportKind::ThousandYardReceiversWins => "thousand-yard-receivers-wins",
            ReportKind::TacklerWins => "tackler-wins",
            ReportKind::TeamInterceptionsWins => "team-interceptions-wins",
            ReportKind::QbInterceptionsByWins => "qb-interceptions-by-wins",
            ReportKind::TurnoversByWins => "turnovers-by-wins",
            ReportKind::PointsAllowedWins => "points-allowed-wins",
            ReportKind::PointsAllowedByWins => "points-allowed-by-wins",
            ReportKind::RbRushingMaxByWins => "rb-rushing-max-by-wins",
            ReportKind::ThousandYardRushersByWins => "thousand-yard-rushers-by-wins",
        }
    }

    /// Human-readable heading
    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::QbPassingWins => "Average wins by leading QB passing yards (3000)",
            ReportKind::TopPassingSeasons => "Top 10 QB seasons by passing yards",
            ReportKind::RbRushingWins => "Average wins by leading RB rushing yards (1000)",
            ReportKind::ReceiverYardsWins => "Average wins by leading receiver yards (1200)",
            ReportKind::ReceiverPositionWins => "Average wins by leading receiver position",
            ReportKind::ThousandYardReceiversWins => {
                "Average wins by number of 1000-yard receivers (2)"
            }
            ReportKind::TacklerWins => "Average wins by leading tackler tackles (100)",
            ReportKind::TeamInterceptionsWins => "Average wins by team interceptions (15)",
            ReportKind::QbInterceptionsByWins => {
                "Average leading QB interceptions thrown by wins (10)"
            }
            ReportKind::TurnoversByWins => "Average turnovers by wins (10)",
            ReportKind::PointsAllowedWins => "Average wins by points allowed (300)",
            ReportKind::PointsAllowedByWins => "Average points allowed by wins (10)",
            ReportKind::RbRushingMaxByWins => "Most rushing yards by a leading RB by wins (10)",
            ReportKind::ThousandYardRushersByWins => {
                "Team-seasons with a 1000-yard leading RB by wins (10)"
            }
        }
    }

    /// Label for the aggregated value column
    pub fn value_label(&self) -> &'static str {
        match self {
            ReportKind::QbInterceptionsByWins => "Avg INT",
            ReportKind::TurnoversByWins => "Avg TO",
            ReportKind::PointsAllowedByWins => "Avg PA",
            ReportKind::RbRushingMaxByWins => "Max Yds",
            ReportKind::ThousandYardRushersByWins => "Count",
            _ => "Avg Wins",
        }
    }

    /// SQL for this report under the given tie mode
    pub fn sql(&self, ties: TieMode) -> String {
        let qb_passing =
            || leader_cte("leaders", StatColumn::PassingYards, Some(Position::QB), ties);
        let rb_rushing =
            || leader_cte("leaders", StatColumn::RushingYards, Some(Position::RB), ties);

        match self {
            ReportKind::TopPassingSeasons => top_passing_seasons_sql(),

            ReportKind::QbPassingWins => BucketQuery {
                ctes: vec![qb_passing()],
                source: LEADERS_WITH_TEAM_STATS,
                filter: None,
                category: threshold("l.value", 3000, "3000+", "Under 3000"),
                aggregate: "AVG(ts.wins)",
            }
            .to_sql(),

            ReportKind::RbRushingWins => BucketQuery {
                ctes: vec![rb_rushing()],
                source: LEADERS_WITH_TEAM_STATS,
                filter: None,
                category: threshold("l.value", 1000, "1000+", "Under 1000"),
                aggregate: "AVG(ts.wins)",
            }
            .to_sql(),

            ReportKind::ReceiverYardsWins => BucketQuery {
                ctes: Vec::new(),
                source: RECEIVERS_WITH_TEAM_STATS,
                filter: None,
                category: threshold("lr.receiving_yards", 1200, "1200+", "Under 1200"),
                aggregate: "AVG(ts.wins)",
            }
            .to_sql(),

            ReportKind::ReceiverPositionWins => BucketQuery {
                ctes: Vec::new(),
                source: RECEIVERS_WITH_TEAM_STATS,
                filter: None,
                category: "lr.position".to_string(),
                aggregate: "AVG(ts.wins)",
            }
            .to_sql(),

            ReportKind::ThousandYardReceiversWins => BucketQuery {
                ctes: vec![
                    "receivers AS (
    SELECT pts.team, pts.season,
           SUM(CASE WHEN ps.receiving_yards >= 1000 THEN 1 ELSE 0 END) AS value
    FROM PlayerStats ps
    JOIN PlayerTeamSeason pts ON pts.player = ps.player AND pts.season = ps.season
    WHERE ps.receiving_yards IS NOT NULL
    GROUP BY pts.team, pts.season
)"
                    .to_string(),
                ],
                source: "receivers r
JOIN TeamStats ts ON ts.team = r.team AND ts.season = r.season",
                filter: None,
                category: threshold("r.value", 2, "2+", "Under 2"),
                aggregate: "AVG(ts.wins)",
            }
            .to_sql(),

            ReportKind::TacklerWins => BucketQuery {
                ctes: vec![leader_cte("leaders", StatColumn::Tackles, None, ties)],
                source: LEADERS_WITH_TEAM_STATS,
                filter: None,
                category: threshold("l.value", 100, "100+", "Under 100"),
                aggregate: "AVG(ts.wins)",
            }
            .to_sql(),

            ReportKind::TeamInterceptionsWins => BucketQuery {
                ctes: vec![
                    "picks AS (
    SELECT pts.team, pts.season, SUM(ps.interceptions) AS value
    FROM PlayerStats ps
    JOIN PlayerTeamSeason pts ON pts.player = ps.player AND pts.season = ps.season
    WHERE ps.interceptions IS NOT NULL
    GROUP BY pts.team, pts.season
)"
                    .to_string(),
                ],
                source: "picks pk
JOIN TeamStats ts ON ts.team = pk.team AND ts.season = pk.season",
                filter: None,
                category: threshold("pk.value", 15, "15+", "Under 15"),
                aggregate: "AVG(ts.wins)",
            }
            .to_sql(),

            ReportKind::QbInterceptionsByWins => BucketQuery {
                ctes: vec![qb_passing()],
                source: "leaders l
JOIN TeamStats ts ON ts.team = l.team AND ts.season = l.season
JOIN PlayerStats ps ON ps.player = l.player AND ps.season = l.season",
                filter: None,
                category: wins_threshold(),
                aggregate: "AVG(ps.passing_interceptions)",
            }
            .to_sql(),

            ReportKind::TurnoversByWins => BucketQuery {
                ctes: Vec::new(),
                source: "TeamStats ts",
                filter: None,
                category: wins_threshold(),
                aggregate: "AVG(ts.turnovers)",
            }
            .to_sql(),

            ReportKind::PointsAllowedWins => BucketQuery {
                ctes: Vec::new(),
                source: "TeamStats ts",
                filter: Some("ts.points_against IS NOT NULL"),
                category: threshold("ts.points_against", 300, "300+", "Under 300"),
                aggregate: "AVG(ts.wins)",
            }
            .to_sql(),

            ReportKind::PointsAllowedByWins => BucketQuery {
                ctes: Vec::new(),
                source: "TeamStats ts",
                filter: None,
                category: wins_threshold(),
                aggregate: "AVG(ts.points_against)",
            }
            .to_sql(),

            ReportKind::RbRushingMaxByWins => BucketQuery {
                ctes: vec![rb_rushing()],
                source: LEADERS_WITH_TEAM_STATS,
                filter: None,
                category: wins_threshold(),
                aggregate: "MAX(l.value)",
            }
            .to_sql(),

            ReportKind::ThousandYardRushersByWins => BucketQuery {
                ctes: vec![rb_rushing()],
                source: LEADERS_WITH_TEAM_STATS,
                filter: None,
                category: wins_threshold(),
                aggregate: "SUM(CASE WHEN l.value >= 1000 THEN 1 ELSE 0 END)",
            }
            .to_sql(),
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReportKind {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        ReportKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| StatsError::UnknownReport {
                name: s.to_string(),
            })
    }
}

/// Which reports to run: one by name, or `all`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportSelection {
    All,
    One(ReportKind),
}

impl FromStr for ReportSelection {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(ReportSelection::All)
        } else {
            Ok(ReportSelection::One(s.parse()?))
        }
    }
}

const LEADERS_WITH_TEAM_STATS: &str = "leaders l
JOIN TeamStats ts ON ts.team = l.team AND ts.season = l.season";

const RECEIVERS_WITH_TEAM_STATS: &str = "LeadingReceivers lr
JOIN TeamStats ts ON ts.team = lr.team AND ts.season = lr.season";

/// A grouped aggregate over team-seasons
struct BucketQuery {
    ctes: Vec<String>,
    source: &'static str,
    filter: Option<&'static str>,
    category: String,
    aggregate: &'static str,
}

impl BucketQuery {
    fn to_sql(&self) -> String {
        let mut sql = String::new();
        if !self.ctes.is_empty() {
            sql.push_str("WITH ");
            sql.push_str(&self.ctes.join(",\n"));
            sql.push('\n');
        }
        sql.push_str(&format!(
            "SELECT {} AS category, {} AS value, COUNT(*) AS team_seasons\nFROM {}",
            self.category, self.aggregate, self.source
        ));
        if let Some(filter) = self.filter {
            sql.push_str("\nWHERE ");
            sql.push_str(filter);
        }
        sql.push_str("\nGROUP BY category\nORDER BY category");
        sql
    }
}

/// Inclusive threshold split: `expr >= at` lands in `high`
fn threshold(expr: &str, at: i64, high: &str, low: &str) -> String {
    format!("CASE WHEN {expr} >= {at} THEN '{high}' ELSE '{low}' END")
}

fn wins_threshold() -> String {
    threshold("ts.wins", 10, "10+ wins", "Under 10 wins")
}

/// CTE named `name` yielding `(team, season, player, value)` for each
/// team-season's leader in `stat`.
///
/// Players with no recorded value never lead, so team-seasons without any
/// qualifying player drop out of every report built on the CTE.
fn leader_cte(
    name: &str,
    stat: StatColumn,
    position: Option<Position>,
    ties: TieMode,
) -> String {
    let col = stat.column();
    let position_filter = |alias: &str| match &position {
        Some(pos) => format!(" AND {alias}.position = '{pos}'"),
        None => String::new(),
    };

    match ties {
        TieMode::Ranked => format!(
            "{name} AS (
    SELECT team, season, player, value FROM (
        SELECT pts.team AS team, pts.season AS season, ps.player AS player,
               ps.{col} AS value,
               ROW_NUMBER() OVER (
                   PARTITION BY pts.team, pts.season
                   ORDER BY ps.{col} DESC, ps.player ASC
               ) AS rn
        FROM PlayerStats ps
        JOIN PlayerTeamSeason pts ON pts.player = ps.player AND pts.season = ps.season
        JOIN Player p ON p.id = ps.player
        WHERE ps.{col} IS NOT NULL{filter}
    )
    WHERE rn = 1
)",
            filter = position_filter("p"),
        ),
        TieMode::MaxEquality => format!(
            "{name} AS (
    SELECT pts.team AS team, pts.season AS season, ps.player AS player,
           ps.{col} AS value
    FROM PlayerStats ps
    JOIN PlayerTeamSeason pts ON pts.player = ps.player AND pts.season = ps.season
    JOIN Player p ON p.id = ps.player
    WHERE ps.{col} IS NOT NULL{filter}
      AND ps.{col} = (
          SELECT MAX(ps2.{col})
          FROM PlayerStats ps2
          JOIN PlayerTeamSeason pts2 ON pts2.player = ps2.player AND pts2.season = ps2.season
          JOIN Player p2 ON p2.id = ps2.player
          WHERE pts2.team = pts.team AND pts2.season = pts.season{inner_filter}
      )
)",
            filter = position_filter("p"),
            inner_filter = position_filter("p2"),
        ),
    }
}

fn top_passing_seasons_sql() -> String {
    format!(
        "SELECT p.name, ps.season, t.name, ps.passing_yards, ts.wins
FROM PlayerStats ps
JOIN Player p ON p.id = ps.player
JOIN PlayerTeamSeason pts ON pts.player = ps.player AND pts.season = ps.season
JOIN Team t ON t.id = pts.team
JOIN TeamStats ts ON ts.team = pts.team AND ts.season = pts.season
WHERE p.position = '{qb}' AND ps.passing_yards IS NOT NULL
ORDER BY ps.passing_yards DESC, ps.player ASC, ps.season ASC
LIMIT 10",
        qb = Position::QB
    )
}
