//! Shared fixture builder for integration tests
#![allow(dead_code)]

use nfl_wins::storage::*;
use nfl_wins::{PlayerId, Position, Season, TeamId};
use std::collections::{BTreeMap, BTreeSet};

/// Builds a small league in an in-memory database, creating seasons and
/// teams on first use.
pub struct LeagueBuilder {
    pub db: StatsDatabase,
    next_player: u32,
    seasons: BTreeSet<u16>,
    teams: BTreeMap<String, TeamId>,
}

impl LeagueBuilder {
    pub fn new() -> Self {
        Self::with_database(StatsDatabase::open_in_memory().unwrap())
    }

    pub fn with_database(db: StatsDatabase) -> Self {
        Self {
            db,
            next_player: 1,
            seasons: BTreeSet::new(),
            teams: BTreeMap::new(),
        }
    }

    fn ensure_season(&mut self, season: u16) {
        if self.seasons.insert(season) {
            self.db.insert_season(Season::new(season)).unwrap();
        }
    }

    pub fn team(&mut self, name: &str) -> TeamId {
        if let Some(id) = self.teams.get(name) {
            return *id;
        }
        let id = TeamId::new(self.teams.len() as u32 + 1);
        self.db
            .insert_team(&Team {
                id,
                name: name.to_string(),
            })
            .unwrap();
        self.teams.insert(name.to_string(), id);
        id
    }

    /// Record a team's season with the given wins over a 16-game schedule
    pub fn team_season(&mut self, name: &str, season: u16, wins: u32) -> TeamId {
        self.team_season_with(name, season, wins, |_| {})
    }

    pub fn team_season_with(
        &mut self,
        name: &str,
        season: u16,
        wins: u32,
        edit: impl FnOnce(&mut TeamStats),
    ) -> TeamId {
        self.ensure_season(season);
        let team = self.team(name);
        let mut stats = TeamStats::new(team, Season::new(season), wins, 16 - wins, 0);
        edit(&mut stats);
        self.db.insert_team_stats(&stats).unwrap();
        team
    }

    /// Add a player to a team for one season with the given stats
    pub fn player(
        &mut self,
        team: &str,
        season: u16,
        name: &str,
        position: Position,
        edit: impl FnOnce(&mut PlayerStats),
    ) -> PlayerId {
        self.ensure_season(season);
        let team = self.team(team);
        let id = PlayerId::new(self.next_player);
        self.next_player += 1;

        self.db
            .insert_player(&Player {
                id,
                name: name.to_string(),
                position,
            })
            .unwrap();
        self.db
            .insert_player_team_season(&PlayerTeamSeason {
                player: id,
                season: Season::new(season),
                team,
            })
            .unwrap();

        let mut stats = PlayerStats::new(id, Season::new(season));
        edit(&mut stats);
        self.db.insert_player_stats(&stats).unwrap();
        id
    }

    pub fn qb(&mut self, team: &str, season: u16, name: &str, passing_yards: i32) -> PlayerId {
        self.player(team, season, name, Position::QB, |s| {
            s.passing_yards = Some(passing_yards)
        })
    }

    pub fn rb(&mut self, team: &str, season: u16, name: &str, rushing_yards: i32) -> PlayerId {
        self.player(team, season, name, Position::RB, |s| {
            s.rushing_yards = Some(rushing_yards)
        })
    }

    pub fn receiver(
        &mut self,
        team: &str,
        season: u16,
        name: &str,
        position: Position,
        receiving_yards: i32,
    ) -> PlayerId {
        self.player(team, season, name, position, |s| {
            s.receiving_yards = Some(receiving_yards)
        })
    }
}

/// Bucket rows of a report, panicking if it is the ranking report
pub fn buckets(db: &StatsDatabase, kind: ReportKind, ties: TieMode) -> Vec<BucketRow> {
    match db.run_report(kind, ties).unwrap().result {
        ReportRows::Buckets(rows) => rows,
        ReportRows::Ranking(_) => panic!("{kind} is not a bucketed report"),
    }
}

/// Look up one bucket by label
pub fn bucket<'a>(rows: &'a [BucketRow], category: &str) -> &'a BucketRow {
    rows.iter()
        .find(|r| r.category == category)
        .unwrap_or_else(|| panic!("missing bucket {category:?} in {rows:?}"))
}
