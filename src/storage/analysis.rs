//! Report execution over the stored statistics

use super::{
    models::*,
    reports::{ReportKind, TieMode},
    schema::StatsDatabase,
};
use crate::cli::types::Season;
use crate::error::Result;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Result rows of one report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", content = "rows", rename_all = "snake_case")]
pub enum ReportRows {
    Buckets(Vec<BucketRow>),
    Ranking(Vec<PassingSeason>),
}

impl ReportRows {
    pub fn len(&self) -> usize {
        match self {
            ReportRows::Buckets(rows) => rows.len(),
            ReportRows::Ranking(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A report together with the rows it produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportResult {
    pub kind: ReportKind,
    pub title: String,
    pub ties: TieMode,
    pub result: ReportRows,
}

impl StatsDatabase {
    /// Run a single report against the current data
    pub fn run_report(&self, kind: ReportKind, ties: TieMode) -> Result<ReportResult> {
        let sql = kind.sql(ties);
        debug!(report = %kind, %ties, "running report");

        let result = match kind {
            ReportKind::TopPassingSeasons => ReportRows::Ranking(self.query_ranking(&sql)?),
            _ => ReportRows::Buckets(self.query_buckets(&sql)?),
        };

        Ok(ReportResult {
            kind,
            title: kind.title().to_string(),
            ties,
            result,
        })
    }

    /// Run all fourteen reports in catalogue order on this connection
    pub fn run_all_reports(&self, ties: TieMode) -> Result<Vec<ReportResult>> {
        ReportKind::ALL
            .iter()
            .map(|kind| self.run_report(*kind, ties))
            .collect()
    }

    fn query_buckets(&self, sql: &str) -> Result<Vec<BucketRow>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map([], |row| {
            Ok(BucketRow {
                category: row.get(0)?,
                value: row.get(1)?,
                team_seasons: row.get(2)?,
            })
        })?;

        let mut buckets = Vec::new();
        for row in rows {
            buckets.push(row?);
        }
        Ok(buckets)
    }

    fn query_ranking(&self, sql: &str) -> Result<Vec<PassingSeason>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map([], |row| {
            Ok(PassingSeason {
                player_name: row.get(0)?,
                season: Season::new(row.get(1)?),
                team_name: row.get(2)?,
                passing_yards: row.get(3)?,
                wins: row.get(4)?,
            })
        })?;

        let mut ranking = Vec::new();
        for row in rows {
            ranking.push(row?);
        }
        Ok(ranking)
    }
}

/// Run all fourteen reports in parallel against a database file.
///
/// `rusqlite::Connection` is not `Sync`, so each report opens its own
/// read-only connection. Results come back in catalogue order.
pub fn run_all_reports_parallel(path: &Path, ties: TieMode) -> Result<Vec<ReportResult>> {
    ReportKind::ALL
        .par_iter()
        .map(|kind| {
            let db = StatsDatabase::open_read_only(path)?;
            db.run_report(*kind, ties)
        })
        .collect()
}
