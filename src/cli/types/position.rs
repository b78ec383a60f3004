//! NFL roster position types.

use crate::error::StatsError;
use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// NFL player positions.
///
/// Stored in the `Player.position` column using the canonical abbreviation
/// returned by `Display`. Parsing accepts the common depth-chart variants
/// (`HB`, `CB`, `OLB`, ...) and folds them into their position group so
/// that leader queries see a single label per group.
///
/// Rows written by other tools may carry labels outside this set
/// (`RB/KR`, `OLB/DE`, ...). Reading such a row yields [`Position::Other`]
/// holding the stored text unchanged, so every surface reports the same
/// label the `GROUP BY position` queries see. Parsing never produces
/// `Other`: new rows must use a known position or alias.
///
/// # Examples
///
/// ```rust
/// use nfl_wins::Position;
///
/// let qb: Position = "qb".parse().unwrap();
/// assert_eq!(qb, Position::QB);
/// assert_eq!("HB".parse::<Position>().unwrap(), Position::RB);
/// assert_eq!(Position::DB.to_string(), "DB");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Position {
    QB,
    RB,
    FB,
    WR,
    TE,
    OL,
    DL,
    LB,
    DB,
    K,
    P,
    LS,
    /// A stored label that matches no known position
    Other(String),
}

impl Position {
    /// Every known position group, in depth-chart order
    pub const KNOWN: [Position; 12] = [
        Position::QB,
        Position::RB,
        Position::FB,
        Position::WR,
        Position::TE,
        Position::OL,
        Position::DL,
        Position::LB,
        Position::DB,
        Position::K,
        Position::P,
        Position::LS,
    ];

    /// Canonical abbreviation used in storage and output.
    pub fn as_str(&self) -> &str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::FB => "FB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::OL => "OL",
            Position::DL => "DL",
            Position::LB => "LB",
            Position::DB => "DB",
            Position::K => "K",
            Position::P => "P",
            Position::LS => "LS",
            Position::Other(label) => label.as_str(),
        }
    }

    /// Map a stored label back to a position without alias folding.
    ///
    /// Exact canonical abbreviations become their variant; anything else is
    /// kept verbatim as `Other`.
    pub fn from_stored(label: &str) -> Self {
        Position::KNOWN
            .iter()
            .find(|known| known.as_str() == label)
            .cloned()
            .unwrap_or_else(|| Position::Other(label.to_string()))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" | "HB" | "TB" => Ok(Position::RB),
            "FB" => Ok(Position::FB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "OL" | "T" | "G" | "C" | "OT" | "OG" | "LT" | "RT" | "LG" | "RG" => Ok(Position::OL),
            "DL" | "DE" | "DT" | "NT" => Ok(Position::DL),
            "LB" | "OLB" | "ILB" | "MLB" | "LOLB" | "ROLB" | "LILB" | "RILB" => Ok(Position::LB),
            "DB" | "CB" | "S" | "SS" | "FS" | "LCB" | "RCB" => Ok(Position::DB),
            "K" | "PK" => Ok(Position::K),
            "P" => Ok(Position::P),
            "LS" => Ok(Position::LS),
            _ => Err(StatsError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Position {
    type Error = StatsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        match position {
            Position::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl ToSql for Position {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Position {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str().map(Position::from_stored)
    }
}
