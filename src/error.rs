//! Error types for the NFL wins analysis library

use thiserror::Error;


pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Foreign key violation on {table}: {detail}")]
    ForeignKey { table: String, detail: String },

    #[error("Duplicate {table} row: {key}")]
    Duplicate { table: String, key: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Unknown report: {name}")]
    UnknownReport { name: String },

    #[error("Database path not provided, {env_var} not set, and no data directory available")]
    MissingDatabasePath { env_var: String },
}

impl StatsError {
    pub(crate) fn foreign_key(table: &str, detail: impl Into<String>) -> Self {
        StatsError::ForeignKey {
            table: table.to_string(),
            detail: detail.into(),
        }
    }

    pub(crate) fn duplicate(table: &str, key: impl Into<String>) -> Self {
        StatsError::Duplicate {
            table: table.to_string(),
            key: key.into(),
        }
    }

    /// Translate an SQLite constraint failure into the matching integrity error.
    ///
    /// Anything that is not a key or uniqueness violation is passed through
    /// as a plain database error.
    pub(crate) fn from_constraint(err: rusqlite::Error, table: &str, key: String) -> Self {
        use rusqlite::ffi;

        match &err {
            rusqlite::Error::SqliteFailure(e, _) => match e.extended_code {
                ffi::SQLITE_CONSTRAINT_PRIMARYKEY | ffi::SQLITE_CONSTRAINT_UNIQUE => {
                    StatsError::duplicate(table, key)
                }
                ffi::SQLITE_CONSTRAINT_FOREIGNKEY => StatsError::foreign_key(table, key),
                _ => StatsError::Database(err),
            },
            _ => StatsError::Database(err),
        }
    }
}
