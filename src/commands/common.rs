//! Common helpers shared across commands.

use crate::{core::resolve_database_path, storage::StatsDatabase, Result};
use std::path::PathBuf;
use tracing::debug;

/// Resolve the configured database path and open it read-write
pub fn open_database(db: Option<PathBuf>) -> Result<(PathBuf, StatsDatabase)> {
    let path = resolve_database_path(db)?;
    debug!(path = %path.display(), "using database");
    let database = StatsDatabase::open(&path)?;
    Ok((path, database))
}

/// Format an optional aggregate for a text table
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "--".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(Some(12.0)), "12.00");
        assert_eq!(format_value(Some(9.666_666)), "9.67");
        assert_eq!(format_value(None), "--");
    }

    #[test]
    fn test_open_database_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("stats.db");
        let (resolved, _db) = open_database(Some(path.clone())).unwrap();
        assert_eq!(resolved, path);
        assert!(path.exists());
    }
}
