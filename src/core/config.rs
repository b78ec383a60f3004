//! Database location configuration.
//!
//! Precedence: explicit `--db` flag, then the `NFL_WINS_DB` environment
//! variable, then `<data dir>/nfl-wins/stats.db`.

use crate::error::{Result, StatsError};
use std::path::PathBuf;

pub const DB_PATH_ENV_VAR: &str = "NFL_WINS_DB";

/// Path: ~/.local/share/nfl-wins/stats.db (platform data directory)
pub fn default_database_path() -> Result<PathBuf> {
    let base = dirs::data_dir().ok_or_else(|| StatsError::MissingDatabasePath {
        env_var: DB_PATH_ENV_VAR.to_string(),
    })?;
    Ok(base.join("nfl-wins").join("stats.db"))
}

/// Pick the database path from the CLI value, the environment, or the default
pub fn resolve_database_path(db: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = db {
        return Ok(path);
    }

    match std::env::var(DB_PATH_ENV_VAR) {
        Ok(path) if !path.trim().is_empty() => Ok(PathBuf::from(path)),
        _ => default_database_path(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let path = resolve_database_path(Some(PathBuf::from("/tmp/explicit.db"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/explicit.db"));
    }

    #[test]
    fn test_default_path_layout() {
        if let Ok(path) = default_database_path() {
            assert!(path.ends_with("nfl-wins/stats.db"));
        }
    }
}
