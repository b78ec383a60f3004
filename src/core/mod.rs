//! Core utilities for the NFL wins CLI
//!
//! This module consolidates the ambient concerns used across the
//! application:
//! - `config`: Database path resolution
//! - `logging`: Diagnostic output setup

pub mod config;
pub mod logging;

// Re-export commonly used items for convenience
pub use config::{default_database_path, resolve_database_path, DB_PATH_ENV_VAR};
pub use logging::init_logging;
