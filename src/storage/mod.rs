//! Storage layer for the NFL wins analysis
//!
//! This module provides a clean abstraction over the SQLite database,
//! organized into logical components:
//! - `models`: Row and result structures
//! - `schema`: Database connection and schema management
//! - `queries`: Integrity-checked inserts and basic lookups
//! - `loader`: Bulk dataset import
//! - `reports`: Report catalogue and SQL builders
//! - `analysis`: Report execution

pub mod analysis;
pub mod loader;
pub mod models;
pub mod queries;
pub mod reports;
pub mod schema;


// Re-export the main types and database struct for easy access
pub use analysis::{run_all_reports_parallel, ReportResult, ReportRows};
pub use loader::Dataset;
pub use models::*;
pub use queries::TableCounts;
pub use reports::{ReportKind, ReportSelection, TieMode};
pub use schema::StatsDatabase;
