//! Command implementations for the NFL wins CLI

pub mod common;
pub mod load;
pub mod receivers;
pub mod report;
pub mod schema;
