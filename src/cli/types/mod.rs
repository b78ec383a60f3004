//! Type-safe wrappers and enums for NFL statistics data.

pub mod ids;
pub mod position;
pub mod time;

pub use ids::{PlayerId, TeamId};
pub use position::Position;
pub use time::Season;
