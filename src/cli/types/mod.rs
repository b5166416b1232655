//! Type-safe wrappers and enums for FPL data.

pub mod difficulty;
pub mod ids;
pub mod position;
pub mod time;

pub use difficulty::{stars_or_na, Difficulty};
pub use ids::{FixtureId, PlayerId, TeamId};
pub use position::{Position, StatColumn};
pub use time::{Gameweek, Season};
