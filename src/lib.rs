//! Fantasy Premier League season analysis library
//!
//! Loads a season of FPL data (players, teams, fixtures and per-fixture
//! player output) from the public `vaastav/Fantasy-Premier-League`
//! repository or a local copy of it, and relates a player's points to the
//! difficulty of each fixture they played.
//!
//! ## Features
//!
//! - **Dataset Loading**: CSV tables fetched over HTTP with a local file cache
//! - **Name Resolution**: Case-insensitive matching with explicit ambiguity
//! - **Fixture Join**: Each gameweek row carries its own fixture's difficulty,
//!   so double gameweeks stay two rows
//! - **Season Summary**: Totals, per-difficulty breakdown and correlation
//! - **Charting**: SVG plot of points against fixture difficulty
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fpl_season::{
//!     analysis::{analyze_player, resolve_player, JoinOptions, Resolution},
//!     dataset::{DataSource, DatasetLoader},
//!     Season,
//! };
//!
//! # async fn example() -> fpl_season::Result<()> {
//! let source = DataSource::Local { root: "data".into() };
//! let dataset = DatasetLoader::new(source, Season::new(2024))?.load().await?;
//!
//! if let Resolution::Resolved(player) = resolve_player(&dataset, "salah")? {
//!     let season = analyze_player(&dataset, player, JoinOptions::default());
//!     println!("{} points", season.summary.total_points);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a local checkout or a mirror instead of GitHub:
//! ```bash
//! export FPL_DATA_DIR=~/src/Fantasy-Premier-League/data
//! export FPL_DATA_URL=https://example.org/fpl/data
//! ```

pub mod analysis;
pub mod chart;
pub mod cli;
pub mod commands;
pub mod core;
pub mod dataset;
pub mod error;

// Re-export commonly used types
pub use cli::types::{Difficulty, FixtureId, Gameweek, PlayerId, Position, Season, TeamId};
pub use error::{FplError, Result};

pub const DATA_DIR_ENV_VAR: &str = "FPL_DATA_DIR";
pub const DATA_URL_ENV_VAR: &str = "FPL_DATA_URL";
