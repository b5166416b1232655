//! Analysis pipeline: resolve a player, join fixtures, summarize.
//!
//! Every stage is a pure function over a borrowed [`Dataset`]:
//! - `resolver`: free-text name → [`Resolution`]
//! - `joiner`: player → ordered [`AnalysisRow`]s with fixture difficulty
//! - `summary`: rows → [`SeasonSummary`]
//! - `series`: rows → per-gameweek [`ChartPoint`]s
//!
//! [`Dataset`]: crate::dataset::Dataset

pub mod joiner;
pub mod resolver;
pub mod series;
pub mod summary;


use serde::Serialize;

pub use joiner::{join_season, AnalysisRow, JoinOptions};
pub use resolver::{resolve_player, Resolution};
pub use series::{chart_series, ChartPoint};
pub use summary::{double_gameweeks, summarize, DifficultyBucket, SeasonSummary};

use crate::cli::types::Season;
use crate::dataset::{Dataset, Player};

/// A player's joined and summarized season.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerSeason<'a> {
    pub season: Season,
    pub player: &'a Player,
    pub team_name: String,
    pub rows: Vec<AnalysisRow>,
    pub summary: SeasonSummary,
}

/// Run join and summary for an already-resolved player.
pub fn analyze_player<'a>(
    dataset: &Dataset,
    player: &'a Player,
    options: JoinOptions,
) -> PlayerSeason<'a> {
    let rows = join_season(dataset, player, options);
    let summary = summarize(&rows);
    PlayerSeason {
        season: dataset.season(),
        player,
        team_name: dataset.team_name(player.team),
        rows,
        summary,
    }
}
