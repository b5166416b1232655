//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::Season;

/// Dataset location arguments shared between commands
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Season to analyse (e.g. 2024-25).
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,

    /// Read dataset files from a local checkout of the data repository
    /// (or set `FPL_DATA_DIR`). The season directory is appended.
    #[clap(long)]
    pub data_dir: Option<PathBuf>,

    /// Base URL of the data repository (or set `FPL_DATA_URL`).
    #[clap(long)]
    pub base_url: Option<String>,

    /// Force re-download even if cached files exist
    #[clap(long)]
    pub refresh: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a player's match-by-match season with fixture difficulty.
    ///
    /// Prints a gameweek table and summary statistics and saves a chart of
    /// points against fixture difficulty.
    Analyze {
        /// Player name or part of it (prompted for when omitted).
        player: Option<String>,

        #[clap(flatten)]
        source: SourceArgs,

        /// Pick the Nth candidate when the name matches several players.
        #[clap(long)]
        pick: Option<usize>,

        /// Output rows and summary as JSON instead of a table.
        #[clap(long)]
        json: bool,

        /// Don't write the chart image.
        #[clap(long)]
        no_chart: bool,

        /// Directory the chart is written to.
        #[clap(long, default_value = ".")]
        output_dir: PathBuf,

        /// Keep gameweeks where the player did not play.
        #[clap(long)]
        include_unplayed: bool,
    },

    /// List players whose name matches a query.
    Players {
        /// Name or part of it.
        query: String,

        #[clap(flatten)]
        source: SourceArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show a team's fixtures with difficulty ratings.
    ///
    /// Flags blank and double gameweeks.
    Fixtures {
        /// Team name, short name (e.g. EVE) or id.
        team: String,

        #[clap(flatten)]
        source: SourceArgs,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "fpl-season",
    about = "Fantasy Premier League season analysis CLI"
)]
pub struct FplSeason {
    /// Enable debug logging (overridden by `RUST_LOG`).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
