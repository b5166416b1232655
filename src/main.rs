//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use fpl_season::{
    cli::{Commands, FplSeason},
    commands::{
        analyze::{handle_analyze, AnalyzeParams},
        fixtures::handle_fixtures,
        players::handle_players,
    },
    Result,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = FplSeason::parse();

    // RUST_LOG wins; otherwise --verbose turns on debug output
    let default_level = if app.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match app.command {
        Commands::Analyze {
            player,
            source,
            pick,
            json,
            no_chart,
            output_dir,
            include_unplayed,
        } => {
            handle_analyze(AnalyzeParams {
                player,
                source,
                pick,
                as_json: json,
                chart: !no_chart,
                output_dir,
                include_unplayed,
            })
            .await?
        }

        Commands::Players {
            query,
            source,
            json,
        } => handle_players(query, source, json).await?,

        Commands::Fixtures { team, source } => handle_fixtures(team, source).await?,
    }

    Ok(())
}
