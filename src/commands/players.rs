//! Player lookup command implementation

use serde::Serialize;

use crate::{
    analysis::resolve_player,
    cli::{types::Position, SourceArgs},
    dataset::Dataset,
    PlayerId, Result,
};

use super::common::{candidate_line, load_dataset};

/// One player matching a lookup, as printed by `players --json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerListing {
    pub id: PlayerId,
    pub name: String,
    pub display_name: String,
    pub team: String,
    pub position: Position,
    pub total_points: i32,
}

/// Players matching `query`, in resolution order.
pub fn player_listings(dataset: &Dataset, query: &str) -> Result<Vec<PlayerListing>> {
    let resolution = resolve_player(dataset, query)?;
    Ok(resolution
        .candidates()
        .into_iter()
        .map(|p| PlayerListing {
            id: p.id,
            name: p.full_name(),
            display_name: p.display_name.clone(),
            team: dataset.team_name(p.team),
            position: p.position,
            total_points: p.official.total_points,
        })
        .collect())
}

/// Handle the players command
pub async fn handle_players(query: String, source: SourceArgs, as_json: bool) -> Result<()> {
    let dataset = load_dataset(&source, as_json).await?;

    if as_json {
        let listings = player_listings(&dataset, &query)?;
        println!("{}", serde_json::to_string_pretty(&listings)?); // tarpaulin::skip
        return Ok(());
    }

    let resolution = resolve_player(&dataset, &query)?;
    for (i, player) in resolution.candidates().into_iter().enumerate() {
        // tarpaulin::skip - console output
        println!(
            "{} [id {}] {} pts",
            candidate_line(i + 1, player, &dataset),
            player.id,
            player.official.total_points
        );
    }
    Ok(())
}
