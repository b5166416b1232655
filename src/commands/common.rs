//! Helpers shared by the command handlers: dataset loading, prompting and
//! plain-text tables.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::{
    analysis::Resolution,
    cli::SourceArgs,
    core::dataset_cache_path,
    dataset::{source::PLAYERS_FILE, DataSource, Dataset, DatasetLoader, Player},
    FplError, Result,
};

use super::resolve_source;

/// Name analysed when the prompt is left blank.
pub const DEFAULT_PLAYER: &str = "Pickford";

/// Load the season's dataset, printing status lines unless `quiet`.
pub async fn load_dataset(args: &SourceArgs, quiet: bool) -> Result<Dataset> {
    let source = resolve_source(args);

    if !quiet {
        println!(
            "Fetching {} season data from {}...",
            args.season,
            source.describe(args.season)
        );
    }
    if let DataSource::Remote { refresh: false, .. } = source {
        debug!(
            "cache location: {}",
            dataset_cache_path(args.season, PLAYERS_FILE).display()
        );
    }

    // tarpaulin::skip - HTTP/file I/O call, tested via integration tests
    let dataset = DatasetLoader::new(source, args.season)?.load().await?;

    if !quiet {
        println!(
            "✓ Loaded {} players, {} fixtures, {} gameweek rows",
            dataset.players().len(),
            dataset.fixtures().len(),
            dataset.performance_count()
        );
    }
    Ok(dataset)
}

/// Ask for a player name; a blank answer falls back to [`DEFAULT_PLAYER`].
pub fn prompt_player_name<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    write!(
        output,
        "Enter player name to analyze (e.g., Pickford, Salah, Haaland): "
    )?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let name = line.trim();
    if name.is_empty() {
        writeln!(output, "Using default player: {}", DEFAULT_PLAYER)?;
        return Ok(DEFAULT_PLAYER.to_string());
    }
    Ok(name.to_string())
}

/// `1. Mohamed Salah (M.Salah) - Liverpool - Midfielder`
pub fn candidate_line(index: usize, player: &Player, dataset: &Dataset) -> String {
    format!(
        "{}. {} ({}) - {} - {}",
        index,
        player.full_name(),
        player.display_name,
        dataset.team_name(player.team),
        player.position
    )
}

/// Settle a resolution on one player.
///
/// An ambiguous result lists the candidates and then uses `pick` when
/// given, otherwise asks on `input` until a valid number is entered.
/// End of input while asking is an [`FplError::InvalidSelection`].
pub fn choose_player<'a, R: BufRead, W: Write>(
    dataset: &Dataset,
    query: &str,
    resolution: &Resolution<'a>,
    pick: Option<usize>,
    input: &mut R,
    output: &mut W,
) -> Result<&'a Player> {
    let candidates = match resolution {
        Resolution::Resolved(player) => return Ok(*player),
        Resolution::Ambiguous(candidates) => candidates,
    };

    writeln!(output, "Found multiple matches for '{}':", query.trim())?;
    for (i, player) in candidates.iter().enumerate() {
        writeln!(output, "{}", candidate_line(i + 1, player, dataset))?;
    }

    if let Some(choice) = pick {
        return resolution.select(choice);
    }

    loop {
        write!(
            output,
            "\nEnter the number of the player you want to analyze: "
        )?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(FplError::InvalidSelection {
                choice: 0,
                count: candidates.len(),
            });
        }

        match line.trim().parse::<usize>() {
            Ok(choice) => match resolution.select(choice) {
                Ok(player) => return Ok(player),
                Err(_) => writeln!(
                    output,
                    "Please enter a number between 1 and {}",
                    candidates.len()
                )?,
            },
            Err(_) => writeln!(output, "Please enter a valid number")?,
        }
    }
}

/// Column alignment for [`render_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Render rows as space-separated columns padded to the widest cell.
pub fn render_table(headers: &[(&str, Align)], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|(h, _)| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: Vec<&str>| -> String {
        let line = cells
            .iter()
            .zip(headers)
            .zip(&widths)
            .map(|((cell, (_, align)), &width)| match align {
                Align::Left => format!("{:<width$}", cell, width = width),
                Align::Right => format!("{:>width$}", cell, width = width),
            })
            .collect::<Vec<_>>()
            .join("  ");
        line.trim_end().to_string()
    };

    let mut out = format_row(headers.iter().map(|(h, _)| *h).collect());
    out.push('\n');
    for row in rows {
        out.push_str(&format_row(row.iter().map(String::as_str).collect()));
        out.push('\n');
    }
    out
}
