//! Player season analysis: the match-by-match table, summary report and chart.
//!
//! The entry point is [`handle_analyze`]; the formatting helpers are public
//! so the report can be checked without a terminal.

use std::{io, path::PathBuf};

use tracing::{info, warn};

use crate::{
    analysis::{analyze_player, resolve_player, JoinOptions, PlayerSeason},
    chart::{chart_path, render_season_chart},
    cli::{types::stars_or_na, SourceArgs},
    Result,
};

use super::common::{choose_player, load_dataset, prompt_player_name, render_table, Align};

/// Options for [`handle_analyze`], filled from the `analyze` subcommand.
#[derive(Debug)]
pub struct AnalyzeParams {
    /// Name query; prompted for on stdin when `None`.
    pub player: Option<String>,
    pub source: SourceArgs,
    pub pick: Option<usize>,
    pub as_json: bool,
    pub chart: bool,
    pub output_dir: PathBuf,
    pub include_unplayed: bool,
}

/// Handle the analyze command
pub async fn handle_analyze(params: AnalyzeParams) -> Result<()> {
    let query = match params.player {
        Some(q) => q,
        None => prompt_player_name(&mut io::stdin().lock(), &mut io::stdout())?,
    };

    let dataset = load_dataset(&params.source, params.as_json).await?;
    let resolution = resolve_player(&dataset, &query)?;
    let player = choose_player(
        &dataset,
        &query,
        &resolution,
        params.pick,
        &mut io::stdin().lock(),
        &mut io::stdout(),
    )?;

    let season = analyze_player(
        &dataset,
        player,
        JoinOptions {
            include_unplayed: params.include_unplayed,
        },
    );
    info!(
        player = %player.id,
        rows = season.rows.len(),
        appearances = season.summary.appearances,
        "analysis ready"
    );

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&season)?); // tarpaulin::skip
    } else if season.rows.is_empty() {
        println!("No data available to display");
        return Ok(());
    } else {
        print!("{}", format_match_table(&season)); // tarpaulin::skip
        print!("{}", format_summary(&season)); // tarpaulin::skip
    }

    if params.chart && !season.rows.is_empty() {
        let path = chart_path(&params.output_dir, &player.display_name);
        match render_season_chart(&season, &path) {
            Ok(()) if !params.as_json => {
                println!("\nVisualization saved as: {}", path.display())
            }
            Ok(()) => info!("chart written to {}", path.display()),
            Err(e) => warn!("could not save visualization: {}", e),
        }
    }

    Ok(())
}

/// Header, double-gameweek list, FDR legend and the per-fixture table.
pub fn format_match_table(season: &PlayerSeason<'_>) -> String {
    let player = season.player;
    let position = player.position;
    let mut out = String::new();

    out.push_str(&format!(
        "\n=== {} {} SEASON MATCH-BY-MATCH DATA ===\n",
        player.full_name().to_uppercase(),
        season.season
    ));
    out.push_str(&format!(
        "Team: {} | Position: {}\n",
        season.team_name, position
    ));

    let doubles = &season.summary.double_gameweeks;
    if !doubles.is_empty() {
        let list: Vec<String> = doubles.iter().map(|gw| gw.to_string()).collect();
        out.push_str(&format!("\nDouble Gameweeks: {}\n", list.join(", ")));
    }

    out.push_str("\nFixture Difficulty Rating (FDR):\n");
    out.push_str("★ = Easiest fixture, ★★★★★ = Hardest fixture\n");
    out.push_str(position.difficulty_note());
    out.push('\n');

    let columns = position.stat_columns();
    let mut headers = vec![
        ("GW", Align::Right),
        ("Fixture", Align::Left),
        ("FDR", Align::Left),
        ("Pts", Align::Right),
        ("Mins", Align::Right),
        ("Bonus", Align::Right),
    ];
    headers.extend(columns.iter().map(|c| (c.header(), Align::Right)));

    let mut rows = Vec::with_capacity(season.rows.len());
    let mut dgw_index = 0;
    for (i, row) in season.rows.iter().enumerate() {
        let same_as_prev = i > 0 && season.rows[i - 1].gameweek == row.gameweek;
        dgw_index = if same_as_prev { dgw_index + 1 } else { 1 };

        let mut fixture = row.fixture_label();
        if doubles.contains(&row.gameweek) {
            fixture.push_str(&format!(" (DGW {})", dgw_index));
        }

        let mut cells = vec![
            row.gameweek.to_string(),
            fixture,
            stars_or_na(row.difficulty),
            row.points.to_string(),
            row.minutes.to_string(),
            row.bonus.to_string(),
        ];
        cells.extend(columns.iter().map(|c| row.stats.get(*c).to_string()));
        rows.push(cells);
    }

    out.push('\n');
    out.push_str(&render_table(&headers, &rows));
    out
}

/// Season totals, official figures and the by-difficulty breakdown.
pub fn format_summary(season: &PlayerSeason<'_>) -> String {
    let player = season.player;
    let official = &player.official;
    let summary = &season.summary;
    let mut lines = vec![format!(
        "\n=== {} SEASON SUMMARY STATISTICS ===",
        player.full_name().to_uppercase()
    )];

    // Players without a row in players_raw totals have all-zero figures.
    let has_official = official.total_points != 0 || official.minutes != 0;

    if has_official {
        lines.push(format!(
            "Official Points Per Game: {:.1}",
            official.points_per_game
        ));
    }
    lines.push(format!(
        "Points Per Game (games with minutes): {:.2}",
        summary.average_points
    ));
    if has_official {
        lines.push(format!("Official Total Points: {}", official.total_points));
    }
    lines.push(format!(
        "Total Points (games with minutes): {}",
        summary.total_points
    ));
    if has_official {
        lines.push(format!("Official Minutes Played: {}", official.minutes));
    }
    lines.push(format!(
        "Minutes Played (analyzed games): {}",
        summary.total_minutes
    ));
    lines.push(format!(
        "Games Played (with minutes): {}",
        summary.appearances
    ));

    if let Some(value) = official.value_millions().filter(|v| *v > 0.0) {
        lines.push(format!("Current Value: £{:.1}m", value));
        lines.push(format!(
            "Points Per Million: {:.2}",
            summary.average_points / value
        ));
    }

    lines.push(format!("Bonus Points: {}", summary.total_bonus));
    for column in player.position.stat_columns() {
        lines.push(format!("{}: {}", column.label(), summary.stats.get(*column)));
    }

    lines.push("\nPoints by Fixture Difficulty:".to_string());
    for difficulty in crate::Difficulty::all() {
        let bucket = summary.bucket(difficulty);
        if bucket.rows == 0 {
            continue;
        }
        lines.push(format!(
            "  {:<5} ({}): {} fixture(s), {} pts, {:.2} avg",
            difficulty.stars(),
            difficulty,
            bucket.rows,
            bucket.points,
            bucket.average_points()
        ));
    }
    let unknown = &summary.unknown_difficulty;
    if unknown.rows > 0 {
        lines.push(format!(
            "  {:<9}: {} fixture(s), {} pts, {:.2} avg",
            "N/A",
            unknown.rows,
            unknown.points,
            unknown.average_points()
        ));
    }

    match summary.difficulty_correlation {
        Some(r) => lines.push(format!("Difficulty/points correlation: {:.2}", r)),
        None => lines.push("Difficulty/points correlation: n/a".to_string()),
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
