//! Team fixture list command implementation

use std::collections::BTreeMap;

use crate::{
    cli::{types::stars_or_na, SourceArgs},
    dataset::{Dataset, Team, TeamFixture},
    Gameweek, Result,
};

use super::common::{load_dataset, render_table, Align};

/// Gameweeks with more than one fixture for the team.
pub fn double_fixture_gameweeks(fixtures: &[TeamFixture]) -> Vec<Gameweek> {
    let mut counts: BTreeMap<Gameweek, usize> = BTreeMap::new();
    for gw in fixtures.iter().filter_map(|f| f.gameweek) {
        *counts.entry(gw).or_default() += 1;
    }
    counts
        .into_iter()
        .filter(|(_, n)| *n > 1)
        .map(|(gw, _)| gw)
        .collect()
}

/// Gameweeks inside the season's scheduled range where the team has no
/// fixture.
pub fn blank_gameweeks(dataset: &Dataset, fixtures: &[TeamFixture]) -> Vec<Gameweek> {
    let scheduled = dataset.fixtures().iter().filter_map(|f| f.gameweek);
    let (first, last) = match (scheduled.clone().min(), scheduled.max()) {
        (Some(first), Some(last)) => (first.as_u8(), last.as_u8()),
        _ => return Vec::new(),
    };

    (first..=last)
        .map(Gameweek::new)
        .filter(|gw| !fixtures.iter().any(|f| f.gameweek == Some(*gw)))
        .collect()
}

/// Fixture list with difficulty, result and blank/double gameweek notes.
pub fn format_team_fixtures(dataset: &Dataset, team: &Team) -> String {
    let fixtures = dataset.team_fixtures(team.id);
    let mut out = format!(
        "\n=== {} {} FIXTURES ===\n",
        team.name.to_uppercase(),
        dataset.season()
    );

    let headers = [
        ("GW", Align::Right),
        ("Fixture", Align::Left),
        ("FDR", Align::Left),
        ("Kickoff", Align::Left),
        ("Score", Align::Left),
    ];
    let rows: Vec<Vec<String>> = fixtures
        .iter()
        .map(|f| {
            vec![
                f.gameweek
                    .map(|gw| gw.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                format!(
                    "{} ({})",
                    dataset.team_short_name(f.opponent),
                    f.venue.letter()
                ),
                stars_or_na(f.difficulty),
                f.kickoff_time.clone().unwrap_or_else(|| "TBC".to_string()),
                score(dataset, f),
            ]
        })
        .collect();
    out.push_str(&render_table(&headers, &rows));

    let join = |gws: Vec<Gameweek>| {
        gws.iter()
            .map(|gw| gw.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let doubles = double_fixture_gameweeks(&fixtures);
    if !doubles.is_empty() {
        out.push_str(&format!("\nDouble Gameweeks: {}\n", join(doubles)));
    }
    let blanks = blank_gameweeks(dataset, &fixtures);
    if !blanks.is_empty() {
        out.push_str(&format!("Blank Gameweeks: {}\n", join(blanks)));
    }
    let unscheduled = fixtures.iter().filter(|f| f.gameweek.is_none()).count();
    if unscheduled > 0 {
        out.push_str(&format!("Unscheduled fixtures: {}\n", unscheduled));
    }
    out
}

/// `2-1` from the team's side for finished fixtures, empty otherwise.
fn score(dataset: &Dataset, team_fixture: &TeamFixture) -> String {
    let fixture = match dataset.fixture(team_fixture.fixture) {
        Some(f) if f.finished => f,
        _ => return String::new(),
    };
    match (fixture.home_score, fixture.away_score) {
        (Some(h), Some(a)) if fixture.home == team_fixture.team => format!("{}-{}", h, a),
        (Some(h), Some(a)) => format!("{}-{}", a, h),
        _ => String::new(),
    }
}

/// Handle the fixtures command
pub async fn handle_fixtures(team: String, source: SourceArgs) -> Result<()> {
    let dataset = load_dataset(&source, false).await?;
    let team = dataset.find_team(&team)?;
    print!("{}", format_team_fixtures(&dataset, team)); // tarpaulin::skip
    Ok(())
}
