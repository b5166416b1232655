//! Joining a player's gameweek rows with fixture difficulty.

use serde::Serialize;
use tracing::{debug, warn};

use crate::cli::types::{Difficulty, FixtureId, Gameweek, TeamId};
use crate::dataset::{Dataset, Fixture, MatchStats, PerformanceRecord, Player, TeamFixture, Venue};

/// Options for [`join_season`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JoinOptions {
    /// Emit rows for fixtures the player had zero minutes in.
    pub include_unplayed: bool,
}

/// One fixture of a player's season with its difficulty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRow {
    pub gameweek: Gameweek,
    pub fixture: Option<FixtureId>,
    pub kickoff_time: Option<String>,
    pub opponent: TeamId,
    pub opponent_name: String,
    pub opponent_short: String,
    pub venue: Venue,
    /// `None` when the fixture could not be found in `fixtures.csv`.
    pub difficulty: Option<Difficulty>,
    pub points: i32,
    pub minutes: u32,
    pub bonus: u32,
    pub stats: MatchStats,
}

impl AnalysisRow {
    pub fn played(&self) -> bool {
        self.minutes > 0
    }

    /// `EVE (H)` style fixture label.
    pub fn fixture_label(&self) -> String {
        format!("{} ({})", self.opponent_short, self.venue.letter())
    }
}

/// Build the player's season rows, ordered by gameweek and then by kickoff
/// within a double gameweek.
///
/// Each record is matched to the fixture it was scored in, so a double
/// gameweek yields two rows with their own difficulty. Records whose fixture
/// can't be found are kept with an unknown difficulty.
pub fn join_season(dataset: &Dataset, player: &Player, options: JoinOptions) -> Vec<AnalysisRow> {
    let mut rows: Vec<AnalysisRow> = dataset
        .performances_for(player.id)
        .filter(|r| options.include_unplayed || r.minutes > 0)
        .map(|record| {
            let matched = locate_fixture(dataset, player, record);
            if matched.is_none() {
                warn!(
                    "{}: no fixture found for gameweek {} vs {}, difficulty unknown",
                    player.display_name,
                    record.gameweek,
                    dataset.team_short_name(record.opponent)
                );
            }
            build_row(dataset, record, matched)
        })
        .collect();

    rows.sort_by(|a, b| {
        a.gameweek
            .cmp(&b.gameweek)
            .then_with(|| a.kickoff_time.cmp(&b.kickoff_time))
            .then_with(|| a.fixture.cmp(&b.fixture))
    });

    debug!(player = %player.display_name, rows = rows.len(), "season joined");
    rows
}

/// The fixture a record was generated in, seen from the player's side.
fn locate_fixture(
    dataset: &Dataset,
    player: &Player,
    record: &PerformanceRecord,
) -> Option<TeamFixture> {
    if let Some(fixture) = record.fixture.and_then(|id| dataset.fixture(id)) {
        if let Some(view) = view_against(fixture, record) {
            return Some(view);
        }
        debug!(
            "fixture {} does not involve opponent {}, falling back to gameweek lookup",
            fixture.id, record.opponent
        );
    }

    let mut candidates: Vec<TeamFixture> = dataset
        .fixtures()
        .iter()
        .filter(|f| f.gameweek == Some(record.gameweek))
        .filter_map(|f| view_against(f, record))
        .collect();

    // The kickoff comes from the record itself; the player's current team
    // may differ from the side they played for, so it only narrows.
    if candidates.len() > 1 && record.kickoff_time.is_some() {
        candidates.retain(|f| f.kickoff_time == record.kickoff_time);
    }
    if candidates.len() > 1 {
        let same_team: Vec<TeamFixture> = candidates
            .iter()
            .filter(|f| f.team == player.team)
            .cloned()
            .collect();
        if !same_team.is_empty() {
            candidates = same_team;
        }
    }

    match candidates.len() {
        1 => candidates.pop(),
        _ => None,
    }
}

/// View of `fixture` for the side facing the record's opponent at the
/// record's venue.
fn view_against(fixture: &Fixture, record: &PerformanceRecord) -> Option<TeamFixture> {
    let team = match record.venue {
        Venue::Home if fixture.away == record.opponent => fixture.home,
        Venue::Away if fixture.home == record.opponent => fixture.away,
        _ => return None,
    };
    fixture.for_team(team)
}

fn build_row(
    dataset: &Dataset,
    record: &PerformanceRecord,
    matched: Option<TeamFixture>,
) -> AnalysisRow {
    let (fixture, kickoff_time, difficulty) = match matched {
        Some(f) => (
            Some(f.fixture),
            f.kickoff_time.or_else(|| record.kickoff_time.clone()),
            f.difficulty,
        ),
        None => (record.fixture, record.kickoff_time.clone(), None),
    };

    AnalysisRow {
        gameweek: record.gameweek,
        fixture,
        kickoff_time,
        opponent: record.opponent,
        opponent_name: dataset.team_name(record.opponent),
        opponent_short: dataset.team_short_name(record.opponent),
        venue: record.venue,
        difficulty,
        points: record.points,
        minutes: record.minutes,
        bonus: record.bonus,
        stats: record.stats,
    }
}
