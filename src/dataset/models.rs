//! Typed dataset tables

use crate::cli::types::{Difficulty, FixtureId, Gameweek, PlayerId, Position, TeamId};
use serde::{Deserialize, Serialize};

/// Season totals as published in `players_raw.csv`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OfficialTotals {
    pub total_points: i32,
    pub points_per_game: f64,
    pub minutes: u32,
    pub starts: Option<u32>,
    /// Price in tenths of £1m (`now_cost`).
    pub now_cost: Option<u32>,
}

impl OfficialTotals {
    /// Current price in £m.
    pub fn value_millions(&self) -> Option<f64> {
        self.now_cost.map(|c| c as f64 / 10.0)
    }
}

/// A player on an FPL squad list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub first_name: String,
    pub second_name: String,
    /// Short name shown in the FPL game (`web_name`), e.g. "Salah".
    pub display_name: String,
    pub team: TeamId,
    pub position: Position,
    #[serde(default)]
    pub official: OfficialTotals,
}

impl Player {
    pub fn full_name(&self) -> String {
        match (self.first_name.is_empty(), self.second_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.second_name),
            (true, false) => self.second_name.clone(),
            (false, true) => self.first_name.clone(),
            (true, true) => self.display_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub short_name: String,
}

/// Home or away, from one team's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Venue {
    Home,
    Away,
}

impl Venue {
    pub fn from_was_home(was_home: bool) -> Self {
        if was_home {
            Venue::Home
        } else {
            Venue::Away
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Venue::Home => 'H',
            Venue::Away => 'A',
        }
    }
}

/// A scheduled match between two teams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: FixtureId,
    /// `None` while a postponed fixture has not been rescheduled.
    pub gameweek: Option<Gameweek>,
    pub kickoff_time: Option<String>,
    pub home: TeamId,
    pub away: TeamId,
    pub home_difficulty: Option<Difficulty>,
    pub away_difficulty: Option<Difficulty>,
    pub finished: bool,
    pub home_score: Option<u8>,
    pub away_score: Option<u8>,
}

impl Fixture {
    /// This fixture as seen by `team`, or `None` if the team doesn't play in it.
    ///
    /// Difficulty is the rating published for `team`'s side, i.e. how hard
    /// the opponent is for that team.
    pub fn for_team(&self, team: TeamId) -> Option<TeamFixture> {
        let (opponent, venue, difficulty) = if self.home == team {
            (self.away, Venue::Home, self.home_difficulty)
        } else if self.away == team {
            (self.home, Venue::Away, self.away_difficulty)
        } else {
            return None;
        };

        Some(TeamFixture {
            fixture: self.id,
            gameweek: self.gameweek,
            kickoff_time: self.kickoff_time.clone(),
            team,
            opponent,
            venue,
            difficulty,
        })
    }
}

/// One team's view of a fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamFixture {
    pub fixture: FixtureId,
    pub gameweek: Option<Gameweek>,
    pub kickoff_time: Option<String>,
    pub team: TeamId,
    pub opponent: TeamId,
    pub venue: Venue,
    pub difficulty: Option<Difficulty>,
}

/// Position-specific counting stats for one match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStats {
    pub goals_scored: u32,
    pub assists: u32,
    pub clean_sheets: u32,
    pub goals_conceded: u32,
    pub saves: u32,
}

impl MatchStats {
    pub fn get(&self, column: crate::cli::types::StatColumn) -> u32 {
        use crate::cli::types::StatColumn;
        match column {
            StatColumn::CleanSheets => self.clean_sheets,
            StatColumn::GoalsConceded => self.goals_conceded,
            StatColumn::Saves => self.saves,
            StatColumn::GoalsScored => self.goals_scored,
            StatColumn::Assists => self.assists,
        }
    }
}

/// A player's output in one fixture (a row of `merged_gw.csv`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    pub player: PlayerId,
    /// Fixture the points were scored in; missing in some older seasons.
    pub fixture: Option<FixtureId>,
    pub gameweek: Gameweek,
    pub opponent: TeamId,
    pub venue: Venue,
    pub kickoff_time: Option<String>,
    pub points: i32,
    pub minutes: u32,
    pub bonus: u32,
    pub stats: MatchStats,
}

/// Lowercase a name for case-insensitive lookup.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
