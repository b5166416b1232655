//! Dataset layer for the FPL season CLI
//!
//! This module turns the raw CSV files of the public FPL data repository
//! into typed, read-only tables:
//! - `models`: Players, teams, fixtures and per-fixture performances
//! - `raw`: CSV row structs and reader-based parsers
//! - `source`: Where the files come from (HTTP with a file cache, or a local checkout)
//!
//! A [`Dataset`] is built once at startup and only borrowed afterwards.

pub mod models;
pub mod raw;
pub mod source;


use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::{debug, warn};

pub use models::*;
pub use source::{DataSource, DatasetLoader};

use crate::cli::types::{FixtureId, PlayerId, Season, TeamId};
use crate::{FplError, Result};

/// Lowercased names of one player, aligned with `Dataset::players`.
#[derive(Debug, Clone)]
pub struct NameKey {
    pub display: String,
    pub full: String,
}

/// Immutable in-memory tables for one season.
#[derive(Debug, Clone)]
pub struct Dataset {
    season: Season,
    players: Vec<Player>,
    names: Vec<NameKey>,
    teams: BTreeMap<TeamId, Team>,
    fixtures: Vec<Fixture>,
    fixture_index: HashMap<FixtureId, usize>,
    performances: Vec<PerformanceRecord>,
    performance_index: HashMap<PlayerId, Vec<usize>>,
}

impl Dataset {
    /// Build a dataset from parsed tables.
    ///
    /// Duplicate player ids keep their first row. Performance rows repeated
    /// for the same player and fixture are dropped, since that is a data
    /// issue rather than a double gameweek.
    pub fn new(
        season: Season,
        players: Vec<Player>,
        teams: Vec<Team>,
        fixtures: Vec<Fixture>,
        performances: Vec<PerformanceRecord>,
    ) -> Self {
        let mut seen_players = HashSet::new();
        let players: Vec<Player> = players
            .into_iter()
            .filter(|p| {
                let fresh = seen_players.insert(p.id);
                if !fresh {
                    warn!("duplicate player id {} ({}), keeping first", p.id, p.display_name);
                }
                fresh
            })
            .collect();

        let names = players
            .iter()
            .map(|p| NameKey {
                display: normalize_name(&p.display_name),
                full: normalize_name(&p.full_name()),
            })
            .collect();

        let teams = teams.into_iter().map(|t| (t.id, t)).collect();

        let mut fixture_index = HashMap::new();
        for (i, f) in fixtures.iter().enumerate() {
            if fixture_index.insert(f.id, i).is_some() {
                warn!("duplicate fixture id {}, keeping last", f.id);
            }
        }

        let mut seen_records = HashSet::new();
        let performances: Vec<PerformanceRecord> = performances
            .into_iter()
            .filter(|r| match r.fixture {
                Some(fixture) => {
                    let fresh = seen_records.insert((r.player, fixture));
                    if !fresh {
                        debug!("dropping repeated row for player {} fixture {}", r.player, fixture);
                    }
                    fresh
                }
                None => true,
            })
            .collect();

        let mut performance_index: HashMap<PlayerId, Vec<usize>> = HashMap::new();
        for (i, r) in performances.iter().enumerate() {
            performance_index.entry(r.player).or_default().push(i);
        }

        Self {
            season,
            players,
            names,
            teams,
            fixtures,
            fixture_index,
            performances,
            performance_index,
        }
    }

    pub fn season(&self) -> Season {
        self.season
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Players paired with their lowercased names.
    pub fn players_with_names(&self) -> impl Iterator<Item = (&Player, &NameKey)> {
        self.players.iter().zip(self.names.iter())
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.teams.values()
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.get(&id)
    }

    /// Team name, or `Team <id>` when teams.csv was unavailable.
    pub fn team_name(&self, id: TeamId) -> String {
        self.team(id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| format!("Team {}", id))
    }

    pub fn team_short_name(&self, id: TeamId) -> String {
        self.team(id)
            .map(|t| t.short_name.clone())
            .unwrap_or_else(|| format!("T{}", id))
    }

    /// Find a team by id, short name, full name, or a unique name fragment.
    pub fn find_team(&self, query: &str) -> Result<&Team> {
        let not_found = || FplError::TeamNotFound {
            query: query.to_string(),
        };

        let q = normalize_name(query);
        if q.is_empty() {
            return Err(not_found());
        }

        if let Ok(id) = q.parse::<u16>() {
            return self.team(TeamId::new(id)).ok_or_else(not_found);
        }

        if let Some(team) = self.teams.values().find(|t| {
            normalize_name(&t.short_name) == q || normalize_name(&t.name) == q
        }) {
            return Ok(team);
        }

        let mut partial = self
            .teams
            .values()
            .filter(|t| normalize_name(&t.name).contains(&q));
        match (partial.next(), partial.next()) {
            (Some(team), None) => Ok(team),
            _ => Err(not_found()),
        }
    }

    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    pub fn fixture(&self, id: FixtureId) -> Option<&Fixture> {
        self.fixture_index.get(&id).map(|&i| &self.fixtures[i])
    }

    /// All fixtures of `team` from its perspective, ordered by gameweek
    /// (unscheduled last), then kickoff, then fixture id.
    pub fn team_fixtures(&self, team: TeamId) -> Vec<TeamFixture> {
        let mut out: Vec<TeamFixture> = self
            .fixtures
            .iter()
            .filter_map(|f| f.for_team(team))
            .collect();
        out.sort_by(|a, b| {
            let gw_key = |f: &TeamFixture| f.gameweek.map(|g| g.as_u8()).unwrap_or(u8::MAX);
            gw_key(a)
                .cmp(&gw_key(b))
                .then_with(|| a.kickoff_time.cmp(&b.kickoff_time))
                .then_with(|| a.fixture.cmp(&b.fixture))
        });
        out
    }

    /// Performance rows of one player in file order.
    pub fn performances_for(&self, player: PlayerId) -> impl Iterator<Item = &PerformanceRecord> {
        self.performance_index
            .get(&player)
            .into_iter()
            .flatten()
            .map(move |&i| &self.performances[i])
    }

    pub fn performance_count(&self) -> usize {
        self.performances.len()
    }
}
