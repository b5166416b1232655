// Raw CSV rows and reader-based table parsers.
//
// Rows that fail to deserialize or validate are skipped with a warning so a
// single bad line doesn't sink the whole table. Only header-level failures
// are returned as errors.

use std::io::Read;

use serde::{Deserialize, Deserializer};
use tracing::warn;

use super::models::{
    Fixture, MatchStats, OfficialTotals, PerformanceRecord, Player, Team, Venue,
};
use crate::cli::types::{Difficulty, FixtureId, Gameweek, PlayerId, Position, TeamId};
use crate::Result;

// ---------------------------------------------------------------------------
// Field helpers
// ---------------------------------------------------------------------------

/// Accepts `True`/`False` (pandas output), `true`/`false` and `1`/`0`.
fn de_flexible_bool<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" | "" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "expected boolean, found {:?}",
            other
        ))),
    }
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn difficulty_or_warn(value: Option<u8>, fixture_id: u32, side: &str) -> Option<Difficulty> {
    let value = value?;
    match Difficulty::new(value) {
        Ok(d) => Some(d),
        Err(e) => {
            warn!("fixture {}: ignoring {} difficulty: {}", fixture_id, side, e);
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Raw CSV serde structs
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawPlayer {
    id: u32,
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    second_name: String,
    web_name: String,
    team: u16,
    element_type: u8,
    #[serde(default)]
    total_points: Option<i32>,
    #[serde(default)]
    points_per_game: Option<f64>,
    #[serde(default)]
    minutes: Option<u32>,
    #[serde(default)]
    starts: Option<u32>,
    #[serde(default)]
    now_cost: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct RawTeam {
    id: u16,
    name: String,
    #[serde(default)]
    short_name: String,
}

#[derive(Debug, Deserialize)]
struct RawFixture {
    id: u32,
    #[serde(default)]
    event: Option<u8>,
    #[serde(default)]
    kickoff_time: Option<String>,
    team_h: u16,
    team_a: u16,
    #[serde(default)]
    team_h_difficulty: Option<u8>,
    #[serde(default)]
    team_a_difficulty: Option<u8>,
    #[serde(default, deserialize_with = "de_flexible_bool")]
    finished: bool,
    #[serde(default)]
    team_h_score: Option<u8>,
    #[serde(default)]
    team_a_score: Option<u8>,
}

#[derive(Debug, Deserialize)]
struct RawGameweekRow {
    element: u32,
    #[serde(default)]
    fixture: Option<u32>,
    round: u8,
    opponent_team: u16,
    #[serde(deserialize_with = "de_flexible_bool")]
    was_home: bool,
    #[serde(default)]
    kickoff_time: Option<String>,
    total_points: i32,
    minutes: u32,
    #[serde(default)]
    bonus: u32,
    #[serde(default)]
    goals_scored: u32,
    #[serde(default)]
    assists: u32,
    #[serde(default)]
    clean_sheets: u32,
    #[serde(default)]
    goals_conceded: u32,
    #[serde(default)]
    saves: u32,
}

// ---------------------------------------------------------------------------
// Reader-based parsers
// ---------------------------------------------------------------------------

/// Parse `players_raw.csv`.
pub fn parse_players<R: Read>(rdr: R) -> Result<Vec<Player>> {
    let mut reader = csv::Reader::from_reader(rdr);
    reader.headers()?;

    let mut players = Vec::new();
    for result in reader.deserialize::<RawPlayer>() {
        let raw = match result {
            Ok(raw) => raw,
            Err(e) => {
                warn!("skipping malformed player row: {}", e);
                continue;
            }
        };

        let position = match Position::try_from(raw.element_type) {
            Ok(p) => p,
            Err(_) => {
                warn!(
                    "skipping '{}': element_type {} is not a playing position",
                    raw.web_name.trim(),
                    raw.element_type
                );
                continue;
            }
        };

        players.push(Player {
            id: PlayerId::new(raw.id),
            first_name: raw.first_name.trim().to_string(),
            second_name: raw.second_name.trim().to_string(),
            display_name: raw.web_name.trim().to_string(),
            team: TeamId::new(raw.team),
            position,
            official: OfficialTotals {
                total_points: raw.total_points.unwrap_or_default(),
                points_per_game: raw
                    .points_per_game
                    .filter(|v| v.is_finite())
                    .unwrap_or_default(),
                minutes: raw.minutes.unwrap_or_default(),
                starts: raw.starts,
                now_cost: raw.now_cost,
            },
        });
    }
    Ok(players)
}

/// Parse `teams.csv`.
pub fn parse_teams<R: Read>(rdr: R) -> Result<Vec<Team>> {
    let mut reader = csv::Reader::from_reader(rdr);
    reader.headers()?;

    let mut teams = Vec::new();
    for result in reader.deserialize::<RawTeam>() {
        match result {
            Ok(raw) => {
                let name = raw.name.trim().to_string();
                let short_name = match raw.short_name.trim() {
                    "" => name.chars().take(3).collect::<String>().to_uppercase(),
                    s => s.to_string(),
                };
                teams.push(Team {
                    id: TeamId::new(raw.id),
                    name,
                    short_name,
                });
            }
            Err(e) => warn!("skipping malformed team row: {}", e),
        }
    }
    Ok(teams)
}

/// Parse `fixtures.csv`.
pub fn parse_fixtures<R: Read>(rdr: R) -> Result<Vec<Fixture>> {
    let mut reader = csv::Reader::from_reader(rdr);
    reader.headers()?;

    let mut fixtures = Vec::new();
    for result in reader.deserialize::<RawFixture>() {
        let raw = match result {
            Ok(raw) => raw,
            Err(e) => {
                warn!("skipping malformed fixture row: {}", e);
                continue;
            }
        };

        if raw.team_h == raw.team_a {
            warn!("skipping fixture {}: team plays itself", raw.id);
            continue;
        }

        fixtures.push(Fixture {
            id: FixtureId::new(raw.id),
            gameweek: raw.event.filter(|gw| *gw > 0).map(Gameweek::new),
            kickoff_time: non_empty(raw.kickoff_time),
            home: TeamId::new(raw.team_h),
            away: TeamId::new(raw.team_a),
            home_difficulty: difficulty_or_warn(raw.team_h_difficulty, raw.id, "home"),
            away_difficulty: difficulty_or_warn(raw.team_a_difficulty, raw.id, "away"),
            finished: raw.finished,
            home_score: raw.team_h_score,
            away_score: raw.team_a_score,
        });
    }
    Ok(fixtures)
}

/// Parse `gws/merged_gw.csv` or a single `gws/gwN.csv`.
pub fn parse_performances<R: Read>(rdr: R) -> Result<Vec<PerformanceRecord>> {
    let mut reader = csv::Reader::from_reader(rdr);
    reader.headers()?;

    let mut records = Vec::new();
    for result in reader.deserialize::<RawGameweekRow>() {
        match result {
            Ok(raw) => records.push(PerformanceRecord {
                player: PlayerId::new(raw.element),
                fixture: raw.fixture.map(FixtureId::new),
                gameweek: Gameweek::new(raw.round),
                opponent: TeamId::new(raw.opponent_team),
                venue: Venue::from_was_home(raw.was_home),
                kickoff_time: non_empty(raw.kickoff_time),
                points: raw.total_points,
                minutes: raw.minutes,
                bonus: raw.bonus,
                stats: MatchStats {
                    goals_scored: raw.goals_scored,
                    assists: raw.assists,
                    clean_sheets: raw.clean_sheets,
                    goals_conceded: raw.goals_conceded,
                    saves: raw.saves,
                },
            }),
            Err(e) => warn!("skipping malformed gameweek row: {}", e),
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAYERS_CSV: &str = "\
id,first_name,second_name,web_name,team,element_type,total_points,points_per_game,minutes,starts,now_cost
328,Mohamed,Salah,M.Salah,12,3,344,9.1,3374,38,136
201,Jordan,Pickford,Pickford,9,1,158,4.2,3420,38,51
999,Arne,Slot,Slot,12,5,0,0.0,0,0,15
";

    #[test]
    fn test_parse_players_skips_non_playing_element_types() {
        let players = parse_players(PLAYERS_CSV.as_bytes()).unwrap();
        assert_eq!(players.len(), 2);

        let salah = &players[0];
        assert_eq!(salah.id, PlayerId::new(328));
        assert_eq!(salah.display_name, "M.Salah");
        assert_eq!(salah.full_name(), "Mohamed Salah");
        assert_eq!(salah.position, Position::Midfielder);
        assert_eq!(salah.official.total_points, 344);
        assert_eq!(salah.official.value_millions(), Some(13.6));
    }

    #[test]
    fn test_parse_players_tolerates_missing_optional_columns() {
        let csv = "id,web_name,team,element_type\n7,Haaland,13,4\n";
        let players = parse_players(csv.as_bytes()).unwrap();
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].full_name(), "Haaland");
        assert_eq!(players[0].official, OfficialTotals::default());
    }

    #[test]
    fn test_parse_players_skips_malformed_rows() {
        let csv = "id,web_name,team,element_type\nnot_a_number,Ghost,1,2\n8,Saka,1,3\n";
        let players = parse_players(csv.as_bytes()).unwrap();
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].display_name, "Saka");
    }

    #[test]
    fn test_parse_teams_derives_missing_short_name() {
        let csv = "id,name,short_name\n9,Everton,EVE\n12,Liverpool,\n";
        let teams = parse_teams(csv.as_bytes()).unwrap();
        assert_eq!(teams[0].short_name, "EVE");
        assert_eq!(teams[1].short_name, "LIV");
    }

    #[test]
    fn test_parse_fixtures_pandas_booleans_and_blanks() {
        let csv = "\
id,event,kickoff_time,team_h,team_a,team_h_difficulty,team_a_difficulty,finished,team_h_score,team_a_score
41,5,2024-09-21T14:00:00Z,12,9,2,4,True,3,0
300,,,12,7,3,3,False,,
301,6,2024-09-28T14:00:00Z,12,4,9,3,False,,
";
        let fixtures = parse_fixtures(csv.as_bytes()).unwrap();
        assert_eq!(fixtures.len(), 3);

        assert!(fixtures[0].finished);
        assert_eq!(fixtures[0].gameweek, Some(Gameweek::new(5)));
        assert_eq!(fixtures[0].home_score, Some(3));

        // Unscheduled fixture keeps its row with no gameweek
        assert_eq!(fixtures[1].gameweek, None);
        assert_eq!(fixtures[1].kickoff_time, None);
        assert!(!fixtures[1].finished);

        // Out-of-range rating is dropped, the fixture is kept
        assert_eq!(fixtures[2].home_difficulty, None);
        assert_eq!(fixtures[2].away_difficulty.map(|d| d.as_u8()), Some(3));
    }

    #[test]
    fn test_parse_performances_merged_gw_row() {
        let csv = "\
name,position,team,element,fixture,round,opponent_team,was_home,kickoff_time,total_points,minutes,bonus,goals_scored,assists,clean_sheets,goals_conceded,saves,GW
Mohamed Salah,MID,Liverpool,328,41,5,9,True,2024-09-21T14:00:00Z,9,90,2,1,1,1,0,0,5
";
        let records = parse_performances(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);

        let r = &records[0];
        assert_eq!(r.player, PlayerId::new(328));
        assert_eq!(r.fixture, Some(FixtureId::new(41)));
        assert_eq!(r.gameweek, Gameweek::new(5));
        assert_eq!(r.opponent, TeamId::new(9));
        assert_eq!(r.venue, Venue::Home);
        assert_eq!(r.points, 9);
        assert_eq!(r.minutes, 90);
        assert_eq!(r.stats.goals_scored, 1);
    }

    #[test]
    fn test_parse_performances_negative_points_and_bad_bool() {
        let csv = "\
element,fixture,round,opponent_team,was_home,total_points,minutes
5,10,1,3,false,-1,90
6,11,1,4,maybe,2,90
";
        let records = parse_performances(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].points, -1);
        assert_eq!(records[0].venue, Venue::Away);
    }
}
