//! Tests for command helpers and report formatting

use std::io::Cursor;
use std::path::PathBuf;

use super::analyze::{format_match_table, format_summary};
use super::common::{
    candidate_line, choose_player, prompt_player_name, render_table, Align, DEFAULT_PLAYER,
};
use super::fixtures::{blank_gameweeks, double_fixture_gameweeks, format_team_fixtures};
use super::players::player_listings;
use super::*;
use crate::analysis::{analyze_player, resolve_player, JoinOptions, Resolution};
use crate::cli::types::{Gameweek, Position, Season};
use crate::dataset::{raw, Dataset};
use crate::FplError;

const PLAYERS_CSV: &str = include_str!("../../tests/data/2024-25/players_raw.csv");
const TEAMS_CSV: &str = include_str!("../../tests/data/2024-25/teams.csv");
const FIXTURES_CSV: &str = include_str!("../../tests/data/2024-25/fixtures.csv");
const MERGED_GW_CSV: &str = include_str!("../../tests/data/2024-25/gws/merged_gw.csv");

fn sample_dataset() -> Dataset {
    Dataset::new(
        Season::new(2024),
        raw::parse_players(PLAYERS_CSV.as_bytes()).unwrap(),
        raw::parse_teams(TEAMS_CSV.as_bytes()).unwrap(),
        raw::parse_fixtures(FIXTURES_CSV.as_bytes()).unwrap(),
        raw::parse_performances(MERGED_GW_CSV.as_bytes()).unwrap(),
    )
}

fn source_args() -> SourceArgs {
    SourceArgs {
        season: Season::new(2024),
        data_dir: None,
        base_url: None,
        refresh: false,
    }
}

#[cfg(test)]
mod source_tests {
    use super::*;

    #[test]
    fn test_data_dir_flag_selects_local_source() {
        let args = SourceArgs {
            data_dir: Some(PathBuf::from("/data/fpl")),
            base_url: Some("http://ignored".to_string()),
            ..source_args()
        };
        assert_eq!(
            resolve_source(&args),
            DataSource::Local {
                root: PathBuf::from("/data/fpl")
            }
        );
    }

    #[test]
    fn test_base_url_flag_selects_remote_source() {
        let args = SourceArgs {
            base_url: Some("http://localhost:9000/data".to_string()),
            refresh: true,
            ..source_args()
        };
        match resolve_source(&args) {
            DataSource::Remote {
                base_url,
                cache_dir,
                refresh,
            } => {
                assert_eq!(base_url, "http://localhost:9000/data");
                assert!(cache_dir.is_some());
                assert!(refresh);
            }
            other => panic!("Expected remote source, got {:?}", other),
        }
    }

    #[test]
    fn test_environment_defaults() {
        std::env::remove_var(DATA_DIR_ENV_VAR);
        std::env::remove_var(DATA_URL_ENV_VAR);

        match resolve_source(&source_args()) {
            DataSource::Remote { base_url, .. } => {
                assert_eq!(base_url, crate::core::DEFAULT_BASE_URL)
            }
            other => panic!("Expected remote source, got {:?}", other),
        }

        std::env::set_var(DATA_URL_ENV_VAR, "http://mirror.example/data");
        match resolve_source(&source_args()) {
            DataSource::Remote { base_url, .. } => {
                assert_eq!(base_url, "http://mirror.example/data")
            }
            other => panic!("Expected remote source, got {:?}", other),
        }

        std::env::set_var(DATA_DIR_ENV_VAR, "/srv/fpl");
        assert_eq!(
            resolve_source(&source_args()),
            DataSource::Local {
                root: PathBuf::from("/srv/fpl")
            }
        );

        // Blank values are ignored
        std::env::set_var(DATA_DIR_ENV_VAR, "  ");
        assert!(matches!(
            resolve_source(&source_args()),
            DataSource::Remote { .. }
        ));

        std::env::remove_var(DATA_DIR_ENV_VAR);
        std::env::remove_var(DATA_URL_ENV_VAR);
    }
}

#[cfg(test)]
mod prompt_tests {
    use super::*;

    #[test]
    fn test_blank_name_uses_default_player() {
        let mut input = Cursor::new("\n");
        let mut output = Vec::new();
        let name = prompt_player_name(&mut input, &mut output).unwrap();

        assert_eq!(name, DEFAULT_PLAYER);
        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains("Using default player: Pickford"));
    }

    #[test]
    fn test_name_is_trimmed() {
        let mut input = Cursor::new("  Salah \n");
        let mut output = Vec::<u8>::new();
        assert_eq!(
            prompt_player_name(&mut input, &mut output).unwrap(),
            "Salah"
        );
    }

    #[test]
    fn test_candidate_line_format() {
        let ds = sample_dataset();
        let salah = ds.player(crate::PlayerId::new(328)).unwrap();
        assert_eq!(
            candidate_line(1, salah, &ds),
            "1. Mohamed Salah (M.Salah) - Liverpool - Midfielder"
        );
    }

    #[test]
    fn test_resolved_player_needs_no_prompt() {
        let ds = sample_dataset();
        let resolution = resolve_player(&ds, "pickford").unwrap();
        let mut input = Cursor::new("");
        let mut output = Vec::<u8>::new();

        let chosen = choose_player(&ds, "pickford", &resolution, None, &mut input, &mut output)
            .unwrap();
        assert_eq!(chosen.display_name, "Pickford");
        assert!(output.is_empty());
    }

    #[test]
    fn test_pick_flag_selects_candidate() {
        let ds = sample_dataset();
        let resolution = resolve_player(&ds, "mo").unwrap();
        assert!(matches!(resolution, Resolution::Ambiguous(_)));

        let mut input = Cursor::new("");
        let mut output = Vec::new();
        let chosen =
            choose_player(&ds, "mo", &resolution, Some(2), &mut input, &mut output).unwrap();
        assert_eq!(chosen.display_name, "Caicedo");

        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains("Found multiple matches for 'mo':"));
        assert!(printed.contains("1. Mohamed Salah (M.Salah) - Liverpool - Midfielder"));
        assert!(printed.contains("2. Moisés Caicedo (Caicedo) - Chelsea - Midfielder"));
    }

    #[test]
    fn test_pick_out_of_range_is_an_error() {
        let ds = sample_dataset();
        let resolution = resolve_player(&ds, "mo").unwrap();
        let result = choose_player(
            &ds,
            "mo",
            &resolution,
            Some(5),
            &mut Cursor::new(""),
            &mut Vec::<u8>::new(),
        );
        assert!(matches!(
            result,
            Err(FplError::InvalidSelection { choice: 5, count: 2 })
        ));
    }

    #[test]
    fn test_prompt_retries_until_valid_choice() {
        let ds = sample_dataset();
        let resolution = resolve_player(&ds, "mo").unwrap();
        let mut input = Cursor::new("abc\n9\n1\n");
        let mut output = Vec::new();

        let chosen =
            choose_player(&ds, "mo", &resolution, None, &mut input, &mut output).unwrap();
        assert_eq!(chosen.display_name, "M.Salah");

        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains("Please enter a valid number"));
        assert!(printed.contains("Please enter a number between 1 and 2"));
    }

    #[test]
    fn test_prompt_end_of_input_is_an_error() {
        let ds = sample_dataset();
        let resolution = resolve_player(&ds, "mo").unwrap();
        let result = choose_player(
            &ds,
            "mo",
            &resolution,
            None,
            &mut Cursor::new("x\n"),
            &mut Vec::<u8>::new(),
        );
        assert!(matches!(
            result,
            Err(FplError::InvalidSelection { choice: 0, count: 2 })
        ));
    }
}

#[cfg(test)]
mod report_tests {
    use super::*;

    fn salah_season(ds: &Dataset) -> crate::analysis::PlayerSeason<'_> {
        let player = ds.player(crate::PlayerId::new(328)).unwrap();
        analyze_player(ds, player, JoinOptions::default())
    }

    #[test]
    fn test_render_table_pads_columns() {
        let table = render_table(
            &[("GW", Align::Right), ("Fixture", Align::Left)],
            &[
                vec!["5".to_string(), "EVE (H)".to_string()],
                vec!["12".to_string(), "A".to_string()],
            ],
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines, vec!["GW  Fixture", " 5  EVE (H)", "12  A"]);
    }

    #[test]
    fn test_render_table_counts_stars_as_one_column() {
        let table = render_table(
            &[("FDR", Align::Left), ("Pts", Align::Right)],
            &[
                vec!["★★★".to_string(), "9".to_string()],
                vec!["★".to_string(), "12".to_string()],
            ],
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[1], "★★★    9");
        assert_eq!(lines[2], "★     12");
    }

    #[test]
    fn test_match_table_marks_double_gameweek() {
        let ds = sample_dataset();
        let season = salah_season(&ds);
        let table = format_match_table(&season);

        assert!(table.contains("=== MOHAMED SALAH 2024-25 SEASON MATCH-BY-MATCH DATA ==="));
        assert!(table.contains("Team: Liverpool | Position: Midfielder"));
        assert!(table.contains("Double Gameweeks: 7"));
        assert!(table.contains("CHE (H) (DGW 1)"));
        assert!(table.contains("MUN (A) (DGW 2)"));
        assert!(table.contains(Position::Midfielder.difficulty_note()));

        // Unknown fixture in GW9 renders as N/A
        let gw9 = table
            .lines()
            .find(|l| l.contains("MUN (A)") && !l.contains("DGW"))
            .unwrap();
        assert!(gw9.contains("N/A"));
        assert!(!table.contains("(DGW 3)"));
    }

    #[test]
    fn test_match_table_uses_position_columns() {
        let ds = sample_dataset();
        let season = salah_season(&ds);
        let header = format_match_table(&season)
            .lines()
            .find(|l| l.trim_start().starts_with("GW"))
            .unwrap()
            .to_string();
        assert!(header.contains("Goals"));
        assert!(header.contains("Ast"));
        assert!(header.contains("CS"));
        assert!(!header.contains("Saves"));
    }

    #[test]
    fn test_summary_report() {
        let ds = sample_dataset();
        let season = salah_season(&ds);
        let summary = format_summary(&season);

        assert!(summary.contains("=== MOHAMED SALAH SEASON SUMMARY STATISTICS ==="));
        assert!(summary.contains("Official Points Per Game: 9.1"));
        assert!(summary.contains("Points Per Game (games with minutes): 6.80"));
        assert!(summary.contains("Official Total Points: 344"));
        assert!(summary.contains("Total Points (games with minutes): 34"));
        assert!(summary.contains("Minutes Played (analyzed games): 435"));
        assert!(summary.contains("Games Played (with minutes): 5"));
        assert!(summary.contains("Current Value: £13.6m"));
        assert!(summary.contains("Points Per Million: 0.50"));
        assert!(summary.contains("Bonus Points: 6"));
        assert!(summary.contains("Goals Scored: 4"));
        assert!(summary.contains("Assists: 2"));
        assert!(summary.contains("(3): 2 fixture(s), 21 pts, 10.50 avg"));
        assert!(summary.contains("(2): 1 fixture(s), 2 pts, 2.00 avg"));
        assert!(summary.contains("N/A      : 1 fixture(s), 6 pts, 6.00 avg"));
        assert!(!summary.contains("(5):"));
    }

    #[test]
    fn test_summary_skips_missing_official_figures() {
        let ds = sample_dataset();
        let porter = ds.player(crate::PlayerId::new(500)).unwrap();
        let season = analyze_player(&ds, porter, JoinOptions::default());
        let summary = format_summary(&season);

        assert!(!summary.contains("Official Total Points"));
        assert!(summary.contains("Games Played (with minutes): 0"));
        assert!(summary.contains("Difficulty/points correlation: n/a"));
    }
}

#[cfg(test)]
mod listing_tests {
    use super::*;

    #[test]
    fn test_player_listings() {
        let ds = sample_dataset();
        let listings = player_listings(&ds, "mo").unwrap();
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].name, "Mohamed Salah");
        assert_eq!(listings[0].team, "Liverpool");
        assert_eq!(listings[0].total_points, 344);
        assert_eq!(listings[1].display_name, "Caicedo");

        let json = serde_json::to_value(&listings[0]).unwrap();
        assert_eq!(json["id"], 328);
        assert_eq!(json["position"], "Midfielder");
    }

    #[test]
    fn test_player_listings_not_found() {
        let ds = sample_dataset();
        assert!(matches!(
            player_listings(&ds, "zzz"),
            Err(FplError::PlayerNotFound { .. })
        ));
    }

    #[test]
    fn test_liverpool_double_and_blank_gameweeks() {
        let ds = sample_dataset();
        let team = ds.find_team("LIV").unwrap();
        let fixtures = ds.team_fixtures(team.id);

        assert_eq!(double_fixture_gameweeks(&fixtures), vec![Gameweek::new(7)]);
        assert_eq!(blank_gameweeks(&ds, &fixtures), vec![Gameweek::new(9)]);
    }

    #[test]
    fn test_team_fixture_report() {
        let ds = sample_dataset();
        let everton = ds.find_team("everton").unwrap();
        let report = format_team_fixtures(&ds, everton);

        assert!(report.contains("=== EVERTON 2024-25 FIXTURES ==="));
        assert!(report.contains("LIV (A)"));
        assert!(report.contains("0-2"));
        assert!(report.contains("Blank Gameweeks: 6, 7, 8, 9"));
        assert!(report.contains("Unscheduled fixtures: 1"));
        assert!(!report.contains("Double Gameweeks"));
    }
}
