//! Time-related types for FPL seasons and gameweeks.

use crate::error::{FplError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for a season, stored as its starting year.
///
/// Seasons are written the way the dataset names its directories:
/// `2024-25` is `Season(2024)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(start_year: u16) -> Self {
        Self(start_year)
    }

    pub fn start_year(&self) -> u16 {
        self.0
    }

    /// Directory name used by the dataset repository, e.g. `2024-25`.
    pub fn dir_name(&self) -> String {
        format!("{}-{:02}", self.0, (self.0 + 1) % 100)
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2024)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

impl FromStr for Season {
    type Err = FplError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || FplError::InvalidSeason {
            season: s.to_string(),
        };

        let trimmed = s.trim();
        let (start, end) = trimmed.split_once('-').ok_or_else(invalid)?;
        let start: u16 = start.parse().map_err(|_| invalid())?;
        let end: u16 = end.parse().map_err(|_| invalid())?;

        if !(1000..=9998).contains(&start) || end != (start + 1) % 100 {
            return Err(invalid());
        }

        Ok(Self(start))
    }
}

/// Type-safe wrapper for gameweek numbers (1-38 in a regular season)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Gameweek(pub u8);

impl Gameweek {
    /// Number of gameweeks in a Premier League season.
    pub const MAX: u8 = 38;

    pub fn new(gw: u8) -> Self {
        Self(gw)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Gameweek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Gameweek {
    type Err = FplError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_parse_and_display() {
        let season: Season = "2024-25".parse().unwrap();
        assert_eq!(season, Season::new(2024));
        assert_eq!(season.to_string(), "2024-25");

        let turn_of_century: Season = "1999-00".parse().unwrap();
        assert_eq!(turn_of_century.dir_name(), "1999-00");
    }

    #[test]
    fn test_season_rejects_malformed_input() {
        for bad in ["2024", "2024-26", "24-25", "abcd-ef", "2024-2025", ""] {
            match bad.parse::<Season>() {
                Err(FplError::InvalidSeason { season }) => assert_eq!(season, bad),
                other => panic!("expected InvalidSeason for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_default_season() {
        assert_eq!(Season::default().to_string(), "2024-25");
    }

    #[test]
    fn test_gameweek_ordering() {
        assert!(Gameweek::new(5) < Gameweek::new(12));
        assert_eq!("7".parse::<Gameweek>().unwrap(), Gameweek::new(7));
        assert!("x".parse::<Gameweek>().is_err());
    }
}
