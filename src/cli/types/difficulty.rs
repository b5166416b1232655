//! Fixture Difficulty Rating (FDR).

use crate::error::FplError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixture difficulty from one team's perspective, 1 (easiest) to 5 (hardest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, FplError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(FplError::InvalidDifficulty {
                value: value as i64,
            })
        }
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// All ratings, easiest first.
    pub fn all() -> impl Iterator<Item = Difficulty> {
        (Self::MIN..=Self::MAX).map(Difficulty)
    }

    /// `★` repeated once per rating point.
    pub fn stars(&self) -> String {
        "★".repeat(self.0 as usize)
    }

    /// Zero-based index into per-difficulty arrays.
    pub fn index(&self) -> usize {
        (self.0 - Self::MIN) as usize
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = FplError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Difficulty::new(value)
    }
}

impl From<Difficulty> for u8 {
    fn from(d: Difficulty) -> u8 {
        d.0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stars for a known rating, `N/A` otherwise.
pub fn stars_or_na(difficulty: Option<Difficulty>) -> String {
    difficulty
        .map(|d| d.stars())
        .unwrap_or_else(|| "N/A".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_bounds() {
        assert!(Difficulty::new(0).is_err());
        assert!(Difficulty::new(6).is_err());
        assert_eq!(Difficulty::new(1).unwrap().as_u8(), 1);
        assert_eq!(Difficulty::new(5).unwrap().index(), 4);
        assert_eq!(Difficulty::all().count(), 5);
    }

    #[test]
    fn test_difficulty_stars() {
        assert_eq!(Difficulty::new(3).unwrap().stars(), "★★★");
        assert_eq!(stars_or_na(None), "N/A");
        assert_eq!(stars_or_na(Difficulty::new(1).ok()), "★");
    }

    #[test]
    fn test_difficulty_serde() {
        let d: Difficulty = serde_json::from_str("4").unwrap();
        assert_eq!(d.as_u8(), 4);
        assert_eq!(serde_json::to_string(&d).unwrap(), "4");
        assert!(serde_json::from_str::<Difficulty>("9").is_err());
    }
}
