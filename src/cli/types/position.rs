//! FPL player position types and utilities.

use crate::error::FplError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// FPL player positions.
///
/// The dataset encodes positions as `element_type` ids: 1 = goalkeeper,
/// 2 = defender, 3 = midfielder, 4 = forward. Other ids (such as the
/// assistant-manager chip's 5) are not players and are rejected.
///
/// # Examples
///
/// ```rust
/// use fpl_season::Position;
///
/// let gk = Position::try_from(1).unwrap();
/// assert_eq!(gk, Position::Goalkeeper);
/// assert_eq!(gk.to_string(), "Goalkeeper");
/// assert_eq!(gk.short_name(), "GKP");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

/// Per-match stat columns shown for a position, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatColumn {
    CleanSheets,
    GoalsConceded,
    Saves,
    GoalsScored,
    Assists,
}

impl StatColumn {
    pub fn header(&self) -> &'static str {
        match self {
            StatColumn::CleanSheets => "CS",
            StatColumn::GoalsConceded => "GC",
            StatColumn::Saves => "Saves",
            StatColumn::GoalsScored => "Goals",
            StatColumn::Assists => "Ast",
        }
    }

    /// Long form used in the season summary.
    pub fn label(&self) -> &'static str {
        match self {
            StatColumn::CleanSheets => "Clean Sheets",
            StatColumn::GoalsConceded => "Goals Conceded",
            StatColumn::Saves => "Total Saves",
            StatColumn::GoalsScored => "Goals Scored",
            StatColumn::Assists => "Assists",
        }
    }
}

impl Position {
    /// Convert an FPL `element_type` id to a Position.
    pub fn try_from(id: u8) -> Result<Self, FplError> {
        match id {
            1 => Ok(Position::Goalkeeper),
            2 => Ok(Position::Defender),
            3 => Ok(Position::Midfielder),
            4 => Ok(Position::Forward),
            _ => Err(FplError::InvalidPosition {
                position: id.to_string(),
            }),
        }
    }

    /// The FPL `element_type` id for this position.
    pub fn to_u8(&self) -> u8 {
        match self {
            Position::Goalkeeper => 1,
            Position::Defender => 2,
            Position::Midfielder => 3,
            Position::Forward => 4,
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "GKP",
            Position::Defender => "DEF",
            Position::Midfielder => "MID",
            Position::Forward => "FWD",
        }
    }

    /// Stat columns that matter for this position.
    pub fn stat_columns(&self) -> &'static [StatColumn] {
        match self {
            Position::Goalkeeper => &[
                StatColumn::CleanSheets,
                StatColumn::GoalsConceded,
                StatColumn::Saves,
            ],
            Position::Defender => &[
                StatColumn::CleanSheets,
                StatColumn::GoalsConceded,
                StatColumn::GoalsScored,
                StatColumn::Assists,
            ],
            Position::Midfielder => &[
                StatColumn::GoalsScored,
                StatColumn::Assists,
                StatColumn::CleanSheets,
            ],
            Position::Forward => &[StatColumn::GoalsScored, StatColumn::Assists],
        }
    }

    /// How fixture difficulty tends to matter for this position.
    pub fn difficulty_note(&self) -> &'static str {
        match self {
            Position::Goalkeeper => {
                "For goalkeepers, harder fixtures may lead to more save points but fewer clean sheets"
            }
            Position::Defender => {
                "For defenders, easier fixtures increase chances of clean sheets and attacking returns"
            }
            Position::Midfielder => {
                "For midfielders, easier fixtures typically provide better attacking opportunities"
            }
            Position::Forward => {
                "For forwards, easier fixtures typically provide better scoring opportunities"
            }
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::Goalkeeper => "Goalkeeper",
            Position::Defender => "Defender",
            Position::Midfielder => "Midfielder",
            Position::Forward => "Forward",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = FplError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GK" | "GKP" | "GOALKEEPER" => Ok(Position::Goalkeeper),
            "DEF" | "DEFENDER" => Ok(Position::Defender),
            "MID" | "MIDFIELDER" => Ok(Position::Midfielder),
            "FWD" | "FW" | "FORWARD" => Ok(Position::Forward),
            _ => Err(FplError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_type_mappings() {
        assert_eq!(Position::try_from(1).unwrap(), Position::Goalkeeper);
        assert_eq!(Position::try_from(2).unwrap(), Position::Defender);
        assert_eq!(Position::try_from(3).unwrap(), Position::Midfielder);
        assert_eq!(Position::try_from(4).unwrap(), Position::Forward);

        // Assistant managers (element_type 5) are not players
        assert!(Position::try_from(5).is_err());
        assert!(Position::try_from(0).is_err());

        for pos in [
            Position::Goalkeeper,
            Position::Defender,
            Position::Midfielder,
            Position::Forward,
        ] {
            assert_eq!(Position::try_from(pos.to_u8()).unwrap(), pos);
        }
    }

    #[test]
    fn test_position_string_conversion() {
        assert_eq!("gkp".parse::<Position>().unwrap(), Position::Goalkeeper);
        assert_eq!("Defender".parse::<Position>().unwrap(), Position::Defender);
        assert_eq!(" MID ".parse::<Position>().unwrap(), Position::Midfielder);
        assert_eq!("fwd".parse::<Position>().unwrap(), Position::Forward);
        assert!("striker".parse::<Position>().is_err());
        assert_eq!(Position::Forward.to_string(), "Forward");
    }

    #[test]
    fn test_stat_columns_by_position() {
        assert!(Position::Goalkeeper
            .stat_columns()
            .contains(&StatColumn::Saves));
        assert!(!Position::Forward
            .stat_columns()
            .contains(&StatColumn::CleanSheets));
        assert_eq!(Position::Defender.stat_columns().len(), 4);
    }
}
