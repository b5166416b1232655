//! Free-text player name resolution.

use crate::dataset::{normalize_name, Dataset, Player};
use crate::{FplError, Result};

/// Outcome of resolving a name query against the player table.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<'a> {
    /// Exactly one player matched.
    Resolved(&'a Player),
    /// Several players matched; exact display-name matches come first,
    /// then table order.
    Ambiguous(Vec<&'a Player>),
}

impl<'a> Resolution<'a> {
    /// Candidates in display order (a single one when resolved).
    pub fn candidates(&self) -> Vec<&'a Player> {
        match self {
            Resolution::Resolved(p) => vec![*p],
            Resolution::Ambiguous(list) => list.clone(),
        }
    }

    /// Pick a candidate by its 1-based position in [`Self::candidates`].
    pub fn select(&self, choice: usize) -> Result<&'a Player> {
        let candidates = self.candidates();
        choice
            .checked_sub(1)
            .and_then(|i| candidates.get(i).copied())
            .ok_or(FplError::InvalidSelection {
                choice,
                count: candidates.len(),
            })
    }
}

/// Case-insensitive substring match against display and full names.
///
/// # Errors
///
/// - [`FplError::EmptyQuery`] for a blank query
/// - [`FplError::PlayerNotFound`] when nothing matches
pub fn resolve_player<'a>(dataset: &'a Dataset, query: &str) -> Result<Resolution<'a>> {
    let needle = normalize_name(query);
    if needle.is_empty() {
        return Err(FplError::EmptyQuery);
    }

    let (mut exact, mut partial): (Vec<&Player>, Vec<&Player>) = (Vec::new(), Vec::new());
    for (player, names) in dataset.players_with_names() {
        if names.display == needle {
            exact.push(player);
        } else if names.display.contains(&needle) || names.full.contains(&needle) {
            partial.push(player);
        }
    }
    exact.append(&mut partial);

    match exact.len() {
        0 => Err(FplError::PlayerNotFound {
            query: query.trim().to_string(),
        }),
        1 => Ok(Resolution::Resolved(exact[0])),
        _ => Ok(Resolution::Ambiguous(exact)),
    }
}
