//! Core domain types for a board game collection.
//!
//! A collection is a flat list of base games, each of which may carry the
//! expansions the user has recorded for it. The selection logic only needs a
//! handful of fields per game, so everything else in the upstream document
//! is dropped at the ingestion boundary (see [`crate::parser`]).

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a game (the BoardGameGeek object id)
pub type GameId = u64;

/// Number of people at the table.
///
/// Signed on purpose: zero or negative counts are accepted and simply match
/// (almost) nothing.
pub type PlayerCount = i32;

/// Rank given to games without a usable rank.
///
/// Unranked games sort after every ranked game, so they never beat anything
/// on rank when weights are computed.
pub const UNRANKED: u32 = u32::MAX;

// =============================================================================
// Game
// =============================================================================

/// A single owned (or once-owned) board game, or an expansion of one.
/// Only built through [`crate::parser`], which validates every field and
/// normalises the rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: GameId,
    pub name: String,
    /// URI of the thumbnail image
    pub thumbnail: String,
    /// Lower is better. [`UNRANKED`] when the source had no rank.
    ///
    /// Expansions have no meaningful rank of their own; the filter stage
    /// replaces it with the parent's rank when the expansion is surfaced.
    pub rank: u32,
    pub num_plays: u32,
    pub owned: bool,
    /// Inclusive lower bound on supported player count
    pub min_players: PlayerCount,
    /// Inclusive upper bound on supported player count
    pub max_players: PlayerCount,
    /// Expansions in declaration order
    pub expansions: Vec<Game>,
}

impl Game {
    /// Can this game be put on the table right now for `players` people?
    ///
    /// True iff the game is owned and `players` lies within
    /// `min_players..=max_players`. Records with contradictory bounds
    /// (`min > max`) are never playable.
    pub fn is_playable(&self, players: PlayerCount) -> bool {
        self.owned && self.min_players <= players && self.max_players >= players
    }

    /// Whether the game carries a real rank
    pub fn is_ranked(&self) -> bool {
        self.rank != UNRANKED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(owned: bool, min_players: i32, max_players: i32) -> Game {
        Game {
            id: 1,
            name: "Azul".to_string(),
            thumbnail: "https://example.com/azul.jpg".to_string(),
            rank: 60,
            num_plays: 3,
            owned,
            min_players,
            max_players,
            expansions: vec![],
        }
    }

    #[test]
    fn test_playable_within_bounds() {
        let g = game(true, 2, 4);
        assert!(g.is_playable(2));
        assert!(g.is_playable(3));
        assert!(g.is_playable(4));
        assert!(!g.is_playable(1));
        assert!(!g.is_playable(5));
    }

    #[test]
    fn test_unowned_never_playable() {
        let g = game(false, 1, 10);
        assert!((0..=10).all(|p| !g.is_playable(p)));
    }

    #[test]
    fn test_contradictory_bounds_never_playable() {
        let g = game(true, 5, 2);
        assert!((-5..=10).all(|p| !g.is_playable(p)));
    }

    #[test]
    fn test_non_positive_player_counts() {
        assert!(!game(true, 1, 4).is_playable(0));
        assert!(!game(true, 1, 4).is_playable(-2));
        // Degrades naturally when the lower bound itself is non-positive
        assert!(game(true, 0, 4).is_playable(0));
    }

    #[test]
    fn test_unranked_sentinel() {
        let mut g = game(true, 1, 4);
        assert!(g.is_ranked());
        g.rank = UNRANKED;
        assert!(!g.is_ranked());
    }
}
