//! Filter that surfaces playable expansions as selectable games.
//!
//! Runs after [`super::PlayableFilter`], so only expansions of games that
//! are themselves on the table get considered.

use crate::traits::{Filter, PlayContext};
use collection::Game;
use std::mem;

/// Flattens playable expansions onto the end of the list.
///
/// ## Algorithm
/// For each game, in order:
/// 1. Detach its expansion list
/// 2. Keep each expansion (declaration order) that is playable on its own
///    fields; ownership is never inherited from the parent
/// 3. Overwrite the kept expansion's rank with the parent's rank
///
/// The output is the input games followed by every kept expansion. No game
/// in the output has nested expansions left, so running the filter again on
/// its own output changes nothing.
pub struct ExpansionFilter;

impl Filter for ExpansionFilter {
    fn name(&self) -> &str {
        "ExpansionFilter"
    }

    fn apply(&self, mut games: Vec<Game>, context: &PlayContext) -> Vec<Game> {
        let mut surfaced = Vec::new();
        for game in &mut games {
            let parent_rank = game.rank;
            for mut expansion in mem::take(&mut game.expansions) {
                if expansion.is_playable(context.player_count) {
                    expansion.rank = parent_rank;
                    // Only one level of nesting is surfaced
                    expansion.expansions.clear();
                    surfaced.push(expansion);
                }
            }
        }

        if !surfaced.is_empty() {
            tracing::debug!("Surfaced {} expansions", surfaced.len());
        }
        games.extend(surfaced);
        games
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use collection::UNRANKED;

    fn game(id: u64, rank: u32, owned: bool, min_players: i32, max_players: i32) -> Game {
        Game {
            id,
            name: format!("Game {id}"),
            thumbnail: String::new(),
            rank,
            num_plays: 0,
            owned,
            min_players,
            max_players,
            expansions: vec![],
        }
    }

    #[test]
    fn test_expansions_follow_bases_in_order() {
        let mut first = game(1, 10, true, 2, 4);
        first.expansions = vec![game(11, UNRANKED, true, 2, 5), game(12, UNRANKED, true, 2, 4)];
        let mut second = game(2, 20, true, 2, 4);
        second.expansions = vec![game(21, UNRANKED, true, 1, 4)];

        let filtered = ExpansionFilter.apply(vec![first, second], &PlayContext::new(3));

        let ids: Vec<u64> = filtered.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![1, 2, 11, 12, 21]);
    }

    #[test]
    fn test_expansions_inherit_parent_rank() {
        let mut base = game(1, 42, true, 2, 4);
        base.expansions = vec![game(11, UNRANKED, true, 2, 4), game(12, 7, true, 2, 4)];

        let filtered = ExpansionFilter.apply(vec![base], &PlayContext::new(2));

        assert_eq!(filtered[1].rank, 42);
        assert_eq!(filtered[2].rank, 42);
    }

    #[test]
    fn test_unplayable_expansions_dropped() {
        let mut base = game(1, 5, true, 1, 6);
        base.expansions = vec![
            game(11, UNRANKED, false, 1, 6), // not owned
            game(12, UNRANKED, true, 5, 6),  // needs more players
            game(13, UNRANKED, true, 1, 6),  // fine
        ];

        let filtered = ExpansionFilter.apply(vec![base], &PlayContext::new(3));

        let ids: Vec<u64> = filtered.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![1, 13]);
        assert!(filtered.iter().all(|g| g.expansions.is_empty()));
    }

    #[test]
    fn test_expansion_player_range_judged_on_own_fields() {
        // Expansion extends the base game to six players
        let mut base = game(1, 5, true, 2, 4);
        base.expansions = vec![game(11, UNRANKED, true, 5, 6)];

        let filtered = ExpansionFilter.apply(vec![base], &PlayContext::new(3));
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let mut base = game(1, 5, true, 2, 4);
        base.expansions = vec![game(11, UNRANKED, true, 2, 4)];
        let context = PlayContext::new(3);

        let once = ExpansionFilter.apply(vec![base], &context);
        let twice = ExpansionFilter.apply(once.clone(), &context);
        assert_eq!(once, twice);
    }
}
