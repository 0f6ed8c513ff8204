//! Filter to keep games that can be played right now.
//!
//! This is the first filter in the pipeline: unowned games and games that
//! don't support the requested player count are dropped.

use crate::traits::{Filter, PlayContext};
use collection::Game;

/// Keeps base games for which [`Game::is_playable`] holds.
///
/// Input order is preserved. Expansions are carried along untouched; they
/// are judged separately by [`super::ExpansionFilter`].
pub struct PlayableFilter;

impl Filter for PlayableFilter {
    fn name(&self) -> &str {
        "PlayableFilter"
    }

    fn apply(&self, games: Vec<Game>, context: &PlayContext) -> Vec<Game> {
        games
            .into_iter()
            .filter(|game| game.is_playable(context.player_count))
            .collect()
    }
}
