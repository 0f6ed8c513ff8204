//! Dominance weights for weighted selection.
//!
//! A game's weight counts how many games in the same population it beats:
//! one point per game with a worse (numerically larger) rank, and one point
//! per game that has been played more. Better-ranked, less-played games end
//! up with more weight and are drawn more often.
//!
//! Weights only mean something relative to the population they were
//! computed against, so they are always recomputed from the current list.

use collection::Game;
use rayon::prelude::*;

/// Weight of `game` within `population`.
///
/// `population` is expected to contain `game` itself; that is harmless,
/// since both comparisons are strict.
///
/// ## Algorithm
/// ```text
/// score = |{ g : game.rank < g.rank }| + |{ g : game.num_plays < g.num_plays }|
/// ```
pub fn game_weight(game: &Game, population: &[Game]) -> u32 {
    population.iter().fold(0, |score, other| {
        score + u32::from(game.rank < other.rank) + u32::from(game.num_plays < other.num_plays)
    })
}

/// Weights of every game in `population`, in population order.
///
/// Each weight is O(n), so the whole table is O(n²); the per-game work is
/// spread across the Rayon thread pool.
pub fn compute_weights(population: &[Game]) -> Vec<u32> {
    population
        .par_iter()
        .map(|game| game_weight(game, population))
        .collect()
}
