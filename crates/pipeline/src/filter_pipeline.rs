//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the FilterPipeline struct that chains filters
//! together using the builder pattern, plus [`filter_collection`], the
//! standard playable-games pipeline.

use crate::filters::{ExpansionFilter, PlayableFilter};
use crate::traits::{Filter, PlayContext};
use collection::{Game, PlayerCount};

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(PlayableFilter)
///     .add_filter(ExpansionFilter);
///
/// let playable = pipeline.apply(games, &PlayContext::new(4));
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The standard pipeline: playable base games, then their playable
    /// expansions flattened onto the end.
    pub fn playable() -> Self {
        Self::new()
            .add_filter(PlayableFilter)
            .add_filter(ExpansionFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of filters in the pipeline
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the games.
    ///
    /// ## Algorithm
    /// 1. Start with the input games
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return final filtered set
    pub fn apply(&self, games: Vec<Game>, context: &PlayContext) -> Vec<Game> {
        let mut current = games;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, context);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Narrow a collection down to what can be played by `player_count` people.
///
/// Returns the playable base games in input order, followed by the playable
/// expansions of those games (parents' order, then declaration order). Each
/// surfaced expansion carries its parent's rank.
///
/// The input is left untouched: the pipeline runs over a private copy, so a
/// collection shared between requests is never rewritten.
pub fn filter_collection(games: &[Game], player_count: PlayerCount) -> Vec<Game> {
    FilterPipeline::playable().apply(games.to_vec(), &PlayContext::new(player_count))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(id: u64, owned: bool, min_players: i32, max_players: i32) -> Game {
        Game {
            id,
            name: format!("Game {id}"),
            thumbnail: format!("https://example.com/{id}.jpg"),
            rank: id as u32,
            num_plays: 0,
            owned,
            min_players,
            max_players,
            expansions: vec![],
        }
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        assert!(pipeline.is_empty());

        let games = vec![game(1, false, 1, 1), game(2, true, 2, 4)];
        let filtered = pipeline.apply(games.clone(), &PlayContext::new(3));
        assert_eq!(filtered, games);
    }

    #[test]
    fn test_single_filter() {
        let pipeline = FilterPipeline::new().add_filter(PlayableFilter);
        assert_eq!(pipeline.len(), 1);

        let games = vec![game(1, false, 1, 4), game(2, true, 2, 4)];
        let filtered = pipeline.apply(games, &PlayContext::new(3));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 2);
    }

    #[test]
    fn test_filter_collection_does_not_mutate_input() {
        let mut base = game(10, true, 2, 4);
        let mut expansion = game(11, true, 2, 4);
        expansion.rank = 9999;
        base.expansions.push(expansion);
        let games = vec![base];
        let before = games.clone();

        let filtered = filter_collection(&games, 3);

        assert_eq!(games, before);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[1].rank, 10);
    }

    #[test]
    fn test_filter_collection_empty() {
        assert!(filter_collection(&[], 3).is_empty());
    }
}
