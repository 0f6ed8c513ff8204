//! Core traits for the filtering stage.
//!
//! This module defines the Filter trait that lets the collection be
//! narrowed down in small, composable steps.

use collection::{Game, PlayerCount};

/// Per-request context every filter sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayContext {
    /// Number of people who want to play
    pub player_count: PlayerCount,
}

impl PlayContext {
    pub fn new(player_count: PlayerCount) -> Self {
        Self { player_count }
    }
}

/// Core trait for filtering a collection.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows a built pipeline to be shared between requests
/// - Filters take ownership of the Vec<Game> and return the narrowed Vec,
///   so they may move or rewrite records without touching anyone else's copy
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of games.
    ///
    /// # Arguments
    /// * `games` - The games to filter (takes ownership)
    /// * `context` - Request context (player count)
    fn apply(&self, games: Vec<Game>, context: &PlayContext) -> Vec<Game>;
}
