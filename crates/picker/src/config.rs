//! Per-request selection settings.
//!
//! The pipeline functions take every parameter explicitly; the defaults
//! used by the front ends live here and nowhere else.

use collection::PlayerCount;
use pipeline::{DrawLimit, SelectionStrategy};

/// Players assumed when a request doesn't say
pub const DEFAULT_PLAYER_COUNT: PlayerCount = 3;

/// Games suggested per request
pub const DEFAULT_TARGET_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickConfig {
    pub player_count: PlayerCount,
    pub target_count: usize,
    pub strategy: SelectionStrategy,
    /// Draw budget per selection, see [`pipeline::SelectionError::DrawLimitExceeded`]
    pub draw_limit: DrawLimit,
}

impl PickConfig {
    pub fn with_player_count(mut self, player_count: PlayerCount) -> Self {
        self.player_count = player_count;
        self
    }

    pub fn with_target_count(mut self, target_count: usize) -> Self {
        self.target_count = target_count;
        self
    }

    pub fn with_strategy(mut self, strategy: SelectionStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

impl Default for PickConfig {
    fn default() -> Self {
        Self {
            player_count: DEFAULT_PLAYER_COUNT,
            target_count: DEFAULT_TARGET_COUNT,
            strategy: SelectionStrategy::Weighted,
            draw_limit: DrawLimit::Scaled,
        }
    }
}
