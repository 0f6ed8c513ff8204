//! Random selection of games from a filtered collection.
//!
//! Two strategies are available:
//!
//! - [`select_weighted`]: draws games proportionally to their dominance
//!   weight until enough distinct games have been drawn
//! - [`select_ranked_random`]: draws games uniformly, then orders the picks
//!   by their weight among themselves
//!
//! Both take the RNG as a parameter so seeded runs are reproducible.

mod ranked;
mod weighted;

pub use ranked::select_ranked_random;
pub use weighted::select_weighted;

use crate::error::Result;
use collection::{Game, GameId};
use rand::Rng;
use serde::Serialize;

/// Headroom over one expected sighting of every drawable item. With `n`
/// drawable items, a scaled budget misses some item with probability at
/// most `n^-3 * e^-4`.
const SCALED_HEADROOM: u64 = 4;

/// How many draws a selection may make before giving up with
/// [`SelectionError::DrawLimitExceeded`](crate::SelectionError::DrawLimitExceeded).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawLimit {
    /// Grow the budget with the pool, so that a satisfiable request only
    /// runs out of draws with negligible probability
    #[default]
    Scaled,
    /// At most this many draws, however large the pool
    Fixed(usize),
}

impl DrawLimit {
    /// Draw budget for a pool of `drawable` items in which every item comes
    /// up at least once every `odds` draws on average.
    ///
    /// ## Algorithm
    /// ```text
    /// budget = odds * (ceil(ln drawable) + 1) * SCALED_HEADROOM
    /// ```
    /// An item with probability `p >= 1/odds` stays unseen after `budget`
    /// draws with probability at most `exp(-budget/odds)`; the `ln` term
    /// pays for the union over all `drawable` items.
    pub fn budget(self, odds: u64, drawable: usize) -> usize {
        match self {
            DrawLimit::Fixed(draws) => draws,
            DrawLimit::Scaled => {
                let rounds = (drawable.max(1) as f64).ln().ceil() as u64 + 1;
                let budget = odds
                    .saturating_mul(rounds)
                    .saturating_mul(SCALED_HEADROOM);
                usize::try_from(budget).unwrap_or(usize::MAX)
            }
        }
    }
}

/// One selected game, as handed to whatever formats the reply.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Selection {
    pub name: String,
    pub thumbnail: String,
    pub id: GameId,
}

impl From<&Game> for Selection {
    fn from(game: &Game) -> Self {
        Self {
            name: game.name.clone(),
            thumbnail: game.thumbnail.clone(),
            id: game.id,
        }
    }
}

/// Which selection algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionStrategy {
    /// Weighted draws from a static pool (see [`select_weighted`])
    #[default]
    Weighted,
    /// Uniform draws ordered by weight (see [`select_ranked_random`])
    RankedRandom,
}

/// Run the selection algorithm for `strategy`.
pub fn select<R: Rng + ?Sized>(
    strategy: SelectionStrategy,
    games: &[Game],
    target: usize,
    rng: &mut R,
    limit: DrawLimit,
) -> Result<Vec<Selection>> {
    match strategy {
        SelectionStrategy::Weighted => select_weighted(games, target, rng, limit),
        SelectionStrategy::RankedRandom => select_ranked_random(games, target, rng, limit),
    }
}
