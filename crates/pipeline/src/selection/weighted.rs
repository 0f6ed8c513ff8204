use super::{DrawLimit, Selection};
use crate::error::{Result, SelectionError};
use crate::weight::compute_weights;
use collection::Game;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use std::collections::HashSet;

/// Weighted random selection of `target` distinct games.
///
/// ## Algorithm
/// - Fewer than `target` games: every game is returned, in input order.
/// - Otherwise each game's index goes into a pool once per unit of weight
///   (weights computed against all of `games`). Indices are drawn uniformly
///   from that pool until `target` distinct indices have been seen; a repeat
///   draw is discarded. The pool never shrinks between draws.
///
/// The pool is represented by a [`WeightedIndex`] over the per-game weights,
/// which draws index `i` with probability `w[i] / Σw`, exactly like a
/// uniform draw from the expanded multiset.
///
/// Results come back in first-draw order; callers should treat them as
/// unordered.
///
/// # Errors
/// - [`SelectionError::Unsatisfiable`] if fewer than `target` games have a
///   non-zero weight (a zero-weight game can never be drawn)
/// - [`SelectionError::DrawLimitExceeded`] once `limit` runs out. A
///   [`DrawLimit::Scaled`] budget grows with `Σw / min w`, where `min w` is
///   the lightest non-zero weight.
pub fn select_weighted<R: Rng + ?Sized>(
    games: &[Game],
    target: usize,
    rng: &mut R,
    limit: DrawLimit,
) -> Result<Vec<Selection>> {
    if games.len() < target {
        tracing::debug!(
            "Only {} games for {} picks, returning all of them",
            games.len(),
            target
        );
        return Ok(games.iter().map(Selection::from).collect());
    }
    if target == 0 {
        return Ok(Vec::new());
    }

    let weights = compute_weights(games);
    let drawable = weights.iter().filter(|w| **w > 0).count();
    if drawable < target {
        return Err(SelectionError::Unsatisfiable {
            requested: target,
            drawable,
        });
    }

    // u64 so the pool mass (up to 2n² for n games) cannot overflow
    let pool: WeightedIndex<u64> = WeightedIndex::new(weights.iter().map(|w| u64::from(*w)))
        .map_err(|_| SelectionError::Unsatisfiable {
            requested: target,
            drawable,
        })?;

    let total: u64 = weights.iter().map(|w| u64::from(*w)).sum();
    let lightest = weights.iter().copied().filter(|w| *w > 0).min().unwrap_or(1);
    let max_draws = limit.budget(total.div_ceil(u64::from(lightest)), drawable);

    let mut seen = HashSet::with_capacity(target);
    let mut picked = Vec::with_capacity(target);
    let mut draws = 0;
    while picked.len() < target {
        if draws >= max_draws {
            return Err(SelectionError::DrawLimitExceeded {
                draws,
                selected: picked.len(),
                requested: target,
            });
        }
        draws += 1;

        let index = pool.sample(rng);
        if seen.insert(index) {
            picked.push(index);
        }
    }

    tracing::debug!(
        "Selected {} of {} games in {} draws",
        picked.len(),
        games.len(),
        draws
    );
    Ok(picked.into_iter().map(|i| Selection::from(&games[i])).collect())
}
