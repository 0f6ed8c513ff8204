use super::{DrawLimit, Selection};
use crate::error::{Result, SelectionError};
use crate::weight::compute_weights;
use collection::Game;
use rand::Rng;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Uniform random selection of `target` games, ordered by weight.
///
/// ## Algorithm
/// 1. Draw games uniformly at random, keyed by name, until `target`
///    distinct names have been drawn. A later draw of an already-seen name
///    replaces the earlier game under that name.
/// 2. Compute each drawn game's weight against the drawn games only.
/// 3. Return them heaviest first. Ties keep draw order.
///
/// With fewer than `target` games, every game is taken without drawing,
/// still one per name (the last game wins, in first-seen order), and step 3
/// orders them.
///
/// # Errors
/// - [`SelectionError::Unsatisfiable`] if the collection has fewer than
///   `target` distinct names but at least `target` games
/// - [`SelectionError::DrawLimitExceeded`] once `limit` runs out. A
///   [`DrawLimit::Scaled`] budget grows with the number of games per copy
///   of the rarest name.
pub fn select_ranked_random<R: Rng + ?Sized>(
    games: &[Game],
    target: usize,
    rng: &mut R,
    limit: DrawLimit,
) -> Result<Vec<Selection>> {
    if target == 0 {
        return Ok(Vec::new());
    }

    let drawn: Vec<Game> = if games.len() < target {
        one_per_name(games)
    } else {
        draw_distinct_names(games, target, rng, limit)?
    };

    let weights = compute_weights(&drawn);
    let mut ranked: Vec<(u32, &Game)> = weights.into_iter().zip(&drawn).collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0));

    Ok(ranked
        .into_iter()
        .map(|(_, game)| Selection::from(game))
        .collect())
}

/// Put `game` under its name: a new name takes the next slot, a known name
/// has its game replaced in place.
fn place_by_name<'a>(
    slots: &mut HashMap<&'a str, usize>,
    drawn: &mut Vec<&'a Game>,
    game: &'a Game,
) {
    match slots.entry(game.name.as_str()) {
        Entry::Occupied(slot) => drawn[*slot.get()] = game,
        Entry::Vacant(slot) => {
            slot.insert(drawn.len());
            drawn.push(game);
        }
    }
}

fn one_per_name(games: &[Game]) -> Vec<Game> {
    let mut slots = HashMap::with_capacity(games.len());
    let mut kept = Vec::with_capacity(games.len());
    for game in games {
        place_by_name(&mut slots, &mut kept, game);
    }
    kept.into_iter().cloned().collect()
}

fn draw_distinct_names<R: Rng + ?Sized>(
    games: &[Game],
    target: usize,
    rng: &mut R,
    limit: DrawLimit,
) -> Result<Vec<Game>> {
    let mut copies: HashMap<&str, u64> = HashMap::new();
    for game in games {
        *copies.entry(game.name.as_str()).or_default() += 1;
    }
    let distinct = copies.len();
    if distinct < target {
        return Err(SelectionError::Unsatisfiable {
            requested: target,
            drawable: distinct,
        });
    }
    let rarest = copies.values().copied().min().unwrap_or(1);
    let max_draws = limit.budget((games.len() as u64).div_ceil(rarest), distinct);

    // name -> slot in `drawn`
    let mut slots: HashMap<&str, usize> = HashMap::with_capacity(target);
    let mut drawn: Vec<&Game> = Vec::with_capacity(target);
    let mut draws = 0;
    while drawn.len() < target {
        if draws >= max_draws {
            return Err(SelectionError::DrawLimitExceeded {
                draws,
                selected: drawn.len(),
                requested: target,
            });
        }
        draws += 1;

        let game = &games[rng.random_range(0..games.len())];
        place_by_name(&mut slots, &mut drawn, game);
    }

    tracing::debug!("Drew {} distinct games in {} draws", drawn.len(), draws);
    Ok(drawn.into_iter().cloned().collect())
}
