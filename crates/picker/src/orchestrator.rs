//! # Game Picker
//!
//! This module coordinates one pick request:
//! 1. Load the user's collection from the source
//! 2. Apply filters (playable games, then their playable expansions)
//! 3. Select games with the configured strategy
//!
//! Each request works on its own freshly loaded collection, so a picker can
//! be shared freely between threads.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use rand::Rng;
use tracing::info;

use collection::{Game, PlayerCount};
use pipeline::{FilterPipeline, PlayContext, Selection, compute_weights};

use crate::config::PickConfig;
use crate::request::PickRequest;
use crate::source::CollectionSource;

/// Main orchestrator that runs the pick pipeline for a user
#[derive(Clone)]
pub struct GamePicker<S> {
    source: Arc<S>,
    filter_pipeline: Arc<FilterPipeline>,
}

impl<S: CollectionSource> GamePicker<S> {
    /// Create a picker over `source` with the standard filter pipeline
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
            filter_pipeline: Arc::new(FilterPipeline::playable()),
        }
    }

    /// Main entry point: pick games for `user`
    ///
    /// # Returns
    /// Up to `config.target_count` selections. An empty list means nothing
    /// in the collection is playable, which is not an error.
    pub fn pick<R: Rng + ?Sized>(
        &self,
        user: &str,
        config: &PickConfig,
        rng: &mut R,
    ) -> Result<Vec<Selection>> {
        let start_time = Instant::now();

        let games = self.load(user)?;
        info!("Loaded {} games for user {}", games.len(), user);

        let playable = self.apply_filters(games, config.player_count);
        info!(
            "Applied filters for {} players, games remaining: {}",
            config.player_count,
            playable.len()
        );

        let selections = pipeline::select(
            config.strategy,
            &playable,
            config.target_count,
            rng,
            config.draw_limit,
        )
        .with_context(|| format!("Failed to select games for user {}", user))?;
        info!(
            "Selected {} games for user {} ({:?})",
            selections.len(),
            user,
            config.strategy
        );

        info!(
            "Total time to pick games for user {}: {:.2?}",
            user,
            start_time.elapsed()
        );
        Ok(selections)
    }

    /// Pick games for a text request of the form `USER [PLAYERS]`.
    ///
    /// A player count in the message overrides `config.player_count`.
    pub fn pick_message<R: Rng + ?Sized>(
        &self,
        body: &str,
        config: &PickConfig,
        rng: &mut R,
    ) -> Result<Vec<Selection>> {
        let request: PickRequest = body.parse()?;
        let config = config.with_player_count(request.player_count_or(config.player_count));
        self.pick(&request.user, &config, rng)
    }

    /// The filtered collection for `user`, each game paired with its weight
    /// against the rest of the filtered collection.
    pub fn playable(&self, user: &str, player_count: PlayerCount) -> Result<Vec<(Game, u32)>> {
        let playable = self.apply_filters(self.load(user)?, player_count);
        let weights = compute_weights(&playable);
        Ok(playable.into_iter().zip(weights).collect())
    }

    fn load(&self, user: &str) -> Result<Vec<Game>> {
        self.source
            .load(user)
            .with_context(|| format!("Failed to load collection for user {}", user))
    }

    fn apply_filters(&self, games: Vec<Game>, player_count: PlayerCount) -> Vec<Game> {
        self.filter_pipeline
            .apply(games, &PlayContext::new(player_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::RequestError;
    use crate::source::StaticSource;
    use pipeline::{SelectionError, SelectionStrategy};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // ============================================================================
    // Test Fixtures
    // ============================================================================

    fn game(id: u64, rank: u32, num_plays: u32, min_players: i32, max_players: i32) -> Game {
        Game {
            id,
            name: format!("Game {id}"),
            thumbnail: format!("https://example.com/{id}.jpg"),
            rank,
            num_plays,
            owned: true,
            min_players,
            max_players,
            expansions: vec![],
        }
    }

    fn build_test_picker() -> GamePicker<StaticSource> {
        let mut with_expansion = game(1, 10, 0, 2, 4);
        with_expansion.expansions.push(game(11, 5000, 0, 2, 6));

        let collection: Vec<Game> = std::iter::once(with_expansion)
            .chain((2..=8).map(|i| game(i, i as u32 * 10, i as u32, 2, 5)))
            .chain(std::iter::once(game(9, 1, 0, 1, 1)))
            .collect();

        GamePicker::new(
            StaticSource::new()
                .with_user("alice", collection)
                .with_user("empty", vec![]),
        )
    }

    #[test]
    fn test_pick_returns_target_count() {
        let picker = build_test_picker();
        let mut rng = StdRng::seed_from_u64(1);

        let picks = picker.pick("alice", &PickConfig::default(), &mut rng).unwrap();

        assert_eq!(picks.len(), 5);
        // Solo-only game never qualifies for three players
        assert!(picks.iter().all(|p| p.id != 9));
    }

    #[test]
    fn test_pick_ranked_strategy() {
        let picker = build_test_picker();
        let mut rng = StdRng::seed_from_u64(2);
        let config = PickConfig::default()
            .with_strategy(SelectionStrategy::RankedRandom)
            .with_target_count(3);

        let picks = picker.pick("alice", &config, &mut rng).unwrap();
        assert_eq!(picks.len(), 3);
    }

    #[test]
    fn test_pick_empty_collection() {
        let picker = build_test_picker();
        let mut rng = StdRng::seed_from_u64(0);
        let picks = picker.pick("empty", &PickConfig::default(), &mut rng).unwrap();
        assert!(picks.is_empty());
    }

    #[test]
    fn test_pick_unknown_user() {
        let picker = build_test_picker();
        let mut rng = StdRng::seed_from_u64(0);
        let err = picker
            .pick("mallory", &PickConfig::default(), &mut rng)
            .unwrap_err();
        assert!(err.to_string().contains("mallory"));
    }

    #[test]
    fn test_pick_unsatisfiable_surfaces_selection_error() {
        let picker = build_test_picker();
        let mut rng = StdRng::seed_from_u64(0);
        // Only the solo game is playable: one game, zero weight
        let config = PickConfig::default()
            .with_player_count(1)
            .with_target_count(1);

        let err = picker.pick("alice", &config, &mut rng).unwrap_err();
        assert_eq!(
            err.downcast_ref::<SelectionError>(),
            Some(&SelectionError::Unsatisfiable {
                requested: 1,
                drawable: 0
            })
        );
    }

    #[test]
    fn test_pick_message_overrides_players() {
        let picker = build_test_picker();
        let mut rng = StdRng::seed_from_u64(0);

        let picks = picker
            .pick_message("alice 1", &PickConfig::default(), &mut rng)
            .unwrap();

        // One playable game is fewer than five, so it comes back as-is
        assert_eq!(picks.len(), 1);
        assert_eq!(picks[0].id, 9);
    }

    #[test]
    fn test_pick_message_bad_format() {
        let picker = build_test_picker();
        let mut rng = StdRng::seed_from_u64(0);

        let err = picker
            .pick_message("", &PickConfig::default(), &mut rng)
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<RequestError>(),
            Some(&RequestError::MissingUser)
        );
    }

    #[test]
    fn test_playable_with_weights() {
        let picker = build_test_picker();

        let playable = picker.playable("alice", 6).unwrap();

        // Nothing but the expansion supports six, and its base doesn't
        assert!(playable.is_empty());

        let playable = picker.playable("alice", 2).unwrap();
        assert_eq!(playable.len(), 9);
        let expansion = playable.iter().find(|(g, _)| g.id == 11).unwrap();
        assert_eq!(expansion.0.rank, 10);
        // Ranked 10 with no plays: beats the seven base games on both counts
        assert_eq!(expansion.1, 14);
    }

    #[test]
    fn test_pick_leaves_source_records_untouched() {
        let picker = build_test_picker();
        // More picks than playable games, so every playable game comes back
        let config = PickConfig::default()
            .with_player_count(2)
            .with_target_count(20);

        for seed in 0..2 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picks = picker.pick("alice", &config, &mut rng).unwrap();
            assert_eq!(picks.len(), 9);
            assert!(picks.iter().any(|p| p.id == 11));
        }

        // The surfaced expansion took its parent's rank only in the filtered copy
        let stored = picker.source.load("alice").unwrap();
        assert_eq!(stored[0].expansions.len(), 1);
        assert_eq!(stored[0].expansions[0].rank, 5000);
        assert!(stored.iter().all(|g| g.id != 11));

        let playable = picker.playable("alice", 2).unwrap();
        let expansion = playable.iter().find(|(g, _)| g.id == 11).unwrap();
        assert_eq!(expansion.0.rank, 10);
    }
}
