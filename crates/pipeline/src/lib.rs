//! Pipeline for picking games to play from a collection.
//!
//! This crate provides:
//! - Filter trait and implementations for narrowing a collection
//! - FilterPipeline for composing filters
//! - Dominance weights for ranking games against each other
//! - Weighted and ranked random selection
//!
//! ## Architecture
//! A request flows through two stateless stages:
//! 1. Filters keep owned games that suit the player count, and surface
//!    their playable expansions (which inherit the parent's rank)
//! 2. Selection draws a fixed number of distinct games, favouring
//!    well-ranked, rarely played ones
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{DrawLimit, filter_collection, select_weighted};
//!
//! let playable = filter_collection(&games, 4);
//! let picks = select_weighted(&playable, 5, &mut rand::rng(), DrawLimit::Scaled)?;
//! ```

pub mod error;
pub mod filter_pipeline;
pub mod filters;
pub mod selection;
pub mod traits;
pub mod weight;

// Re-export main types
pub use error::{Result, SelectionError};
pub use filter_pipeline::{FilterPipeline, filter_collection};
pub use selection::{
    DrawLimit, Selection, SelectionStrategy, select, select_ranked_random, select_weighted,
};
pub use traits::{Filter, PlayContext};
pub use weight::{compute_weights, game_weight};
