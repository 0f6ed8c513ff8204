//! Filter implementations for the collection pipeline.
//!
//! This module contains the concrete filters that can be composed
//! into a FilterPipeline.

pub mod expansions;
pub mod playable;

// Re-export for convenience
pub use expansions::ExpansionFilter;
pub use playable::PlayableFilter;
