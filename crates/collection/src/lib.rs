//! # Collection Crate
//!
//! This crate owns the board game collection data model and the boundary
//! where upstream JSON becomes typed records.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Game, GameId, PlayerCount, UNRANKED)
//! - **parser**: Validate bgg-json documents into `Game` records
//! - **error**: Error types for loading and validation
//!
//! ## Example Usage
//!
//! ```ignore
//! use collection::load_collection;
//! use std::path::Path;
//!
//! let games = load_collection(Path::new("thealmostkid.json"))?;
//! let playable = games.iter().filter(|g| g.is_playable(4)).count();
//! println!("{} of {} games play with four", playable, games.len());
//! ```

pub mod error;
pub mod parser;
pub mod types;

pub use error::{CollectionError, Result};
pub use parser::{RawGame, load_collection, parse_collection, parse_collection_value};
pub use types::{Game, GameId, PlayerCount, UNRANKED};
