//! Picker crate for the game-picker service.
//!
//! This crate wires a collection source to the filter and selection
//! pipeline, and holds the request-level pieces the front ends share:
//! defaults, text request parsing and the collection source trait.

pub mod config;
pub mod orchestrator;
pub mod request;
pub mod source;

pub use config::{DEFAULT_PLAYER_COUNT, DEFAULT_TARGET_COUNT, PickConfig};
pub use orchestrator::GamePicker;
pub use request::{NO_GAMES_REPLY, PickRequest, RequestError};
pub use source::{CollectionSource, JsonFileSource, StaticSource};
