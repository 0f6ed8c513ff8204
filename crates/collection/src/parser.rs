//! Parser for bgg-json collection documents.
//!
//! The upstream service (`collection/<user>?grouped=true`) returns a JSON
//! array of game objects with camelCase keys:
//!
//! ```json
//! [{ "gameId": 68448, "name": "7 Wonders", "thumbnail": "https://...",
//!    "rank": 52, "numPlays": 4, "owned": true,
//!    "minPlayers": 2, "maxPlayers": 7,
//!    "expansions": [{ "gameId": 92539, "name": "7 Wonders: Leaders", ... }] }]
//! ```
//!
//! Records are first deserialized into a permissive [`RawGame`] where every
//! field is optional, then validated into [`Game`]. That way a missing field
//! is reported by name instead of surfacing later as a confusing comparison.

use crate::error::{CollectionError, Result};
use crate::types::*;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// A collection record exactly as the upstream document spells it.
///
/// Unknown keys (`image`, `yearPublished`, `averageRating`, ...) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGame {
    #[serde(alias = "id")]
    pub game_id: Option<GameId>,
    pub name: Option<String>,
    pub thumbnail: Option<String>,
    pub rank: Option<i64>,
    pub num_plays: Option<u32>,
    pub owned: Option<bool>,
    pub min_players: Option<PlayerCount>,
    pub max_players: Option<PlayerCount>,
    pub expansions: Option<Vec<RawGame>>,
}

impl RawGame {
    /// Validate this record into a [`Game`].
    ///
    /// `position` identifies the record in error messages when it has no name.
    pub fn validate(self, position: &str) -> Result<Game> {
        let label = self.name.clone().unwrap_or_else(|| position.to_string());
        let missing = |field: &'static str| CollectionError::MalformedRecord {
            record: label.clone(),
            field,
        };

        let id = self.game_id.ok_or_else(|| missing("gameId"))?;
        let name = self.name.ok_or_else(|| missing("name"))?;
        let thumbnail = self.thumbnail.ok_or_else(|| missing("thumbnail"))?;
        let num_plays = self.num_plays.ok_or_else(|| missing("numPlays"))?;
        let owned = self.owned.ok_or_else(|| missing("owned"))?;
        let min_players = self.min_players.ok_or_else(|| missing("minPlayers"))?;
        let max_players = self.max_players.ok_or_else(|| missing("maxPlayers"))?;

        let expansions = self
            .expansions
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, raw)| raw.validate(&format!("{position}.expansions.{i}")))
            .collect::<Result<Vec<Game>>>()?;

        Ok(Game {
            id,
            name,
            thumbnail,
            rank: normalize_rank(self.rank),
            num_plays,
            owned,
            min_players,
            max_players,
            expansions,
        })
    }
}

/// Map the upstream rank onto `u32`, sending absent or non-positive ranks
/// (bgg-json reports unranked games as `-1` or `0`) to [`UNRANKED`].
fn normalize_rank(rank: Option<i64>) -> u32 {
    rank.filter(|r| *r > 0)
        .and_then(|r| u32::try_from(r).ok())
        .unwrap_or(UNRANKED)
}

/// Parse a collection from an already-decoded JSON value.
pub fn parse_collection_value(value: Value) -> Result<Vec<Game>> {
    let found = match &value {
        Value::Array(_) => None,
        Value::Null => Some("null"),
        Value::Bool(_) => Some("a boolean"),
        Value::Number(_) => Some("a number"),
        Value::String(_) => Some("a string"),
        Value::Object(_) => Some("an object"),
    };
    if let Some(found) = found {
        return Err(CollectionError::NotAnArray {
            found: found.to_string(),
        });
    }

    let raw: Vec<RawGame> = serde_json::from_value(value)?;
    let games = raw
        .into_iter()
        .enumerate()
        .map(|(i, record)| record.validate(&i.to_string()))
        .collect::<Result<Vec<Game>>>()?;

    tracing::debug!(
        games = games.len(),
        expansions = games.iter().map(|g| g.expansions.len()).sum::<usize>(),
        "Parsed collection"
    );
    Ok(games)
}

/// Parse a collection from JSON text.
pub fn parse_collection(json: &str) -> Result<Vec<Game>> {
    let value: Value = serde_json::from_str(json)?;
    parse_collection_value(value)
}

/// Load and parse a collection document from disk.
pub fn load_collection(path: &Path) -> Result<Vec<Game>> {
    if !path.exists() {
        return Err(CollectionError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let text = fs::read_to_string(path)?;
    tracing::debug!("Read {} bytes from {}", text.len(), path.display());
    parse_collection(&text)
}
