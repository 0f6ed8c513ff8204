//! Where collections come from.
//!
//! A [`CollectionSource`] hands the picker a user's collection. Fetching
//! over the network, caching and retrying are the source's business; the
//! picker only ever sees the returned records.

use anyhow::{Context, Result, anyhow, bail};
use collection::{Game, load_collection};
use std::collections::HashMap;
use std::path::PathBuf;

/// Supplier of per-user game collections.
///
/// Every call must return a snapshot the caller owns outright. The filter
/// stage rewrites expansion ranks in the records it is given, so a source
/// that caches records must hand out copies rather than shared data.
/// Returning an owned `Vec` makes that the default.
pub trait CollectionSource: Send + Sync {
    fn load(&self, user: &str) -> Result<Vec<Game>>;
}

/// Reads `<dir>/<user>.json` documents in bgg-json format.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    dir: PathBuf,
}

impl JsonFileSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the document for `user`
    pub fn path_for(&self, user: &str) -> PathBuf {
        self.dir.join(format!("{user}.json"))
    }
}

impl CollectionSource for JsonFileSource {
    fn load(&self, user: &str) -> Result<Vec<Game>> {
        if user.is_empty() || user.contains(['/', '\\']) || user.starts_with('.') {
            bail!("Invalid user name: {:?}", user);
        }
        let path = self.path_for(user);
        tracing::debug!("Loading collection for {} from {}", user, path.display());
        load_collection(&path).with_context(|| format!("Failed to load {}", path.display()))
    }
}

/// Collections held in memory, cloned on every load.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    collections: HashMap<String, Vec<Game>>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `games` as the collection of `user` (builder pattern)
    pub fn with_user(mut self, user: impl Into<String>, games: Vec<Game>) -> Self {
        self.collections.insert(user.into(), games);
        self
    }
}

impl CollectionSource for StaticSource {
    fn load(&self, user: &str) -> Result<Vec<Game>> {
        self.collections
            .get(user)
            .cloned()
            .ok_or_else(|| anyhow!("No collection for user {}", user))
    }
}
