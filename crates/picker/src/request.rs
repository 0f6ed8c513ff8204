//! Parsing of short text requests such as `"thealmostkid 4"`.
//!
//! Message front ends receive a body of the form `USER [PLAYERS]`. Tokens
//! past the second are ignored.

use collection::PlayerCount;
use std::str::FromStr;
use thiserror::Error;

/// Reply sent when nothing could be picked
pub const NO_GAMES_REPLY: &str = "NO GAMES";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("FORMAT: \"USER PLAYERS(OPTIONAL)\"")]
    MissingUser,

    #[error("BAD NUMBER FOR PLAYERS: \"USER PLAYERS<INT>(OPTIONAL)\" (got {value:?})")]
    BadPlayerCount { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickRequest {
    pub user: String,
    /// `None` when the body named only a user
    pub player_count: Option<PlayerCount>,
}

impl PickRequest {
    pub fn player_count_or(&self, default: PlayerCount) -> PlayerCount {
        self.player_count.unwrap_or(default)
    }
}

impl FromStr for PickRequest {
    type Err = RequestError;

    fn from_str(body: &str) -> Result<Self, Self::Err> {
        let mut parts = body.split_whitespace();
        let user = parts.next().ok_or(RequestError::MissingUser)?;
        let player_count = parts
            .next()
            .map(|value| {
                value.parse().map_err(|_| RequestError::BadPlayerCount {
                    value: value.to_string(),
                })
            })
            .transpose()?;

        Ok(Self {
            user: user.to_string(),
            player_count,
        })
    }
}
