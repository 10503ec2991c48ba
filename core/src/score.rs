use alloc::vec::Vec;
use core::fmt;

use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Player;

/// Most recent outcomes kept in the ledger history.
pub const MAX_HISTORY: usize = 10;

/// Outcome of a completed game as stored in the ledger.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    PlayerOne,
    PlayerTwo,
    Draw,
}

impl From<Player> for GameResult {
    fn from(player: Player) -> Self {
        match player {
            Player::One => Self::PlayerOne,
            Player::Two => Self::PlayerTwo,
        }
    }
}

// History entries go on the wire as `1`, `2` or `"draw"`.
impl Serialize for GameResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::PlayerOne => serializer.serialize_u8(1),
            Self::PlayerTwo => serializer.serialize_u8(2),
            Self::Draw => serializer.serialize_str("draw"),
        }
    }
}

impl<'de> Deserialize<'de> for GameResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ResultVisitor;

        impl<'de> Visitor<'de> for ResultVisitor {
            type Value = GameResult;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("1, 2 or \"draw\"")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                match value {
                    1 => Ok(GameResult::PlayerOne),
                    2 => Ok(GameResult::PlayerTwo),
                    _ => Err(E::invalid_value(Unexpected::Unsigned(value), &self)),
                }
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                match u64::try_from(value) {
                    Ok(value) => self.visit_u64(value),
                    Err(_) => Err(E::invalid_value(Unexpected::Signed(value), &self)),
                }
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                if value == "draw" {
                    Ok(GameResult::Draw)
                } else {
                    Err(E::invalid_value(Unexpected::Str(value), &self))
                }
            }
        }

        deserializer.deserialize_any(ResultVisitor)
    }
}

/// Win/draw tally persisted across sessions. The stored record is a single
/// JSON object `{ p1, p2, draws, history }`; absent fields read as zero or
/// empty so older or hand-edited records still load.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    #[serde(default)]
    p1: u32,
    #[serde(default)]
    p2: u32,
    #[serde(default)]
    draws: u32,
    #[serde(default)]
    history: Vec<GameResult>,
}

impl ScoreBoard {
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::One => self.p1,
            Player::Two => self.p2,
        }
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Recorded outcomes, oldest first, at most [`MAX_HISTORY`] entries.
    pub fn history(&self) -> &[GameResult] {
        &self.history
    }

    /// Tally a finished game and remember it in the recent history, evicting
    /// the oldest entries beyond [`MAX_HISTORY`].
    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::PlayerOne => self.p1 += 1,
            GameResult::PlayerTwo => self.p2 += 1,
            GameResult::Draw => self.draws += 1,
        }
        self.history.push(result);
        let excess = self.history.len().saturating_sub(MAX_HISTORY);
        if excess > 0 {
            self.history.drain(..excess);
        }
        log::debug!(
            "recorded {:?}: {} / {} with {} draws",
            result,
            self.p1,
            self.p2,
            self.draws
        );
    }

    /// Drop all tallies and the history.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
