//! Game configuration.
//!
//! Loaded from JSON (all fields optional) and optionally overridden from the
//! environment. Only describes how a game starts; the rules are fixed.

use serde::{Deserialize, Serialize};

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::GameState;

/// Environment variable holding a FEN to start from.
pub const START_FEN_ENV: &str = "PLUM_BOARD_START_FEN";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Starting position; the standard one when absent.
    pub start_fen: Option<String>,
}

impl GameConfig {
    pub fn from_json_str(json: &str) -> ChessResult<Self> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|e| ChessError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Replace `start_fen` with the value of `START_FEN_ENV` when it is set
    /// and not blank.
    pub fn with_env_overrides(self) -> ChessResult<Self> {
        match std::env::var(START_FEN_ENV) {
            Ok(fen) if !fen.trim().is_empty() => {
                let config = Self {
                    start_fen: Some(fen.trim().to_owned()),
                };
                config.validate()?;
                Ok(config)
            }
            _ => Ok(self),
        }
    }

    pub fn validate(&self) -> ChessResult<()> {
        self.initial_state().map(|_| ())
    }

    /// The state a game built from this configuration begins in.
    pub fn initial_state(&self) -> ChessResult<GameState> {
        match &self.start_fen {
            Some(fen) => GameState::from_fen(fen).map_err(|e| ChessError::InvalidConfig(e.to_string())),
            None => Ok(GameState::new_game()),
        }
    }
}
