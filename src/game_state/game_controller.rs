//! String-facing boundary around the reducer.
//!
//! A UI talks to the game through square tokens such as `"e4"`. Tokens are
//! validated here, before anything is dispatched; rejected input is logged
//! and leaves the state untouched.

use tracing::{debug, warn};

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::game_state::game_config::GameConfig;
use crate::game_state::game_reducer::{dispatch, Action};
use crate::utils::algebraic::algebraic_to_square;

/// Owns the single state thread of one game.
#[derive(Debug, Clone)]
pub struct GameController {
    initial: GameState,
    state: GameState,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(GameState::new_game())
    }
}

impl GameController {
    /// Start from an injected state, which `reset_game` returns to.
    pub fn new(initial: GameState) -> Self {
        Self {
            state: initial.clone(),
            initial,
        }
    }

    pub fn from_config(config: &GameConfig) -> ChessResult<Self> {
        Ok(Self::new(config.initial_state()?))
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn handle_square_click(&mut self, square: &str) -> ChessResult<()> {
        let square = parse_square(square)?;
        self.apply(Action::SelectSquare(square));
        Ok(())
    }

    pub fn handle_piece_drop(&mut self, from: &str, to: &str) -> ChessResult<()> {
        let from_square = parse_square(from)?;
        let to_square = parse_square(to)?;
        if from_square == to_square {
            warn!(from, to, "rejected move: source and destination squares are the same");
            return Err(ChessError::SameSquare(from.to_owned()));
        }
        self.apply(Action::MakeMove {
            from: from_square,
            to: to_square,
        });
        Ok(())
    }

    pub fn complete_promotion(&mut self, kind: PieceKind) {
        self.apply(Action::CompletePromotion(kind));
    }

    pub fn cancel_promotion(&mut self) {
        self.apply(Action::CancelPromotion);
    }

    pub fn undo_move(&mut self) {
        self.apply(Action::UndoMove);
    }

    pub fn redo_move(&mut self) {
        self.apply(Action::RedoMove);
    }

    /// Back to the state this controller was created with.
    pub fn reset_game(&mut self) {
        debug!("reset game");
        self.state = self.initial.clone();
    }

    fn apply(&mut self, action: Action) {
        let next = dispatch(&self.state, action.clone());
        if next == self.state {
            debug!(?action, "action had no effect");
            return;
        }
        if next.move_history.len() > self.state.move_history.len() {
            if let Some(record) = next.last_move() {
                debug!(notation = %record.notation, status = ?next.game_status, "move played");
            }
        } else {
            debug!(?action, "action applied");
        }
        self.state = next;
    }
}

fn parse_square(token: &str) -> ChessResult<Square> {
    algebraic_to_square(token).inspect_err(|_| {
        warn!(token, "rejected input: invalid square format");
    })
}
