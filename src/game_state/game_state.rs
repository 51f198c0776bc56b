//! Aggregate game state.
//!
//! `GameState` is the value a renderer reads and the reducer replaces on
//! every action. It owns its board outright, so an older state held by a UI
//! or an undo snapshot is never changed by later play.

use serde::{Deserialize, Serialize};

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::game_state::game_reducer::{dispatch, Action};
use crate::move_generation::legal_move_checks::compute_game_status;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub current_player: Color,

    // --- History ---
    pub move_history: Vec<MoveRecord>,
    pub redo_history: Vec<MoveRecord>,

    // --- Status for the side to move ---
    pub game_status: GameStatus,
    pub is_in_check: bool,

    // --- Interaction ---
    pub selected_square: Option<Square>,
    pub valid_moves: Vec<Square>,
    pub pending_promotion: Option<PendingPromotion>,

    // --- Rule memory ---
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<Square>,

    // --- FEN counters at the start of `move_history` ---
    pub initial_halfmove_clock: u16,
    pub initial_fullmove_number: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// A fresh game from the standard starting position.
    pub fn new_game() -> Self {
        Self::from_position(Board::initial(), Color::White, CastlingRights::all(), None)
    }

    /// A game starting from an arbitrary position, with status computed for
    /// `current_player` and empty histories.
    pub fn from_position(
        board: Board,
        current_player: Color,
        castling_rights: CastlingRights,
        en_passant_target: Option<Square>,
    ) -> Self {
        let game_status = compute_game_status(&board, current_player, &castling_rights, en_passant_target);
        Self {
            board,
            current_player,
            move_history: Vec::new(),
            redo_history: Vec::new(),
            game_status,
            is_in_check: game_status.is_check(),
            selected_square: None,
            valid_moves: Vec::new(),
            pending_promotion: None,
            castling_rights,
            en_passant_target,
            initial_halfmove_clock: 0,
            initial_fullmove_number: 1,
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// JSON snapshot for a renderer.
    pub fn to_json(&self) -> ChessResult<String> {
        serde_json::to_string(self).map_err(|e| ChessError::Serialization(e.to_string()))
    }

    /// Plies since the last pawn move or capture.
    pub fn halfmove_clock(&self) -> u16 {
        let mut clock = 0u16;
        for record in self.move_history.iter().rev() {
            if record.piece.kind == PieceKind::Pawn || record.is_capture() {
                return clock;
            }
            clock = clock.saturating_add(1);
        }
        clock.saturating_add(self.initial_halfmove_clock)
    }

    /// Starts at the imported value and advances after each black move.
    pub fn fullmove_number(&self) -> u16 {
        let black_moves = self
            .move_history
            .iter()
            .filter(|record| record.piece.color == Color::Black)
            .count();
        self.initial_fullmove_number
            .saturating_add(u16::try_from(black_moves).unwrap_or(u16::MAX))
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.move_history.last()
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.move_history.is_empty()
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        !self.redo_history.is_empty()
    }

    // --- Named entry points over `dispatch` ---

    pub fn select(&self, square: Square) -> Self {
        dispatch(self, Action::SelectSquare(square))
    }

    pub fn make_move(&self, from: Square, to: Square) -> Self {
        dispatch(self, Action::MakeMove { from, to })
    }

    pub fn complete_promotion(&self, kind: PieceKind) -> Self {
        dispatch(self, Action::CompletePromotion(kind))
    }

    pub fn cancel_promotion(&self) -> Self {
        dispatch(self, Action::CancelPromotion)
    }

    pub fn undo(&self) -> Self {
        dispatch(self, Action::UndoMove)
    }

    pub fn redo(&self) -> Self {
        dispatch(self, Action::RedoMove)
    }

    pub fn reset(&self) -> Self {
        dispatch(self, Action::ResetGame)
    }
}
