use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::*;

/// One entry of the move history.
///
/// Carries every snapshot needed to invert the move exactly, so undo never
/// has to recompute what the position looked like before it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The mover as it stood on `from` (pawn for promotions).
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    /// Captured piece as it stood before the capture, en passant included.
    pub captured: Option<Piece>,
    pub notation: String,
    pub timestamp: DateTime<Utc>,

    pub prev_has_moved: bool,
    pub prev_captured_has_moved: Option<bool>,
    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_target: Option<Square>,

    pub is_en_passant: bool,
    pub en_passant_capture_square: Option<Square>,
    pub promotion: Option<PieceKind>,
}

impl MoveRecord {
    /// King moved two files sideways.
    #[inline]
    pub fn is_castling(&self) -> bool {
        self.piece.kind == PieceKind::King && self.from.col().abs_diff(self.to.col()) == 2
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece.kind == PieceKind::Pawn && self.from.row().abs_diff(self.to.row()) == 2
    }

    /// Piece that ends up on `to`.
    #[inline]
    pub fn placed_piece(&self) -> Piece {
        match self.promotion {
            Some(kind) => Piece::moved(kind, self.piece.color),
            None => self.piece.with_has_moved(true),
        }
    }
}
