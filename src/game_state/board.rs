//! The 8x8 piece grid.
//!
//! `Board` is a plain value: copying it copies every square, so a board held
//! by one `GameState` can never be changed through another.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_rules::{BACK_RANK_ORDER, BOARD_SIZE};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    grid: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            grid: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Standard starting position with every piece unmoved.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK_ORDER.iter().enumerate() {
            board.grid[Color::Black.home_row() as usize][col] = Some(Piece::new(*kind, Color::Black));
            board.grid[Color::Black.pawn_start_row() as usize][col] =
                Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.grid[Color::White.pawn_start_row() as usize][col] =
                Some(Piece::new(PieceKind::Pawn, Color::White));
            board.grid[Color::White.home_row() as usize][col] = Some(Piece::new(*kind, Color::White));
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        let (row, col) = square.coords();
        self.grid[row][col]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        let (row, col) = square.coords();
        self.grid[row][col] = piece;
    }

    /// Remove and return whatever stands on `square`.
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        let (row, col) = square.coords();
        self.grid[row][col].take()
    }

    /// Builder used to lay out custom positions.
    pub fn with_piece(mut self, square: Square, piece: Piece) -> Self {
        self.set(square, Some(piece));
        self
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    #[inline]
    pub fn is_own_piece(&self, square: Square, color: Color) -> bool {
        matches!(self.piece_at(square), Some(p) if p.color == color)
    }

    #[inline]
    pub fn is_opponent_piece(&self, square: Square, color: Color) -> bool {
        matches!(self.piece_at(square), Some(p) if p.color != color)
    }

    /// Every occupied square, rank 8 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.kind == PieceKind::King && piece.color == color)
            .map(|(sq, _)| sq)
    }

    /// Raw grid rows, row 0 being rank 8.
    pub fn rows(&self) -> &[[Option<Piece>; BOARD_SIZE]; BOARD_SIZE] {
        &self.grid
    }
}
