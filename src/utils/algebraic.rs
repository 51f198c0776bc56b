//! Square token conversions.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the internal
//! `(row, col)` squares used by the board, move generation and notation.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert a two-character token (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    let col = (file - b'a') as i8;
    let row = (b'8' - rank) as i8;
    Square::from_coords(row, col).ok_or_else(|| ChessError::InvalidSquare(square.to_owned()))
}

/// Convert a square to its two-character token.
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    format!("{}{}", square.file_char(), square.rank_number())
}

/// True when `square` is a well-formed token for an on-board square.
#[inline]
pub fn is_valid_square(square: &str) -> bool {
    algebraic_to_square(square).is_ok()
}
