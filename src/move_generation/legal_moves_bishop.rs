//! Bishop destinations along the four diagonals.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{cast_rays, BISHOP_DIRECTIONS};

pub fn generate_bishop_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    cast_rays(board, from, color, &BISHOP_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_bishop_moves;
    use crate::game_state::chess_types::*;

    fn sq(token: &str) -> Square {
        token.parse().expect("test square should parse")
    }

    #[test]
    fn bishop_in_center_reaches_thirteen_squares() {
        let board = Board::empty().with_piece(sq("e4"), Piece::new(PieceKind::Bishop, Color::White));
        let mut moves = Vec::new();
        generate_bishop_moves(&board, sq("e4"), Color::White, &mut moves);
        assert_eq!(moves.len(), 13);
    }

    #[test]
    fn bishop_is_blocked_by_pieces() {
        let board = Board::empty()
            .with_piece(sq("c1"), Piece::new(PieceKind::Bishop, Color::White))
            .with_piece(sq("d2"), Piece::new(PieceKind::Pawn, Color::White))
            .with_piece(sq("a3"), Piece::new(PieceKind::Knight, Color::Black));
        let mut moves = Vec::new();
        generate_bishop_moves(&board, sq("c1"), Color::White, &mut moves);
        assert_eq!(moves, vec![sq("b2"), sq("a3")]);
    }
}
