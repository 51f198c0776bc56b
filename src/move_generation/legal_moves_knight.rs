use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{step_targets, KNIGHT_OFFSETS};

pub fn generate_knight_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    step_targets(board, from, color, &KNIGHT_OFFSETS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::chess_types::*;

    fn sq(token: &str) -> Square {
        token.parse().expect("test square should parse")
    }

    #[test]
    fn knight_from_d4_has_eight_targets() {
        let board = Board::empty().with_piece(sq("d4"), Piece::new(PieceKind::Knight, Color::White));
        let mut moves = Vec::new();
        generate_knight_moves(&board, sq("d4"), Color::White, &mut moves);
        assert_eq!(moves.len(), 8);
    }

    #[test]
    fn knight_in_corner_skips_own_pieces() {
        let board = Board::empty()
            .with_piece(sq("a1"), Piece::new(PieceKind::Knight, Color::White))
            .with_piece(sq("b3"), Piece::new(PieceKind::Pawn, Color::White))
            .with_piece(sq("c2"), Piece::new(PieceKind::Pawn, Color::Black));
        let mut moves = Vec::new();
        generate_knight_moves(&board, sq("a1"), Color::White, &mut moves);
        assert_eq!(moves, vec![sq("c2")]);
    }
}
