//! Queen destinations: rook rays followed by bishop rays.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

pub fn generate_queen_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    generate_rook_moves(board, from, color, out);
    generate_bishop_moves(board, from, color, out);
}

#[cfg(test)]
mod tests {
    use super::generate_queen_moves;
    use crate::game_state::chess_types::*;

    #[test]
    fn queen_combines_rook_and_bishop_rays() {
        let e4: Square = "e4".parse().expect("e4 should parse");
        let board = Board::empty().with_piece(e4, Piece::new(PieceKind::Queen, Color::Black));
        let mut moves = Vec::new();
        generate_queen_moves(&board, e4, Color::Black, &mut moves);
        assert_eq!(moves.len(), 27);
    }
}
